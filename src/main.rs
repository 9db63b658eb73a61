mod data;

use std::path::Path;

use anyhow::Result;

use data::filter::matching_indices;
use data::loader::{load_dataset, load_key_set};
use data::writer::write_filtered;

/// Reference list: the canonical idioms to keep.
const REFERENCE_PATH: &str = "data/idioms_1543.csv";
/// Dataset to filter: one idiom explanation per row, idiom in the second column.
const DATASET_PATH: &str = "data/idioms_with_3yo_explanations.csv";
/// Output: the explanations whose idiom appears in the reference list.
const OUTPUT_PATH: &str = "data/idioms_filtered.csv";

/// Data-row count of the shipped explanations dataset, quoted in the summary.
const DATASET_TOTAL_ROWS: usize = 6361;

fn main() -> Result<()> {
    env_logger::init();

    let keys = load_key_set(Path::new(REFERENCE_PATH))?;
    println!("Found {} idioms in {REFERENCE_PATH}", keys.len());

    let dataset = load_dataset(Path::new(DATASET_PATH))?;
    log::info!(
        "Loaded {} rows with columns {:?}",
        dataset.len(),
        dataset.header
    );

    let retained = matching_indices(&dataset, &keys);
    println!(
        "Filtered to {} idioms (from {DATASET_TOTAL_ROWS} total)",
        retained.len()
    );

    write_filtered(Path::new(OUTPUT_PATH), &dataset, &retained)?;
    println!("Created {OUTPUT_PATH}");

    Ok(())
}
