use std::path::Path;

use anyhow::{Context, Result};

use super::model::{IdiomDataset, KeySet};

// ---------------------------------------------------------------------------
// Reference list loader
// ---------------------------------------------------------------------------

/// Name of the reference CSV column holding the idiom text.
pub const KEY_HEADER: &str = "idiom";

/// Load the set of idiom names to keep from the reference CSV.
///
/// The file must carry a header row with an `idiom` column; every data row's
/// value in that column is trimmed and added to the set. Duplicates collapse
/// silently; blank values are kept as empty strings.
pub fn load_key_set(path: &Path) -> Result<KeySet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening reference CSV")?;

    let key_idx = reader
        .headers()
        .context("reading reference CSV headers")?
        .iter()
        .position(|h| h == KEY_HEADER)
        .with_context(|| format!("reference CSV missing '{KEY_HEADER}' column"))?;

    let mut keys = KeySet::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reference CSV row {row_no}"))?;
        keys.insert(record.get(key_idx).unwrap_or("").trim().to_string());
    }

    Ok(keys)
}

// ---------------------------------------------------------------------------
// Dataset loader
// ---------------------------------------------------------------------------

/// Load the explanations dataset: header row verbatim, data rows positional.
///
/// The reader is flexible, so rows with fewer fields than the header are
/// loaded as-is rather than rejected. Whether such a row takes part in
/// filtering is decided downstream.
pub fn load_dataset(path: &Path) -> Result<IdiomDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening dataset CSV")?;

    let header: Vec<String> = reader
        .headers()
        .context("reading dataset CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("dataset CSV row {row_no}"))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(IdiomDataset { header, rows })
}
