use std::path::Path;

use anyhow::{Context, Result};

use super::model::IdiomDataset;

// ---------------------------------------------------------------------------
// Output writer
// ---------------------------------------------------------------------------

/// Write the header plus the rows at `indices` to a fresh CSV file.
///
/// Truncate-and-create semantics; the containing directory must already
/// exist. No temporary file and no atomic rename: a failure partway leaves
/// whatever was written so far.
pub fn write_filtered(path: &Path, dataset: &IdiomDataset, indices: &[usize]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("creating output CSV")?;

    writer
        .write_record(&dataset.header)
        .context("writing output header")?;

    for &i in indices {
        writer
            .write_record(&dataset.rows[i])
            .with_context(|| format!("writing output row {i}"))?;
    }

    writer.flush().context("flushing output CSV")?;
    Ok(())
}
