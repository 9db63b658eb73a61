use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// KeySet – the idioms worth keeping
// ---------------------------------------------------------------------------

/// The set of idiom names used as the filtering criterion.
///
/// Values are stored trimmed; membership is exact string equality.
pub type KeySet = BTreeSet<String>;

// ---------------------------------------------------------------------------
// IdiomDataset – the dataset being filtered
// ---------------------------------------------------------------------------

/// The explanations dataset: a verbatim header plus positional rows.
#[derive(Debug, Clone)]
pub struct IdiomDataset {
    /// Header row, passed through to the output unchanged.
    pub header: Vec<String>,
    /// Data rows in file order. Rows may carry differing field counts.
    pub rows: Vec<Vec<String>>,
}

impl IdiomDataset {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
