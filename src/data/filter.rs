use super::model::{IdiomDataset, KeySet};

// ---------------------------------------------------------------------------
// Row filter: which rows carry a known idiom
// ---------------------------------------------------------------------------

/// Zero-based position of the idiom name within a dataset row.
pub const KEY_COLUMN: usize = 1;

/// Return indices of rows whose idiom (trimmed) is a member of `keys`.
///
/// A row is admitted when:
/// * it has a field at [`KEY_COLUMN`] (shorter rows are skipped, not an error)
/// * the trimmed value at that position is in `keys` (exact equality,
///   no case folding, no partial matching)
///
/// Single forward pass: output order equals source order, and rows sharing
/// a matching idiom are all retained.
pub fn matching_indices(dataset: &IdiomDataset, keys: &KeySet) -> Vec<usize> {
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row.get(KEY_COLUMN)
                .is_some_and(|idiom| keys.contains(idiom.trim()))
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[&[&str]]) -> IdiomDataset {
        IdiomDataset {
            header: vec!["id".into(), "成語".into(), "解釋".into()],
            rows: rows
                .iter()
                .map(|row| row.iter().map(|f| f.to_string()).collect())
                .collect(),
        }
    }

    fn keys(values: &[&str]) -> KeySet {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// Rows whose idiom is in the key set are retained, in source order.
    #[test]
    fn retains_matching_rows_in_order() {
        let dataset = dataset(&[
            &["1", "一帆風順", "desc1"],
            &["2", "入木三分", "desc2"],
            &["3", "畫蛇添足", "desc3"],
        ]);
        let keys = keys(&["一帆風順", "畫蛇添足"]);

        assert_eq!(matching_indices(&dataset, &keys), vec![0, 2]);
    }

    /// The idiom field is trimmed before the membership test.
    #[test]
    fn trims_idiom_before_matching() {
        let dataset = dataset(&[&["1", "  一帆風順  ", "desc1"]]);
        let keys = keys(&["一帆風順"]);

        assert_eq!(matching_indices(&dataset, &keys), vec![0]);
    }

    /// A single-field row is skipped silently, never an error.
    #[test]
    fn skips_rows_without_an_idiom_field() {
        let dataset = dataset(&[&["4"], &["3", "畫蛇添足", "desc3"]]);
        let keys = keys(&["畫蛇添足", "4"]);

        assert_eq!(matching_indices(&dataset, &keys), vec![1]);
    }

    /// A two-field row is long enough to be considered.
    #[test]
    fn admits_rows_with_exactly_two_fields() {
        let dataset = dataset(&[&["5", "亡羊補牢"]]);
        let keys = keys(&["亡羊補牢"]);

        assert_eq!(matching_indices(&dataset, &keys), vec![0]);
    }

    /// Two rows carrying the same idiom are both retained.
    #[test]
    fn keeps_duplicate_matches() {
        let dataset = dataset(&[
            &["1", "一帆風順", "desc1"],
            &["2", "一帆風順", "desc1 again"],
        ]);
        let keys = keys(&["一帆風順"]);

        assert_eq!(matching_indices(&dataset, &keys), vec![0, 1]);
    }

    /// An empty key set retains nothing, whatever the dataset holds.
    #[test]
    fn empty_key_set_retains_nothing() {
        let dataset = dataset(&[&["1", "一帆風順", "desc1"]]);

        assert!(matching_indices(&dataset, &KeySet::new()).is_empty());
    }

    /// Matching is exact: no case folding, no substring matches.
    #[test]
    fn matches_exactly() {
        let dataset = dataset(&[&["1", "Fair Wind", "desc"], &["2", "Fair", "desc"]]);
        let keys = keys(&["fair wind"]);

        assert!(matching_indices(&dataset, &keys).is_empty());
    }
}
