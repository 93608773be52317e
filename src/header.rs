//! Column label to cell position mapping.

use std::collections::HashMap;

/// Label → position lookup for one row-set, built fresh from its header.
///
/// Duplicate labels keep the last position.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut positions = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            positions.insert(label.as_ref().to_owned(), i);
        }
        Self { positions }
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_label_order() {
        let index = HeaderIndex::new(&["id", "name", "date"]);
        assert_eq!(index.position("id"), Some(0));
        assert_eq!(index.position("date"), Some(2));
        assert_eq!(index.position("missing"), None);
    }

    #[test]
    fn duplicate_labels_keep_last_position() {
        let index = HeaderIndex::new(&["id", "name", "id"]);
        assert_eq!(index.position("id"), Some(2));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn empty_header() {
        let index = HeaderIndex::new::<&str>(&[]);
        assert!(index.is_empty());
        assert_eq!(index.position("name"), None);
    }
}
