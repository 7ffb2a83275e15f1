//! Per-name document counts accumulated from base-level and next-level buckets.

use std::collections::{BTreeSet, HashMap};

/// Document counts tracked for a single base-level name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocCountRecord {
    /// Count reported for the exact name. Overwritten, never summed.
    pub actual_doc_count: u64,
    /// Sum of counts reported for names one segment below.
    pub children_total_doc_count: u64,
}

impl DocCountRecord {
    /// Whether the name matches more documents than its children account for,
    /// making it a metric name in its own right rather than only a prefix.
    #[must_use]
    pub fn is_complete_metric(&self) -> bool {
        self.actual_doc_count > 0 && self.actual_doc_count > self.children_total_doc_count
    }
}

/// Map from base-level name to its [`DocCountRecord`].
///
/// Entries are created on first reference with both counts at zero.
#[derive(Debug, Clone, Default)]
pub struct DocCountLedger {
    records: HashMap<String, DocCountRecord>,
}

impl DocCountLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the count reported for `key` itself. Last write wins.
    pub fn set_actual_doc_count(&mut self, key: &str, doc_count: u64) {
        let mut record = self.get(key).unwrap_or_default();
        record.actual_doc_count = doc_count;
        self.records.insert(key.to_owned(), record);
    }

    /// Add a child's count to the running total for `key`.
    pub fn add_children_doc_count(&mut self, key: &str, doc_count: u64) {
        let mut record = self.get(key).unwrap_or_default();
        record.children_total_doc_count = record.children_total_doc_count.saturating_add(doc_count);
        self.records.insert(key.to_owned(), record);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<DocCountRecord> {
        self.records.get(key).copied()
    }

    /// Names whose record satisfies [`DocCountRecord::is_complete_metric`].
    #[must_use]
    pub fn complete_metric_names(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter(|(_, record)| record.is_complete_metric())
            .map(|(name, _)| name.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actual_count_is_overwritten() {
        let mut ledger = DocCountLedger::new();
        ledger.set_actual_doc_count("foo.bar", 3);
        ledger.set_actual_doc_count("foo.bar", 5);

        assert_eq!(ledger.get("foo.bar").unwrap().actual_doc_count, 5);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn children_counts_are_summed() {
        let mut ledger = DocCountLedger::new();
        ledger.add_children_doc_count("foo.bar", 2);
        ledger.add_children_doc_count("foo.bar", 4);

        let record = ledger.get("foo.bar").unwrap();
        assert_eq!(record.children_total_doc_count, 6);
        assert_eq!(record.actual_doc_count, 0);
    }

    #[test]
    fn children_sum_saturates() {
        let mut ledger = DocCountLedger::new();
        ledger.add_children_doc_count("foo", u64::MAX);
        ledger.add_children_doc_count("foo", 1);

        assert_eq!(ledger.get("foo").unwrap().children_total_doc_count, u64::MAX);
    }

    #[test]
    fn both_counts_kept_on_same_record() {
        let mut ledger = DocCountLedger::new();
        ledger.add_children_doc_count("foo.bar", 1);
        ledger.set_actual_doc_count("foo.bar", 2);

        assert_eq!(ledger.get("foo.bar"), Some(DocCountRecord {
            actual_doc_count: 2,
            children_total_doc_count: 1,
        }));
    }

    #[test]
    fn completeness_requires_strictly_more_than_children() {
        let record = |actual, children| DocCountRecord {
            actual_doc_count: actual,
            children_total_doc_count: children,
        };
        assert!(record(2, 1).is_complete_metric());
        assert!(record(1, 0).is_complete_metric());
        assert!(!record(1, 1).is_complete_metric());
        assert!(!record(0, 0).is_complete_metric());
        assert!(!record(0, 3).is_complete_metric());
    }

    #[test]
    fn complete_names_filters_prefix_only_entries() {
        let mut ledger = DocCountLedger::new();
        ledger.set_actual_doc_count("a", 2);
        ledger.add_children_doc_count("a", 1);
        ledger.set_actual_doc_count("b", 1);
        ledger.add_children_doc_count("b", 1);
        ledger.add_children_doc_count("c", 4);

        let names = ledger.complete_metric_names();
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["a".to_string()]);
    }

    #[test]
    fn missing_key_has_no_record() {
        assert!(DocCountLedger::new().get("nope").is_none());
        assert!(DocCountLedger::new().is_empty());
    }
}
