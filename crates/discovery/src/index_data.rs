//! Classification of one aggregation response into browsable prefixes and
//! complete metric names.
//!
//! Indexing `foo.bar.baz.aux` and `foo.bar.baz` produces these index terms:
//!
//! ```text
//! foo.bar.baz.aux -> [foo, foo.bar, foo.bar.baz, foo.bar.baz.aux, bar, baz, aux]
//! foo.bar.baz     -> [foo, foo.bar, foo.bar.baz, bar, baz]
//! ```
//!
//! Aggregating terms under `foo.bar.*` then yields `foo.bar.baz` with a doc
//! count of 2 and `foo.bar.baz.aux` with a doc count of 1. Feeding both into a
//! [`MetricIndexData`] with base level 2 reports `foo.bar.baz` as having a next
//! level, and also as a complete metric name, since only one of its two
//! documents is accounted for by a child.

use std::collections::BTreeSet;

#[cfg(feature = "metrics")]
use strata_metrics::{counter, discovery as discovery_metrics, labels};
use tracing::{debug, trace, warn};

use crate::{
    error::{Error, Result},
    ledger::{DocCountLedger, DocCountRecord},
    level::{BaseLevel, Level, classify},
};

/// Accumulated state for one namespace-browsing request.
///
/// Observations may be added in any order; both result sets depend only on
/// the multiset of observations.
#[derive(Debug, Clone, Default)]
pub struct MetricIndexData {
    base_level: BaseLevel,
    with_next_level: BTreeSet<String>,
    ledger: DocCountLedger,
}

impl MetricIndexData {
    #[must_use]
    pub fn new(base_level: usize) -> Self {
        Self::with_base_level(BaseLevel::new(base_level))
    }

    #[must_use]
    pub fn with_base_level(base_level: BaseLevel) -> Self {
        Self {
            base_level,
            with_next_level: BTreeSet::new(),
            ledger: DocCountLedger::new(),
        }
    }

    /// Build from a signed depth, as parsed from request parameters.
    pub fn try_new(base_level: i64) -> Result<Self> {
        Ok(Self::with_base_level(BaseLevel::try_from(base_level)?))
    }

    #[must_use]
    pub fn base_level(&self) -> BaseLevel {
        self.base_level
    }

    /// Classify one `(index, doc_count)` bucket and record it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIndex`] or [`Error::NegativeDocCount`] for
    /// malformed buckets. State is left untouched on error.
    pub fn add(&mut self, index: &str, doc_count: i64) -> Result<()> {
        let doc_count = match validate(index, doc_count) {
            Ok(doc_count) => doc_count,
            Err(e) => {
                warn!(index, doc_count, error = %e, "rejecting metric index observation");
                #[cfg(feature = "metrics")]
                counter!(
                    discovery_metrics::OBSERVATIONS_REJECTED_TOTAL,
                    labels::REASON => e.reason()
                )
                .increment(1);
                return Err(e);
            },
        };

        let level = classify(index, self.base_level);
        trace!(
            index,
            doc_count,
            base_level = %self.base_level,
            level = level.as_str(),
            "classified metric index"
        );

        match level {
            Level::Next { parent } => {
                if !self.with_next_level.contains(parent) {
                    self.with_next_level.insert(parent.to_owned());
                }
                self.ledger.add_children_doc_count(parent, doc_count);
            },
            Level::Base => self.ledger.set_actual_doc_count(index, doc_count),
            Level::Ignored => {},
        }

        #[cfg(feature = "metrics")]
        counter!(discovery_metrics::OBSERVATIONS_TOTAL, labels::OUTCOME => level.as_str())
            .increment(1);

        Ok(())
    }

    /// Add every pair from `observations`, stopping at the first invalid one.
    ///
    /// Pairs added before the failing one remain recorded.
    pub fn add_all<I, S>(&mut self, observations: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        for (index, doc_count) in observations {
            self.add(index.as_ref(), doc_count)?;
        }
        Ok(())
    }

    /// Base-level names with at least one name one segment below them.
    #[must_use]
    pub fn metric_names_with_next_level(&self) -> &BTreeSet<String> {
        &self.with_next_level
    }

    /// Base-level names that are metric names in their own right.
    #[must_use]
    pub fn complete_metric_names_at_base_level(&self) -> BTreeSet<String> {
        let names = self.ledger.complete_metric_names();
        debug!(
            base_level = %self.base_level,
            tracked = self.ledger.len(),
            complete = names.len(),
            "derived complete metric names"
        );
        names
    }

    /// Counts recorded for a base-level name, if it has been referenced.
    #[must_use]
    pub fn doc_counts(&self, name: &str) -> Option<DocCountRecord> {
        self.ledger.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}

fn validate(index: &str, doc_count: i64) -> Result<u64> {
    if index.is_empty() {
        return Err(Error::EmptyIndex);
    }
    u64::try_from(doc_count).map_err(|_| Error::negative_doc_count(index, doc_count))
}
