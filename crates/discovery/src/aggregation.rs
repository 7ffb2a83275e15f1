//! Terms-aggregation response buckets and the listing handed back to the
//! namespace-browsing API.
//!
//! The response shape is:
//!
//! ```json
//! { "buckets": [ { "key": "foo.bar.baz", "doc_count": 2 }, { "key": "foo.bar.baz.aux", "doc_count": 1 } ] }
//! ```

use {
    serde::{Deserialize, Serialize},
    strata_common::Context,
    tracing::debug,
};

#[cfg(feature = "metrics")]
use strata_metrics::{discovery as discovery_metrics, histogram};

use crate::{
    MetricIndexData,
    error::{Error, Result},
    level::BaseLevel,
};

/// One `(key, doc_count)` bucket from a terms aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationBucket {
    #[serde(default)]
    pub key: Option<String>,
    pub doc_count: i64,
}

impl AggregationBucket {
    #[must_use]
    pub fn new(key: impl Into<String>, doc_count: i64) -> Self {
        Self {
            key: Some(key.into()),
            doc_count,
        }
    }
}

/// Buckets of a terms aggregation over metric index terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsAggregation {
    #[serde(default)]
    pub buckets: Vec<AggregationBucket>,
}

impl TermsAggregation {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str::<Self>(body).context("failed to parse terms aggregation")
    }
}

/// Result of classifying one aggregation, ready to serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceListing {
    /// Names that can be drilled into.
    pub next_level: Vec<String>,
    /// Names that are complete metric names.
    pub complete: Vec<String>,
}

impl MetricIndexData {
    /// Build a classifier and feed it every bucket of `aggregation`.
    pub fn from_aggregation(
        base_level: BaseLevel,
        aggregation: &TermsAggregation,
    ) -> Result<Self> {
        let mut data = Self::with_base_level(base_level);
        data.add_buckets(aggregation)?;
        debug!(
            base_level = %data.base_level(),
            buckets = aggregation.buckets.len(),
            "classified terms aggregation"
        );
        Ok(data)
    }

    /// Feed every bucket, stopping at the first malformed one.
    pub fn add_buckets(&mut self, aggregation: &TermsAggregation) -> Result<()> {
        for bucket in &aggregation.buckets {
            let key = bucket.key.as_deref().ok_or(Error::EmptyIndex)?;
            self.add(key, bucket.doc_count)?;
        }
        Ok(())
    }

    /// Both result sets as sorted lists.
    ///
    /// This is the response for one browsing request, so result-set sizes
    /// are recorded here and not in the individual accessors.
    #[must_use]
    pub fn listing(&self) -> NamespaceListing {
        let listing = NamespaceListing {
            next_level: self.metric_names_with_next_level().iter().cloned().collect(),
            complete: self.complete_metric_names_at_base_level().into_iter().collect(),
        };

        #[cfg(feature = "metrics")]
        {
            histogram!(discovery_metrics::NEXT_LEVEL_NAMES).record(listing.next_level.len() as f64);
            histogram!(discovery_metrics::COMPLETE_NAMES).record(listing.complete.len() as f64);
        }

        listing
    }
}
