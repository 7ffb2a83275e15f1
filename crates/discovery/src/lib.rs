//! Metric namespace discovery.
//!
//! Classifies the `(key, doc_count)` buckets of a terms aggregation over
//! dot-delimited metric index terms into two sets, relative to a fixed base
//! level:
//!
//! - names that have at least one level beneath them (browsable prefixes)
//! - names that are complete metric names in their own right
//!
//! A name can be both: `foo.bar.baz` is a metric and also the prefix of
//! `foo.bar.baz.aux`. Document counts disambiguate the two.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strata_discovery::MetricIndexData;
//!
//! let mut data = MetricIndexData::new(2);
//! data.add("foo.bar.baz", 2)?;
//! data.add("foo.bar.baz.aux", 1)?;
//!
//! assert!(data.metric_names_with_next_level().contains("foo.bar.baz"));
//! assert!(data.complete_metric_names_at_base_level().contains("foo.bar.baz"));
//! ```
//!
//! # Features
//!
//! - `metrics`: Count observations and record result-set sizes through `strata-metrics`

pub mod aggregation;
pub mod error;
mod index_data;
pub mod ledger;
pub mod level;

pub use {
    aggregation::{AggregationBucket, NamespaceListing, TermsAggregation},
    error::{Error, Result},
    index_data::MetricIndexData,
    ledger::DocCountRecord,
    level::{BaseLevel, METRIC_TOKEN_SEPARATOR},
};
