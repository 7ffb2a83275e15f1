//! Metric name and label definitions.
//!
//! Every metric strata records is named here so instrumentation sites and
//! dashboards agree on spelling.

/// Namespace discovery metrics
pub mod discovery {
    /// Aggregation buckets classified, labelled by outcome
    pub const OBSERVATIONS_TOTAL: &str = "strata_discovery_observations_total";
    /// Aggregation buckets rejected as malformed, labelled by reason
    pub const OBSERVATIONS_REJECTED_TOTAL: &str = "strata_discovery_observations_rejected_total";
    /// Number of complete metric names derived per request
    pub const COMPLETE_NAMES: &str = "strata_discovery_complete_names";
    /// Number of browsable prefixes derived per request
    pub const NEXT_LEVEL_NAMES: &str = "strata_discovery_next_level_names";
}

/// Common label keys used across metrics
pub mod labels {
    /// `base`, `next_level` or `ignored`
    pub const OUTCOME: &str = "outcome";
    pub const REASON: &str = "reason";
}

/// Standard histogram buckets
pub mod buckets {
    use once_cell::sync::Lazy;

    /// Result-set size buckets
    /// Covers 1 to 10000 names
    pub static NAMESPACE_SIZE: Lazy<Vec<f64>> = Lazy::new(|| {
        vec![
            1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 5000.0, 10000.0,
        ]
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_metrics_share_prefix() {
        for name in [
            discovery::OBSERVATIONS_TOTAL,
            discovery::OBSERVATIONS_REJECTED_TOTAL,
            discovery::COMPLETE_NAMES,
            discovery::NEXT_LEVEL_NAMES,
        ] {
            assert!(name.starts_with("strata_discovery_"), "{name}");
        }
    }

    #[test]
    fn size_buckets_ascend() {
        assert!(buckets::NAMESPACE_SIZE.windows(2).all(|w| w[0] < w[1]));
    }
}
