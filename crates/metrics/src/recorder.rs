//! Metrics recorder initialization and configuration.

use {
    serde::Deserialize,
    std::collections::BTreeMap,
    tracing::info,
};

use crate::error::Result;

/// Handle to the metrics system, providing access to exported metrics.
#[derive(Clone)]
pub struct MetricsHandle {
    #[cfg(feature = "prometheus")]
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
}

impl MetricsHandle {
    /// Render metrics in Prometheus text format.
    ///
    /// Empty when metrics are disabled or the `prometheus` feature is off.
    #[must_use]
    pub fn render(&self) -> String {
        #[cfg(feature = "prometheus")]
        {
            self.prometheus_handle
                .as_ref()
                .map(metrics_exporter_prometheus::PrometheusHandle::render)
                .unwrap_or_default()
        }
        #[cfg(not(feature = "prometheus"))]
        {
            String::new()
        }
    }
}

/// Configuration for the metrics system.
///
/// ```toml
/// enabled = true
///
/// [global_labels]
/// region = "ord"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsRecorderConfig {
    /// Whether metrics collection is enabled
    pub enabled: bool,
    /// Labels added to every metric
    pub global_labels: BTreeMap<String, String>,
}

impl Default for MetricsRecorderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            global_labels: BTreeMap::new(),
        }
    }
}

impl MetricsRecorderConfig {
    /// Parse a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// Initialize the metrics system.
///
/// Call once at startup. With the `prometheus` feature this installs the
/// global Prometheus recorder; otherwise recordings are discarded.
///
/// # Errors
///
/// Returns an error if the recorder fails to install.
pub fn init_metrics(config: MetricsRecorderConfig) -> Result<MetricsHandle> {
    if !config.enabled {
        info!("Metrics collection is disabled");
        return Ok(MetricsHandle {
            #[cfg(feature = "prometheus")]
            prometheus_handle: None,
        });
    }

    #[cfg(feature = "prometheus")]
    {
        let handle = init_prometheus(config)?;
        info!("Prometheus metrics exporter initialized");
        Ok(MetricsHandle {
            prometheus_handle: Some(handle),
        })
    }

    #[cfg(not(feature = "prometheus"))]
    {
        info!(labels = config.global_labels.len(), "Metrics feature not enabled at compile time");
        Ok(MetricsHandle {})
    }
}

#[cfg(feature = "prometheus")]
fn init_prometheus(
    config: MetricsRecorderConfig,
) -> Result<metrics_exporter_prometheus::PrometheusHandle> {
    use {
        crate::{buckets, discovery},
        metrics_exporter_prometheus::{Matcher, PrometheusBuilder},
    };

    let mut builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(discovery::COMPLETE_NAMES.to_string()),
            &buckets::NAMESPACE_SIZE,
        )?
        .set_buckets_for_metric(
            Matcher::Full(discovery::NEXT_LEVEL_NAMES.to_string()),
            &buckets::NAMESPACE_SIZE,
        )?;

    for (key, value) in config.global_labels {
        builder = builder.add_global_label(key, value);
    }

    // Install globally without spawning an HTTP listener; the handle renders on demand.
    Ok(builder.install_recorder()?)
}
