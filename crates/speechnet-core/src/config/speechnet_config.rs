//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LayoutConfig, NetworkConfig, PlotConfig, StatsConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "speechnet.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SPEECHNET_*`)
/// 3. Project config (`speechnet.toml` in project root)
/// 4. User config (`~/.speechnet/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpeechnetConfig {
    pub network: NetworkConfig,
    pub layout: LayoutConfig,
    pub stats: StatsConfig,
    pub plot: PlotConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub annotations: Option<String>,
    pub corpus: Option<String>,
    pub start_point: Option<f64>,
    pub end_point: Option<f64>,
    pub layout_algorithm: Option<String>,
    pub node_size: Option<String>,
}

impl SpeechnetConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SpeechnetConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("network.start_point", config.network.start_point),
            ("network.end_point", config.network.end_point),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if config.network.effective_start_point() > config.network.effective_end_point() {
            return Err(ConfigError::ValidationFailed {
                field: "network.start_point".to_string(),
                message: "must not exceed network.end_point".to_string(),
            });
        }
        if config.network.evidence_width == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "network.evidence_width".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(damping) = config.stats.damping {
            if !(damping > 0.0 && damping < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "stats.damping".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(tolerance) = config.stats.tolerance {
            if !(tolerance > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "stats.tolerance".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(scale) = config.layout.scale {
            if !(scale > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "layout.scale".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".speechnet").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SpeechnetConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SpeechnetConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut SpeechnetConfig, other: &SpeechnetConfig) {
        fn take<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
            if other.is_some() {
                base.clone_from(other);
            }
        }

        take(&mut base.network.corpus, &other.network.corpus);
        take(&mut base.network.annotations, &other.network.annotations);
        take(&mut base.network.start_point, &other.network.start_point);
        take(&mut base.network.end_point, &other.network.end_point);
        take(&mut base.network.evidence_width, &other.network.evidence_width);

        take(&mut base.layout.algorithm, &other.layout.algorithm);
        take(&mut base.layout.max_iterations, &other.layout.max_iterations);
        take(&mut base.layout.scale, &other.layout.scale);

        take(&mut base.stats.damping, &other.stats.damping);
        take(&mut base.stats.max_iterations, &other.stats.max_iterations);
        take(&mut base.stats.tolerance, &other.stats.tolerance);

        take(&mut base.plot.node_size, &other.plot.node_size);
        take(&mut base.plot.node_factor, &other.plot.node_factor);
        take(&mut base.plot.node_alpha, &other.plot.node_alpha);
        take(&mut base.plot.hover_text_limit, &other.plot.hover_text_limit);
        take(&mut base.plot.show_title, &other.plot.show_title);
        take(&mut base.plot.top_stats, &other.plot.top_stats);
    }

    /// Apply environment variable overrides.
    /// Pattern: `SPEECHNET_NETWORK_ANNOTATIONS`, `SPEECHNET_PLOT_NODE_SIZE`, etc.
    fn apply_env_overrides(config: &mut SpeechnetConfig) {
        if let Ok(val) = std::env::var("SPEECHNET_NETWORK_ANNOTATIONS") {
            config.network.annotations = Some(val);
        }
        if let Ok(val) = std::env::var("SPEECHNET_NETWORK_CORPUS") {
            config.network.corpus = Some(val);
        }
        if let Ok(val) = std::env::var("SPEECHNET_NETWORK_START_POINT") {
            match val.parse::<f64>() {
                Ok(v) => config.network.start_point = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring SPEECHNET_NETWORK_START_POINT"),
            }
        }
        if let Ok(val) = std::env::var("SPEECHNET_NETWORK_END_POINT") {
            match val.parse::<f64>() {
                Ok(v) => config.network.end_point = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring SPEECHNET_NETWORK_END_POINT"),
            }
        }
        if let Ok(val) = std::env::var("SPEECHNET_LAYOUT_ALGORITHM") {
            config.layout.algorithm = Some(val);
        }
        if let Ok(val) = std::env::var("SPEECHNET_PLOT_NODE_SIZE") {
            config.plot.node_size = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SpeechnetConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.annotations {
            config.network.annotations = Some(v.clone());
        }
        if let Some(ref v) = cli.corpus {
            config.network.corpus = Some(v.clone());
        }
        if let Some(v) = cli.start_point {
            config.network.start_point = Some(v);
        }
        if let Some(v) = cli.end_point {
            config.network.end_point = Some(v);
        }
        if let Some(ref v) = cli.layout_algorithm {
            config.layout.algorithm = Some(v.clone());
        }
        if let Some(ref v) = cli.node_size {
            config.plot.node_size = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
