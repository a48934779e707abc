use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::coord::Coord;
use crate::grid::bounds::GridBounds;
use crate::grid::safety::{DigitSumRule, THRESHOLD};
use crate::search::resources::ResourceLimits;

fn default_threshold() -> u32 {
    THRESHOLD
}

/// Grid configuration. Every field defaults to the fixed grid.
///
/// ```json
/// { "bounds": { "min": -999, "max": 999 }, "threshold": 19,
///   "limits": { "max_visited": 4000000, "max_expansions": 4000000 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default)]
    pub bounds: GridBounds,
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    #[serde(default)]
    pub limits: ResourceLimits,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid grid config: {reason}")]
    Invalid { reason: String },
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            bounds: GridBounds::default(),
            threshold: THRESHOLD,
            limits: ResourceLimits::default(),
        }
    }
}

impl GridConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            min = config.bounds.min,
            max = config.bounds.max,
            threshold = config.threshold,
            "loaded grid config"
        );
        Ok(config)
    }

    /// The origin must be an in-bounds safe cell: it is the root of the reachable count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.min > self.bounds.max {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "bounds.min ({}) must be <= bounds.max ({})",
                    self.bounds.min, self.bounds.max
                ),
            });
        }
        if !self.bounds.contains(Coord::ORIGIN) {
            return Err(ConfigError::Invalid {
                reason: "bounds must contain the origin".to_string(),
            });
        }
        if self.threshold == 0 {
            return Err(ConfigError::Invalid {
                reason: "threshold must be >= 1".to_string(),
            });
        }
        if self.limits.max_visited == 0 || self.limits.max_expansions == 0 {
            return Err(ConfigError::Invalid {
                reason: "limits must be >= 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn rule(&self) -> DigitSumRule {
        DigitSumRule::new(self.bounds, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default_grid() {
        let config = GridConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn partial_bounds_fill_from_defaults() {
        let config = GridConfig::from_json_str(r#"{ "bounds": { "max": 10 } }"#).unwrap();
        assert_eq!(config.bounds, GridBounds::new(-999, 10));
        assert_eq!(config.threshold, 19);
    }

    #[test]
    fn rejects_grids_without_a_safe_origin() {
        for bad in [
            r#"{ "bounds": { "min": 5, "max": -5 } }"#,
            r#"{ "bounds": { "min": 1, "max": 5 } }"#,
            r#"{ "threshold": 0 }"#,
            r#"{ "limits": { "max_visited": 0 } }"#,
        ] {
            assert!(
                matches!(
                    GridConfig::from_json_str(bad),
                    Err(ConfigError::Invalid { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            GridConfig::from_json_str("{ \"threshold\": -1 }"),
            Err(ConfigError::Json(_))
        ));
    }
}
