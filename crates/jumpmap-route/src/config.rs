//! Routing configuration.
//!
//! The core never persists settings; the host reads a [`RouteConfig`] (from
//! TOML or elsewhere) and hands the values to [`StarMap`](crate::StarMap) and
//! [`RoutePlanner`](crate::RoutePlanner).

use std::fs;
use std::path::{Path, PathBuf};

use jumpmap_core::Bounds;
use jumpmap_index::IndexLimits;
use jumpmap_paths::{Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::CategoryId;

/// Errors raised while loading or validating a [`RouteConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config encode error: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Spatial index settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Root extent. When unset the extent is fitted to the nodes on every
    /// rebuild.
    pub bounds: Option<Bounds>,
    /// Split limits, written as `max_shapes` and `max_depth` directly in the
    /// `[index]` table.
    #[serde(flatten)]
    pub limits: IndexLimits,
}

/// Everything the host configures about routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Largest distance covered by a single jump.
    pub jump_range: f64,
    /// Categories routes may not pass through.
    pub exclusions: Vec<CategoryId>,
    pub strategy: StrategyKind,
    /// Cap on neighbor expansions per segment search. Unset means unbounded.
    pub max_expansions: Option<usize>,
    pub index: IndexConfig,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            jump_range: 4.0,
            exclusions: Vec::new(),
            strategy: StrategyKind::default(),
            max_expansions: None,
            index: IndexConfig::default(),
        }
    }
}

impl RouteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded route config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the planner cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.jump_range.is_finite() || self.jump_range < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "jump_range must be a finite non-negative number, got {}",
                self.jump_range
            )));
        }
        if self.max_expansions == Some(0) {
            return Err(ConfigError::Invalid(
                "max_expansions must be at least 1 when set".to_string(),
            ));
        }
        if self.index.limits.max_shapes == 0 {
            return Err(ConfigError::Invalid(
                "index.max_shapes must be at least 1".to_string(),
            ));
        }
        if let Some(b) = self.index.bounds {
            let sane = b.center.is_finite()
                && b.width.is_finite()
                && b.height.is_finite()
                && b.width > 0.0
                && b.height > 0.0;
            if !sane {
                return Err(ConfigError::Invalid(format!(
                    "index.bounds must have a finite center and positive extents, got {b}"
                )));
            }
        }
        Ok(())
    }

    /// The configured search strategy with its expansion cap.
    pub fn search_strategy(&self) -> Strategy {
        Strategy::new(self.strategy, self.max_expansions)
    }
}
