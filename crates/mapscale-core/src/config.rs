use serde::Deserialize;
use std::path::Path;

use crate::error::{ZoomError, ZoomResult};
use crate::gridset::WEB_MERCATOR;
use crate::zoom::{GeometricZoomContext, ListZoomContext, ZoomContextKind};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub gridsets: Vec<GridsetConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoomConfig {
    /// Gridset used when a document names none.
    #[serde(default = "default_gridset")]
    pub default_gridset: String,
}

fn default_gridset() -> String {
    WEB_MERCATOR.into()
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            default_gridset: default_gridset(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridsetKind {
    #[default]
    List,
    Geometric,
}

/// A named gridset declared in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct GridsetConfig {
    pub name: String,
    #[serde(default)]
    pub kind: GridsetKind,
    /// Scale denominators, coarsest first (`list` only).
    #[serde(default)]
    pub scales: Vec<f64>,
    /// Step between levels (`geometric` only).
    #[serde(default)]
    pub ratio: Option<f64>,
    /// Scale denominator at level `initial` (`geometric` only).
    #[serde(default)]
    pub base: Option<f64>,
    /// Zoom level of the first list entry, or of `base`.
    #[serde(default)]
    pub initial: i32,
}

impl GridsetConfig {
    pub fn build(&self) -> ZoomResult<ZoomContextKind> {
        match self.kind {
            GridsetKind::List => Ok(ListZoomContext::new(&self.scales, self.initial)?.into()),
            GridsetKind::Geometric => {
                let (Some(ratio), Some(base)) = (self.ratio, self.base) else {
                    return Err(ZoomError::Config(format!(
                        "geometric gridset {} needs both ratio and base",
                        self.name
                    )));
                };
                Ok(GeometricZoomContext::new(ratio, base, self.initial)?.into())
            }
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ZoomResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ZoomResult<Self> {
        let config: AppConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load config with fallback chain:
    /// explicit path → ./config/default.toml → hardcoded defaults.
    ///
    /// An explicit path that cannot be read or parsed is an error.
    pub fn load_or_default(explicit_path: Option<&Path>) -> ZoomResult<Self> {
        if let Some(path) = explicit_path {
            return Self::load(path).map_err(|e| match e {
                ZoomError::Config(msg) => ZoomError::Config(format!("{}: {msg}", path.display())),
                other => other,
            });
        }

        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            match Self::load(default_path) {
                Ok(cfg) => return Ok(cfg),
                Err(e) => {
                    tracing::warn!("Failed to load default config: {e}");
                }
            }
        }

        tracing::info!("Using hardcoded default configuration");
        Ok(Self::default())
    }
}
