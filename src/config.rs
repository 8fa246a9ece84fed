//! File configuration of the planner binary.
//!
//! Every key is optional. A minimal file only names the engine:
//!
//! ```toml
//! engine = "astar"
//!
//! [search]
//! scenario = 2
//!
//! [map.file]
//! path = "benchmarks/maps/lake_8x8.txt"
//! ```

use crate::search::{
    environment::{FrozenLake, GridDescription, MapError},
    Endpoint, SearchEngineName, SearchOptions, Verbosity,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Where the lake comes from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapSource {
    File {
        path: PathBuf,
    },
    #[serde(rename_all = "kebab-case")]
    Random {
        #[serde(default = "default_size")]
        size: usize,
        #[serde(default = "default_p_frozen")]
        p_frozen: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
}

fn default_size() -> usize {
    16
}

fn default_p_frozen() -> f64 {
    0.92
}

impl Default for MapSource {
    fn default() -> Self {
        MapSource::Random {
            size: default_size(),
            p_frozen: default_p_frozen(),
            seed: None,
        }
    }
}

impl MapSource {
    pub fn load(&self) -> Result<GridDescription, MapError> {
        match self {
            MapSource::File { path } => {
                info!(path = %path.display(), "reading map");
                GridDescription::from_path(path)
            }
            MapSource::Random {
                size,
                p_frozen,
                seed,
            } => {
                info!(size, p_frozen, seed, "generating random map");
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_os_rng(),
                };
                GridDescription::random(*size, *p_frozen, &mut rng)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PlannerConfig {
    pub engine: SearchEngineName,
    pub verbosity: Verbosity,
    #[serde(skip_serializing_if = "Endpoint::is_unspecified")]
    pub start: Endpoint,
    #[serde(skip_serializing_if = "Endpoint::is_unspecified")]
    pub goal: Endpoint,
    pub search: SearchOptions,
    pub map: MapSource,
}

impl PlannerConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_text(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Builds the lake described by the map section.
    pub fn environment(&self) -> Result<FrozenLake, ConfigError> {
        Ok(FrozenLake::new(self.map.load()?))
    }
}
