use crate::pathfinding::{FrontierKind, SearchOptions, DEFAULT_MAX_ITERATIONS};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file, if the platform has a config directory.
pub fn path() -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join("astar-console")
            .join("config.toml"),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Give up on a search after selecting this many nodes.
    pub max_iterations: usize,

    /// Frontier implementation used by searches.
    pub frontier: FrontierKind,

    /// Draw with terminal colours.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            frontier: FrontierKind::default(),
            color: true,
        }
    }
}

impl Config {
    /// Save to the default location.
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&path().ok_or(Error::NoConfigDir)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    /// Load from the default location.
    ///
    /// A missing file, or a platform without a config directory, produces the defaults.
    pub fn load() -> Result<Self, Error> {
        match path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to the defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            info!("no configuration at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let config = toml::from_str(&data)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_iterations: self.max_iterations,
            frontier: self.frontier,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("no configuration directory on this platform")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("frontier = \"heap\"").unwrap();
        assert_eq!(
            config,
            Config {
                frontier: FrontierKind::Heap,
                ..Config::default()
            }
        );
        assert_eq!(config.search_options().max_iterations, 500);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("astar-console-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        let config = Config {
            max_iterations: 2000,
            frontier: FrontierKind::Heap,
            color: false,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load_from(Path::new("/nonexistent/astar-console.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file() {
        let err = toml::from_str::<Config>("max_iterations = \"many\"").unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Malformed(_)));
    }
}
