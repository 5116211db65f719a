use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG: &str = "books.csv";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Front-end settings.
///
/// ```toml
/// catalog_path = "library/books.csv"
/// color = false
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    pub catalog_path: PathBuf,
    pub color: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            color: true,
        }
    }
}

impl ShelfConfig {
    /// Read settings from a TOML file. Unset keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, overlaid by the config file if given, overlaid by an
    /// explicit catalog path if given.
    pub fn resolve(config: Option<&Path>, catalog: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut resolved = match config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(catalog) = catalog {
            resolved.catalog_path = catalog;
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ShelfConfig::default();
        assert_eq!(c.catalog_path, PathBuf::from("books.csv"));
        assert!(c.color);
    }

    #[test]
    fn load_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.toml");
        fs::write(&path, "color = false\n").unwrap();

        let c = ShelfConfig::load(&path).unwrap();
        assert!(!c.color);
        assert_eq!(c.catalog_path, PathBuf::from(DEFAULT_CATALOG));
    }

    #[test]
    fn catalog_flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.toml");
        fs::write(&path, "catalog_path = \"from-file.csv\"\n").unwrap();

        let from_file = ShelfConfig::resolve(Some(&path), None).unwrap();
        assert_eq!(from_file.catalog_path, PathBuf::from("from-file.csv"));

        let overridden = ShelfConfig::resolve(Some(&path), Some("flag.csv".into())).unwrap();
        assert_eq!(overridden.catalog_path, PathBuf::from("flag.csv"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShelfConfig::resolve(Some(&dir.path().join("nope.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.toml");
        fs::write(&path, "catalog_path = [1, 2").unwrap();
        assert!(matches!(ShelfConfig::load(&path), Err(ConfigError::Parse { .. })));
    }
}
