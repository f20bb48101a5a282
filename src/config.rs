use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::Error;

const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Alphabet used when none is given on the command line.
    #[serde(default)]
    pub alphabet: Option<String>,
}

impl Config {
    /// Loads the file named by `--config`, or the per-user config file if one
    /// exists. Without either, the built-in defaults apply. A broken per-user
    /// file is logged and skipped; a broken `--config` file is an error.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, Error> {
        if let Some(path) = explicit {
            log::debug!("Loading config file {}", path);
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("Loading config file {}", path.display());
                Self::load(&path).or_else(|e| {
                    log::warn!("Ignoring config file: {}", e);
                    Ok(Self::default())
                })
            }
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let cfg = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&cfg).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use tempdir::TempDir;

    #[test]
    fn parses_alphabet() {
        let cfg = Config::from_yaml("alphabet: \"0123456789abcdef\"\n").unwrap();
        assert_eq!(cfg.alphabet.as_deref(), Some("0123456789abcdef"));
    }

    #[test]
    fn empty_file_means_defaults() {
        let cfg = Config::from_yaml("\n").unwrap();
        assert!(cfg.alphabet.is_none());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new("srs-config").unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "alphabet: xyz\n").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.alphabet.as_deref(), Some("xyz"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new("srs-config").unwrap();
        let path = dir.path().join("missing.yaml");
        let err = Config::resolve(path.to_str()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn default_path_ends_in_config_yaml() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with("config.yaml"), "{}", path.display());
        }
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new("srs-config").unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "alphabet: [1, 2\n").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::Config(_))));
    }
}
