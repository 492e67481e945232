//! RON config loader
//!
//! Loads the game config from an external RON file, with fallback to the
//! hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::config::GameConfig;

/// Failures while exporting the default config
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Default location of the config file
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "delve", "Delve") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("config.ron");
        path
    } else {
        PathBuf::from("./config.ron")
    }
}

/// Load the config from `explicit`, else the default location, else defaults.
///
/// A file that fails to read, parse or validate is logged and ignored.
pub fn load_config(explicit: Option<&Path>) -> GameConfig {
    let path = explicit.map(Path::to_path_buf).unwrap_or_else(config_path);

    if !path.exists() {
        if explicit.is_some() {
            log::warn!("Config file {:?} does not exist, using defaults", path);
        } else {
            log::info!("No config at {:?}, using defaults", path);
        }
        return GameConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(content) => match ron::from_str::<GameConfig>(&content) {
            Ok(config) => match config.validate() {
                Ok(()) => {
                    log::info!("Config loaded from {:?}", path);
                    return config;
                }
                Err(e) => log::warn!("Config {:?} rejected: {}", path, e),
            },
            Err(e) => log::warn!("Failed to parse {:?}: {}", path, e),
        },
        Err(e) => log::warn!("Failed to read {:?}: {}", path, e),
    }

    GameConfig::default()
}

/// Write the default config to `path` as pretty RON
pub fn export_default_config(path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let ron = ron::ser::to_string_pretty(&GameConfig::default(), ron::ser::PrettyConfig::default())?;
    fs::write(path, ron).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Default config written to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("delve-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_export_then_load() {
        let path = scratch_path("export.ron");
        export_default_config(&path).unwrap();

        let loaded = load_config(Some(&path));
        assert_eq!(loaded, GameConfig::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let path = scratch_path("broken.ron");
        fs::write(&path, "(dungeon_width: 3)").unwrap();

        let loaded = load_config(Some(&path));
        assert_eq!(loaded, GameConfig::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let loaded = load_config(Some(Path::new("/nonexistent/delve/config.ron")));
        assert_eq!(loaded, GameConfig::default());
    }
}
