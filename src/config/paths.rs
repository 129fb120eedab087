//! Path management for folio-dash
//!
//! ## Path Resolution Order
//!
//! 1. `FOLIO_DASH_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `folio-dash`
//!    (e.g. `~/.config/folio-dash` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::FolioError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FOLIO_DASH_DATA_DIR";

/// Manages all paths used by folio-dash
#[derive(Debug, Clone)]
pub struct FolioPaths {
    /// Base directory for all folio-dash files
    base_dir: PathBuf,
}

impl FolioPaths {
    /// Create a new FolioPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, FolioError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FolioPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the bundled CSV exports
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Resolve a bundled data location against the data directory.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve_data_file(&self, location: &str) -> PathBuf {
        let path = Path::new(location);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir().join(path)
        }
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FolioError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FolioError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FolioError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if folio-dash has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FolioError> {
    ProjectDirs::from("", "", "folio-dash")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FolioError::Config("Could not determine a config directory".into()))
}
