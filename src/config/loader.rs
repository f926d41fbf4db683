//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads the engine configuration from YAML.
///
/// Every section of the file is optional; missing sections fall back to the
/// compiled-in defaults documented on [`EngineConfig`].
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/engine.yaml")?;
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file does not exist and
    /// [`EngineError::ConfigParseError`] if it contains invalid YAML or
    /// ill-typed values.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<EngineConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        Self::parse(&contents, &path.display().to_string())
    }

    /// Parses configuration from a YAML string.
    pub fn parse(contents: &str, source: &str) -> EngineResult<EngineConfig> {
        serde_yaml::from_str(contents).map_err(|err| EngineError::ConfigParseError {
            path: source.to_string(),
            message: err.to_string(),
        })
    }
}
