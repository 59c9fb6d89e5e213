//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading [`Settings`]
//! from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::Settings;

/// Loads and provides access to the payroll settings.
///
/// # Example
///
/// ```no_run
/// use paycompute::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/paycompute.yaml")?;
/// println!("Currency: {}", loader.settings().currency);
/// # Ok::<(), paycompute::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: Settings,
}

impl ConfigLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`Settings`].
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: Settings =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::check_ranges(&settings, &path_str)?;
        debug!(path = %path_str, currency = %settings.currency, "Loaded settings");

        Ok(Self { settings })
    }

    /// Loads settings from `path` if given, otherwise returns the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> PayrollResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn check_ranges(settings: &Settings, path: &str) -> PayrollResult<()> {
        let invalid = |message: &str| PayrollError::ConfigParseError {
            path: path.to_string(),
            message: message.to_string(),
        };

        if settings.min_month < 1
            || settings.max_month > 12
            || settings.min_month > settings.max_month
        {
            return Err(invalid("month range must lie within 1..=12"));
        }
        if settings.min_year > settings.max_year {
            return Err(invalid("min_year must not exceed max_year"));
        }
        if settings.currency.trim().is_empty() {
            return Err(invalid("currency must not be empty"));
        }
        Ok(())
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }
}
