//! Tolerance settings file support.
//!
//! Comparison tolerances can be read from a TOML file:
//!
//! ```toml
//! [comparison]
//! relative = 1e-12
//! absolute = 1e-12
//!
//! [vector]
//! parallel = 1e-9
//! perpendicular = 1e-9
//! ```
//!
//! Missing sections and keys fall back to their defaults. [`Settings::global`] loads the file named by the
//! `PHYSQ_CONFIG` environment variable once per process and freezes the result; the core crate never reads it on its
//! own, so callers pass tolerances explicitly.

use once_cell::sync::Lazy;
use physq_core::{Tolerance, Value, Vector3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the settings file read by [`Settings::from_env`].
pub const CONFIG_ENV_VAR: &str = "PHYSQ_CONFIG";

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid TOML for [`Settings`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A tolerance is negative or not finite.
    #[error("invalid tolerance `{key}` = {value}: must be finite and non-negative")]
    Invalid {
        /// Dotted key of the offending setting (`"comparison.relative"`, …).
        key: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Tolerances for approximate scalar comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSettings {
    /// Relative tolerance.
    #[serde(default = "default_comparison_tolerance")]
    pub relative: f64,
    /// Absolute tolerance, used near zero.
    #[serde(default = "default_comparison_tolerance")]
    pub absolute: f64,
}

/// Tolerances for vector orientation predicates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorSettings {
    /// Bound on `|a × b|²` below which two vectors count as parallel.
    #[serde(default = "default_vector_tolerance")]
    pub parallel: f64,
    /// Bound on `|a · b|` below which two vectors count as perpendicular.
    #[serde(default = "default_vector_tolerance")]
    pub perpendicular: f64,
}

/// Tolerance settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// `[comparison]` section.
    #[serde(default)]
    pub comparison: ComparisonSettings,
    /// `[vector]` section.
    #[serde(default)]
    pub vector: VectorSettings,
}

fn default_comparison_tolerance() -> f64 {
    Tolerance::DEFAULT.relative
}

fn default_vector_tolerance() -> f64 {
    1e-10
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            relative: default_comparison_tolerance(),
            absolute: default_comparison_tolerance(),
        }
    }
}

impl Default for VectorSettings {
    fn default() -> Self {
        Self {
            parallel: default_vector_tolerance(),
            perpendicular: default_vector_tolerance(),
        }
    }
}

static GLOBAL: Lazy<Settings> = Lazy::new(|| match Settings::from_env() {
    Ok(settings) => settings,
    Err(e) => {
        log::warn!("falling back to default physq settings: {e}");
        Settings::default()
    }
});

impl Settings {
    /// Parses settings from TOML text and validates every tolerance.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    ///
    /// # Returns
    /// * `Ok(Settings)` if the file was read, parsed and validated
    /// * `Err(ConfigError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        log::info!("loaded physq settings from {}", path.display());
        Ok(settings)
    }

    /// Loads settings from the file named by `PHYSQ_CONFIG`, or returns the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_file(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Process-wide settings, loaded from the environment on first use and frozen afterwards.
    ///
    /// A missing or broken settings file is logged and replaced by the defaults.
    pub fn global() -> &'static Settings {
        &GLOBAL
    }

    /// Scalar comparison tolerance.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.comparison.relative, self.comparison.absolute)
    }

    /// Compares two values with the configured tolerance.
    pub fn approx_eq(&self, a: &Value, b: &Value) -> bool {
        a.approx_eq_with(b, self.tolerance())
    }

    /// Parallelism test with the configured tolerance.
    pub fn is_parallel(&self, a: Vector3, b: Vector3) -> bool {
        a.is_parallel(b, self.vector.parallel)
    }

    /// Perpendicularity test with the configured tolerance.
    pub fn is_perpendicular(&self, a: Vector3, b: Vector3) -> bool {
        a.is_perpendicular(b, self.vector.perpendicular)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("comparison.relative", self.comparison.relative),
            ("comparison.absolute", self.comparison.absolute),
            ("vector.parallel", self.vector.parallel),
            ("vector.perpendicular", self.vector.perpendicular),
        ];
        for (key, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { key, value });
            }
        }
        Ok(())
    }
}
