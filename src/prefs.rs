//! Persisted color-bar preferences (wheel options).
//!
//! Stored as JSON with integer indices, so a file written by a newer build
//! with more harmonies still loads: unknown indices clamp into range.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::harmony::Harmony;
use crate::hue_model::ColorModel;

/// Default location of the preferences file.
const DEFAULT_PREFS_PATH: &str = "config/color_bar.json";
/// Environment variable that overrides [`DEFAULT_PREFS_PATH`].
const PREFS_PATH_ENV: &str = "FLOEM_COLOR_SELECTORS_PREFS";

/// Errors reading or writing the preferences file.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("cannot access preferences at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed preferences at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Wheel options shared by every wheel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorBarPreferences {
    pub discrete_wheel: bool,
    pub wheel_model: ColorModel,
    pub harmony: Harmony,
}

/// On-disk representation.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawPreferences {
    discrete_wheel: bool,
    wheel_model: i32,
    harmony: i32,
}

impl From<RawPreferences> for ColorBarPreferences {
    fn from(raw: RawPreferences) -> Self {
        Self {
            discrete_wheel: raw.discrete_wheel,
            wheel_model: ColorModel::from_index(raw.wheel_model),
            harmony: Harmony::from_index(raw.harmony),
        }
    }
}

impl From<ColorBarPreferences> for RawPreferences {
    fn from(prefs: ColorBarPreferences) -> Self {
        Self {
            discrete_wheel: prefs.discrete_wheel,
            wheel_model: prefs.wheel_model.index(),
            harmony: prefs.harmony.index(),
        }
    }
}

/// Preferences plus the file they are saved to, if any.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    values: ColorBarPreferences,
}

impl PreferenceStore {
    /// Preferences that are never written to disk.
    pub fn in_memory(values: ColorBarPreferences) -> Self {
        Self { path: None, values }
    }

    /// Load from the path named by the environment, or the default path.
    pub fn from_env() -> Self {
        let path = env::var_os(PREFS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH));
        Self::load(path)
    }

    /// Load from `path`, falling back to defaults when the file is missing or
    /// unusable. Later updates are written back to `path` either way.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read(&path) {
            Ok(values) => {
                info!(path = %path.display(), ?values, "loaded color bar preferences");
                values
            }
            Err(PrefsError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "preferences file not found; using defaults");
                ColorBarPreferences::default()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load preferences; using defaults");
                ColorBarPreferences::default()
            }
        };
        Self {
            path: Some(path),
            values,
        }
    }

    /// Read preferences from `path` without any fallback.
    pub fn read(path: &Path) -> Result<ColorBarPreferences, PrefsError> {
        let contents = fs::read_to_string(path).map_err(|source| PrefsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawPreferences =
            serde_json::from_str(&contents).map_err(|source| PrefsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(raw.into())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn values(&self) -> ColorBarPreferences {
        self.values
    }

    /// Apply `f` and write the result back to the file, if there is one.
    ///
    /// The in-memory values change even when writing fails.
    pub fn update(&mut self, f: impl FnOnce(&mut ColorBarPreferences)) -> Result<(), PrefsError> {
        f(&mut self.values);
        match &self.path {
            Some(path) => write(path, self.values),
            None => Ok(()),
        }
    }
}

fn write(path: &Path, values: ColorBarPreferences) -> Result<(), PrefsError> {
    let io_err = |source| PrefsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let raw = RawPreferences::from(values);
    let json = serde_json::to_string_pretty(&raw).map_err(|source| PrefsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)
}
