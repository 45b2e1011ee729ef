//! Runtime settings loaded from `platformer.toml`.
//!
//! Settings cover how the game is *run* (frame pacing, terminal cell scale,
//! sound, debug overlay, log file), never the level or its physics.  Every
//! field defaults to the matching constant in [`crate::constants`], so a
//! minimal file can override just the values you care about.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;
use crate::error::{GameError, GameResult};

/// Where the settings live: `$PLATFORMER_CONFIG`, else `./platformer.toml`.
pub fn settings_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frame length in milliseconds.
    pub frame_ms: u64,
    /// World units per terminal column.
    pub cell_width: f32,
    /// World units per terminal row.
    pub cell_height: f32,
    /// Ring the terminal bell for sound cues.
    pub sound: bool,
    /// Start with the debug overlay visible (F3 toggles it in game).
    pub debug_overlay: bool,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            sound: true,
            debug_overlay: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(path: &Path, contents: &str) -> GameResult<Self> {
        let settings: Settings = toml::from_str(contents).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(settings.sanitized())
    }

    /// Read `path` if it exists.  A missing file yields the defaults.
    pub fn load_from(path: &Path) -> GameResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(path, &contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Cell sizes must be positive and frames must take some time.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cell_width > 0.0) {
            self.cell_width = defaults.cell_width;
        }
        if !(self.cell_height > 0.0) {
            self.cell_height = defaults.cell_height;
        }
        if self.frame_ms == 0 {
            self.frame_ms = defaults.frame_ms;
        }
        self
    }
}
