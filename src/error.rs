//! Errors surfaced by the binary's outer shell.
//!
//! The simulation itself never fails; these cover terminal I/O, the settings
//! file and logger setup.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not start logging: {0}")]
    Logging(String),
}

pub type GameResult<T> = Result<T, GameError>;
