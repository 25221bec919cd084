use std::path::PathBuf;
use std::process::ExitCode;

use disk::DiskError;
use mmu::TranslationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Cannot open backing store {path}: {source}")]
    BackingStore { path: PathBuf, source: DiskError },

    #[error("Cannot open address file {path}: {source}")]
    AddressStream {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Frame count must be between 1 and {max}, got {0}", max = mmu::FRAMES)]
    InvalidFrames(usize),

    #[error("Line {line}: {source}")]
    Translation {
        line: usize,
        source: TranslationError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Exit status for errors raised after argument parsing. Usage errors
    /// never get here; clap exits with 2 for those.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::BackingStore { .. } | Self::AddressStream { .. } | Self::InvalidFrames(_) => {
                ExitCode::from(3)
            }
            Self::Translation { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}
