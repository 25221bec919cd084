use std::path::{Path, PathBuf};

use mmu::FRAMES;

use crate::error::SimError;

/// Where logical addresses are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressSource {
    Stdin,
    File(PathBuf),
}

impl AddressSource {
    /// `-` selects standard input, anything else is a path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            AddressSource::Stdin
        } else {
            AddressSource::File(arg.to_path_buf())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub backing_store: PathBuf,
    pub addresses: AddressSource,
    /// Physical frames the allocator may hand out.
    pub frames: usize,
    pub summary_only: bool,
}

impl SimConfig {
    pub fn new(backing_store: PathBuf, addresses: AddressSource) -> Self {
        Self {
            backing_store,
            addresses,
            frames: FRAMES,
            summary_only: false,
        }
    }

    pub fn frames(mut self, frames: usize) -> Result<Self, SimError> {
        if frames == 0 || frames > FRAMES {
            return Err(SimError::InvalidFrames(frames));
        }
        self.frames = frames;
        Ok(self)
    }

    pub fn summary_only(mut self, summary_only: bool) -> Self {
        self.summary_only = summary_only;
        self
    }
}
