use std::{
    fs::File,
    io::{Cursor, Read, Seek, SeekFrom},
    path::Path,
};

use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiskError {
    #[error("block number is past the end of the disk")]
    OverCapacity,
    /// The source holds fewer bytes than the disk geometry requires
    #[error("backing store holds {actual} bytes, at least {expected} are required")]
    TooSmall { expected: u64, actual: u64 },
    #[error("backing store I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only block device backing the simulated address space.
///
/// Block `n` holds the initial contents of logical page `n`. The source is
/// never written to.
#[derive(Debug)]
pub struct Disk<const BLOCKSIZE: usize, const CAPACITY: usize, S = File> {
    name: String,
    source: S,
}

fn check_geometry<const BLOCKSIZE: usize, const CAPACITY: usize>(len: u64) -> Result<(), DiskError> {
    assert_eq!(
        CAPACITY % BLOCKSIZE,
        0,
        "Capacity must be a multiply of BlockSize"
    );
    if len < CAPACITY as u64 {
        return Err(DiskError::TooSmall {
            expected: CAPACITY as u64,
            actual: len,
        });
    }
    Ok(())
}

impl<const BLOCKSIZE: usize, const CAPACITY: usize> Disk<BLOCKSIZE, CAPACITY, File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DiskError> {
        let path = path.as_ref();
        let file = File::options().read(true).open(path)?;
        let len = file.metadata()?.len();
        check_geometry::<BLOCKSIZE, CAPACITY>(len)?;
        info!("Opened backing store {} ({} bytes)", path.display(), len);
        Ok(Self {
            name: path.display().to_string(),
            source: file,
        })
    }
}

impl<const BLOCKSIZE: usize, const CAPACITY: usize> Disk<BLOCKSIZE, CAPACITY, Cursor<Vec<u8>>> {
    /// Disk backed by an in-memory image instead of a file.
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Result<Self, DiskError> {
        check_geometry::<BLOCKSIZE, CAPACITY>(bytes.len() as u64)?;
        Ok(Self {
            name: String::from(name),
            source: Cursor::new(bytes),
        })
    }
}

impl<const BLOCKSIZE: usize, const CAPACITY: usize, S: Read + Seek> Disk<BLOCKSIZE, CAPACITY, S> {
    pub fn blocks() -> usize {
        CAPACITY / BLOCKSIZE
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn read_block(&mut self, block_number: usize) -> Result<Box<[u8; BLOCKSIZE]>, DiskError> {
        if block_number >= Self::blocks() {
            return Err(DiskError::OverCapacity);
        }
        debug!("Reading block[{}] of {}", block_number, self.name);
        self.source
            .seek(SeekFrom::Start((block_number * BLOCKSIZE) as u64))?;
        let mut buf = Box::new([0; BLOCKSIZE]);
        self.source.read_exact(&mut *buf)?;
        Ok(buf)
    }
}
