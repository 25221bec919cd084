use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MemoryError {
    #[error("address is past the end of physical memory")]
    OverCapacity,
    #[error("block does not match the frame size")]
    IncorrectFrameSize,
}

/// Byte-addressed main memory split into `FRAME_SIZE`-byte frames.
#[derive(Clone)]
pub struct PhysicalMemory<const FRAME_SIZE: usize, const CAPACITY: usize> {
    buffer: Box<[u8]>,
}

impl<const FRAME_SIZE: usize, const CAPACITY: usize> PhysicalMemory<FRAME_SIZE, CAPACITY> {
    pub fn new() -> Self {
        let c = (CAPACITY as f64).log2();
        assert!(
            ((c - c.round()).abs() < 1e-20),
            "Capacity {} is not a multiply of 2",
            CAPACITY
        );
        assert_eq!(
            CAPACITY % FRAME_SIZE,
            0,
            "Capacity must be a multiply of FrameSize"
        );
        Self {
            buffer: vec![0; CAPACITY].into_boxed_slice(),
        }
    }

    fn check_address(&self, address: u64) -> Result<(), MemoryError> {
        if address as usize >= CAPACITY {
            return Err(MemoryError::OverCapacity);
        }
        Ok(())
    }

    pub fn read_u8(&self, address: u64) -> Result<u8, MemoryError> {
        self.check_address(address)?;
        Ok(self.buffer[address as usize])
    }

    /// Reads the byte at `address` as a signed value.
    pub fn read_i8(&self, address: u64) -> Result<i8, MemoryError> {
        Ok(self.read_u8(address)? as i8)
    }

    /// Overwrites a whole frame.
    pub fn write_frame(&mut self, frame_number: u32, block: &[u8]) -> Result<(), MemoryError> {
        if block.len() != FRAME_SIZE {
            return Err(MemoryError::IncorrectFrameSize);
        }
        let start = frame_number as usize * FRAME_SIZE;
        self.check_address(start as u64)?;
        self.buffer[start..start + FRAME_SIZE].copy_from_slice(block);
        Ok(())
    }
}

impl<const FRAME_SIZE: usize, const CAPACITY: usize> Default for PhysicalMemory<FRAME_SIZE, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}
