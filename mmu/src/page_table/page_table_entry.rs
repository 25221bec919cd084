/// This table maps a logical page to the frame in physical memory holding it
/// Each entry represent a map from page ---> frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTableEntry {
    /// | frame number: u32 |
    pub(super) entry: [u8; 4],
}

impl PageTableEntry {
    pub(super) fn zero() -> Self {
        PageTableEntry { entry: [0; 4] }
    }

    pub fn get_frame_number(&self) -> u32 {
        u32::from_be_bytes(self.entry)
    }

    pub(super) fn set_frame_number(&mut self, frame_number: u32) {
        self.entry = frame_number.to_be_bytes();
    }
}
