mod frame_allocator;
mod page_table_entry;

use thiserror::Error;

pub use frame_allocator::FrameAllocator;
pub use page_table_entry::PageTableEntry;

#[derive(Error, Debug, PartialEq)]
pub enum PageTableError {
    /// Pages are mapped once; the existing mapping is kept.
    #[error("page {page} is already mapped to frame {frame}")]
    AlreadyMapped { page: u32, frame: u32 },
    #[error("page {page} is out of range")]
    OutOfRange { page: u32 },
}

/// Single-level page table with one entry per logical page.
#[derive(Debug, Clone)]
pub struct PageTable<const PAGES: usize> {
    entries: Vec<Option<PageTableEntry>>,
}

impl<const PAGES: usize> PageTable<PAGES> {
    pub fn init() -> Self {
        Self {
            entries: vec![None; PAGES],
        }
    }

    fn get_entry(&self, page_number: u32) -> Option<PageTableEntry> {
        *self.entries.get(page_number as usize)?
    }

    /// Frame holding `page_number`, or `None` while it is unmapped.
    pub fn get_frame(&self, page_number: u32) -> Option<u32> {
        let entry = self.get_entry(page_number)?;
        Some(entry.get_frame_number())
    }

    pub fn map_to_frame(&mut self, page_number: u32, frame_number: u32) -> Result<(), PageTableError> {
        let slot = self
            .entries
            .get_mut(page_number as usize)
            .ok_or(PageTableError::OutOfRange { page: page_number })?;
        if let Some(existing) = slot {
            return Err(PageTableError::AlreadyMapped {
                page: page_number,
                frame: existing.get_frame_number(),
            });
        }
        let mut entry = PageTableEntry::zero();
        entry.set_frame_number(frame_number);
        *slot = Some(entry);
        Ok(())
    }

    /// Number of pages currently backed by a frame.
    pub fn resident_pages(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

impl<const PAGES: usize> Default for PageTable<PAGES> {
    fn default() -> Self {
        Self::init()
    }
}

#[cfg(test)]
mod tests {
    use super::{PageTable, PageTableError};

    #[test]
    fn create_mapping() {
        let mut table: PageTable<256> = PageTable::init();
        table.map_to_frame(12, 43).unwrap();
        table.map_to_frame(4, 45).unwrap();
        assert_eq!(table.get_frame(12), Some(43));
        assert_eq!(table.get_frame(4), Some(45));
        assert_eq!(table.resident_pages(), 2);
    }

    #[test]
    fn unmapped_page() {
        let table: PageTable<256> = PageTable::init();
        assert_eq!(table.get_frame(0), None);
        assert_eq!(table.get_frame(255), None);
        assert_eq!(table.get_frame(256), None);
    }

    #[test]
    fn frame_zero_is_a_valid_mapping() {
        let mut table: PageTable<256> = PageTable::init();
        table.map_to_frame(7, 0).unwrap();
        assert_eq!(table.get_frame(7), Some(0));
    }

    #[test]
    fn remap_is_rejected() {
        let mut table: PageTable<256> = PageTable::init();
        table.map_to_frame(12, 43).unwrap();
        assert_eq!(
            table.map_to_frame(12, 49),
            Err(PageTableError::AlreadyMapped { page: 12, frame: 43 })
        );
        assert_eq!(table.get_frame(12), Some(43));
        assert_eq!(table.resident_pages(), 1);
    }

    #[test]
    fn map_out_of_range() {
        let mut table: PageTable<256> = PageTable::init();
        assert_eq!(
            table.map_to_frame(256, 1),
            Err(PageTableError::OutOfRange { page: 256 })
        );
    }
}
