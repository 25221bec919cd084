pub mod address;
pub mod page_table;
pub mod tlb;
pub mod translator;

pub use page_table::{FrameAllocator, PageTable, PageTableError};
pub use tlb::Tlb;
pub use translator::{BackingStore, Stats, Translation, TranslationError, Translator};

/// Bytes per page and per frame.
pub const PAGE_SIZE: usize = 256;
/// Distinct logical pages addressable by the 8-bit page field.
pub const PAGES: usize = 256;
/// Physical frames; equal to `PAGES`, so every page can stay resident.
pub const FRAMES: usize = 256;
pub const MEMORY_SIZE: usize = FRAMES * PAGE_SIZE;
pub const BACKING_STORE_SIZE: usize = PAGES * PAGE_SIZE;
pub const TLB_ENTRIES: usize = 16;
