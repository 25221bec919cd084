use std::{
    fs::File,
    io::{Read, Seek},
};

use disk::{Disk, DiskError};
use log::debug;
use memory::{MemoryError, PhysicalMemory};
use thiserror::Error;

use crate::{
    address,
    page_table::{FrameAllocator, PageTable, PageTableError},
    tlb::Tlb,
    BACKING_STORE_SIZE, MEMORY_SIZE, PAGES, PAGE_SIZE, TLB_ENTRIES,
};

/// Read-only source of initial page contents, one block per logical page.
pub type BackingStore<S = File> = Disk<PAGE_SIZE, BACKING_STORE_SIZE, S>;

#[derive(Error, Debug)]
pub enum TranslationError {
    /// Every frame the allocator may hand out is already in use.
    #[error("no free frame left to load page {page}")]
    FramePoolExhausted { page: u32 },
    #[error(transparent)]
    Disk(#[from] DiskError),
    #[error("physical memory: {0}")]
    Memory(#[from] MemoryError),
    #[error("page table: {0}")]
    PageTable(#[from] PageTableError),
}

/// Outcome of translating one logical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub virtual_address: i32,
    pub page: u32,
    pub offset: u32,
    pub frame: u32,
    pub physical_address: u32,
    pub value: i8,
    pub tlb_hit: bool,
    pub page_fault: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub translated: u64,
    pub tlb_hits: u64,
    pub page_faults: u64,
}

impl Stats {
    fn record(&mut self, translation: &Translation) {
        self.translated += 1;
        if translation.tlb_hit {
            self.tlb_hits += 1;
        }
        if translation.page_fault {
            self.page_faults += 1;
        }
    }

    pub fn tlb_misses(&self) -> u64 {
        self.translated - self.tlb_hits
    }

    /// Zero when nothing has been translated.
    pub fn page_fault_rate(&self) -> f64 {
        Self::rate(self.page_faults, self.translated)
    }

    /// Zero when nothing has been translated.
    pub fn tlb_hit_rate(&self) -> f64 {
        Self::rate(self.tlb_hits, self.translated)
    }

    fn rate(count: u64, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }
}

/// Demand-paged MMU: TLB in front of a single-level page table, backed by
/// physical memory that is filled from the backing store on first touch.
///
/// Each instance owns all of its state, so independent runs never share
/// frames.
pub struct Translator<S = File> {
    tlb: Tlb<TLB_ENTRIES>,
    page_table: PageTable<PAGES>,
    memory: PhysicalMemory<PAGE_SIZE, MEMORY_SIZE>,
    allocator: FrameAllocator<MEMORY_SIZE, PAGE_SIZE>,
    backing_store: BackingStore<S>,
    stats: Stats,
}

impl<S: Read + Seek> Translator<S> {
    pub fn new(backing_store: BackingStore<S>) -> Self {
        Self::with_frames(backing_store, FrameAllocator::<MEMORY_SIZE, PAGE_SIZE>::frames())
    }

    /// Translator that may only use the first `frames` physical frames.
    pub fn with_frames(backing_store: BackingStore<S>, frames: usize) -> Self {
        Self {
            tlb: Tlb::new(),
            page_table: PageTable::init(),
            memory: PhysicalMemory::new(),
            allocator: FrameAllocator::with_limit(frames),
            backing_store,
            stats: Stats::default(),
        }
    }

    /// Translates `address` and reads the byte it refers to.
    ///
    /// A failed translation leaves the translator untouched: no frame is
    /// consumed and the statistics are not updated.
    pub fn translate(&mut self, address: i32) -> Result<Translation, TranslationError> {
        let (page, offset) = address::split(address);

        let (frame, tlb_hit, page_fault) = match self.tlb.lookup(page) {
            Some(frame) => {
                debug!("TLB hit: page {} -> frame {}", page, frame);
                (frame, true, false)
            }
            None => {
                let (frame, page_fault) = match self.page_table.get_frame(page) {
                    Some(frame) => {
                        debug!("TLB miss: page {} -> frame {}", page, frame);
                        (frame, false)
                    }
                    None => (self.load_page(page)?, true),
                };
                self.tlb.insert(page, frame);
                (frame, false, page_fault)
            }
        };

        let physical_address = address::compose(frame, offset);
        let value = self.memory.read_i8(physical_address as u64)?;

        let translation = Translation {
            virtual_address: address,
            page,
            offset,
            frame,
            physical_address,
            value,
            tlb_hit,
            page_fault,
        };
        self.stats.record(&translation);
        Ok(translation)
    }

    fn load_page(&mut self, page: u32) -> Result<u32, TranslationError> {
        let block = self.backing_store.read_block(page as usize)?;
        let frame = self
            .allocator
            .allocate_frame()
            .ok_or(TranslationError::FramePoolExhausted { page })?;
        self.memory.write_frame(frame, &block[..])?;
        self.page_table.map_to_frame(page, frame)?;
        debug!("Page fault: page {} loaded into frame {}", page, frame);
        Ok(frame)
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn resident_pages(&self) -> usize {
        self.page_table.resident_pages()
    }

    pub fn free_frames(&self) -> u32 {
        self.allocator.free_count()
    }

    pub fn tlb_occupancy(&self) -> usize {
        self.tlb.live_entries()
    }
}
