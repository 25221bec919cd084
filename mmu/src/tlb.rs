use log::trace;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TlbEntry {
    pub page: u32,
    pub frame: u32,
}

/// Translation lookaside buffer with FIFO replacement.
///
/// Entries live in a ring of `ENTRIES` slots written at `cursor % ENTRIES`.
/// The cursor only ever grows, so the live window is the last
/// `min(cursor, ENTRIES)` writes. Slots outside the window are never read,
/// which is why they don't need to be cleared.
#[derive(Debug, Clone)]
pub struct Tlb<const ENTRIES: usize> {
    entries: [TlbEntry; ENTRIES],
    cursor: usize,
}

impl<const ENTRIES: usize> Tlb<ENTRIES> {
    pub fn new() -> Self {
        assert!(ENTRIES > 0, "TLB needs at least one entry");
        Self {
            entries: [TlbEntry::default(); ENTRIES],
            cursor: 0,
        }
    }

    /// Records `page -> frame`, overwriting the oldest entry once full.
    pub fn insert(&mut self, page: u32, frame: u32) {
        trace!("TLB insert page {} -> frame {} at slot {}", page, frame, self.cursor % ENTRIES);
        self.entries[self.cursor % ENTRIES] = TlbEntry { page, frame };
        self.cursor += 1;
    }

    /// Scans the live window from the oldest entry to the newest and returns
    /// the frame of the first match.
    pub fn lookup(&self, page: u32) -> Option<u32> {
        let start = self.cursor.saturating_sub(ENTRIES);
        (start..self.cursor)
            .map(|i| &self.entries[i % ENTRIES])
            .find(|entry| entry.page == page)
            .map(|entry| entry.frame)
    }

    /// Number of entries inside the live window.
    pub fn live_entries(&self) -> usize {
        self.cursor.min(ENTRIES)
    }
}

impl<const ENTRIES: usize> Default for Tlb<ENTRIES> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tlb_misses() {
        let tlb: Tlb<16> = Tlb::new();
        // Slot contents default to page 0, but nothing is live yet.
        assert_eq!(tlb.lookup(0), None);
        assert_eq!(tlb.live_entries(), 0);
    }

    #[test]
    fn insert_and_lookup() {
        let mut tlb: Tlb<16> = Tlb::new();
        tlb.insert(3, 0);
        tlb.insert(9, 1);
        assert_eq!(tlb.lookup(3), Some(0));
        assert_eq!(tlb.lookup(9), Some(1));
        assert_eq!(tlb.lookup(4), None);
        assert_eq!(tlb.live_entries(), 2);
    }

    #[test]
    fn oldest_entry_is_evicted() {
        let mut tlb: Tlb<16> = Tlb::new();
        for page in 0..17 {
            tlb.insert(page, page + 100);
        }
        assert_eq!(tlb.lookup(0), None);
        for page in 1..17 {
            assert_eq!(tlb.lookup(page), Some(page + 100));
        }
        assert_eq!(tlb.live_entries(), 16);
    }

    #[test]
    fn eviction_wraps_around_repeatedly() {
        let mut tlb: Tlb<4> = Tlb::new();
        for page in 0..10 {
            tlb.insert(page, page);
        }
        // Live window holds pages 6..10.
        for page in 0..6 {
            assert_eq!(tlb.lookup(page), None);
        }
        for page in 6..10 {
            assert_eq!(tlb.lookup(page), Some(page));
        }
    }

    #[test]
    fn duplicate_pages_resolve_to_oldest() {
        let mut tlb: Tlb<4> = Tlb::new();
        tlb.insert(5, 1);
        tlb.insert(5, 2);
        assert_eq!(tlb.lookup(5), Some(1));

        // Once the older copy falls out of the window the newer one is found.
        tlb.insert(6, 3);
        tlb.insert(7, 4);
        tlb.insert(8, 5);
        assert_eq!(tlb.lookup(5), Some(2));
    }

    #[test]
    fn live_entries_saturate_at_capacity() {
        let mut tlb: Tlb<2> = Tlb::new();
        tlb.insert(1, 1);
        assert_eq!(tlb.live_entries(), 1);
        tlb.insert(2, 2);
        tlb.insert(3, 3);
        assert_eq!(tlb.live_entries(), 2);
    }
}
