/// Hands out physical frames in increasing order, starting at frame 0.
///
/// Frames are never returned. `limit` caps how many of the
/// `MEMORY_CAPACITY / FRAME_SIZE` frames may be handed out.
#[derive(Debug, Clone)]
pub struct FrameAllocator<const MEMORY_CAPACITY: usize, const FRAME_SIZE: usize> {
    next_free: u32,
    limit: u32,
}

impl<const MEMORY_CAPACITY: usize, const FRAME_SIZE: usize>
    FrameAllocator<MEMORY_CAPACITY, FRAME_SIZE>
{
    /// How many frames the physical memory holds
    pub fn frames() -> usize {
        MEMORY_CAPACITY / FRAME_SIZE
    }

    /// Allocator restricted to the first `limit` frames (clamped to the
    /// memory size).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            next_free: 0,
            limit: limit.min(Self::frames()) as u32,
        }
    }

    pub fn allocate_frame(&mut self) -> Option<u32> {
        if self.next_free >= self.limit {
            log::debug!("No free frames");
            return None;
        }
        let frame = self.next_free;
        self.next_free += 1;
        Some(frame)
    }

    pub fn free_count(&self) -> u32 {
        self.limit - self.next_free
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames() {
        assert_eq!(FrameAllocator::<1024, 256>::frames(), 4);
        assert_eq!(FrameAllocator::<65536, 256>::frames(), 256);
    }

    #[test]
    fn test_allocate_frame() {
        let mut allocator = FrameAllocator::<1024, 256>::with_limit(4);
        assert_eq!(allocator.allocate_frame(), Some(0));
        assert_eq!(allocator.allocate_frame(), Some(1));
        assert_eq!(allocator.free_count(), 2);
    }

    #[test]
    fn test_allocate_frame_full() {
        let mut allocator = FrameAllocator::<1024, 256>::with_limit(4);
        for frame in 0..4 {
            assert_eq!(allocator.allocate_frame(), Some(frame));
        }
        assert_eq!(allocator.allocate_frame(), None);
        // A failed allocation leaves the cursor alone.
        assert_eq!(allocator.free_count(), 0);
        assert_eq!(allocator.allocate_frame(), None);
    }

    #[test]
    fn test_limit() {
        let mut allocator = FrameAllocator::<1024, 256>::with_limit(1);
        assert_eq!(allocator.allocate_frame(), Some(0));
        assert_eq!(allocator.allocate_frame(), None);

        let allocator = FrameAllocator::<1024, 256>::with_limit(100);
        assert_eq!(allocator.free_count(), 4);
    }
}
