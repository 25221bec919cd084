//! Splitting logical addresses and composing physical ones.
//!
//! A logical address is `| page: 8 bits | offset: 8 bits |`. Bits above the
//! page field are ignored.

pub const OFFSET_BITS: u32 = 8;
pub const OFFSET_MASK: i32 = 0xFF;
pub const PAGE_MASK: i32 = 0xFF;

/// Returns `(page, offset)` for a logical address.
#[inline]
pub fn split(address: i32) -> (u32, u32) {
    let offset = address & OFFSET_MASK;
    let page = (address >> OFFSET_BITS) & PAGE_MASK;
    (page as u32, offset as u32)
}

#[inline]
pub fn compose(frame: u32, offset: u32) -> u32 {
    (frame << OFFSET_BITS) | offset
}
