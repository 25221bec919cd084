use std::io::{self, Write};

use mmu::{Stats, Translation};

pub fn write_translation<W: Write>(out: &mut W, translation: &Translation) -> io::Result<()> {
    writeln!(
        out,
        "Virtual address: {} Physical address: {} Value: {}",
        translation.virtual_address, translation.physical_address, translation.value
    )
}

pub fn write_summary<W: Write>(out: &mut W, stats: &Stats) -> io::Result<()> {
    writeln!(out, "Total number of Translated Addresses = {}", stats.translated)?;
    writeln!(
        out,
        "Page Faults = {}, Page Fault Rate = {:.3}",
        stats.page_faults,
        stats.page_fault_rate()
    )?;
    writeln!(
        out,
        "TLB Hits = {}, TLB Hit Rate = {:.3}",
        stats.tlb_hits,
        stats.tlb_hit_rate()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_line() {
        let translation = Translation {
            virtual_address: 16916,
            page: 66,
            offset: 20,
            frame: 0,
            physical_address: 20,
            value: -12,
            tlb_hit: false,
            page_fault: true,
        };
        let mut out = Vec::new();
        write_translation(&mut out, &translation).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Virtual address: 16916 Physical address: 20 Value: -12\n"
        );
    }

    #[test]
    fn summary() {
        let stats = Stats {
            translated: 1000,
            tlb_hits: 55,
            page_faults: 244,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &stats).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total number of Translated Addresses = 1000\n\
             Page Faults = 244, Page Fault Rate = 0.244\n\
             TLB Hits = 55, TLB Hit Rate = 0.055\n"
        );
    }

    #[test]
    fn empty_summary() {
        let mut out = Vec::new();
        write_summary(&mut out, &Stats::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total number of Translated Addresses = 0\n\
             Page Faults = 0, Page Fault Rate = 0.000\n\
             TLB Hits = 0, TLB Hit Rate = 0.000\n"
        );
    }
}
