//! Simulation statistics collection and reporting.
//!
//! This module tracks how lookups were resolved. It provides:
//! 1. **Translation:** TLB hits, page table hits, and page faults.
//! 2. **Cache:** Data cache hits and misses.
//! 3. **Rejections:** Out-of-range virtual and physical addresses.
//! 4. **Derived metrics:** Hit rates per level.
//!
//! `SimStats` is itself an [`Observer`], so it is fed by the same events that
//! drive logging.

use std::time::Instant;

use crate::common::{Event, EventKind};
use crate::soc::traits::Observer;

/// Simulation statistics structure tracking all resolution paths.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Translations served by the TLB.
    pub tlb_hits: u64,
    /// Translations served by the page table after a TLB miss.
    pub page_table_hits: u64,
    /// Translations that required a new frame.
    pub page_faults: u64,
    /// Bytes served by the data cache.
    pub cache_hits: u64,
    /// Bytes served from backing store after a cache miss.
    pub cache_misses: u64,
    /// Virtual addresses rejected as out of range.
    pub invalid_virtual: u64,
    /// Physical addresses rejected as out of range.
    pub invalid_physical: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            tlb_hits: 0,
            page_table_hits: 0,
            page_faults: 0,
            cache_hits: 0,
            cache_misses: 0,
            invalid_virtual: 0,
            invalid_physical: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"translation"`, `"cache"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "translation", "cache"];

impl SimStats {
    /// Total successful translations.
    pub const fn translations(&self) -> u64 {
        self.tlb_hits + self.page_table_hits + self.page_faults
    }

    /// Total successful cache reads.
    pub const fn cache_accesses(&self) -> u64 {
        self.cache_hits + self.cache_misses
    }

    /// Fraction of translations served by the TLB, or 0 with no translations.
    pub fn tlb_hit_rate(&self) -> f64 {
        ratio(self.tlb_hits, self.translations())
    }

    /// Fraction of cache reads served by the cache, or 0 with no reads.
    pub fn cache_hit_rate(&self) -> f64 {
        ratio(self.cache_hits, self.cache_accesses())
    }

    /// Zeroes every counter and restarts the host timer.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"translation"`,
    /// or `"cache"`. Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();

        println!("\n==========================================================");
        println!("MEMORY HIERARCHY SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            println!("host_seconds             {seconds:.4} s");
            println!("sim_translations         {}", self.translations());
            println!("sim_reads                {}", self.cache_accesses());
            println!("sim_invalid.virtual      {}", self.invalid_virtual);
            println!("sim_invalid.physical     {}", self.invalid_physical);
            println!("----------------------------------------------------------");
        }
        if want("translation") {
            let total = self.translations();
            println!("TRANSLATION");
            println!(
                "  tlb.hits               {} ({:.2}%)",
                self.tlb_hits,
                percent(self.tlb_hits, total)
            );
            println!(
                "  pagetable.hits         {} ({:.2}%)",
                self.page_table_hits,
                percent(self.page_table_hits, total)
            );
            println!(
                "  page_faults            {} ({:.2}%)",
                self.page_faults,
                percent(self.page_faults, total)
            );
            println!("----------------------------------------------------------");
        }
        if want("cache") {
            let total = self.cache_accesses();
            println!("DATA CACHE");
            println!(
                "  L1-D   accesses: {:<10} | hits: {:<10} | miss_rate: {:.2}%",
                total,
                self.cache_hits,
                percent(self.cache_misses, total)
            );
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

impl Observer for SimStats {
    fn observe(&mut self, event: Event) {
        let counter = match event.kind {
            EventKind::AddressFromTlb => &mut self.tlb_hits,
            EventKind::AddressFromPageTable => &mut self.page_table_hits,
            EventKind::AddressFromPageFaultHandler => &mut self.page_faults,
            EventKind::DataFromCache => &mut self.cache_hits,
            EventKind::DataFromMemory => &mut self.cache_misses,
            EventKind::IllegalVirtualAddress => &mut self.invalid_virtual,
            EventKind::IllegalPhysicalAddress => &mut self.invalid_physical,
        };
        *counter += 1;
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

fn percent(part: u64, total: u64) -> f64 {
    ratio(part, total) * 100.0
}
