//! Available-memory estimate.
//!
//! Mirrors the kernel's own `MemAvailable` heuristic: free memory above the
//! summed low watermarks, plus the part of the page cache and reclaimable
//! slab that can be dropped without pushing a zone below its watermark.
//!
//! All arithmetic is signed kilobytes; the running figure may dip below zero
//! before the final clamp.

use tracing::debug;

use crate::collector::procfs::parser::{
    CounterSet, ParseError, parse_meminfo, parse_zoneinfo_low_watermarks,
};

/// Memory figures in kilobytes.
///
/// `available + unavailable == total` holds for every value produced by
/// [`estimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub total: i64,
    pub free: i64,
    pub available: i64,
    pub unavailable: i64,
}

/// Estimates available memory from parsed counters and the summed low
/// watermarks.
pub fn estimate(counters: &CounterSet, watermark_total: u64) -> Availability {
    let wmark_low = to_signed(watermark_total);

    let free = to_signed(counters.mem_free());
    let mut available = free.saturating_sub(wmark_low);

    let pagecache =
        to_signed(counters.active_file()).saturating_add(to_signed(counters.inactive_file()));
    let pagecache_reserve = (pagecache / 2).min(wmark_low);
    available = available.saturating_add(pagecache - pagecache_reserve);

    let reclaimable = to_signed(counters.s_reclaimable());
    let reclaimable_reserve = (reclaimable / 2).min(wmark_low);
    available = available.saturating_add(reclaimable - reclaimable_reserve);

    debug!(
        wmark_low,
        pagecache,
        pagecache_reserve,
        reclaimable,
        reclaimable_reserve,
        available,
        "estimated available memory"
    );

    if available < 0 {
        available = 0;
    }

    let total = to_signed(counters.mem_total());

    Availability {
        total,
        free,
        available,
        unavailable: total - available,
    }
}

/// Parses raw `/proc/meminfo` and `/proc/zoneinfo` contents and estimates
/// available memory from them.
pub fn compute(meminfo: &str, zoneinfo: &str) -> Result<Availability, ParseError> {
    let counters = parse_meminfo(meminfo)?;
    let watermark_total = parse_zoneinfo_low_watermarks(zoneinfo);
    debug!(counters = counters.len(), watermark_total, "parsed memory counters");
    Ok(estimate(&counters, watermark_total))
}

fn to_signed(kb: u64) -> i64 {
    i64::try_from(kb).unwrap_or(i64::MAX)
}
