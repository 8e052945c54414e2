//! Memory information collection

use sysinfo::System;

use crate::format;
use crate::types::{MemoryReport, SwapReport};

/// RAM and swap usage from an already-refreshed `System`
pub fn memory_report(sys: &System) -> MemoryReport {
    let total = sys.total_memory();
    let used = sys.used_memory();
    let swap_total = sys.total_swap();
    let swap_used = sys.used_swap();

    MemoryReport {
        total: format::gigabytes(total),
        used: format::gigabytes(used),
        free: format::gigabytes(sys.free_memory()),
        available: format::gigabytes(sys.available_memory()),
        usage_percent: format::percent(used, total),
        swap: SwapReport {
            total: format::gigabytes(swap_total),
            used: format::gigabytes(swap_used),
            free: format::gigabytes(swap_total.saturating_sub(swap_used)),
            usage_percent: format::percent(swap_used, swap_total),
        },
    }
}
