//! Quick-stats collection

use sysinfo::{Disks, System};

use crate::format;
use crate::types::{QuickStats, UsageGauge};

/// Compact snapshot: sampled CPU, memory, root disk, short uptime
pub fn quick_stats(sys: &System) -> QuickStats {
    QuickStats {
        cpu_usage: format::percent_value(sys.global_cpu_usage() as f64),
        memory: UsageGauge {
            used: format::gigabytes(sys.used_memory()),
            total: format::gigabytes(sys.total_memory()),
            usage_percent: format::percent(sys.used_memory(), sys.total_memory()),
        },
        disk: root_disk_gauge(),
        uptime: format::uptime_short(System::uptime()),
    }
}

/// Usage of the root mount, or the largest mount when no `/`-style root exists
fn root_disk_gauge() -> UsageGauge {
    let disks = Disks::new_with_refreshed_list();

    let chosen = disks
        .iter()
        .find(|d| {
            let mount = d.mount_point().to_string_lossy();
            mount == "/" || mount == "C:\\"
        })
        .or_else(|| disks.iter().max_by_key(|d| d.total_space()));

    match chosen {
        Some(disk) => {
            let total = disk.total_space();
            let used = total.saturating_sub(disk.available_space());
            UsageGauge {
                used: format::gigabytes(used),
                total: format::gigabytes(total),
                usage_percent: format::percent(used, total),
            }
        }
        None => UsageGauge {
            used: format::gigabytes(0),
            total: format::gigabytes(0),
            usage_percent: format::percent(0, 0),
        },
    }
}
