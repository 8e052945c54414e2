//! Disk information collection

use sysinfo::Disks;

use crate::format;
use crate::types::{DiskEntry, DiskReport};

/// Usage for every mounted filesystem
pub fn disk_report() -> DiskReport {
    let disks = Disks::new_with_refreshed_list();

    let disks = disks
        .iter()
        .map(|disk| {
            let total = disk.total_space();
            let available = disk.available_space();
            let used = total.saturating_sub(available);

            DiskEntry {
                filesystem: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_string_lossy().to_string(),
                total: format::gigabytes(total),
                used: format::gigabytes(used),
                available: format::gigabytes(available),
                usage_percent: format::percent(used, total),
                kind: disk.file_system().to_string_lossy().to_string(),
            }
        })
        .collect();

    DiskReport { disks }
}
