//! Disk report types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskReport {
    pub disks: Vec<DiskEntry>,
}

/// One mounted filesystem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskEntry {
    /// Device name
    pub filesystem: String,
    pub mount_point: String,
    pub total: String,
    pub used: String,
    pub available: String,
    pub usage_percent: String,
    /// Filesystem type (ext4, apfs, NTFS, ...)
    #[serde(rename = "type")]
    pub kind: String,
}
