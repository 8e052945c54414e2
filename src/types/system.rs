//! System report types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemReport {
    pub operating_system: OsIdentity,
    pub hardware: HardwareSummary,
    pub uptime: String,
    pub hostname: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsIdentity {
    pub name: String,
    pub version: String,
    pub kernel_version: String,
    pub architecture: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareSummary {
    pub cpu_model: String,
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    pub total_memory: String,
    /// Not exposed by the metrics provider; always a placeholder
    pub hardware_uuid: String,
}
