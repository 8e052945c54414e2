//! Process report types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReport {
    pub summary: ProcessSummary,
    pub processes: Vec<ProcessEntry>,
}

/// Status counts over the full process set, regardless of the list limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    pub total: usize,
    pub running: usize,
    pub sleeping: usize,
    /// Uninterruptible disk sleep
    pub blocked: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: String,
    pub memory: String,
    pub status: String,
}
