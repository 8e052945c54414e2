//! Memory report types

use serde::{Deserialize, Serialize};

/// RAM and swap usage, formatted as GB strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryReport {
    pub total: String,
    pub used: String,
    pub free: String,
    pub available: String,
    pub usage_percent: String,
    pub swap: SwapReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapReport {
    pub total: String,
    pub used: String,
    pub free: String,
    pub usage_percent: String,
}
