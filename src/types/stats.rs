//! Quick-stats report types

use serde::{Deserialize, Serialize};

/// Compact snapshot for at-a-glance queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickStats {
    pub cpu_usage: String,
    pub memory: UsageGauge,
    /// Root filesystem (largest mount when no root is present)
    pub disk: UsageGauge,
    pub uptime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageGauge {
    pub used: String,
    pub total: String,
    pub usage_percent: String,
}
