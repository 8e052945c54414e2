//! CPU report types

use serde::{Deserialize, Serialize};

/// CPU hardware, usage, temperature, and load information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuReport {
    /// CPU brand/model name
    pub brand: String,
    /// Vendor identifier (e.g. GenuineIntel, AuthenticAMD)
    pub manufacturer: String,
    pub cores: CoreCounts,
    pub usage: UsageBreakdown,
    /// Average CPU sensor temperature, or a placeholder when no sensor reports
    pub temperature: String,
    pub load_average: LoadAverage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreCounts {
    /// Physical core count; unknown on some platforms
    pub physical: Option<usize>,
    /// Logical core count (including SMT)
    pub logical: usize,
}

/// Usage percentages as display strings.
///
/// `overall` is sampled; `idle` is derived from it. The user/system split is
/// not exposed by the metrics provider and degrades to a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageBreakdown {
    pub overall: String,
    pub user: String,
    pub system: String,
    pub idle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}
