//! Display discovery types

use serde::{Deserialize, Serialize};

/// Which detection strategy produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Cross-platform display enumeration library
    Systeminfo,
    /// Windows WMI monitor-parameter query
    Wmi,
    /// macOS `system_profiler SPDisplaysDataType -json`
    SystemProfiler,
    /// Linux `xrandr --query`
    Xrandr,
    /// Synthetic record when every strategy came up empty
    Fallback,
}

/// One connected display.
///
/// `id` is a 1-based position within a single discovery call, not a stable
/// hardware identifier. Resolution is `None` when the winning strategy does
/// not expose it. Method-specific fields are omitted from JSON when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub id: u32,
    pub name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub detection_method: DetectionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_main: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_builtin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_width_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_retina: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DisplayRecord {
    /// Record with the common fields set and every method-specific field empty.
    pub fn new(id: u32, name: impl Into<String>, detection_method: DetectionMethod) -> Self {
        Self {
            id,
            name: name.into(),
            width: None,
            height: None,
            detection_method,
            vendor: None,
            is_main: None,
            is_builtin: None,
            physical_width_cm: None,
            physical_height_cm: None,
            is_retina: None,
            is_primary: None,
            note: None,
        }
    }
}

/// Result of a full discovery call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorReport {
    pub total_monitors: usize,
    pub monitors: Vec<DisplayRecord>,
    /// Operating system tag (`std::env::consts::OS`)
    pub system: String,
}
