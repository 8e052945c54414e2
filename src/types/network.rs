//! Network report types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkReport {
    pub interfaces: Vec<InterfaceReport>,
    pub connections: ConnectionSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceReport {
    pub name: String,
    pub mac_address: String,
    pub ip_addresses: Vec<String>,
    /// Total bytes received, as a GB string
    pub received: String,
    /// Total bytes transmitted, as a GB string
    pub transmitted: String,
}

/// Socket counts by protocol and state.
///
/// Enumeration is not supported everywhere; when it fails or the platform
/// has no implementation the counts are zero and `note` explains why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSummary {
    pub total: usize,
    pub tcp: usize,
    pub udp: usize,
    pub by_state: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ConnectionSummary {
    pub fn unavailable(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Self::default()
        }
    }
}
