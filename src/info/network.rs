//! Network information collection

use std::collections::BTreeMap;
use std::time::Duration;

use sysinfo::Networks;

use crate::exec;
use crate::format;
use crate::types::{ConnectionSummary, InterfaceReport};

const SS_TIMEOUT: Duration = Duration::from_secs(5);

/// Every network interface with addresses and lifetime traffic counters
pub fn interface_list() -> Vec<InterfaceReport> {
    let networks = Networks::new_with_refreshed_list();

    networks
        .iter()
        .map(|(name, data)| InterfaceReport {
            name: name.clone(),
            mac_address: data.mac_address().to_string(),
            ip_addresses: data
                .ip_networks()
                .iter()
                .map(|ip| ip.addr.to_string())
                .collect(),
            received: format::gigabytes(data.total_received()),
            transmitted: format::gigabytes(data.total_transmitted()),
        })
        .collect()
}

/// Socket counts by protocol and state.
///
/// Implemented by counting `ss -H -tuna` output on Linux; other platforms and
/// any invocation failure degrade to an empty summary with a note.
pub async fn connection_summary() -> ConnectionSummary {
    if std::env::consts::OS != "linux" {
        return ConnectionSummary::unavailable(
            "connection enumeration is only implemented on Linux",
        );
    }
    match exec::run_with_timeout("ss", &["-H", "-t", "-u", "-a", "-n"], SS_TIMEOUT).await {
        Ok(output) => parse_ss(&output),
        Err(e) => {
            tracing::debug!(error = %e, "connection enumeration failed");
            ConnectionSummary::unavailable("connection enumeration failed")
        }
    }
}

/// Count headerless `ss` lines: first column protocol, second column state.
pub fn parse_ss(output: &str) -> ConnectionSummary {
    let mut by_state: BTreeMap<String, usize> = BTreeMap::new();
    let mut tcp = 0;
    let mut udp = 0;

    for line in output.lines() {
        let mut columns = line.split_whitespace();
        let Some(protocol) = columns.next() else {
            continue;
        };
        let Some(state) = columns.next() else {
            continue;
        };
        match protocol {
            "tcp" => tcp += 1,
            "udp" => udp += 1,
            _ => continue,
        }
        *by_state.entry(state.to_lowercase()).or_insert(0) += 1;
    }

    ConnectionSummary {
        total: tcp + udp,
        tcp,
        udp,
        by_state,
        note: None,
    }
}
