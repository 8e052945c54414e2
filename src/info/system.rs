//! System identity collection

use sysinfo::System;

use crate::format::{self, UNAVAILABLE};
use crate::types::{HardwareSummary, OsIdentity, SystemReport};

/// OS identity, hardware summary, uptime, hostname, and current user
pub fn system_report(sys: &System) -> SystemReport {
    SystemReport {
        operating_system: OsIdentity {
            name: System::name().unwrap_or_else(|| "Unknown".to_string()),
            version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
            architecture: std::env::consts::ARCH.to_string(),
        },
        hardware: HardwareSummary {
            cpu_model: sys
                .cpus()
                .first()
                .map(|c| c.brand().trim().to_string())
                .unwrap_or_default(),
            physical_cores: sys.physical_core_count(),
            logical_cores: sys.cpus().len(),
            total_memory: format::gigabytes(sys.total_memory()),
            hardware_uuid: UNAVAILABLE.to_string(),
        },
        uptime: format::uptime(System::uptime()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        user: current_user(),
    }
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_populated() {
        let sys = System::new_all();
        let report = system_report(&sys);

        assert!(!report.operating_system.architecture.is_empty());
        assert!(report.hardware.logical_cores > 0);
        assert!(report.hardware.total_memory.ends_with(" GB"));
        assert_eq!(report.hardware.hardware_uuid, UNAVAILABLE);
        assert!(report.uptime.contains('d'));
    }
}
