//! CPU information collection

use sysinfo::{Components, System};

use crate::format::{self, UNAVAILABLE};
use crate::types::{CoreCounts, CpuReport, LoadAverage, UsageBreakdown};

/// Build the CPU report from an already-sampled `System`.
///
/// The caller is responsible for the refresh/sleep/refresh usage sample;
/// `temperature` comes from [`read_temperature`], run concurrently with it.
pub fn cpu_report(sys: &System, temperature: Option<f32>) -> CpuReport {
    let cpus = sys.cpus();
    let first_cpu = cpus.first();
    let overall = sys.global_cpu_usage() as f64;
    let load = System::load_average();

    CpuReport {
        brand: first_cpu
            .map(|c| c.brand().trim().to_string())
            .unwrap_or_default(),
        manufacturer: first_cpu
            .map(|c| c.vendor_id().to_string())
            .unwrap_or_default(),
        cores: CoreCounts {
            physical: sys.physical_core_count(),
            logical: cpus.len(),
        },
        usage: UsageBreakdown {
            overall: format::percent_value(overall),
            // sysinfo reports no user/system split
            user: UNAVAILABLE.to_string(),
            system: UNAVAILABLE.to_string(),
            idle: format::percent_value((100.0 - overall).max(0.0)),
        },
        temperature: temperature
            .map(|t| format!("{t:.1}°C"))
            .unwrap_or_else(|| UNAVAILABLE.to_string()),
        load_average: LoadAverage {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        },
    }
}

/// Average temperature over CPU-related sensors, if any report one.
///
/// Refreshing the component list touches hardware sensors and can block, so
/// handlers run this on the blocking pool.
pub fn read_temperature() -> Option<f32> {
    let components = Components::new_with_refreshed_list();
    let temps: Vec<f32> = components
        .iter()
        .filter(|c| {
            let label = c.label().to_lowercase();
            ["cpu", "core", "package", "tdie", "soc"]
                .iter()
                .any(|tag| label.contains(tag))
        })
        .map(|c| c.temperature())
        .filter(|t| t.is_finite() && *t > 0.0)
        .collect();

    if temps.is_empty() {
        None
    } else {
        Some(temps.iter().sum::<f32>() / temps.len() as f32)
    }
}
