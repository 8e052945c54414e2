//! Display discovery engine
//!
//! Resolves connected displays through a prioritized strategy chain:
//!
//! 1. cross-platform enumeration via the `display-info` crate (`systeminfo`),
//! 2. a platform-specific shell command (WMI on Windows, `system_profiler`
//!    on macOS, `xrandr` on Linux),
//! 3. a single synthetic `fallback` record.
//!
//! The first strategy producing at least one record wins; outputs are never
//! merged. Strategy failures (spawn errors, timeouts, unparsable output) are
//! logged at debug level and count as zero records, so discovery as a whole
//! never fails outward.

pub mod linux;
pub mod macos;
pub mod windows;

use crate::types::{DetectionMethod, DisplayRecord, MonitorReport};

/// What one strategy produced
#[derive(Debug, Clone)]
pub enum StrategyOutcome {
    Records(Vec<DisplayRecord>),
    Empty,
}

impl StrategyOutcome {
    pub fn from_records(records: Vec<DisplayRecord>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Records(records)
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Run the chain and package the result with the platform tag.
pub async fn discover_displays() -> MonitorReport {
    let os = std::env::consts::OS;

    let primary = cross_platform();
    // Short-circuit: the shell command only runs when the library found nothing.
    let secondary = if primary.is_empty() {
        platform_specific(os).await
    } else {
        StrategyOutcome::Empty
    };

    let monitors = resolve(primary, secondary);
    MonitorReport {
        total_monitors: monitors.len(),
        monitors,
        system: os.to_string(),
    }
}

/// Pick the first non-empty outcome, falling back to the synthetic record,
/// and renumber ids 1..N in emission order.
pub(crate) fn resolve(
    cross_platform: StrategyOutcome,
    platform_specific: StrategyOutcome,
) -> Vec<DisplayRecord> {
    let mut records = match cross_platform {
        StrategyOutcome::Records(records) => records,
        StrategyOutcome::Empty => match platform_specific {
            StrategyOutcome::Records(records) => records,
            StrategyOutcome::Empty => vec![fallback_record()],
        },
    };
    for (index, record) in records.iter_mut().enumerate() {
        record.id = index as u32 + 1;
    }
    records
}

/// Strategy 1: `display_info::DisplayInfo::all()`
fn cross_platform() -> StrategyOutcome {
    match display_info::DisplayInfo::all() {
        Ok(displays) => StrategyOutcome::from_records(
            displays
                .iter()
                .enumerate()
                .map(|(index, display)| {
                    let id = index as u32 + 1;
                    let name = if display.name.is_empty() {
                        format!("Display {id}")
                    } else {
                        display.name.clone()
                    };
                    let mut record = DisplayRecord::new(id, name, DetectionMethod::Systeminfo);
                    record.width = Some(display.width);
                    record.height = Some(display.height);
                    record.is_main = Some(display.is_primary);
                    record
                })
                .collect(),
        ),
        Err(e) => {
            tracing::debug!(error = %e, "cross-platform display enumeration failed");
            StrategyOutcome::Empty
        }
    }
}

/// Strategy 2: selected by the running operating system
async fn platform_specific(os: &str) -> StrategyOutcome {
    match os {
        "windows" => windows::detect().await,
        "macos" => macos::detect().await,
        "linux" => linux::detect().await,
        _ => StrategyOutcome::Empty,
    }
}

fn fallback_record() -> DisplayRecord {
    let mut record = DisplayRecord::new(1, "Unknown Display", DetectionMethod::Fallback);
    record.note = Some("no detection strategy reported a display".to_string());
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str, method: DetectionMethod) -> DisplayRecord {
        DisplayRecord::new(id, name, method)
    }

    #[test]
    fn cross_platform_records_win() {
        let primary = StrategyOutcome::from_records(vec![
            record(7, "A", DetectionMethod::Systeminfo),
            record(9, "B", DetectionMethod::Systeminfo),
        ]);
        let secondary =
            StrategyOutcome::from_records(vec![record(1, "ignored", DetectionMethod::Xrandr)]);

        let resolved = resolve(primary, secondary);
        assert_eq!(resolved.len(), 2);
        assert!(resolved
            .iter()
            .all(|r| r.detection_method == DetectionMethod::Systeminfo));
        // Ids are renumbered regardless of what the strategy assigned.
        assert_eq!(resolved[0].id, 1);
        assert_eq!(resolved[1].id, 2);
    }

    #[test]
    fn platform_records_win_when_cross_platform_is_empty() {
        let secondary = StrategyOutcome::from_records(vec![
            record(1, "HDMI-1", DetectionMethod::Xrandr),
            record(2, "DP-1", DetectionMethod::Xrandr),
            record(3, "DP-2", DetectionMethod::Xrandr),
        ]);

        let resolved = resolve(StrategyOutcome::Empty, secondary);
        assert_eq!(resolved.len(), 3);
        assert!(resolved
            .iter()
            .all(|r| r.detection_method == DetectionMethod::Xrandr));
    }

    #[test]
    fn both_empty_yields_exactly_one_fallback() {
        let resolved = resolve(StrategyOutcome::Empty, StrategyOutcome::Empty);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].detection_method, DetectionMethod::Fallback);
        assert_eq!(resolved[0].id, 1);
        assert!(resolved[0].width.is_none());
        assert!(resolved[0].note.is_some());
    }

    #[test]
    fn empty_record_vec_counts_as_empty() {
        assert!(StrategyOutcome::from_records(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn unknown_os_strategy_is_absent() {
        assert!(platform_specific("plan9").await.is_empty());
    }

    #[tokio::test]
    async fn discovery_never_returns_empty() {
        let report = discover_displays().await;
        assert!(report.total_monitors >= 1);
        assert_eq!(report.total_monitors, report.monitors.len());
        assert_eq!(report.system, std::env::consts::OS);
    }
}
