//! Process listing: snapshot, status summary, sorting, and truncation
//!
//! The summary always reflects the full snapshot; sorting and the limit only
//! shape the returned list.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sysinfo::{ProcessStatus, System};

use crate::format;
use crate::types::{ProcessEntry, ProcessReport, ProcessSummary};

/// Sort order for the process list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// CPU usage, descending
    #[default]
    Cpu,
    /// Memory usage, descending
    Memory,
    /// Process name, ascending
    Name,
}

/// Raw per-process sample, kept numeric so sorting stays exact
#[derive(Debug, Clone)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub cpu: f32,
    pub memory: u64,
    pub status: ProcessStatus,
}

/// Snapshot every process from an already-refreshed `System`
pub fn collect(sys: &System) -> Vec<ProcessSample> {
    sys.processes()
        .values()
        .map(|p| ProcessSample {
            pid: p.pid().as_u32(),
            name: p.name().to_string_lossy().into_owned(),
            cpu: p.cpu_usage(),
            memory: p.memory(),
            status: p.status(),
        })
        .collect()
}

/// Status counts over the full sample set
pub fn summarize(samples: &[ProcessSample]) -> ProcessSummary {
    let mut summary = ProcessSummary {
        total: samples.len(),
        ..ProcessSummary::default()
    };
    for sample in samples {
        match sample.status {
            ProcessStatus::Run => summary.running += 1,
            ProcessStatus::Sleep | ProcessStatus::Idle => summary.sleeping += 1,
            ProcessStatus::UninterruptibleDiskSleep => summary.blocked += 1,
            _ => {}
        }
    }
    summary
}

/// Apply the sort order, then keep at most `limit` entries.
///
/// `limit <= 0` yields an empty list.
pub fn sort_and_truncate(
    mut samples: Vec<ProcessSample>,
    sort_by: SortBy,
    limit: i64,
) -> Vec<ProcessSample> {
    if limit <= 0 {
        return Vec::new();
    }
    match sort_by {
        SortBy::Cpu => samples.sort_by(|a, b| b.cpu.total_cmp(&a.cpu)),
        SortBy::Memory => samples.sort_by(|a, b| b.memory.cmp(&a.memory)),
        SortBy::Name => samples.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    samples.truncate(limit as usize);
    samples
}

/// Full report: summary over everything, formatted list per sort/limit
pub fn process_report(sys: &System, sort_by: SortBy, limit: i64) -> ProcessReport {
    let samples = collect(sys);
    let summary = summarize(&samples);
    let processes = sort_and_truncate(samples, sort_by, limit)
        .into_iter()
        .map(|s| ProcessEntry {
            pid: s.pid,
            name: s.name,
            cpu_percent: format::percent_value(s.cpu as f64),
            memory: format::gigabytes(s.memory),
            status: status_label(s.status),
        })
        .collect();

    ProcessReport { summary, processes }
}

fn status_label(status: ProcessStatus) -> String {
    match status {
        ProcessStatus::Run => "running".to_string(),
        ProcessStatus::Sleep | ProcessStatus::Idle => "sleeping".to_string(),
        ProcessStatus::UninterruptibleDiskSleep => "blocked".to_string(),
        ProcessStatus::Zombie => "zombie".to_string(),
        ProcessStatus::Stop => "stopped".to_string(),
        other => other.to_string().to_lowercase(),
    }
}
