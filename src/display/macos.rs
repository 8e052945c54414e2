//! macOS display strategy: `system_profiler SPDisplaysDataType -json`

use std::time::Duration;

use serde_json::Value;

use super::StrategyOutcome;
use crate::exec;
use crate::types::{DetectionMethod, DisplayRecord};

// system_profiler can take a while on machines with many adapters
const PROFILER_TIMEOUT: Duration = Duration::from_secs(15);

pub(super) async fn detect() -> StrategyOutcome {
    match exec::run_with_timeout(
        "system_profiler",
        &["SPDisplaysDataType", "-json"],
        PROFILER_TIMEOUT,
    )
    .await
    {
        Ok(output) => StrategyOutcome::from_records(parse_system_profiler(&output)),
        Err(e) => {
            tracing::debug!(error = %e, "system_profiler query failed");
            StrategyOutcome::Empty
        }
    }
}

/// Walk `SPDisplaysDataType[].spdisplays_ndrvs[]`: one record per attached
/// monitor. Unparsable JSON yields zero records.
pub fn parse_system_profiler(json: &str) -> Vec<DisplayRecord> {
    let Ok(value) = serde_json::from_str::<Value>(json) else {
        return Vec::new();
    };
    let Some(adapters) = value.get("SPDisplaysDataType").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for adapter in adapters {
        let Some(monitors) = adapter.get("spdisplays_ndrvs").and_then(Value::as_array) else {
            continue;
        };
        for monitor in monitors {
            let id = records.len() as u32 + 1;
            let name = monitor
                .get("_name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Display {id}"));
            let resolution = monitor
                .get("_spdisplays_resolution")
                .or_else(|| monitor.get("spdisplays_resolution"))
                .and_then(Value::as_str);

            let mut record = DisplayRecord::new(id, name, DetectionMethod::SystemProfiler);
            if let Some(resolution) = resolution {
                let (width, height) = parse_resolution(resolution);
                record.width = width;
                record.height = height;
            }
            record.is_retina = Some(record.name.contains("Retina"));
            records.push(record);
        }
    }
    records
}

/// Split a `"<width> x <height> ..."` resolution string on the literal
/// `" x "` token and take the leading numeric token of each side. A string
/// that does not match this shape leaves both sides unknown.
pub fn parse_resolution(resolution: &str) -> (Option<u32>, Option<u32>) {
    let Some((left, right)) = resolution.split_once(" x ") else {
        return (None, None);
    };
    let width = left.split_whitespace().next().and_then(|t| t.parse().ok());
    let height = right.split_whitespace().next().and_then(|t| t.parse().ok());
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_with_refresh_suffix() {
        assert_eq!(parse_resolution("1920 x 1080 @ 60Hz"), (Some(1920), Some(1080)));
        assert_eq!(parse_resolution("2560 x 1600"), (Some(2560), Some(1600)));
    }

    #[test]
    fn malformed_resolution_is_unknown_without_panicking() {
        assert_eq!(parse_resolution("3456x2234"), (None, None));
        assert_eq!(parse_resolution("native"), (None, None));
        assert_eq!(parse_resolution(""), (None, None));
    }

    #[test]
    fn walks_adapters_and_monitors() {
        let json = r#"{
            "SPDisplaysDataType": [{
                "_name": "Apple M2",
                "spdisplays_ndrvs": [
                    {
                        "_name": "Built-in Retina Display",
                        "_spdisplays_resolution": "2560 x 1664 @ 60Hz"
                    },
                    {
                        "_name": "DELL U2720Q",
                        "_spdisplays_resolution": "3840 x 2160 @ 60Hz"
                    }
                ]
            }]
        }"#;

        let records = parse_system_profiler(json);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].name, "Built-in Retina Display");
        assert_eq!(records[0].width, Some(2560));
        assert_eq!(records[0].is_retina, Some(true));

        assert_eq!(records[1].name, "DELL U2720Q");
        assert_eq!(records[1].height, Some(2160));
        assert_eq!(records[1].is_retina, Some(false));
        assert_eq!(records[1].detection_method, DetectionMethod::SystemProfiler);
    }

    #[test]
    fn missing_name_gets_placeholder_and_bad_resolution_stays_unknown() {
        let json = r#"{
            "SPDisplaysDataType": [{
                "spdisplays_ndrvs": [{ "_spdisplays_resolution": "native" }]
            }]
        }"#;

        let records = parse_system_profiler(json);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Display 1");
        assert_eq!(records[0].width, None);
        assert_eq!(records[0].height, None);
    }

    #[test]
    fn unparsable_json_yields_zero_records() {
        assert!(parse_system_profiler("not json").is_empty());
        assert!(parse_system_profiler("{}").is_empty());
    }
}
