//! Linux display strategy: `xrandr --query`

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use super::StrategyOutcome;
use crate::exec;
use crate::types::{DetectionMethod, DisplayRecord};

const XRANDR_TIMEOUT: Duration = Duration::from_secs(10);

static RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)x(\d+)").expect("resolution pattern is valid"));

pub(super) async fn detect() -> StrategyOutcome {
    match exec::run_with_timeout("xrandr", &["--query"], XRANDR_TIMEOUT).await {
        Ok(output) => StrategyOutcome::from_records(parse_xrandr(&output)),
        Err(e) => {
            tracing::debug!(error = %e, "xrandr query failed");
            StrategyOutcome::Empty
        }
    }
}

/// Extract connected outputs from `xrandr --query` text.
///
/// A candidate line contains `" connected"` and not `"disconnected"` (checked
/// in that order; "disconnected" also contains "connected" as a substring).
/// The output name is the first whitespace token. A candidate line with no
/// `<digits>x<digits>` resolution anywhere is skipped entirely.
pub fn parse_xrandr(output: &str) -> Vec<DisplayRecord> {
    let mut records = Vec::new();
    for line in output.lines() {
        if !line.contains(" connected") || line.contains("disconnected") {
            continue;
        }
        let Some(name) = line.split_whitespace().next() else {
            continue;
        };
        let Some(caps) = RESOLUTION.captures(line) else {
            continue;
        };

        let id = records.len() as u32 + 1;
        let mut record = DisplayRecord::new(id, name, DetectionMethod::Xrandr);
        record.width = caps[1].parse().ok();
        record.height = caps[2].parse().ok();
        record.is_primary = Some(line.contains("primary"));
        records.push(record);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_connected_primary_line() {
        let records = parse_xrandr(
            "HDMI-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 527mm x 296mm",
        );
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.name, "HDMI-1");
        assert_eq!(record.width, Some(1920));
        assert_eq!(record.height, Some(1080));
        assert_eq!(record.is_primary, Some(true));
        assert_eq!(record.detection_method, DetectionMethod::Xrandr);
    }

    #[test]
    fn disconnected_line_yields_no_record() {
        // Contains the substring "connected" but must still be excluded.
        assert!(parse_xrandr("HDMI-2 disconnected (normal left inverted right)").is_empty());
    }

    #[test]
    fn connected_line_without_resolution_is_skipped() {
        assert!(parse_xrandr("DP-1 connected (normal left inverted right)").is_empty());
    }

    #[test]
    fn multiple_outputs_number_in_order() {
        let output = "\
Screen 0: minimum 320 x 200, current 3840 x 1080, maximum 16384 x 16384
HDMI-1 connected primary 1920x1080+0+0 527mm x 296mm
DP-1 connected 1920x1080+1920+0 527mm x 296mm
DP-2 disconnected
";
        let records = parse_xrandr(output);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "HDMI-1");
        assert_eq!(records[0].is_primary, Some(true));
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].name, "DP-1");
        assert_eq!(records[1].is_primary, Some(false));
    }
}
