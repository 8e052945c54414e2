//! Windows display strategy: WMI monitor parameters via PowerShell

use std::time::Duration;

use serde_json::Value;

use super::StrategyOutcome;
use crate::exec;
use crate::types::{DetectionMethod, DisplayRecord};

const WMI_TIMEOUT: Duration = Duration::from_secs(10);

const WMI_QUERY: &str = "Get-CimInstance -Namespace root\\wmi -ClassName WmiMonitorBasicDisplayParams | Select-Object MaxHorizontalImageSize, MaxVerticalImageSize | ConvertTo-Json";

pub(super) async fn detect() -> StrategyOutcome {
    match exec::run_with_timeout(
        "powershell",
        &["-NoProfile", "-Command", WMI_QUERY],
        WMI_TIMEOUT,
    )
    .await
    {
        Ok(output) => StrategyOutcome::from_records(parse_wmi(&output)),
        Err(e) => {
            tracing::debug!(error = %e, "WMI monitor query failed");
            StrategyOutcome::Empty
        }
    }
}

/// Parse `ConvertTo-Json` output: a single object for one monitor, an array
/// for several, nothing at all for none. This path never resolves pixel
/// resolution; it contributes the physical image size in centimeters.
pub fn parse_wmi(json: &str) -> Vec<DisplayRecord> {
    let Ok(value) = serde_json::from_str::<Value>(json.trim()) else {
        return Vec::new();
    };
    let instances: Vec<&Value> = match &value {
        Value::Array(items) => items.iter().collect(),
        object @ Value::Object(_) => vec![object],
        _ => return Vec::new(),
    };

    instances
        .iter()
        .enumerate()
        .map(|(index, instance)| {
            let id = index as u32 + 1;
            let mut record = DisplayRecord::new(id, format!("Monitor {id}"), DetectionMethod::Wmi);
            record.physical_width_cm = instance
                .get("MaxHorizontalImageSize")
                .and_then(Value::as_f64);
            record.physical_height_cm = instance
                .get("MaxVerticalImageSize")
                .and_then(Value::as_f64);
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_object_becomes_one_record() {
        let records = parse_wmi(r#"{"MaxHorizontalImageSize": 53, "MaxVerticalImageSize": 30}"#);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.name, "Monitor 1");
        assert_eq!(record.physical_width_cm, Some(53.0));
        assert_eq!(record.physical_height_cm, Some(30.0));
        // Resolution is never resolved by the WMI path.
        assert_eq!(record.width, None);
        assert_eq!(record.height, None);
        assert_eq!(record.detection_method, DetectionMethod::Wmi);
    }

    #[test]
    fn array_becomes_numbered_records() {
        let json = r#"[
            {"MaxHorizontalImageSize": 53, "MaxVerticalImageSize": 30},
            {"MaxHorizontalImageSize": 60, "MaxVerticalImageSize": 34}
        ]"#;
        let records = parse_wmi(json);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Monitor 1");
        assert_eq!(records[1].name, "Monitor 2");
        assert_eq!(records[1].physical_width_cm, Some(60.0));
    }

    #[test]
    fn missing_size_fields_stay_none() {
        let records = parse_wmi(r#"{"InstanceName": "DISPLAY\\X"}"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].physical_width_cm, None);
    }

    #[test]
    fn empty_or_invalid_output_yields_zero_records() {
        assert!(parse_wmi("").is_empty());
        assert!(parse_wmi("   ").is_empty());
        assert!(parse_wmi("garbage").is_empty());
        assert!(parse_wmi("42").is_empty());
    }
}
