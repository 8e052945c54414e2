//! Human-readable unit formatting
//!
//! All tools report byte counts as decimal GB strings (division by 1024^3),
//! ratios as single-decimal percentages, and durations in `Xd Yh Zm` form.

/// Bytes per gibibyte (1024^3).
pub const GIB: f64 = 1_073_741_824.0;

/// Placeholder for metrics the host cannot provide.
pub const UNAVAILABLE: &str = "Not available";

/// Format a byte count as a GB string with two decimal places.
pub fn gigabytes(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / GIB)
}

/// Format `used / total` as a percentage string with one decimal place.
///
/// A zero total yields `"0.0%"` rather than NaN.
pub fn percent(used: u64, total: u64) -> String {
    if total == 0 {
        "0.0%".to_string()
    } else {
        percent_value(used as f64 / total as f64 * 100.0)
    }
}

/// Format an already-computed percentage with one decimal place.
pub fn percent_value(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format an uptime in seconds as `"<days>d <hours>h <minutes>m"`.
pub fn uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    format!("{days}d {hours}h {minutes}m")
}

/// Short uptime form, `"<days>d <hours>h"`, used by quick stats.
pub fn uptime_short(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    format!("{days}d {hours}h")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gigabytes_two_decimals() {
        assert_eq!(gigabytes(GIB as u64), "1.00 GB");
        assert_eq!(gigabytes(16 * GIB as u64), "16.00 GB");
        assert_eq!(gigabytes(0), "0.00 GB");
    }

    #[test]
    fn gigabytes_round_trips_within_precision() {
        // Formatting then parsing back and re-multiplying by 1024^3 must
        // recover the original value within the two-decimal precision.
        for &bytes in &[1_234_567_890u64, 987_654_321_000, 42, 512 * GIB as u64] {
            let formatted = gigabytes(bytes);
            let parsed: f64 = formatted
                .strip_suffix(" GB")
                .expect("GB suffix")
                .parse()
                .expect("numeric prefix");
            let recovered = parsed * GIB;
            // Half a hundredth of a GB is the max rounding error.
            assert!(
                (recovered - bytes as f64).abs() <= 0.005 * GIB,
                "{bytes} -> {formatted} -> {recovered}"
            );
        }
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(percent(10, 0), "0.0%");
        assert_eq!(percent(1, 2), "50.0%");
        assert_eq!(percent_value(12.34), "12.3%");
    }

    #[test]
    fn uptime_forms() {
        // 2 days, 3 hours, 4 minutes, 5 seconds
        let secs = 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5;
        assert_eq!(uptime(secs), "2d 3h 4m");
        assert_eq!(uptime_short(secs), "2d 3h");
        assert_eq!(uptime(59), "0d 0h 0m");
    }
}
