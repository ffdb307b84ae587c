/// Format an output figure with thousands separators (e.g. "125,000")
pub fn format_thousands(value: f64) -> String {
    let whole = value.abs().round() as i64;

    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let formatted: String = result.chars().rev().collect();

    if value < 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format an output figure in compact form (e.g. "545K", "2.1M")
pub fn format_compact(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}{:.0}", sign, abs_value)
    }
}

/// Format a multiplier or linkage ratio (e.g. "1.60")
pub fn format_ratio(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format an impact percentage (e.g. "28.3%")
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a signed shock magnitude (e.g. "+10%", "-5%")
pub fn format_signed_percent(value: i32) -> String {
    format!("{:+}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(125_000.0), "125,000");
        assert_eq!(format_thousands(545.0), "545");
        assert_eq!(format_thousands(-1_234_567.0), "-1,234,567");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(545_000.0), "545K");
        assert_eq!(format_compact(2_100_000.0), "2.1M");
        assert_eq!(format_compact(42.0), "42");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(10), "+10%");
        assert_eq!(format_signed_percent(-50), "-50%");
        assert_eq!(format_signed_percent(0), "+0%");
    }
}
