//! Number formatting for stat cards and tables.

/// Thousands separator with commas: `12450` -> `"12,450"`.
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Compact display for large counts: `1_234_567` -> `"1.2M"`, `24_567` ->
/// `"24.6K"`, small values keep the full form.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format_thousands(value.round() as i64)
    }
}

/// Dollar amount with thousands separators, no cents.
pub fn format_currency(amount: u32) -> String {
    format!("${}", format_thousands(amount as i64))
}

/// Percent with two decimals, e.g. `5.02` -> `"5.02%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12_450), "12,450");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-5_200), "-5,200");
    }

    #[test]
    fn compact_scales_by_magnitude() {
        assert_eq!(format_compact(87.0), "87");
        assert_eq!(format_compact(1_234.0), "1,234");
        assert_eq!(format_compact(24_567.0), "24.6K");
        assert_eq!(format_compact(1_200_000.0), "1.2M");
    }

    #[test]
    fn currency_and_percent() {
        assert_eq!(format_currency(36_300), "$36,300");
        assert_eq!(format_percent(5.02), "5.02%");
    }
}
