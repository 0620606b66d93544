/// Formats a dollar amount with thousands separators and two decimals,
/// e.g. `1234.5 -> "$1,234.50"`, `-42.0 -> "-$42.00"`.
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

/// Formats a signed dollar delta, e.g. `"+$1,200.00"` / `"-$300.00"`.
pub fn format_money_delta(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_money(value))
    } else {
        format_money(value)
    }
}

/// Formats a percentage with one decimal place, e.g. `10.11 -> "10.1%"`.
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats a signed percentage delta, e.g. `"+10.1%"` / `"-3.2%"`.
pub fn format_pct_delta(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(5.0), "$5.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(-42.0), "-$42.00");
        assert_eq!(format_money(-0.004), "$0.00");
    }

    #[test]
    fn test_format_money_delta_sign() {
        assert_eq!(format_money_delta(5114.0), "+$5,114.00");
        assert_eq!(format_money_delta(-300.0), "-$300.00");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(10.11), "10.1%");
        assert_eq!(format_pct_delta(-3.24), "-3.2%");
        assert_eq!(format_pct_delta(0.0), "+0.0%");
    }
}
