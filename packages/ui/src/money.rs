//! Fixed `£1,234.56` money formatting.

use api::Decimal;

/// Format an amount as pounds with thousands separators and two decimals.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}£{}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(12345, 1)), "£1,234.50");
        assert_eq!(format_money(Decimal::new(100, 0)), "£100.00");
        assert_eq!(format_money(Decimal::ZERO), "£0.00");
        assert_eq!(format_money(Decimal::new(1234567891, 3)), "£1,234,567.89");
    }

    #[test]
    fn test_format_negative_money() {
        assert_eq!(format_money(Decimal::new(-12, 0)), "-£12.00");
        assert_eq!(format_money(Decimal::new(-1, 3)), "£0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
