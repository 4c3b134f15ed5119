/// Currency helpers for listing prices.
///
/// All monetary values are whole Saudi riyals (the marketing site never
/// shows halalas), so formatting is grouping digits plus the SAR prefix.

/// Format an amount as e.g. "SAR 1,250,000".
pub fn format_sar(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("SAR -{}", grouped)
    } else {
        format!("SAR {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sar() {
        assert_eq!(format_sar(0), "SAR 0");
        assert_eq!(format_sar(950), "SAR 950");
        assert_eq!(format_sar(50_000), "SAR 50,000");
        assert_eq!(format_sar(4_800_000), "SAR 4,800,000");
        assert_eq!(format_sar(1_234_567_890), "SAR 1,234,567,890");
    }

    #[test]
    fn test_format_sar_negative() {
        assert_eq!(format_sar(-50_000), "SAR -50,000");
    }
}
