use rust_decimal::Decimal;

/// Format a value as Brazilian currency for display — `R$` prefix, period
/// digit grouping, comma decimal separator, always two decimal places.
///
/// `1234.5` becomes `"R$1.234,50"`. The input is rounded to cents first
/// (banker's rounding), the underlying value is not modified.
pub fn format_brl(value: Decimal) -> String {
    let s = format!("{:.2}", value.round_dp(2));
    let (int_part, cents) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("R${sign}{grouped},{cents}")
}
