use chrono::NaiveDate;

use crate::core::defaults::DATA_INVALIDA;

/// Normalize a raw `dVal` expiry string for display.
///
/// The text is split on `-`:
/// - three parts, all numeric — reordered and rendered as `D/M/Y` without
///   zero padding (`"2024-05-15"` → `"15/5/2024"`); non-numeric parts are
///   reordered verbatim;
/// - two parts — interpreted as year-month and completed with the last
///   calendar day of that month (`"2024-02"` → `"29/2/2024"`), or
///   [`DATA_INVALIDA`] when the parts don't name a real month;
/// - anything else passes through unchanged, including the no-expiry
///   placeholder.
pub fn normalize_expiry(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => {
            match (
                day.parse::<u32>(),
                month.parse::<u32>(),
                year.parse::<i64>(),
            ) {
                (Ok(d), Ok(m), Ok(y)) => format!("{d}/{m}/{y}"),
                _ => format!("{day}/{month}/{year}"),
            }
        }
        [year, month] => {
            match (year.trim().parse::<i32>(), month.trim().parse::<u32>()) {
                (Ok(y), Ok(m)) => match last_day_of_month(y, m) {
                    Some(day) => format!("{day}/{m}/{y}"),
                    None => DATA_INVALIDA.to_string(),
                },
                _ => DATA_INVALIDA.to_string(),
            }
        }
        _ => raw.to_string(),
    }
}

/// Number of days in the given month, leap years included. `None` when the
/// month is outside `1..=12` or the year is outside the calendar range.
fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_dates_reorder_unpadded() {
        assert_eq!(normalize_expiry("2024-05-15"), "15/5/2024");
        assert_eq!(normalize_expiry("2025-01-15"), "15/1/2025");
        assert_eq!(normalize_expiry("2025-12-31"), "31/12/2025");
    }

    #[test]
    fn full_date_with_junk_parts_reorders_verbatim() {
        assert_eq!(normalize_expiry("aa-bb-cc"), "cc/bb/aa");
    }

    #[test]
    fn year_month_completes_to_last_day() {
        assert_eq!(normalize_expiry("2024-02"), "29/2/2024");
        assert_eq!(normalize_expiry("2023-02"), "28/2/2023");
        assert_eq!(normalize_expiry("2025-01"), "31/1/2025");
        assert_eq!(normalize_expiry("2025-04"), "30/4/2025");
        assert_eq!(normalize_expiry("2000-02"), "29/2/2000");
        assert_eq!(normalize_expiry("1900-02"), "28/2/1900");
    }

    #[test]
    fn year_month_out_of_range_is_invalid() {
        assert_eq!(normalize_expiry("2024-13"), "Data Inválida");
        assert_eq!(normalize_expiry("2024-00"), "Data Inválida");
        assert_eq!(normalize_expiry("abcd-02"), "Data Inválida");
        assert_eq!(normalize_expiry("2024-xy"), "Data Inválida");
    }

    #[test]
    fn other_shapes_pass_through() {
        assert_eq!(normalize_expiry("Sem Validade"), "Sem Validade");
        assert_eq!(normalize_expiry("not-a-date-at-all"), "not-a-date-at-all");
        assert_eq!(normalize_expiry(""), "");
        assert_eq!(normalize_expiry("15/05/2024"), "15/05/2024");
    }

    #[test]
    fn last_day_of_month_table() {
        assert_eq!(last_day_of_month(2024, 2), Some(29));
        assert_eq!(last_day_of_month(2100, 2), Some(28));
        assert_eq!(last_day_of_month(2024, 12), Some(31));
        assert_eq!(last_day_of_month(2024, 6), Some(30));
        assert_eq!(last_day_of_month(2024, 13), None);
        assert_eq!(last_day_of_month(2024, 0), None);
    }
}
