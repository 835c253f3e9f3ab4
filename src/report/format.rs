//! Number formatting shared by the report renderers.

/// Formats `number` as dollars with thousands separators and two decimal
/// places, e.g. "$1,234.50" or "-$12.30".
///
/// The value is rounded to the nearest cent first, so anything that rounds to
/// zero, including float residue like `5.55e-17` and `-0.0`, is "$0.00".
pub fn format_currency(number: f64) -> String {
    let rounded = round_to_cents(number);

    if rounded == 0.0 {
        return "$0.00".to_owned();
    }

    let digits = group_thousands(&format!("{:.2}", rounded.abs()));

    if rounded < 0.0 {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// Rounds half away from zero to two decimal places.
pub(crate) fn round_to_cents(number: f64) -> f64 {
    (number * 100.0).round() / 100.0
}

/// Inserts a comma between every three digits of the whole part of a plain
/// decimal string such as "1234567.89".
fn group_thousands(digits: &str) -> String {
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let mut grouped = String::with_capacity(digits.len() + whole.len() / 3);

    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

/// Formats `number` like [format_currency] without the dollar sign, the
/// `#,##0.00` spreadsheet number format.
pub fn format_amount(number: f64) -> String {
    format_currency(number).replacen('$', "", 1)
}
