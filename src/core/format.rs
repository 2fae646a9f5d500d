//! Monetary amount formatting in the Dutch convention.
//!
//! Period as thousands separator, comma as decimal separator — fixed, not
//! parameterized by document language.

use rust_decimal::Decimal;

/// Format an amount for display.
///
/// - `None` renders as zero: `"0,00"`.
/// - Trailing-zero fractions are stripped before the rules apply, so
///   `1200.00` and `1200` both render `"1.200,00"`.
/// - A single fraction digit is padded to two: `1200.5` → `"1.200,50"`.
/// - Two or more fraction digits pass through verbatim — never rounded or
///   truncated: `10.123` → `"10,123"`. This asymmetry is a literal contract
///   carried over from the historical output; downstream documents depend
///   on it.
///
/// No currency symbol is added; symbol placement is the caller's concern.
pub fn format_amount(amount: Option<Decimal>) -> String {
    let value = amount.unwrap_or(Decimal::ZERO).normalize();
    let text = value.to_string();
    let (int_part, fraction) = match text.split_once('.') {
        Some((int_part, frac)) => (int_part, frac),
        None => (text.as_str(), ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(text.len() + 4);
    out.push_str(sign);
    push_grouped(&mut out, digits);
    out.push(',');
    match fraction.len() {
        0 => out.push_str("00"),
        1 => {
            out.push_str(fraction);
            out.push('0');
        }
        _ => out.push_str(fraction),
    }
    out
}

/// Append `digits` with a `.` every three digits from the right.
fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
}
