//! Number text codec
//!
//! Operands travel as text typed on a keypad, so every numeric step goes
//! through the same three conversions a browser calculator relies on:
//! lenient prefix parsing (`parseFloat`), shortest decimal rendering
//! (`Number#toString()`), and radix-2 rendering (`Number#toString(2)`).

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// literal `Infinity` is recognized. Trailing garbage is ignored, so
/// `"12abc"` parses as `12`. Returns `None` when no numeric prefix exists
/// or the prefix denotes NaN.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(is_js_whitespace);
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if trimmed[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Renders `value` the way `Number#toString()` does.
///
/// Shortest round-trip digits, plain notation for magnitudes in
/// `[1e-6, 1e21)`, exponent notation with an explicit sign otherwise.
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 renders as "0"
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Renders `value` in base 2 the way `Number#toString(2)` does.
///
/// The integer part is exact. The fraction is expanded digit by digit
/// until the remaining error is below half an ulp of `value`, rounding the
/// last digit to nearest-even.
#[must_use]
pub fn to_binary_string(value: f64) -> String {
    const RADIX: f64 = 2.0;

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let negative = value < 0.0;
    let value = value.abs();
    let mut integer = value.floor();
    let mut fraction = value - integer;

    let mut delta = 0.5 * (next_up(value) - value);
    delta = delta.max(next_up(0.0));

    let mut fraction_digits: Vec<u8> = Vec::new();
    if fraction >= delta {
        loop {
            fraction *= RADIX;
            delta *= RADIX;
            let digit = fraction as u8;
            fraction_digits.push(digit);
            fraction -= f64::from(digit);

            if (fraction > 0.5 || (fraction == 0.5 && digit & 1 == 1)) && fraction + delta > 1.0 {
                round_up(&mut fraction_digits, &mut integer);
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    let mut integer_digits: Vec<u8> = Vec::new();
    loop {
        let remainder = integer % RADIX;
        integer_digits.push(remainder as u8);
        integer = (integer - remainder) / RADIX;
        if integer <= 0.0 {
            break;
        }
    }

    let mut out = String::with_capacity(integer_digits.len() + fraction_digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(integer_digits.iter().rev().map(|d| char::from(b'0' + d)));
    if !fraction_digits.is_empty() {
        out.push('.');
        out.extend(fraction_digits.iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Propagates a round-up carry through the binary fraction digits.
fn round_up(fraction_digits: &mut Vec<u8>, integer: &mut f64) {
    while let Some(last) = fraction_digits.pop() {
        if last == 0 {
            fraction_digits.push(1);
            return;
        }
    }
    *integer += 1.0;
}

fn next_up(value: f64) -> f64 {
    // only called with finite, non-negative values
    f64::from_bits(value.to_bits() + 1)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
