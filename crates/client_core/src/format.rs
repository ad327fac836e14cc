//! Fixed-decimal formatting for report figures.
//!
//! Values are rounded to the nearest representable decimal; a value that
//! sits exactly on a tie in binary rounds away from zero (`2.5 -> "3"`).

/// Extra digits inspected when checking for an exact tie. Any f64 that is
/// not a tie differs from it well within this many decimals.
const TIE_PROBE_DIGITS: usize = 40;

pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Normalise -0.0 so it never prints a sign.
    let value = if value == 0.0 { 0.0 } else { value };

    if !is_exact_tie(value, digits) {
        return format!("{value:.digits$}");
    }

    let exact = format!("{:.*}", digits + 1, value.abs());
    let mut rounded = round_up_last_digit(&exact[..exact.len() - 1]);
    if value.is_sign_negative() {
        rounded.insert(0, '-');
    }
    rounded
}

pub fn percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 2))
}

pub fn whole(value: f64) -> String {
    to_fixed(value, 0)
}

pub fn currency(value: f64, digits: usize) -> String {
    format!("${}", to_fixed(value, digits))
}

fn is_exact_tie(value: f64, digits: usize) -> bool {
    let probe = format!("{:.*}", digits + TIE_PROBE_DIGITS, value.abs());
    let Some((_, fraction)) = probe.split_once('.') else {
        return false;
    };
    let tail = &fraction[digits..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}

/// Adds one unit in the last place of a non-negative decimal string such as
/// `"2."`, `"0.12"` or `"9.99"`.
fn round_up_last_digit(truncated: &str) -> String {
    let mut digits: Vec<u8> = truncated.trim_end_matches('.').bytes().collect();
    let mut carry = true;
    for byte in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            other => {
                *byte = other + 1;
                carry = false;
            }
        }
    }
    if carry {
        digits.insert(0, b'1');
    }
    String::from_utf8(digits).unwrap_or_default()
}
