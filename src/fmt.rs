/// Format the number with the Indian digit grouping (`12,34,567.8`).
///
/// Non-finite values are rendered as an em dash.
#[must_use]
pub fn format_indian(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return String::from("—");
    }
    let absolute = format!("{:.*}", fraction_digits, value.abs());
    let (integer, fraction) = match absolute.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (absolute.as_str(), None),
    };

    let mut formatted = String::with_capacity(absolute.len() + integer.len() / 2 + 1);
    if value < 0.0 && absolute.bytes().any(|byte| matches!(byte, b'1'..=b'9')) {
        formatted.push('-');
    }
    formatted.push_str(&group_indian(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

/// The last three digits form a group, the rest are grouped by two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (index, digit) in head.chars().enumerate() {
        if index != 0 && (head.len() - index) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}
