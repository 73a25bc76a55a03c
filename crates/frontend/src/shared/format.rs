//! Display formatting for product cards and the create form

/// Upper-cases the first character of every space-separated word.
///
/// Only ASCII letters change; the rest of each word is left untouched and
/// runs of spaces are preserved.
///
/// ```ignore
/// assert_eq!(capitalize_words("cheese burger"), "Cheese Burger");
/// ```
pub fn capitalize_words(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(word.len());
                    out.push(first.to_ascii_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minor currency units as a decimal, shortest form: 1050 -> "10.5", 1000 -> "10"
pub fn format_price(minor_units: i64) -> String {
    format!("{}", minor_units as f64 / 100.0)
}

/// Parses a price typed in major units ("10.50") into minor units (1050).
///
/// At most two fractional digits are accepted; signs and separators other
/// than a single `.` are rejected.
pub fn parse_price(text: &str) -> Result<i64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Price is required".to_string());
    }

    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(frac) {
        return Err(format!("Invalid price: {}", text));
    }
    if frac.len() > 2 {
        return Err("Price can have at most two decimal places".to_string());
    }

    let whole: i64 = whole
        .parse()
        .map_err(|_| format!("Invalid price: {}", text))?;
    let cents: i64 = format!("{:0<2}", frac)
        .parse()
        .map_err(|_| format!("Invalid price: {}", text))?;

    whole
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .ok_or_else(|| "Price is too large".to_string())
}
