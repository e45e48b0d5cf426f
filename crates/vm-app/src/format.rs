//! Number formatting for report lines and chart labels.

/// Round to an integer and group thousands with commas, e.g. `45,255`.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let rounded = format!("{:.0}", value.abs());
    let negative = value < 0.0 && rounded.bytes().any(|b| b != b'0');

    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let lead = rounded.len() % 3;
    for (i, ch) in rounded.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed two decimals, used for acre-ft and chart data labels.
pub fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Percentage with one decimal from a fraction, e.g. `0.25 -> "25.0%"`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
