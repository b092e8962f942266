/// Shortest decimal form of a reading: `35.0` -> `35`, `21.4` -> `21.4`.
pub fn format_reading(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

pub fn format_with_unit(v: f64, unit: &str) -> String {
    if unit.is_empty() {
        format_reading(v)
    } else {
        format!("{} {}", format_reading(v), unit)
    }
}

/// Percentage for inline CSS, e.g. `width: 40%`.
pub fn css_percent(v: f64) -> String {
    format!("{}%", format_reading((v * 100.0).round() / 100.0))
}
