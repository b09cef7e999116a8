//! Number and date formatting for display.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a number the way the backend's JavaScript clients print it:
/// integral values have no fractional part and `-0` prints as `0`.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_owned() } else { "-Infinity".to_owned() };
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// `format_quantity` followed by a unit, e.g. `"12.5 kg"`.
#[must_use]
pub fn with_unit(value: f64, unit: &str) -> String {
    format!("{} {unit}", format_quantity(value))
}

/// Current calendar year for the footer.
#[must_use]
pub fn current_year() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        i64::from(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        i64::from(time::OffsetDateTime::now_utc().year())
    }
}
