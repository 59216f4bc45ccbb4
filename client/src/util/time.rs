//! Timestamp display.
//!
//! In the browser this defers to `Date.prototype.toLocaleString()` with no
//! arguments, so the runtime's default `Intl` locale applies. Off-browser
//! (SSR, tests) the en-US rendering is produced in UTC so server HTML stays
//! deterministic.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(not(feature = "hydrate"))]
use time::format_description::well_known::Rfc3339;
#[cfg(not(feature = "hydrate"))]
use time::macros::format_description;
#[cfg(not(feature = "hydrate"))]
use time::{OffsetDateTime, PrimitiveDateTime};

/// Matches what browsers print for unparseable input.
pub const INVALID_DATE: &str = "Invalid Date";

/// Render an ISO-8601 timestamp for tables. Missing or empty input renders
/// as an empty string.
pub fn format_time(value: Option<&str>) -> String {
    match value {
        None | Some("") => String::new(),
        Some(raw) => locale_string(raw),
    }
}

#[cfg(feature = "hydrate")]
fn locale_string(raw: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return INVALID_DATE.to_owned();
    }
    // js-sys only binds the `(locale, options)` overload; call the zero-arg form.
    js_sys::Reflect::get(&date, &wasm_bindgen::JsValue::from_str("toLocaleString"))
        .ok()
        .and_then(|method| method.dyn_into::<js_sys::Function>().ok())
        .and_then(|method| method.call0(&date).ok())
        .and_then(|rendered| rendered.as_string())
        .unwrap_or_else(|| INVALID_DATE.to_owned())
}

#[cfg(not(feature = "hydrate"))]
fn locale_string(raw: &str) -> String {
    let Some(parsed) = parse_timestamp(raw) else {
        return INVALID_DATE.to_owned();
    };
    let layout = format_description!(
        "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
    );
    parsed.format(&layout).unwrap_or_else(|_| INVALID_DATE.to_owned())
}

/// Accept RFC 3339 with an offset, or a bare local timestamp read as UTC.
#[cfg(not(feature = "hydrate"))]
fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed.to_offset(time::UtcOffset::UTC));
    }
    let local = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(raw, &local).ok().map(PrimitiveDateTime::assume_utc)
}
