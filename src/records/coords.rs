//! Coordinate normalization.
//!
//! The record store hands back coordinates in whatever form they were
//! captured in: some rows carry signed decimal degrees, others carry
//! degree/minute/second strings with a hemisphere letter and any of
//! several marker glyphs. Everything funnels through
//! [`Coordinate::normalize`], and `None` is the uniform failure signal:
//! callers exclude the record from rendering instead of failing the load.

use crate::records::model::Coordinate;
use once_cell::sync::Lazy;
use regex::Regex;

/// DMS pattern: degrees with a marker, optional minutes and seconds with
/// their markers, then a hemisphere letter. Marker character classes accept
/// the typographic glyphs and their ASCII fallbacks.
static DMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(\d+)[°º']\s*(\d+)?['′]?\s*(\d+)?[″"]?\s*([NSEW])"#)
        .expect("DMS pattern is valid")
});

impl Coordinate {
    /// Converts this value to a signed decimal degree.
    ///
    /// Numeric values pass through unchanged. DMS strings evaluate to
    /// `degrees + minutes/60 + seconds/3600`, negated for the `S` and `W`
    /// hemispheres. Strings that miss the DMS pattern fall back to a plain
    /// float parse; anything else yields `None`.
    pub fn normalize(&self) -> Option<f64> {
        match self {
            Coordinate::Decimal(value) => Some(*value),
            Coordinate::Text(text) => normalize_text(text),
        }
    }
}

/// Normalizes an optional coordinate field; absent fields normalize to
/// `None` like unparseable ones.
pub fn normalize_opt(coordinate: Option<&Coordinate>) -> Option<f64> {
    coordinate.and_then(Coordinate::normalize)
}

fn normalize_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(captures) = DMS_RE.captures(trimmed) else {
        return trimmed.parse::<f64>().ok().filter(|v| v.is_finite());
    };

    let degrees: f64 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: f64 = captures
        .get(2)
        .map_or(Some(0.0), |m| m.as_str().parse().ok())?;
    let seconds: f64 = captures
        .get(3)
        .map_or(Some(0.0), |m| m.as_str().parse().ok())?;

    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;

    let hemisphere = captures.get(4)?.as_str();
    match hemisphere {
        "S" | "s" | "W" | "w" => Some(-decimal),
        _ => Some(decimal),
    }
}
