//! CSS length validation for the panel width.
//!
//! A broken panel is better than a crashed page, so malformed widths
//! are never an error: they degrade to [`DEFAULT_WIDTH`] with a
//! warning.

/// Width applied when the caller supplies none, or a malformed one.
pub const DEFAULT_WIDTH: &str = "300px";

/// Units accepted in a width expression. `rem` is listed before `em`
/// so the suffix match picks the longer unit first.
const UNITS: &[&str] = &["rem", "em", "px", "pt", "ch", "vw", "vh", "%"];

/// Whether `value` is a well-formed CSS length: a non-negative finite
/// number followed by a recognized unit or `%`.
#[must_use]
pub(crate) fn is_valid_width(value: &str) -> bool {
    let value = value.trim();
    let Some(unit) = UNITS.iter().find(|u| value.ends_with(**u)) else {
        return false;
    };
    let number = &value[..value.len() - unit.len()];
    !number.is_empty()
        && number
            .parse::<f64>()
            .is_ok_and(|n| n.is_finite() && n >= 0.0)
}

/// Return `value` if well-formed, otherwise warn and fall back to
/// [`DEFAULT_WIDTH`].
pub(crate) fn sanitize_width(value: &str) -> &str {
    if is_valid_width(value) {
        value.trim()
    } else {
        log::warn!(
            "malformed panel width {value:?}, falling back to \
             {DEFAULT_WIDTH}"
        );
        DEFAULT_WIDTH
    }
}
