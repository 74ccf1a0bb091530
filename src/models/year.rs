//! Era-suffixed year strings
//!
//! Philosopher records carry their years as free-form strings such as
//! `"428 BC"` or `"1724 AD"`. This module turns them into signed integers
//! (BC negated, no year-zero adjustment) and back into display labels.

/// Era marker looked for in raw year strings (case-sensitive)
const BC_MARKER: &str = "BC";

/// Largest readable year magnitude; anything beyond is treated as unknown
pub const MAX_YEAR_MAGNITUDE: i64 = 1_000_000_000;

/// Parse a year string into a signed year, using `0` for anything unknown.
///
/// Absent, empty and digitless input all collapse to `0`, which makes
/// "unknown" indistinguishable from year zero. Use [`try_parse_year`] when
/// the difference matters.
pub fn parse_year(raw: Option<&str>) -> i64 {
    try_parse_year(raw).unwrap_or(0)
}

/// Parse a year string into a signed year, or `None` when no year can be read.
///
/// Every character other than an ASCII digit or `-` is discarded, then a
/// leading integer is read (an optional `-` followed by digits, stopping at
/// the first non-digit). The result is negated when the raw string
/// contains `"BC"`.
pub fn try_parse_year(raw: Option<&str>) -> Option<i64> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let magnitude = leading_integer(&strip_non_numeric(raw))?;

    if raw.contains(BC_MARKER) {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// Format a raw year string for display: `"0428 BC"` becomes `"428 BC"`,
/// `"1724"` becomes `"1724 AD"`.
///
/// Returns an empty string when the input has no readable year.
pub fn format_year(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    match leading_integer(&strip_non_numeric(raw)) {
        Some(year) => format!("{} {}", year, era_label(raw.contains(BC_MARKER))),
        None => String::new(),
    }
}

/// Format an already-signed year, e.g. `-650` as `"650 BC"`
pub fn format_signed_year(year: i64) -> String {
    format!("{} {}", year.unsigned_abs(), era_label(year < 0))
}

fn era_label(is_bc: bool) -> &'static str {
    if is_bc {
        "BC"
    } else {
        "AD"
    }
}

fn strip_non_numeric(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Read an optionally negative integer prefix, `parseInt` style.
/// Magnitudes above [`MAX_YEAR_MAGNITUDE`] are treated as unreadable.
fn leading_integer(s: &str) -> Option<i64> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let digits_len = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    if magnitude > MAX_YEAR_MAGNITUDE {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}
