//! Path identifier parsing.
//!
//! Identifiers arrive as raw path segments. Parsing takes the leading
//! integer portion of the segment: leading whitespace is skipped, an
//! optional sign is honored, and anything after the digits (including a
//! decimal fraction) is truncated rather than rejected. A segment with no
//! leading digits is an `InvalidId`.

/// The path segment does not begin with an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidId;

/// Parse the leading integer out of a path segment.
pub fn parse_id(raw: &str) -> Result<i64, InvalidId> {
    let trimmed = raw.trim_start();

    let (negative, digits_onward) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digit_count = digits_onward
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_count == 0 {
        return Err(InvalidId);
    }

    let magnitude: i64 = digits_onward[..digit_count].parse().map_err(|_| InvalidId)?;

    Ok(if negative { -magnitude } else { magnitude })
}
