//! Data parsing helpers.
//!
//! Parse identifiers and `Y-M-D` / `Y-DDD` strings.  Years may carry a
//! leading minus sign.

/// Normalise an identifier for case-insensitive lookup: trim, lowercase, and
/// map `_` and spaces to `-`.
pub fn normalize_identifier(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Split a string of the form `[-]Y-rest` into the signed year and the rest.
fn split_year(s: &str) -> Option<(i32, &str)> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (year, rest) = body.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    Some((if negative { -year } else { year }, rest))
}

/// Parse a date string in `[-]YYYY-MM-DD` format.
///
/// Returns `(year, month, day)` on success; the values are not validated.
pub fn parse_date_parts(s: &str) -> Option<(i32, i32, i32)> {
    let (year, rest) = split_year(s)?;
    let (month, day) = rest.split_once('-')?;
    Some((year, month.parse().ok()?, day.parse().ok()?))
}

/// Parse an ordinal date string in `[-]YYYY-DDD` format.
///
/// Returns `(year, day_of_year)` on success; the values are not validated.
pub fn parse_ordinal_parts(s: &str) -> Option<(i32, i32)> {
    let (year, rest) = split_year(s)?;
    if rest.contains('-') {
        return None;
    }
    Some((year, rest.parse().ok()?))
}
