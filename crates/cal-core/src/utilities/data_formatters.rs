//! Plain numeric rendering helpers.
//!
//! Only numeric rendering is provided: ordinal suffixes for `Ord` and
//! zero-padded year/month/day triples.  No localisation.

/// Return the English ordinal suffix for `n` (e.g. `1` → `"st"`, `2` → `"nd"`).
pub fn ordinal_suffix(n: u64) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Format a signed rank with its ordinal suffix (e.g. `22` → `"22nd"`,
/// `-1` → `"-1st"`).
pub fn format_ordinal(n: i64) -> String {
    format!("{n}{}", ordinal_suffix(n.unsigned_abs()))
}

/// Format a year, zero-padded to four digits, keeping the sign of
/// proleptic years (`-44` → `"-0044"`).
pub fn format_year(year: i64) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}

/// Format `(year, month, day)` as `YYYY-MM-DD`.
pub fn format_date_parts(year: i64, month: i64, day: i64) -> String {
    format!("{}-{month:02}-{day:02}", format_year(year))
}

/// Format `(year, day_of_year)` as `YYYY-DDD`.
pub fn format_ordinal_parts(year: i64, day_of_year: i64) -> String {
    format!("{}-{day_of_year:03}", format_year(year))
}
