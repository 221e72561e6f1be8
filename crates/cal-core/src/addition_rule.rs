//! Ambiguity-resolution policy for calendrical additions.

use crate::errors::{Error, Result};
use crate::utilities::data_parsers::normalize_identifier;

/// How to resolve an addition of years or months that lands on a day that
/// does not exist in the target month (e.g. 29 February + 1 year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdditionRule {
    /// Clamp to the last valid day of the target month.
    #[default]
    Truncate,
    /// Snap to the first day of the month following the target month.
    Overspill,
    /// Advance past the end of the target month by the excess number of days.
    Exact,
    /// Treat the ambiguity as an overflow failure.
    Overflow,
}

impl AdditionRule {
    /// All rules, in declaration order.
    pub const ALL: [AdditionRule; 4] = [
        AdditionRule::Truncate,
        AdditionRule::Overspill,
        AdditionRule::Exact,
        AdditionRule::Overflow,
    ];

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            AdditionRule::Truncate => "truncate",
            AdditionRule::Overspill => "overspill",
            AdditionRule::Exact => "exact",
            AdditionRule::Overflow => "overflow",
        }
    }
}

impl std::fmt::Display for AdditionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AdditionRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_identifier(s);
        AdditionRule::ALL
            .into_iter()
            .find(|rule| rule.name() == key)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown addition rule: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_truncate() {
        assert_eq!(AdditionRule::default(), AdditionRule::Truncate);
    }

    #[test]
    fn parse() {
        assert_eq!("Overspill".parse::<AdditionRule>(), Ok(AdditionRule::Overspill));
        assert_eq!(" EXACT ".parse::<AdditionRule>(), Ok(AdditionRule::Exact));
        assert!("clamp".parse::<AdditionRule>().is_err());
        for rule in AdditionRule::ALL {
            assert_eq!(rule.to_string().parse::<AdditionRule>(), Ok(rule));
        }
    }
}
