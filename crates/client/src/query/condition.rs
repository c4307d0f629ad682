//! Filter condition vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operators usable in filter expressions.
///
/// The tokens are passed verbatim in the wire query; the client performs no
/// semantic interpretation of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Field is equal to the value.
    Is,
    /// Field is not equal to the value.
    Not,
    /// Field contains the value.
    Contains,
    /// Field exists.
    Exists,
    /// Field does not exist.
    DoesntExist,
    /// Field does not contain the value.
    DoesntContain,
    /// Field value is in the provided list.
    In,
    /// Field value is not in the provided list.
    NotIn,
    /// Field value starts with the provided string.
    StartsWith,
    /// Field value ends with the provided string.
    EndsWith,
    /// Field value does not start with the provided string.
    DoesntStartWith,
    /// Field value does not end with the provided string.
    DoesntEndWith,
    /// Field value is less than the provided value.
    Lt,
    /// Field value is greater than the provided value.
    Gt,
    /// Field value is less than or equal to the provided value.
    Lte,
    /// Field value is greater than or equal to the provided value.
    Gte,
    /// Field value matches the provided regular expression.
    Matches,
    /// Field value does not match the provided regular expression.
    DoesntMatch,
    /// Field value is alphabetic.
    IsAlpha,
    /// Field value is numeric.
    IsNumeric,
    /// Field value is alphanumeric.
    IsAlphaNumeric,
    /// Field value is a URL.
    IsUrl,
    /// Field value is an email address.
    IsEmail,
    /// Field value is after the provided date.
    IsAfter,
    /// Field value is before the provided date.
    IsBefore,
    /// Field value is number-wang.
    IsNumberwang,
}

impl Condition {
    /// The wire token for this condition.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::Not => "not",
            Self::Contains => "contains",
            Self::Exists => "exists",
            Self::DoesntExist => "doesnt_exist",
            Self::DoesntContain => "doesnt_contain",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::DoesntStartWith => "doesnt_start_with",
            Self::DoesntEndWith => "doesnt_end_with",
            Self::Lt => "lt",
            Self::Gt => "gt",
            Self::Lte => "lte",
            Self::Gte => "gte",
            Self::Matches => "matches",
            Self::DoesntMatch => "doesnt_match",
            Self::IsAlpha => "is_alpha",
            Self::IsNumeric => "is_numeric",
            Self::IsAlphaNumeric => "is_alpha_numeric",
            Self::IsUrl => "is_url",
            Self::IsEmail => "is_email",
            Self::IsAfter => "is_after",
            Self::IsBefore => "is_before",
            Self::IsNumberwang => "is_numberwang",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tokens_are_snake_case() {
        assert_eq!(Condition::Is.as_str(), "is");
        assert_eq!(Condition::DoesntStartWith.as_str(), "doesnt_start_with");
        assert_eq!(Condition::IsAlphaNumeric.as_str(), "is_alpha_numeric");
    }

    #[test]
    fn serde_rendering_matches_as_str() {
        for condition in [
            Condition::Is,
            Condition::DoesntExist,
            Condition::NotIn,
            Condition::Lte,
            Condition::IsNumberwang,
        ] {
            let json = serde_json::to_string(&condition).unwrap();
            assert_eq!(json, format!("\"{}\"", condition.as_str()));

            let parsed: Condition = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, condition);
        }
    }
}
