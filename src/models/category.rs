use std::str::FromStr;

use super::ValidationError;

/// The closed set of spending categories. Declaration order is the catalog
/// order used to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Category {
    Food,
    Rent,
    Utilities,
    Travel,
    Entertainment,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Travel => "Travel",
            Self::Entertainment => "Entertainment",
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Rent,
            Self::Utilities,
            Self::Travel,
            Self::Entertainment,
        ]
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "rent" => Ok(Self::Rent),
            "utilities" => Ok(Self::Utilities),
            "travel" => Ok(Self::Travel),
            "entertainment" => Ok(Self::Entertainment),
            _ => Err(ValidationError::InvalidCategory(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
