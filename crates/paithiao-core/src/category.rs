//! Place categories and their remote table names.

use std::str::FromStr;

use thiserror::Error;

/// One directory category per remote table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tourist,
    Restaurant,
    Cafe,
    Temple,
    Event,
}

#[derive(Debug, Error)]
#[error("unknown category: {0} (expected tourist, restaurant, cafe, temple, or event)")]
pub struct UnknownCategory(String);

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Tourist,
        Category::Restaurant,
        Category::Cafe,
        Category::Temple,
        Category::Event,
    ];

    /// Logical table name in the remote store.
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Category::Tourist => "recom_tourist",
            Category::Restaurant => "recom_restaurant",
            Category::Cafe => "recom_cafe",
            Category::Temple => "recom_temple",
            Category::Event => "recom_event",
        }
    }

    /// Heading shown above the category's list screen.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Tourist => "Tourist spots",
            Category::Restaurant => "Restaurants",
            Category::Cafe => "Cafes",
            Category::Temple => "Temples",
            Category::Event => "Events",
        }
    }

    /// Field the list screens sort by. Every category lists by name,
    /// ascending.
    #[must_use]
    pub fn order_field(self) -> &'static str {
        "name"
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Tourist => "tourist",
            Category::Restaurant => "restaurant",
            Category::Cafe => "cafe",
            Category::Temple => "temple",
            Category::Event => "event",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tourist" => Ok(Category::Tourist),
            "restaurant" => Ok(Category::Restaurant),
            "cafe" => Ok(Category::Cafe),
            "temple" => Ok(Category::Temple),
            "event" => Ok(Category::Event),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_match_remote_store() {
        assert_eq!(Category::Tourist.table(), "recom_tourist");
        assert_eq!(Category::Temple.table(), "recom_temple");
        assert_eq!(Category::Event.table(), "recom_event");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Cafe".parse::<Category>().unwrap(), Category::Cafe);
        assert_eq!(" temple ".parse::<Category>().unwrap(), Category::Temple);
    }

    #[test]
    fn rejects_unknown_category() {
        assert!("museum".parse::<Category>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for cat in Category::ALL {
            assert_eq!(cat.to_string().parse::<Category>().unwrap(), cat);
        }
    }
}
