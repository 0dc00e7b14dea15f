use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// Sentinel category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriceTier {
    #[default]
    All,
    Free,
    Paid,
}

impl PriceTier {
    pub fn all() -> &'static [PriceTier] {
        use PriceTier::*;
        &[All, Free, Paid]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::All => "all",
            PriceTier::Free => "free",
            PriceTier::Paid => "paid",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PriceTier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PriceTier::All),
            "free" => Ok(PriceTier::Free),
            "paid" => Ok(PriceTier::Paid),
            _ => Err(ModelError::UnknownPriceTier(s.to_string())),
        }
    }
}

/// Category picked in the catalog sidebar.
///
/// The UI transports this as a plain string where [`ALL_CATEGORIES`] is the
/// neutral value; anything else is matched exactly against listing categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(value.to_string())
        }
    }
}

impl From<String> for CategorySelection {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(value)
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CategorySelection {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CategorySelection {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CategorySelection::from(raw))
    }
}

/// User-selected predicates narrowing the visible listings.
///
/// View-local and never persisted. All active predicates are conjunctive;
/// `FilterState::default()` is the neutral configuration that keeps every
/// listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterState {
    pub search: String,
    pub category: CategorySelection,
    pub only_sustainable: bool,
    pub only_verified: bool,
    pub price_tier: PriceTier,
}

impl FilterState {
    /// Whether every predicate sits at its neutral value.
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty()
            && self.category.is_all()
            && !self.only_sustainable
            && !self.only_verified
            && self.price_tier == PriceTier::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_maps_to_neutral_category() {
        assert_eq!(CategorySelection::from("all"), CategorySelection::All);
        assert_eq!(
            CategorySelection::from("All"),
            CategorySelection::Named("All".to_string())
        );
    }

    #[test]
    fn price_tier_parses_case_insensitively() {
        assert_eq!("FREE".parse::<PriceTier>().unwrap(), PriceTier::Free);
        assert_eq!(" paid ".parse::<PriceTier>().unwrap(), PriceTier::Paid);
        assert!("cheap".parse::<PriceTier>().is_err());
    }

    #[test]
    fn default_filter_is_neutral() {
        assert!(FilterState::default().is_neutral());

        let narrowed = FilterState {
            only_verified: true,
            ..FilterState::default()
        };
        assert!(!narrowed.is_neutral());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn filter_state_accepts_partial_json() {
        let filter: FilterState =
            serde_json::from_str(r#"{"category":"ESG","price_tier":"free"}"#)
                .unwrap();
        assert_eq!(filter.category, CategorySelection::Named("ESG".into()));
        assert_eq!(filter.price_tier, PriceTier::Free);
        assert!(filter.search.is_empty());
    }
}
