use crate::error::ModelError;
use std::str::FromStr;
use uuid::Uuid;

/// Strongly typed ID for catalog listings
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ListingID(pub Uuid);

impl Default for ListingID {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingID {
    pub fn new() -> Self {
        ListingID(Uuid::now_v7())
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ListingID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ListingID {
    fn from(value: Uuid) -> Self {
        ListingID(value)
    }
}

impl FromStr for ListingID {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(ListingID)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for ListingID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for organizations (providers and consumers)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrganizationID(pub Uuid);

impl Default for OrganizationID {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizationID {
    pub fn new() -> Self {
        OrganizationID(Uuid::now_v7())
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for OrganizationID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for OrganizationID {
    fn from(value: Uuid) -> Self {
        OrganizationID(value)
    }
}

impl FromStr for OrganizationID {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(OrganizationID)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for OrganizationID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for the descriptive product record a listing sells
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProductID(pub Uuid);

impl Default for ProductID {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductID {
    pub fn new() -> Self {
        ProductID(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ProductID {
    fn from(value: Uuid) -> Self {
        ProductID(value)
    }
}

impl std::fmt::Display for ProductID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
