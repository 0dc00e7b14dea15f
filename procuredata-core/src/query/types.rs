use procuredata_model::OrganizationID;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// One row returned by the remote store, keyed by column name.
pub type Record = serde_json::Map<String, Value>;

/// Read request against a single remote collection.
///
/// Mirrors what a managed backend exposes over its REST surface: a
/// collection, a projection, equality/membership predicates and an optional
/// ordering clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteQuery {
    pub collection: String,
    /// Projected fields; empty means every column.
    pub select: Vec<String>,
    pub predicates: Vec<Predicate>,
    pub order: Option<OrderBy>,
}

impl RemoteQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            select: Vec::new(),
            predicates: Vec::new(),
            order: None,
        }
    }

    /// Projection rendered the way PostgREST expects it.
    pub fn select_clause(&self) -> String {
        if self.select.is_empty() {
            "*".to_string()
        } else {
            self.select.join(",")
        }
    }
}

/// Row predicate. All predicates of a query are conjunctive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    Eq { field: String, value: Value },
    In { field: String, values: Vec<Value> },
}

impl Predicate {
    pub fn field(&self) -> &str {
        match self {
            Predicate::Eq { field, .. } | Predicate::In { field, .. } => field,
        }
    }

    /// Evaluate against an in-memory record. A missing column never matches.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Eq { field, value } => record
                .get(field)
                .is_some_and(|candidate| values_equal(candidate, value)),
            Predicate::In { field, values } => record.get(field).is_some_and(
                |candidate| values.iter().any(|v| values_equal(candidate, v)),
            ),
        }
    }
}

// Remote stores compare on the textual form, so "42" and 42 are the same key.
fn values_equal(left: &Value, right: &Value) -> bool {
    left == right || render_value(left) == render_value(right)
}

/// Textual form of a predicate operand as it appears in a query string.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Ordering clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub order: SortOrder,
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_postgrest(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Which listings a view asks for.
///
/// The active organization is always passed in explicitly; nothing here reads
/// a "current organization" from ambient state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(tag = "kind", content = "organization_id", rename_all = "snake_case")]
pub enum ListingScope {
    /// Every listing in the marketplace.
    #[default]
    Marketplace,
    /// Only listings owned by this provider organization.
    Provider(OrganizationID),
}

impl ListingScope {
    pub fn provider(&self) -> Option<&OrganizationID> {
        match self {
            ListingScope::Marketplace => None,
            ListingScope::Provider(org) => Some(org),
        }
    }

    /// Stable key of the remote read for this scope.
    ///
    /// Filtering happens after the fetch, so two views over the same scope
    /// share one key whatever their filter state.
    pub fn fetch_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Which read produced a batch of listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    /// Pre-joined listing view.
    Primary,
    /// Raw records joined in memory.
    Fallback,
}

impl std::fmt::Display for ListingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingSource::Primary => f.write_str("primary"),
            ListingSource::Fallback => f.write_str("fallback"),
        }
    }
}
