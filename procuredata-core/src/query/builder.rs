use super::types::*;
use procuredata_model::{CategorySelection, FilterState, PriceTier};
use serde_json::Value;

/// Fluent API for building remote reads
#[derive(Debug, Clone)]
pub struct RemoteQueryBuilder {
    query: RemoteQuery,
}

impl RemoteQueryBuilder {
    /// Start a read against `collection`
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            query: RemoteQuery::new(collection),
        }
    }

    /// Project the given fields (replaces any earlier projection)
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query.select = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Require `field == value`
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.predicates.push(Predicate::Eq {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Require `field` to be one of `values`
    pub fn is_in<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.query.predicates.push(Predicate::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Set the ordering clause
    pub fn order_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.query.order = Some(OrderBy {
            field: field.into(),
            order,
        });
        self
    }

    /// Build the final query
    pub fn build(self) -> RemoteQuery {
        self.query
    }
}

/// Fluent API for building catalog filter state
#[derive(Debug, Clone, Default)]
pub struct ListingQueryBuilder {
    filter: FilterState,
}

impl ListingQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // === Filter methods ===

    /// Match name or provider name, case-insensitively
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.filter.search = text.into();
        self
    }

    /// Restrict to one category (`"all"` clears the restriction)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.filter.category = CategorySelection::from(category.into());
        self
    }

    /// Only listings carrying the sustainability badge
    pub fn sustainable_only(mut self) -> Self {
        self.filter.only_sustainable = true;
        self
    }

    /// Only listings from verified providers
    pub fn verified_only(mut self) -> Self {
        self.filter.only_verified = true;
        self
    }

    pub fn price_tier(mut self, tier: PriceTier) -> Self {
        self.filter.price_tier = tier;
        self
    }

    /// Convenience method for the "free" tab
    pub fn free_only(self) -> Self {
        self.price_tier(PriceTier::Free)
    }

    /// Convenience method for the "paid" tab
    pub fn paid_only(self) -> Self {
        self.price_tier(PriceTier::Paid)
    }

    // === Build method ===

    pub fn build(self) -> FilterState {
        self.filter
    }
}
