//! In-process [`RemoteStore`] backed by plain record vectors.
//!
//! Applies the same predicate and ordering semantics as the PostgREST
//! adapter. Collections can be switched off to simulate a missing view, and
//! every read is counted per collection.

use std::cmp::Ordering;

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use serde_json::Value;
use tracing::trace;

use crate::database::ports::RemoteStore;
use crate::error::{StoreError, StoreResult};
use crate::query::types::{Record, RemoteQuery, SortOrder};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: DashMap<String, Vec<Record>>,
    unavailable: DashSet<String>,
    reads: DashMap<String, usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`InMemoryStore::insert_collection`].
    pub fn with_collection(
        self,
        name: impl Into<String>,
        records: Vec<Record>,
    ) -> Self {
        self.insert_collection(name, records);
        self
    }

    /// Replace the records of `name`.
    pub fn insert_collection(&self, name: impl Into<String>, records: Vec<Record>) {
        self.collections.insert(name.into(), records);
    }

    /// Append one record to `name`, creating the collection when needed.
    pub fn push_record(&self, name: &str, record: Record) {
        self.collections
            .entry(name.to_string())
            .or_default()
            .push(record);
    }

    /// Make reads of `name` fail as if the collection did not exist.
    pub fn mark_unavailable(&self, name: impl Into<String>) {
        self.unavailable.insert(name.into());
    }

    pub fn mark_available(&self, name: &str) {
        self.unavailable.remove(name);
    }

    /// Number of reads attempted against `name`, failed ones included.
    pub fn read_count(&self, name: &str) -> usize {
        self.reads.get(name).map(|count| *count).unwrap_or(0)
    }
}

#[async_trait]
impl RemoteStore for InMemoryStore {
    async fn select(&self, query: &RemoteQuery) -> StoreResult<Vec<Record>> {
        *self.reads.entry(query.collection.clone()).or_default() += 1;

        if self.unavailable.contains(&query.collection) {
            return Err(StoreError::CollectionUnavailable(query.collection.clone()));
        }

        let rows = self
            .collections
            .get(&query.collection)
            .ok_or_else(|| StoreError::CollectionUnavailable(query.collection.clone()))?;

        let mut matched: Vec<Record> = rows
            .iter()
            .filter(|record| query.predicates.iter().all(|p| p.matches(record)))
            .cloned()
            .collect();
        drop(rows);

        if let Some(order) = &query.order {
            matched.sort_by(|a, b| {
                let ordering = compare_values(a.get(&order.field), b.get(&order.field));
                match order.order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        if !query.select.is_empty() {
            for record in &mut matched {
                record.retain(|key, _| query.select.iter().any(|field| field == key));
            }
        }

        trace!(collection = %query.collection, rows = matched.len(), "in-memory select");
        Ok(matched)
    }
}

// Missing and null values sort last, matching PostgREST's default for `asc`.
fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    let left = left.filter(|v| !v.is_null());
    let right = right.filter(|v| !v.is_null());

    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.total_cmp(&b)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (Some(a), Some(b)) => a.to_string().cmp(&b.to_string()),
    }
}
