use async_trait::async_trait;
use std::sync::Arc;

use crate::error::StoreResult;
use crate::query::types::{Record, RemoteQuery};

/// Read access to the managed backend holding catalog records.
///
/// Implementations treat the backend as a black box: they translate a
/// [`RemoteQuery`] into whatever the backend speaks and hand back rows in the
/// order the backend returned them.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn select(&self, query: &RemoteQuery) -> StoreResult<Vec<Record>>;
}

#[async_trait]
impl<T: RemoteStore + ?Sized> RemoteStore for Arc<T> {
    async fn select(&self, query: &RemoteQuery) -> StoreResult<Vec<Record>> {
        (**self).select(query).await
    }
}
