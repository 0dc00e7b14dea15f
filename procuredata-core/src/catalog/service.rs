use std::sync::Arc;

use procuredata_model::{FilterState, Listing};
use tracing::{debug, error, info, warn};

use super::fallback::{distinct, synthesize_listings};
use super::refresh::RefreshTracker;
use super::rows::{
    DataAssetRow, DataProductRow, ListingViewRow, OrganizationRow, decode_rows,
};
use super::settings::CatalogSettings;
use crate::database::ports::RemoteStore;
use crate::error::{CatalogError, Result, StoreResult};
use crate::query::builder::RemoteQueryBuilder;
use crate::query::filtering::{apply_filters, derive_available_categories};
use crate::query::types::{ListingScope, ListingSource};

const ASSET_FIELDS: [&str; 6] = [
    "id",
    "product_id",
    "holder_org_id",
    "price",
    "pricing_model",
    "currency",
];
const PRODUCT_FIELDS: [&str; 4] = ["id", "name", "description", "category"];
const ORGANIZATION_FIELDS: [&str; 3] = ["id", "name", "kyb_verified"];

/// Listings as returned by the store, tagged with the read that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedListings {
    pub listings: Vec<Listing>,
    pub source: ListingSource,
}

/// Everything a presentation layer needs to render one catalog view.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Listings passing the filter, in source order.
    pub listings: Vec<Listing>,
    /// Categories of the unfiltered listings, `"all"` first.
    pub categories: Vec<String>,
    pub source: ListingSource,
    /// Number of listings before filtering.
    pub total: usize,
}

/// Fetch-with-fallback plus client-side filtering over a [`RemoteStore`].
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn RemoteStore>,
    settings: CatalogSettings,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(store: Arc<dyn RemoteStore>, settings: CatalogSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Read listings for `scope`, degrading to the raw-record join when the
    /// primary view fails.
    ///
    /// Each read is attempted once. When both fail the error carries both
    /// causes.
    pub async fn fetch_listings(
        &self,
        scope: &ListingScope,
    ) -> Result<FetchedListings> {
        let primary = match self.fetch_primary(scope).await {
            Ok(listings) => {
                info!(source = %ListingSource::Primary, count = listings.len(), "listings fetched");
                return Ok(FetchedListings {
                    listings,
                    source: ListingSource::Primary,
                });
            }
            Err(err) => err,
        };

        warn!(
            view = %self.settings.primary_view,
            error = %primary,
            "primary listing view failed, falling back to raw records"
        );

        match self.fetch_fallback(scope).await {
            Ok(listings) => {
                info!(source = %ListingSource::Fallback, count = listings.len(), "listings fetched");
                Ok(FetchedListings {
                    listings,
                    source: ListingSource::Fallback,
                })
            }
            Err(fallback) => {
                error!(
                    primary = %primary,
                    fallback = %fallback,
                    "listing fetch failed on both reads"
                );
                Err(CatalogError::DataAccess { fallback, primary })
            }
        }
    }

    /// Fetch, filter and derive categories in one step.
    pub async fn load_view(
        &self,
        scope: &ListingScope,
        filter: &FilterState,
    ) -> Result<CatalogView> {
        let fetched = self.fetch_listings(scope).await?;
        Ok(build_view(fetched, filter))
    }

    /// [`CatalogService::load_view`] guarded by `tracker`.
    ///
    /// Returns `Ok(None)` when a newer refresh for the same scope started
    /// while this one was in flight. A superseded refresh is dropped whether
    /// it succeeded or failed.
    pub async fn refresh(
        &self,
        tracker: &RefreshTracker,
        scope: &ListingScope,
        filter: &FilterState,
    ) -> Result<Option<CatalogView>> {
        let ticket = tracker.begin(scope);
        let loaded = self.load_view(scope, filter).await;
        if !tracker.is_current(&ticket) {
            debug!(
                key = ticket.key(),
                failed = loaded.is_err(),
                "dropping superseded catalog refresh"
            );
            return Ok(None);
        }
        loaded.map(Some)
    }

    async fn fetch_primary(
        &self,
        scope: &ListingScope,
    ) -> StoreResult<Vec<Listing>> {
        let mut query = RemoteQueryBuilder::new(&self.settings.primary_view);
        if let Some(org) = scope.provider() {
            query = query.eq("provider_id", org.as_str());
        }
        let query = query.build();

        debug!(collection = %query.collection, "reading primary listing view");
        let records = self.store.select(&query).await?;
        let rows: Vec<ListingViewRow> =
            decode_rows(&self.settings.primary_view, records)?;
        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn fetch_fallback(
        &self,
        scope: &ListingScope,
    ) -> StoreResult<Vec<Listing>> {
        let settings = &self.settings;

        let mut query = RemoteQueryBuilder::new(&settings.fallback_collection)
            .select(ASSET_FIELDS);
        if let Some(org) = scope.provider() {
            query = query.eq("holder_org_id", org.as_str());
        }
        let query = query.build();

        debug!(collection = %query.collection, "reading raw asset records");
        let assets: Vec<DataAssetRow> = decode_rows(
            &settings.fallback_collection,
            self.store.select(&query).await?,
        )?;
        if assets.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids = distinct(assets.iter().map(|a| a.product_id));
        let org_ids = distinct(assets.iter().map(|a| a.holder_org_id));

        let products_query = RemoteQueryBuilder::new(&settings.details_collection)
            .select(PRODUCT_FIELDS)
            .is_in("id", product_ids.iter().map(|id| id.to_string()))
            .build();
        let organizations_query =
            RemoteQueryBuilder::new(&settings.organizations_collection)
                .select(ORGANIZATION_FIELDS)
                .is_in("id", org_ids.iter().map(|id| id.as_str()))
                .build();

        debug!(
            products = product_ids.len(),
            organizations = org_ids.len(),
            "joining raw asset records"
        );
        let products: Vec<DataProductRow> = decode_rows(
            &settings.details_collection,
            self.store.select(&products_query).await?,
        )?;
        let organizations: Vec<OrganizationRow> = decode_rows(
            &settings.organizations_collection,
            self.store.select(&organizations_query).await?,
        )?;

        Ok(synthesize_listings(
            assets,
            products,
            organizations,
            &settings.fallback,
        ))
    }
}

/// Filter fetched listings and derive the category list for the view.
pub fn build_view(fetched: FetchedListings, filter: &FilterState) -> CatalogView {
    let categories = derive_available_categories(&fetched.listings);
    let listings = apply_filters(&fetched.listings, filter);
    CatalogView {
        total: fetched.listings.len(),
        listings,
        categories,
        source: fetched.source,
    }
}
