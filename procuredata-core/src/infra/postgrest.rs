//! PostgREST adapter for [`RemoteStore`].
//!
//! Managed backends (Supabase and friends) expose tables and views at
//! `{base}/rest/v1/{collection}` and take filters as query parameters:
//! `field=eq.value`, `field=in.(a,b)`, `order=field.asc`, `select=a,b`.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::database::ports::RemoteStore;
use crate::error::{StoreError, StoreResult};
use crate::query::types::{Predicate, Record, RemoteQuery, render_value};

const REST_PREFIX: [&str; 2] = ["rest", "v1"];

pub struct PostgrestStore {
    http: reqwest::Client,
    base: Url,
    api_key: Option<String>,
}

impl fmt::Debug for PostgrestStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgrestStore")
            .field("base", &self.base.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl PostgrestStore {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> StoreResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(http, base_url, api_key)
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        api_key: Option<String>,
    ) -> StoreResult<Self> {
        let base = Url::parse(base_url).map_err(|err| {
            StoreError::InvalidConfig(format!("store url {base_url}: {err}"))
        })?;
        if base.cannot_be_a_base() {
            return Err(StoreError::InvalidConfig(format!(
                "store url {base_url} cannot carry a path"
            )));
        }

        Ok(Self {
            http,
            base,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    /// Full request URL for `query`, including projection, filters and order.
    pub fn request_url(&self, query: &RemoteQuery) -> StoreResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                StoreError::InvalidConfig(format!(
                    "store url {} cannot carry a path",
                    self.base
                ))
            })?
            .pop_if_empty()
            .extend(REST_PREFIX)
            .push(&query.collection);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", &query.select_clause());
            for predicate in &query.predicates {
                pairs.append_pair(predicate.field(), &render_predicate(predicate));
            }
            if let Some(order) = &query.order {
                pairs.append_pair(
                    "order",
                    &format!("{}.{}", order.field, order.order.as_postgrest()),
                );
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl RemoteStore for PostgrestStore {
    async fn select(&self, query: &RemoteQuery) -> StoreResult<Vec<Record>> {
        let url = self.request_url(query)?;
        debug!(collection = %query.collection, %url, "remote select");

        let mut request = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice::<Vec<Record>>(&body).map_err(|err| {
                StoreError::Decode(format!(
                    "{} returned a non-row payload: {err}",
                    query.collection
                ))
            });
        }

        #[derive(Debug, Deserialize)]
        struct PostgrestErrorBody {
            #[serde(default)]
            message: Option<String>,
        }

        let message = response
            .json::<PostgrestErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("request failed with status {status}"));

        Err(map_status(status, &query.collection, message))
    }
}

fn map_status(status: StatusCode, collection: &str, message: String) -> StoreError {
    match status {
        StatusCode::NOT_FOUND => {
            StoreError::CollectionUnavailable(collection.to_string())
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            StoreError::Unauthorized(collection.to_string())
        }
        _ => StoreError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

fn render_predicate(predicate: &Predicate) -> String {
    match predicate {
        Predicate::Eq { value, .. } => format!("eq.{}", render_value(value)),
        Predicate::In { values, .. } => {
            let members: Vec<String> = values
                .iter()
                .map(|value| quote_list_member(&render_value(value)))
                .collect();
            format!("in.({})", members.join(","))
        }
    }
}

// Reserved characters inside an `in.(..)` list must be double-quoted.
fn quote_list_member(raw: &str) -> String {
    let needs_quotes = raw.is_empty()
        || raw
            .chars()
            .any(|c| matches!(c, ',' | '(' | ')' | '"' | '\\') || c.is_whitespace());
    if !needs_quotes {
        return raw.to_string();
    }
    let escaped = raw.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
