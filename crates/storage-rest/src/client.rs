//! HTTP client for the remote collection store.
//!
//! The store exposes each collection at `/collections/<name>/rows`.
//! Filters travel as query parameters; `update` and `delete` respond with
//! the number of rows they matched, which is what lets the stock
//! repository do conditional (compare-and-swap) counter updates.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::errors::StorageError;
use tokoku_core::Result;

/// Default timeout for store requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`RestClient`].
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl RestClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// One equality filter on a collection query.
#[derive(Debug, Clone)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl ToString) -> Self {
        Self {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

/// Row-count response for update/delete calls.
#[derive(Debug, serde::Deserialize)]
struct MutationResponse {
    matched: u64,
}

/// Shared HTTP client for the remote collection store.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: RestClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| StorageError::InvalidRequest(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(StorageError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, collection: &str, filters: &[Filter]) -> Result<reqwest::Url> {
        let base = format!("{}/collections/{}/rows", self.base_url, collection);
        let params: Vec<(&str, &str)> = filters
            .iter()
            .map(|f| (f.field.as_str(), f.value.as_str()))
            .collect();
        let url = reqwest::Url::parse_with_params(&base, &params)
            .map_err(|e| StorageError::InvalidRequest(format!("Failed to build URL: {}", e)))?;
        Ok(url)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StorageError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(response)
    }

    /// Lists the rows of `collection` matching all `filters`.
    pub async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        filters: &[Filter],
    ) -> Result<Vec<T>> {
        let url = self.collection_url(collection, filters)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(StorageError::Http)?;
        let response = Self::check_status(response).await?;
        let rows = response
            .json::<Vec<T>>()
            .await
            .map_err(StorageError::Http)?;
        Ok(rows)
    }

    /// Lists and returns the first matching row, if any.
    pub async fn find_one<T: DeserializeOwned>(
        &self,
        collection: &str,
        filters: &[Filter],
    ) -> Result<Option<T>> {
        let mut rows = self.list::<T>(collection, filters).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.swap_remove(0)))
        }
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        collection: &str,
        row: &T,
    ) -> Result<R> {
        let url = self.collection_url(collection, &[])?;
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(row)
            .send()
            .await
            .map_err(StorageError::Http)?;
        let response = Self::check_status(response).await?;
        let stored = response.json::<R>().await.map_err(StorageError::Http)?;
        Ok(stored)
    }

    /// Applies `patch` to every row matching `filters` and returns the
    /// number of rows matched. Zero means the filters matched nothing,
    /// which conditional updates use to detect a lost race.
    pub async fn update<T: Serialize>(
        &self,
        collection: &str,
        filters: &[Filter],
        patch: &T,
    ) -> Result<u64> {
        let url = self.collection_url(collection, filters)?;
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(url)
            .json(patch)
            .send()
            .await
            .map_err(StorageError::Http)?;
        let response = Self::check_status(response).await?;
        let result = response
            .json::<MutationResponse>()
            .await
            .map_err(StorageError::Http)?;
        Ok(result.matched)
    }

    /// Deletes every row matching `filters`, returning the matched count.
    pub async fn delete(&self, collection: &str, filters: &[Filter]) -> Result<u64> {
        let url = self.collection_url(collection, filters)?;
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(StorageError::Http)?;
        let response = Self::check_status(response).await?;
        let result = response
            .json::<MutationResponse>()
            .await
            .map_err(StorageError::Http)?;
        Ok(result.matched)
    }
}
