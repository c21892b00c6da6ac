//! Remote product catalog client.
//!
//! # Architecture
//!
//! - One `GET` against the configured catalog URL at startup, via `reqwest`
//! - No retry, pagination or caching: the product list is fetched once and
//!   held in [`CatalogStatus`] for the life of the process
//! - Any failure (transport, non-2xx status, undecodable body) fails the whole
//!   fetch; partial product lists are never shown
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog)?;
//! let products = client.fetch_products().await?;
//! ```

mod types;

pub use types::CatalogRecord;

use std::sync::Arc;

use storefront_core::{Product, ProductId};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::CatalogConfig;

/// Message shown on the shop page when the catalog could not be loaded.
pub const CATALOG_UNAVAILABLE_MESSAGE: &str = "Failed to load products. Please try again later.";

const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/400x300/F0F4F8/1A202C?text=";

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned status {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the startup catalog fetch stands.
#[derive(Debug, Clone, Default)]
pub enum CatalogStatus {
    /// The fetch has not completed yet.
    #[default]
    Loading,
    /// Products in catalog order.
    Ready(Arc<[Product]>),
    /// The fetch failed; holds the message shown to shoppers.
    Failed(String),
}

impl CatalogStatus {
    /// Settle a fetch result into a status, logging failures.
    #[must_use]
    pub fn from_result(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "Catalog loaded");
                Self::Ready(products.into())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching catalog");
                Self::Failed(CATALOG_UNAVAILABLE_MESSAGE.to_string())
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Look up a product by id. `None` while loading, after a failure, or
    /// when the id is not in the catalog.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        match self {
            Self::Ready(products) => products.iter().find(|product| product.id == id),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Build the placeholder image URL for a product from the first word of its
/// title.
#[must_use]
pub fn placeholder_image(title: &str) -> String {
    let first_word = title.split(' ').next().unwrap_or_default();
    format!("{PLACEHOLDER_IMAGE_BASE}{}", urlencoding::encode(first_word))
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote product catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    url: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Http` if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// The endpoint this client fetches from.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on transport failure, a non-2xx response, or a
    /// body that is not a JSON array of product records.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(self.url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        let records: Vec<CatalogRecord> = serde_json::from_str(&response_text)?;
        tracing::debug!(count = records.len(), "Catalog records decoded");

        Ok(records.into_iter().map(Product::from).collect())
    }
}
