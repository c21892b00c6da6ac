//! Application state shared across handlers.

use std::sync::Arc;

use storefront_core::ShopSession;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::task::JoinHandle;

use crate::catalog::{CatalogClient, CatalogError, CatalogStatus};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It owns the one shopper
/// session and the result of the startup catalog fetch; handlers take the
/// session lock for a single synchronous update and release it before
/// rendering.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog_client: CatalogClient,
    catalog: RwLock<CatalogStatus>,
    session: RwLock<ShopSession>,
}

impl AppState {
    /// Create a new application state with a loading catalog and an empty
    /// session on the home page.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog_client = CatalogClient::new(&config.catalog)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog_client,
                catalog: RwLock::new(CatalogStatus::Loading),
                session: RwLock::new(ShopSession::new()),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Snapshot of the catalog status.
    pub async fn catalog(&self) -> CatalogStatus {
        self.inner.catalog.read().await.clone()
    }

    /// Record the outcome of the catalog fetch.
    pub async fn set_catalog(&self, status: CatalogStatus) {
        *self.inner.catalog.write().await = status;
    }

    /// Read access to the shopper session.
    pub async fn session(&self) -> RwLockReadGuard<'_, ShopSession> {
        self.inner.session.read().await
    }

    /// Write access to the shopper session.
    pub async fn session_mut(&self) -> RwLockWriteGuard<'_, ShopSession> {
        self.inner.session.write().await
    }

    /// Fetch the catalog once and record the result.
    pub async fn load_catalog(&self) {
        let result = self.inner.catalog_client.fetch_products().await;
        self.set_catalog(CatalogStatus::from_result(result)).await;
    }

    /// Start the catalog fetch in the background.
    ///
    /// The shop page shows a loading state until it completes. There is no
    /// retry: a failed fetch stays failed until restart.
    pub fn start_catalog_fetch(&self) -> JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move {
            tracing::info!(url = %state.inner.catalog_client.url(), "Fetching catalog");
            state.load_catalog().await;
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use url::Url;

    use super::*;

    #[tokio::test]
    async fn test_starts_loading_with_empty_session() {
        let state = AppState::new(StorefrontConfig::default()).unwrap();
        assert!(state.catalog().await.is_loading());
        assert!(state.session().await.cart().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_catalog_settles_as_failed() {
        let mut config = StorefrontConfig::default();
        // Port 9 (discard) on loopback is expected to refuse connections.
        config.catalog.url = Url::parse("http://127.0.0.1:9/products").unwrap();
        let state = AppState::new(config).unwrap();

        state.start_catalog_fetch().await.unwrap();
        assert!(matches!(state.catalog().await, CatalogStatus::Failed(_)));
    }
}
