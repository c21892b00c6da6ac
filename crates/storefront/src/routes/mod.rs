//! HTTP route handlers for storefront.
//!
//! Pages are rendered server-side. Every shopper action is a form `POST`
//! that updates the session and redirects (303) back to a page, so a reload
//! never repeats an action.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness (catalog fetch settled)
//!
//! # Shop
//! GET  /shop                   - Product grid (loading / error / products)
//! POST /shop/quantity          - Product-card quantity stepper or typed value
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add product to cart
//! POST /cart/update            - Line stepper or typed quantity (0 removes)
//! POST /cart/remove            - Remove line
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout               - Empty the cart and show the confirmation
//! POST /checkout/dismiss       - Close the confirmation, back to the shop
//! ```

pub mod cart;
pub mod home;
pub mod shop;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
};
use storefront_core::{Page, Product, ProductId, ShopSession};

use crate::catalog::CatalogStatus;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Header and overlay data every page renders.
#[derive(Debug, Clone)]
pub struct LayoutView {
    pub current_page: Page,
    pub cart_count: u64,
    pub show_checkout_message: bool,
}

impl LayoutView {
    /// CSS class for a navigation link, marking the current page.
    #[must_use]
    pub fn nav_class(&self, page: &str) -> &'static str {
        if self.current_page.label().eq_ignore_ascii_case(page) {
            "nav-button active"
        } else {
            "nav-button"
        }
    }
}

impl From<&ShopSession> for LayoutView {
    fn from(session: &ShopSession) -> Self {
        Self {
            current_page: session.view().current_page(),
            cart_count: session.cart().total_quantity(),
            show_checkout_message: session.view().show_checkout_message(),
        }
    }
}

/// Anchor of a product card on the shop page.
fn product_anchor(id: ProductId) -> String {
    format!("{}#product-{id}", Page::Shop.path())
}

fn redirect_to(page: Page) -> Redirect {
    Redirect::to(page.path())
}

/// Look up a product the shopper acted on.
fn find_product(catalog: &CatalogStatus, id: ProductId) -> Result<Product> {
    match catalog {
        CatalogStatus::Ready(_) => catalog
            .product(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("product {id}"))),
        CatalogStatus::Loading | CatalogStatus::Failed(_) => Err(AppError::CatalogUnavailable),
    }
}

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::index))
        .route("/quantity", post(shop::quantity))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(cart::checkout))
        .route("/dismiss", post(cart::dismiss))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/shop", shop_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable until the startup catalog fetch has
/// settled, successfully or not.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().await.is_loading() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}
