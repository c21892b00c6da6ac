//! Shop page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use storefront_core::{Page, Product, ProductId, Quantity, QuantityStep, ShopSession};
use tracing::instrument;

use crate::catalog::CatalogStatus;
use crate::error::Result;
use crate::filters;
use crate::routes::{LayoutView, find_product, product_anchor};
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    /// Quantity showing in the card's picker.
    pub quantity: Quantity,
}

impl ProductCardView {
    fn new(product: &Product, session: &ShopSession) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            quantity: session.pending_quantity(product.id),
        }
    }
}

/// Product-card quantity form data.
///
/// `step` is set when `+` or `-` was pressed; otherwise the typed `quantity`
/// is applied as-is.
#[derive(Debug, Deserialize)]
pub struct CardQuantityForm {
    pub product_id: ProductId,
    pub quantity: Option<String>,
    pub step: Option<QuantityStep>,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopTemplate {
    pub layout: LayoutView,
    pub loading: bool,
    pub error: Option<String>,
    pub products: Vec<ProductCardView>,
}

/// Display the shop page.
///
/// Shows a loading state until the catalog fetch completes, and the catalog
/// error message if it failed.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog().await;

    let mut session = state.session_mut().await;
    session.navigate(Page::Shop);

    let (loading, error, products) = match &catalog {
        CatalogStatus::Loading => (true, None, Vec::new()),
        CatalogStatus::Failed(message) => (false, Some(message.clone()), Vec::new()),
        CatalogStatus::Ready(products) => (
            false,
            None,
            products
                .iter()
                .map(|product| ProductCardView::new(product, &session))
                .collect(),
        ),
    };

    ShopTemplate {
        layout: LayoutView::from(&*session),
        loading,
        error,
        products,
    }
}

/// Change the quantity showing on a product card.
#[instrument(skip(state))]
pub async fn quantity(
    State(state): State<AppState>,
    Form(form): Form<CardQuantityForm>,
) -> Result<Redirect> {
    let product = find_product(&state.catalog().await, form.product_id)?;

    let mut session = state.session_mut().await;
    let typed = form
        .quantity
        .as_deref()
        .map_or_else(|| session.pending_quantity(product.id), Quantity::parse_or_default);
    let quantity = form.step.map_or(typed, |step| step.apply(typed));
    session.set_pending_quantity(product.id, quantity);

    tracing::debug!(product_id = %product.id, quantity = %quantity, "Card quantity changed");

    Ok(Redirect::to(&product_anchor(product.id)))
}
