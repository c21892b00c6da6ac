//! Cart and checkout route handlers.
//!
//! Cart operations are plain form posts that redirect back to a page. The
//! cart itself lives in the shopper session held by `AppState`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use storefront_core::{
    Cart, CartLine, CheckoutOutcome, Page, ProductId, Quantity, QuantityStep,
    parse_requested_quantity,
};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::routes::{LayoutView, find_product, product_anchor, redirect_to};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&Cart::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.total_price().display(),
            item_count: cart.total_quantity(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            title: line.title.clone(),
            image: line.image.clone(),
            quantity: line.quantity.get(),
            price: line.price.display(),
            line_price: line.line_total().display(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub quantity: Option<String>,
}

/// Update cart form data.
///
/// `step` is set by the `+`/`-` buttons; otherwise the typed `quantity`
/// replaces the line's quantity, and zero or less removes the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: Option<String>,
    pub step: Option<QuantityStep>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: LayoutView,
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let mut session = state.session_mut().await;
    session.navigate(Page::Cart);

    CartShowTemplate {
        layout: LayoutView::from(&*session),
        cart: CartView::from(session.cart()),
    }
}

/// Add a product to the cart.
///
/// Uses the submitted quantity, normalized to at least one, or the card's
/// current quantity when none was submitted.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = find_product(&state.catalog().await, form.product_id)?;

    let mut session = state.session_mut().await;
    let quantity = form
        .quantity
        .as_deref()
        .map_or_else(|| session.pending_quantity(product.id), Quantity::parse_or_default);
    session.add_to_cart(&product, quantity);

    tracing::info!(
        product_id = %product.id,
        quantity = %quantity,
        cart_items = session.cart().total_quantity(),
        "Added to cart"
    );
    let product_id = product.id.to_string();
    let quantity = quantity.to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[
            ("product_id", product_id.as_str()),
            ("quantity", quantity.as_str()),
        ]),
    );

    Ok(Redirect::to(&product_anchor(product.id)))
}

/// Update a cart line's quantity.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Redirect> {
    let mut session = state.session_mut().await;
    let cart = session.cart_mut();
    let id = form.product_id;

    match (form.step, form.quantity.as_deref()) {
        (Some(QuantityStep::Increment), _) => cart.increment(id),
        (Some(QuantityStep::Decrement), _) => cart.decrement(id),
        (None, Some(raw)) => cart.set_quantity(id, parse_requested_quantity(raw)),
        (None, None) => {
            return Err(AppError::BadRequest(
                "quantity or step is required".to_string(),
            ));
        }
    }

    tracing::debug!(
        product_id = %id,
        quantity = cart.line(id).map_or(0, |line| line.quantity.get()),
        "Cart line updated"
    );

    Ok(redirect_to(Page::Cart))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Redirect {
    state.session_mut().await.cart_mut().remove(form.product_id);
    tracing::debug!(product_id = %form.product_id, "Removed from cart");

    redirect_to(Page::Cart)
}

/// Get cart count badge fragment.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.session().await.cart().total_quantity(),
    }
}

/// Check out: empty the cart and show the order confirmation.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Redirect {
    match state.session_mut().await.checkout() {
        CheckoutOutcome::Confirmed { items } => {
            tracing::info!(items, "Order confirmed");
            add_breadcrumb("checkout", "Order confirmed", None);
        }
        CheckoutOutcome::EmptyCart => {
            tracing::debug!("Checkout with empty cart ignored");
        }
    }

    redirect_to(Page::Cart)
}

/// Dismiss the order confirmation and return to the shop.
#[instrument(skip(state))]
pub async fn dismiss(State(state): State<AppState>) -> Redirect {
    state.session_mut().await.dismiss_confirmation();
    redirect_to(Page::Shop)
}
