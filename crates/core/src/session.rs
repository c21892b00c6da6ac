//! The shopper's session: cart, current view and product-card quantities.
//!
//! All mutation of shopper-visible state goes through [`ShopSession`], which
//! is what the web layer holds instead of scattered global flags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::{Product, ProductId, Quantity};
use crate::view::{Page, ViewState};

/// A `+` or `-` press on a quantity stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityStep {
    Increment,
    Decrement,
}

impl QuantityStep {
    /// Apply the step, keeping the result at one or more.
    #[must_use]
    pub const fn apply(self, quantity: Quantity) -> Quantity {
        match self {
            Self::Increment => quantity.increment(),
            Self::Decrement => quantity.decrement(),
        }
    }
}

/// What a checkout request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was emptied and the confirmation raised.
    Confirmed {
        /// Units that were in the cart.
        items: u64,
    },
    /// Nothing to check out.
    EmptyCart,
}

#[derive(Debug, Clone, Default)]
pub struct ShopSession {
    cart: Cart,
    view: ViewState,
    pending: HashMap<ProductId, Quantity>,
}

impl ShopSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    pub const fn navigate(&mut self, page: Page) {
        self.view.navigate(page);
    }

    /// The quantity showing on a product card; one until the shopper changes it.
    #[must_use]
    pub fn pending_quantity(&self, id: ProductId) -> Quantity {
        self.pending.get(&id).copied().unwrap_or_default()
    }

    pub fn set_pending_quantity(&mut self, id: ProductId, quantity: Quantity) {
        self.pending.insert(id, quantity);
    }

    /// Press `+` or `-` on a product card. Returns the new card quantity.
    pub fn step_pending_quantity(&mut self, id: ProductId, step: QuantityStep) -> Quantity {
        let quantity = step.apply(self.pending_quantity(id));
        self.pending.insert(id, quantity);
        quantity
    }

    /// Add to the cart from a product card. The card keeps showing the
    /// submitted quantity afterwards.
    pub fn add_to_cart(&mut self, product: &Product, quantity: Quantity) {
        self.pending.insert(product.id, quantity);
        self.cart.add(product, quantity);
    }

    /// Empty the cart and raise the order confirmation.
    ///
    /// An empty cart has nothing to confirm and is left untouched.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }
        let items = self.cart.total_quantity();
        self.cart.clear();
        self.view.confirm_order();
        CheckoutOutcome::Confirmed { items }
    }

    /// Close the confirmation and go back to the shop.
    pub const fn dismiss_confirmation(&mut self) {
        self.view.dismiss_confirmation();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::types::Price;

    use super::*;

    fn product_a() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Backpack".to_string(),
            description: "Fits a laptop".to_string(),
            price: Price::from_cents(2000),
            image: "https://img.test/a.png".to_string(),
        }
    }

    #[test]
    fn test_shopping_round_trip() {
        let a = product_a();
        let mut session = ShopSession::new();
        session.navigate(Page::Shop);

        session.add_to_cart(&a, Quantity::ONE);
        assert_eq!(session.cart().total_quantity(), 1);
        assert_eq!(session.cart().total_price().display(), "$20.00");

        session.add_to_cart(&a, Quantity::new(2).unwrap());
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart().line(a.id).unwrap().quantity.get(), 3);
        assert_eq!(session.cart().total_price().display(), "$60.00");

        session.navigate(Page::Cart);
        assert_eq!(session.checkout(), CheckoutOutcome::Confirmed { items: 3 });
        assert!(session.cart().is_empty());
        assert!(session.view().show_checkout_message());

        session.dismiss_confirmation();
        assert_eq!(session.view().current_page(), Page::Shop);
        assert!(!session.view().show_checkout_message());
    }

    #[test]
    fn test_checkout_empty_cart_is_noop() {
        let mut session = ShopSession::new();
        session.navigate(Page::Cart);
        assert_eq!(session.checkout(), CheckoutOutcome::EmptyCart);
        assert!(!session.view().show_checkout_message());
        assert_eq!(session.view().current_page(), Page::Cart);
    }

    #[test]
    fn test_pending_quantity_stepper() {
        let id = ProductId::new(5);
        let mut session = ShopSession::new();
        assert_eq!(session.pending_quantity(id), Quantity::ONE);

        assert_eq!(session.step_pending_quantity(id, QuantityStep::Decrement), Quantity::ONE);
        assert_eq!(session.step_pending_quantity(id, QuantityStep::Increment).get(), 2);
        assert_eq!(session.step_pending_quantity(id, QuantityStep::Increment).get(), 3);
        assert_eq!(session.step_pending_quantity(id, QuantityStep::Decrement).get(), 2);
        assert_eq!(session.pending_quantity(ProductId::new(6)), Quantity::ONE);
    }

    #[test]
    fn test_add_keeps_card_quantity() {
        let a = product_a();
        let mut session = ShopSession::new();
        session.add_to_cart(&a, Quantity::new(4).unwrap());
        assert_eq!(session.pending_quantity(a.id).get(), 4);
    }

    #[test]
    fn test_quantity_step_deserializes_from_form_value() {
        let step: QuantityStep = serde_json::from_str("\"decrement\"").unwrap();
        assert_eq!(step, QuantityStep::Decrement);
    }
}
