//! The shopper's cart.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s with at most one line per
//! product. Lines keep the position they were first added at; quantity
//! changes never reorder them. A line never holds a quantity below one: any
//! update that would take it to zero removes the line instead.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId, Quantity};

/// One row in the cart.
///
/// Title, price and image are copied from the product when the line is
/// created and are not refreshed from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: String,
    pub quantity: Quantity,
}

impl CartLine {
    fn from_product(product: &Product, quantity: Quantity) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Ordered cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line for the product grows in place; otherwise a new line
    /// is appended.
    pub fn add(&mut self, product: &Product, quantity: Quantity) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine::from_product(product, quantity)),
        }
    }

    /// Replace the quantity of an existing line.
    ///
    /// A request of zero or less removes the line. Unknown ids are ignored:
    /// this never creates a line.
    pub fn set_quantity(&mut self, id: ProductId, requested: i64) {
        match Quantity::from_requested(requested) {
            Some(quantity) => {
                if let Some(line) = self.line_mut(id) {
                    line.quantity = quantity;
                }
            }
            None => self.remove(id),
        }
    }

    /// Add one unit to an existing line.
    pub fn increment(&mut self, id: ProductId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.increment();
        }
    }

    /// Take one unit off an existing line, stopping at one.
    pub fn decrement(&mut self, id: ProductId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.decrement();
        }
    }

    /// Delete the line for `id`, if any.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.id != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Sum of every line's price times quantity, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }
}
