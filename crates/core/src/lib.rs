//! Storefront Core - cart and view state for the storefront.
//!
//! This crate holds everything about the shopper's state that can be reasoned
//! about without a network or a browser:
//! - [`types`] - Newtype wrappers for product ids, prices and quantities, and
//!   the catalog [`Product`] record
//! - [`cart`] - The [`Cart`] and its line operations
//! - [`view`] - Which [`Page`] is showing and the order-confirmed flag
//! - [`session`] - [`ShopSession`], tying cart, view and product-card
//!   quantities together
//!
//! # Architecture
//!
//! The core crate contains only types and state transitions - no I/O, no
//! HTTP, no templates. Every operation is synchronous and infallible on
//! well-typed input.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod session;
pub mod types;
pub mod view;

pub use cart::{Cart, CartLine};
pub use session::{CheckoutOutcome, QuantityStep, ShopSession};
pub use types::*;
pub use view::{Page, ViewState};
