//! Core types for the storefront.
//!
//! This module provides type-safe wrappers for the domain's identifiers,
//! money and counts, plus the catalog product record.

pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::*;
pub use price::Price;
pub use product::Product;
pub use quantity::{Quantity, QuantityError, parse_leading_integer, parse_requested_quantity};
