//! Wire types for the catalog endpoint.

use rust_decimal::Decimal;
use serde::Deserialize;
use storefront_core::{Price, Product, ProductId};

use super::placeholder_image;

/// One product record as returned by the catalog.
///
/// Only the fields the storefront shows are read; anything else the catalog
/// sends (category, rating, its own image URL) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
}

impl From<CatalogRecord> for Product {
    fn from(record: CatalogRecord) -> Self {
        let image = placeholder_image(&record.title);
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            price: Price::new(record.price),
            image,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let record: CatalogRecord = serde_json::from_str(json).unwrap();
        let product = Product::from(record);

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Price::from_cents(10995));
        assert_eq!(
            product.image,
            "https://placehold.co/400x300/F0F4F8/1A202C?text=Fjallraven"
        );
    }

    #[test]
    fn test_record_requires_price() {
        let json = r#"{ "id": 2, "title": "Mug", "description": "Holds coffee" }"#;
        assert!(serde_json::from_str::<CatalogRecord>(json).is_err());
    }

    #[test]
    fn test_integer_price() {
        let json = r#"{ "id": 3, "title": "Mug", "description": "", "price": 22 }"#;
        let product = Product::from(serde_json::from_str::<CatalogRecord>(json).unwrap());
        assert_eq!(product.price.display(), "$22.00");
    }
}
