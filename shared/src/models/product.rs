//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One quantity-price tier
///
/// `quantity` is an opaque label ("2", "1kg"); the storefront uses it as
/// the selection key, so duplicates are legal but usually a data-entry
/// mistake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityTier {
    pub quantity: String,
    /// Price for the whole labelled quantity, not per unit
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    pub category_id: String,
    /// Absent (not null) when the product sits directly under its category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    /// Ordered image URLs; the first entry is the list-card thumbnail
    #[serde(default, rename = "productImage")]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Base display price; tier prices override it per quantity
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub quantity_options: Vec<QuantityTier>,
}

impl Product {
    /// Thumbnail URL shown on list cards
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    #[serde(rename = "productImage")]
    pub images: Vec<String>,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity_options: Vec<QuantityTier>,
}

/// Update product payload; the store reads `_id` from the body, not the URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    #[serde(rename = "productImage")]
    pub images: Vec<String>,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity_options: Vec<QuantityTier>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    fn decimal(value: f64) -> Decimal {
        Decimal::from_f64(value).unwrap()
    }

    #[test]
    fn deserializes_store_document() {
        let raw = serde_json::json!({
            "_id": "9f3c",
            "productName": "Basmati Rice",
            "brandName": "Daawat",
            "categoryId": "65a1",
            "subcategoryId": "77b2",
            "productImage": ["https://cdn/rice.webp"],
            "description": "Aged long grain",
            "price": 120.5,
            "quantityOptions": [
                { "quantity": "1kg", "price": 120.5 },
                { "quantity": "5kg", "price": 550.0 }
            ]
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.product_name, "Basmati Rice");
        assert_eq!(product.subcategory_id.as_deref(), Some("77b2"));
        assert_eq!(product.quantity_options.len(), 2);
        assert_eq!(product.quantity_options[1].price, decimal(550.0));
    }

    #[test]
    fn optional_references_are_omitted_not_null() {
        let payload = ProductCreate {
            product_name: "Salt".into(),
            brand_name: None,
            category_id: "65a1".into(),
            subcategory_id: None,
            images: vec!["https://cdn/salt.webp".into()],
            description: String::new(),
            price: decimal(20.0),
            quantity_options: vec![QuantityTier {
                quantity: "1kg".into(),
                price: decimal(20.0),
            }],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("subcategoryId").is_none());
        assert!(value.get("brandName").is_none());
        assert_eq!(value["productImage"][0], "https://cdn/salt.webp");
        assert_eq!(value["price"], serde_json::json!(20.0));
    }

    #[test]
    fn update_carries_id_in_body() {
        let payload = ProductUpdate {
            id: "9f3c".into(),
            product_name: "Salt".into(),
            brand_name: Some("Tata".into()),
            category_id: "65a1".into(),
            subcategory_id: Some("77b2".into()),
            images: vec!["https://cdn/salt.webp".into()],
            description: "Iodised".into(),
            price: decimal(22.0),
            quantity_options: vec![],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["_id"], "9f3c");
        assert_eq!(value["brandName"], "Tata");
    }
}
