//! Subcategory Model

use serde::{Deserialize, Serialize};

/// Subcategory entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Owning category id; some replies omit it when the subcategory is
    /// already embedded under its category
    #[serde(default, rename = "categoryId")]
    pub category_id: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Subcategory {
    /// Thumbnail URL shown on list cards
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Create subcategory payload (the owning category id rides in the URL)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryCreate {
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Update subcategory payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryUpdate {
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_wire_shape() {
        let payload = SubcategoryCreate {
            name: "Chips".into(),
            images: vec![],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "name": "Chips", "images": [] })
        );
    }

    #[test]
    fn update_payload_keeps_camel_case_parent() {
        let payload = SubcategoryUpdate {
            name: "Chips".into(),
            category_id: "65a1".into(),
            images: vec!["https://cdn/c.webp".into()],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["categoryId"], "65a1");
        assert!(value.get("category_id").is_none());
    }
}
