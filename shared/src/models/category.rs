//! Category Model

use serde::{Deserialize, Serialize};

use crate::models::subcategory::Subcategory;

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Ordered image URLs; the first entry is the list-card thumbnail
    #[serde(default)]
    pub images: Vec<String>,

    // -- Relations (embedded by the list endpoint, absent elsewhere) --

    #[serde(default, rename = "subCategories")]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Thumbnail URL shown on list cards
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub images: Vec<String>,
}

/// Update category payload (full replacement of the editable fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: String,
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_document() {
        let raw = serde_json::json!({
            "_id": "65a1",
            "name": "Snacks",
            "images": ["https://cdn/a.webp", "https://cdn/b.webp"],
            "subCategories": [
                { "_id": "77b2", "name": "Chips", "categoryId": "65a1" }
            ],
            "__v": 0
        });

        let category: Category = serde_json::from_value(raw).unwrap();
        assert_eq!(category.id, "65a1");
        assert_eq!(category.thumbnail(), Some("https://cdn/a.webp"));
        assert_eq!(category.subcategories.len(), 1);
        assert_eq!(category.subcategories[0].name, "Chips");
    }

    #[test]
    fn tolerates_missing_relations() {
        let raw = serde_json::json!({ "_id": "65a1", "name": "Snacks" });
        let category: Category = serde_json::from_value(raw).unwrap();
        assert!(category.images.is_empty());
        assert!(category.subcategories.is_empty());
        assert_eq!(category.thumbnail(), None);
    }

    #[test]
    fn create_payload_wire_shape() {
        let payload = CategoryCreate {
            name: "Snacks".into(),
            images: vec!["https://cdn/a.webp".into()],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "name": "Snacks", "images": ["https://cdn/a.webp"] })
        );
    }
}
