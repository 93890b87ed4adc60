//! Typed catalog operations over the store API

use async_trait::async_trait;
use shared::StoreResponse;
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductUpdate, Subcategory,
    SubcategoryCreate, SubcategoryUpdate,
};

use crate::error::{ClientError, ClientResult};
use crate::http::StoreClient;

/// Acknowledge-only reply; `data` is ignored whatever its shape
type Ack = StoreResponse<serde_json::Value>;

/// Catalog operations the admin surfaces are written against
///
/// Mutating calls resolve to the store's acknowledge message so the
/// caller can surface it verbatim.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;
    async fn create_category(&self, payload: &CategoryCreate) -> ClientResult<String>;
    async fn update_category(&self, id: &str, payload: &CategoryUpdate) -> ClientResult<String>;
    async fn delete_category(&self, id: &str) -> ClientResult<String>;

    async fn list_subcategories(&self) -> ClientResult<Vec<Subcategory>>;
    /// Subcategories under one category; the store keys this route by
    /// category *name*, not id
    async fn subcategories_of(&self, category_name: &str) -> ClientResult<Vec<Subcategory>>;
    async fn create_subcategory(
        &self,
        category_id: &str,
        payload: &SubcategoryCreate,
    ) -> ClientResult<String>;
    async fn update_subcategory(
        &self,
        id: &str,
        payload: &SubcategoryUpdate,
    ) -> ClientResult<String>;
    async fn delete_subcategory(&self, id: &str) -> ClientResult<String>;

    async fn list_products(&self) -> ClientResult<Vec<Product>>;
    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<String>;
    async fn update_product(&self, payload: &ProductUpdate) -> ClientResult<String>;
    async fn delete_product(&self, id: &str) -> ClientResult<String>;
}

fn require_data<T>(envelope: StoreResponse<T>, what: &str) -> ClientResult<T> {
    if !envelope.success {
        return Err(ClientError::Remote(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing {what} in store reply")))
}

fn require_ack(envelope: Ack) -> ClientResult<String> {
    if envelope.success {
        Ok(envelope.message)
    } else {
        Err(ClientError::Remote(envelope.message))
    }
}

#[async_trait]
impl CatalogStore for StoreClient {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        require_data(self.get("api/Category").await?, "categories")
    }

    async fn create_category(&self, payload: &CategoryCreate) -> ClientResult<String> {
        require_ack(self.post("api/addCategory", payload).await?)
    }

    async fn update_category(&self, id: &str, payload: &CategoryUpdate) -> ClientResult<String> {
        require_ack(self.put(&format!("api/categories/{id}"), payload).await?)
    }

    async fn delete_category(&self, id: &str) -> ClientResult<String> {
        require_ack(self.delete(&format!("api/delete-category/{id}")).await?)
    }

    async fn list_subcategories(&self) -> ClientResult<Vec<Subcategory>> {
        require_data(self.get("api/subcategories").await?, "subcategories")
    }

    async fn subcategories_of(&self, category_name: &str) -> ClientResult<Vec<Subcategory>> {
        require_data(
            self.get(&format!("api/category/{category_name}/subcategories"))
                .await?,
            "subcategories",
        )
    }

    async fn create_subcategory(
        &self,
        category_id: &str,
        payload: &SubcategoryCreate,
    ) -> ClientResult<String> {
        require_ack(
            self.post(&format!("api/add-subcategories/{category_id}"), payload)
                .await?,
        )
    }

    async fn update_subcategory(
        &self,
        id: &str,
        payload: &SubcategoryUpdate,
    ) -> ClientResult<String> {
        require_ack(
            self.put(&format!("api/update-subcategory/{id}"), payload)
                .await?,
        )
    }

    async fn delete_subcategory(&self, id: &str) -> ClientResult<String> {
        require_ack(self.delete(&format!("api/delete-subcategory/{id}")).await?)
    }

    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        require_data(self.get("api/get-product").await?, "products")
    }

    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<String> {
        require_ack(self.post("api/upload-product", payload).await?)
    }

    async fn update_product(&self, payload: &ProductUpdate) -> ClientResult<String> {
        require_ack(self.put("api/update-product", payload).await?)
    }

    async fn delete_product(&self, id: &str) -> ClientResult<String> {
        require_ack(self.delete(&format!("api/delete-product/{id}")).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_data_unwraps_successful_envelopes() {
        let envelope = StoreResponse::ok(vec![1, 2], "ok");
        assert_eq!(require_data(envelope, "numbers").unwrap(), vec![1, 2]);
    }

    #[test]
    fn require_data_surfaces_the_rejection_message() {
        let envelope: StoreResponse<Vec<i32>> = StoreResponse::error("Category name already exists");
        match require_data(envelope, "numbers") {
            Err(ClientError::Remote(message)) => {
                assert_eq!(message, "Category name already exists");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn require_data_flags_success_without_data() {
        let envelope: StoreResponse<Vec<i32>> = StoreResponse {
            success: true,
            message: "ok".into(),
            data: None,
        };
        assert!(matches!(
            require_data(envelope, "numbers"),
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[test]
    fn require_ack_resolves_to_the_message() {
        let envelope: Ack = StoreResponse {
            success: true,
            message: "Category created".into(),
            data: None,
        };
        assert_eq!(require_ack(envelope).unwrap(), "Category created");
    }
}
