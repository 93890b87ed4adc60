//! Product edit session
//!
//! The widest draft: name, optional brand, description, a base price,
//! both list managers, and the category/subcategory resolver.

use kirana_client::CatalogStore;
use rust_decimal::Decimal;
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::assets::AssetList;
use crate::error::{EditError, EditResult};
use crate::notify::{ConfirmDelete, Notifier};
use crate::resolver::SubcategoryResolver;
use crate::session::{DeleteOutcome, SessionHost, SessionMode, settle_delete, settle_submit};
use crate::tiers::TierList;
use crate::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, parse_price, validate_image_urls, validate_required_text,
    validate_text_limit,
};

/// Draft of one product
#[derive(Debug)]
pub struct ProductSession {
    id: Option<String>,
    product_name: String,
    brand_name: String,
    description: String,
    /// Raw form input; parsed at validate/submit time
    price: String,
    images: AssetList,
    tiers: TierList,
    resolver: SubcategoryResolver,
}

impl ProductSession {
    /// Blank draft; call [`load_references`](Self::load_references)
    /// before showing the dropdowns.
    pub fn create() -> Self {
        Self {
            id: None,
            product_name: String::new(),
            brand_name: String::new(),
            description: String::new(),
            price: String::new(),
            images: AssetList::new(),
            tiers: TierList::new(),
            resolver: SubcategoryResolver::new(),
        }
    }

    /// Draft copied from a stored product.
    pub fn edit(product: &Product) -> Self {
        let mut resolver = SubcategoryResolver::new();
        resolver.restore(
            Some(product.category_id.clone()),
            product.subcategory_id.clone(),
        );
        Self {
            id: Some(product.id.clone()),
            product_name: product.product_name.clone(),
            brand_name: product.brand_name.clone().unwrap_or_default(),
            description: product.description.clone(),
            price: product.price.to_string(),
            images: AssetList::from_urls(product.images.clone()),
            tiers: TierList::from_tiers(product.quantity_options.clone()),
            resolver,
        }
    }

    /// Fill the category dropdown and, in edit mode, the subcategory
    /// candidates for the restored selection.
    pub async fn load_references<S>(&mut self, store: &S) -> EditResult<()>
    where
        S: CatalogStore + ?Sized,
    {
        self.resolver.load_categories(store).await?;
        self.resolver.refresh_candidates(store).await
    }

    pub fn mode(&self) -> SessionMode {
        if self.id.is_some() {
            SessionMode::Edit
        } else {
            SessionMode::Create
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.product_name = name.into();
    }

    pub fn set_brand_name(&mut self, brand: impl Into<String>) {
        self.brand_name = brand.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn images(&self) -> &AssetList {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut AssetList {
        &mut self.images
    }

    pub fn tiers(&self) -> &TierList {
        &self.tiers
    }

    pub fn tiers_mut(&mut self) -> &mut TierList {
        &mut self.tiers
    }

    pub fn resolver(&self) -> &SubcategoryResolver {
        &self.resolver
    }

    /// Switch category; drops the subcategory selection first, then
    /// repopulates the candidates (see [`SubcategoryResolver`]).
    pub async fn change_category<S>(&mut self, store: &S, category_id: &str) -> EditResult<()>
    where
        S: CatalogStore + ?Sized,
    {
        self.resolver.change_category(store, category_id).await
    }

    pub fn select_subcategory(&mut self, subcategory_id: &str) -> EditResult<()> {
        self.resolver.select_subcategory(subcategory_id)
    }

    pub fn clear_subcategory(&mut self) {
        self.resolver.clear_subcategory();
    }

    /// A product needs a name, a category, a positive base price, at
    /// least one image and at least one quantity tier. The subcategory
    /// stays optional.
    pub fn validate(&self) -> EditResult<()> {
        validate_required_text(&self.product_name, "Product name", MAX_NAME_LEN)?;
        validate_text_limit(&self.brand_name, "Brand name", MAX_NAME_LEN)?;
        validate_text_limit(&self.description, "Description", MAX_DESCRIPTION_LEN)?;
        if self.resolver.selected_category().is_none() {
            return Err(EditError::validation("Select a category first"));
        }
        let price = parse_price(&self.price, "Price")?;
        if price <= Decimal::ZERO {
            return Err(EditError::validation("Price must be greater than zero"));
        }
        validate_image_urls(self.images.urls(), "Product")?;
        if self.tiers.is_empty() {
            return Err(EditError::validation(
                "Add at least one quantity option",
            ));
        }
        Ok(())
    }

    fn brand(&self) -> Option<String> {
        let trimmed = self.brand_name.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn create_payload(&self, category_id: &str, price: Decimal) -> ProductCreate {
        ProductCreate {
            product_name: self.product_name.trim().to_string(),
            brand_name: self.brand(),
            category_id: category_id.to_string(),
            subcategory_id: self.resolver.selected_subcategory().map(str::to_string),
            images: self.images.urls().to_vec(),
            description: self.description.trim().to_string(),
            price,
            quantity_options: self.tiers.tiers().to_vec(),
        }
    }

    fn update_payload(&self, id: &str, category_id: &str, price: Decimal) -> ProductUpdate {
        ProductUpdate {
            id: id.to_string(),
            product_name: self.product_name.trim().to_string(),
            brand_name: self.brand(),
            category_id: category_id.to_string(),
            subcategory_id: self.resolver.selected_subcategory().map(str::to_string),
            images: self.images.urls().to_vec(),
            description: self.description.trim().to_string(),
            price,
            quantity_options: self.tiers.tiers().to_vec(),
        }
    }

    /// Validate and send the draft, then run the refresh/close hooks.
    pub async fn submit<S, H>(
        &self,
        store: &S,
        host: &mut H,
        notifier: &dyn Notifier,
    ) -> EditResult<String>
    where
        S: CatalogStore + ?Sized,
        H: SessionHost,
    {
        self.validate()?;
        // validate() guarantees both
        let category_id = self
            .resolver
            .selected_category()
            .ok_or_else(|| EditError::validation("Select a category first"))?
            .to_string();
        let price = parse_price(&self.price, "Price")?;
        let sent = match &self.id {
            None => {
                store
                    .create_product(&self.create_payload(&category_id, price))
                    .await
            }
            Some(id) => {
                store
                    .update_product(&self.update_payload(id, &category_id, price))
                    .await
            }
        };
        settle_submit(sent.map_err(Into::into), "product", host, notifier).await
    }
}

/// Confirm-then-delete for a product.
pub async fn delete_product<S, H>(
    store: &S,
    id: &str,
    confirm: &dyn ConfirmDelete,
    notifier: &dyn Notifier,
    host: &mut H,
) -> EditResult<DeleteOutcome>
where
    S: CatalogStore + ?Sized,
    H: SessionHost,
{
    if !confirm.confirm("Delete this product?").await {
        return Ok(DeleteOutcome::Cancelled);
    }
    let sent = store.delete_product(id).await;
    settle_delete(sent.map_err(Into::into), "product", host, notifier).await
}
