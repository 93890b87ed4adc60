//! Category edit session

use kirana_client::CatalogStore;
use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::assets::AssetList;
use crate::error::EditResult;
use crate::notify::{ConfirmDelete, Notifier};
use crate::session::{DeleteOutcome, SessionHost, SessionMode, settle_delete, settle_submit};
use crate::validation::{MAX_NAME_LEN, validate_image_urls, validate_required_text};

/// Draft of one category, blank or copied from a list card
#[derive(Debug, Clone)]
pub struct CategorySession {
    id: Option<String>,
    name: String,
    images: AssetList,
}

impl CategorySession {
    /// Blank draft for the Add-Category flow.
    pub fn create() -> Self {
        Self {
            id: None,
            name: String::new(),
            images: AssetList::new(),
        }
    }

    /// Draft copied from a stored category; edits never touch `category`.
    pub fn edit(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            images: AssetList::from_urls(category.images.clone()),
        }
    }

    pub fn mode(&self) -> SessionMode {
        if self.id.is_some() {
            SessionMode::Edit
        } else {
            SessionMode::Create
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn images(&self) -> &AssetList {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut AssetList {
        &mut self.images
    }

    /// A category needs a name and at least one image.
    pub fn validate(&self) -> EditResult<()> {
        validate_required_text(&self.name, "Category name", MAX_NAME_LEN)?;
        validate_image_urls(self.images.urls(), "Category")?;
        Ok(())
    }

    fn create_payload(&self) -> CategoryCreate {
        CategoryCreate {
            name: self.name.trim().to_string(),
            images: self.images.urls().to_vec(),
        }
    }

    fn update_payload(&self) -> CategoryUpdate {
        CategoryUpdate {
            name: self.name.trim().to_string(),
            images: self.images.urls().to_vec(),
        }
    }

    /// Validate and send the draft, then run the refresh/close hooks.
    ///
    /// Validation errors return before any request and skip the
    /// notifier; they surface inline at the form. Store errors are
    /// notified and leave the draft intact.
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
        let sent = match &self.id {
            None => store.create_category(&self.create_payload()).await,
            Some(id) => store.update_category(id, &self.update_payload()).await,
        };
        settle_submit(sent.map_err(Into::into), "category", host, notifier).await
    }
}

/// Confirm-then-delete for a category.
///
/// Deleting does not cascade: subcategories keep their now-dangling
/// `categoryId` until their own lists are reloaded.
pub async fn delete_category<S, H>(
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
    if !confirm.confirm("Delete this category?").await {
        return Ok(DeleteOutcome::Cancelled);
    }
    let sent = store.delete_category(id).await;
    settle_delete(sent.map_err(Into::into), "category", host, notifier).await
}
