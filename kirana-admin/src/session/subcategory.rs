//! Subcategory edit session

use kirana_client::CatalogStore;
use shared::models::{Subcategory, SubcategoryCreate, SubcategoryUpdate};

use crate::assets::AssetList;
use crate::error::{EditError, EditResult};
use crate::notify::{ConfirmDelete, Notifier};
use crate::resolver::SubcategoryResolver;
use crate::session::{DeleteOutcome, SessionHost, SessionMode, settle_delete, settle_submit};
use crate::validation::{MAX_NAME_LEN, validate_required_text, validate_url_list};

/// Draft of one subcategory plus the category dropdown backing it
///
/// Images are optional here; a subcategory only needs a name and a
/// parent category.
#[derive(Debug)]
pub struct SubcategorySession {
    id: Option<String>,
    name: String,
    images: AssetList,
    resolver: SubcategoryResolver,
}

impl SubcategorySession {
    /// Blank draft; call [`load_references`](Self::load_references)
    /// before showing the category dropdown.
    pub fn create() -> Self {
        Self {
            id: None,
            name: String::new(),
            images: AssetList::new(),
            resolver: SubcategoryResolver::new(),
        }
    }

    /// Draft copied from a stored subcategory.
    pub fn edit(subcategory: &Subcategory) -> Self {
        let mut resolver = SubcategoryResolver::new();
        let category_id = (!subcategory.category_id.is_empty())
            .then(|| subcategory.category_id.clone());
        resolver.restore(category_id, None);
        Self {
            id: Some(subcategory.id.clone()),
            name: subcategory.name.clone(),
            images: AssetList::from_urls(subcategory.images.clone()),
            resolver,
        }
    }

    /// Fill the category dropdown from the store.
    pub async fn load_references<S>(&mut self, store: &S) -> EditResult<()>
    where
        S: CatalogStore + ?Sized,
    {
        self.resolver.load_categories(store).await
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

    pub fn resolver(&self) -> &SubcategoryResolver {
        &self.resolver
    }

    /// Pick the parent category from the dropdown.
    pub fn select_category(&mut self, category_id: &str) -> EditResult<()> {
        self.resolver.select_category(category_id)
    }

    /// A subcategory needs a name and a parent category.
    pub fn validate(&self) -> EditResult<()> {
        validate_required_text(&self.name, "Subcategory name", MAX_NAME_LEN)?;
        validate_url_list(self.images.urls())?;
        if self.resolver.selected_category().is_none() {
            return Err(EditError::validation("Select a category first"));
        }
        Ok(())
    }

    fn create_payload(&self) -> SubcategoryCreate {
        SubcategoryCreate {
            name: self.name.trim().to_string(),
            images: self.images.urls().to_vec(),
        }
    }

    fn update_payload(&self, category_id: &str) -> SubcategoryUpdate {
        SubcategoryUpdate {
            name: self.name.trim().to_string(),
            category_id: category_id.to_string(),
            images: self.images.urls().to_vec(),
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
        // validate() guarantees the selection
        let category_id = self
            .resolver
            .selected_category()
            .ok_or_else(|| EditError::validation("Select a category first"))?
            .to_string();
        let sent = match &self.id {
            None => {
                store
                    .create_subcategory(&category_id, &self.create_payload())
                    .await
            }
            Some(id) => {
                store
                    .update_subcategory(id, &self.update_payload(&category_id))
                    .await
            }
        };
        settle_submit(sent.map_err(Into::into), "subcategory", host, notifier).await
    }
}

/// Confirm-then-delete for a subcategory.
pub async fn delete_subcategory<S, H>(
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
    if !confirm.confirm("Delete this subcategory?").await {
        return Ok(DeleteOutcome::Cancelled);
    }
    let sent = store.delete_subcategory(id).await;
    settle_delete(sent.map_err(Into::into), "subcategory", host, notifier).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Subcategory {
        Subcategory {
            id: "77b2".into(),
            name: "Chips".into(),
            category_id: "65a1".into(),
            images: vec![],
        }
    }

    #[test]
    fn edit_restores_the_parent_reference() {
        let session = SubcategorySession::edit(&stored());
        assert_eq!(session.mode(), SessionMode::Edit);
        assert_eq!(session.resolver().selected_category(), Some("65a1"));
    }

    #[test]
    fn validate_requires_name_and_parent() {
        let mut blank = SubcategorySession::create();
        assert!(matches!(blank.validate(), Err(EditError::Validation(_))));

        blank.set_name("Chips");
        assert!(matches!(blank.validate(), Err(EditError::Validation(_))));

        // with a restored parent and no images it passes
        let mut session = SubcategorySession::edit(&stored());
        session.set_name("Chips");
        assert!(session.validate().is_ok());
    }

    #[test]
    fn update_payload_carries_the_parent_id() {
        let session = SubcategorySession::edit(&stored());
        let payload = session.update_payload("65a1");
        assert_eq!(payload.category_id, "65a1");
        assert_eq!(payload.name, "Chips");
    }
}
