//! Category reference resolver
//!
//! Keeps the category dropdown and the dependent subcategory candidate
//! list consistent: changing the category drops the subcategory
//! selection before anything else happens, then repopulates the
//! candidates, so a stale subcategory id can never ride along into a
//! payload.

use kirana_client::{CatalogStore, ClientResult};
use shared::models::{Category, Subcategory};

use crate::error::{EditError, EditResult};

/// Candidate-list loading state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveState {
    /// No category selected yet
    #[default]
    Idle,
    /// Candidate fetch in flight; the candidate list is empty
    Loading,
    /// Candidates reflect the selected category
    Loaded,
    /// Last fetch failed; the candidate list is empty
    Failed,
}

/// What a category change still needs to finish resolving
enum CandidateSource {
    /// The selected category carried its subcategories inline
    Embedded(Vec<Subcategory>),
    /// Candidates must be fetched; the store keys that route by name
    Remote { category_name: String },
    /// The id is not in the loaded category list
    Unknown,
}

#[derive(Debug, Default)]
pub struct SubcategoryResolver {
    categories: Vec<Category>,
    candidates: Vec<Subcategory>,
    selected_category: Option<String>,
    selected_subcategory: Option<String>,
    state: ResolveState,
}

impl SubcategoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the category dropdown from the store.
    pub async fn load_categories<S>(&mut self, store: &S) -> EditResult<()>
    where
        S: CatalogStore + ?Sized,
    {
        self.categories = store.list_categories().await?;
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn candidates(&self) -> &[Subcategory] {
        &self.candidates
    }

    pub fn state(&self) -> ResolveState {
        self.state
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn selected_subcategory(&self) -> Option<&str> {
        self.selected_subcategory.as_deref()
    }

    /// Name of the selected category, if it is in the loaded list.
    pub fn selected_category_name(&self) -> Option<&str> {
        let id = self.selected_category.as_deref()?;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Restore a stored selection without candidate checks; for edit
    /// sessions opening on entity data.
    pub fn restore(&mut self, category_id: Option<String>, subcategory_id: Option<String>) {
        self.selected_category = category_id;
        self.selected_subcategory = subcategory_id;
    }

    /// Clear the whole selection (the blank "Select Category" row).
    pub fn clear_selection(&mut self) {
        self.selected_category = None;
        self.selected_subcategory = None;
        self.candidates.clear();
        self.state = ResolveState::Idle;
    }

    /// Clear only the subcategory (the blank dropdown row).
    pub fn clear_subcategory(&mut self) {
        self.selected_subcategory = None;
    }

    /// Select a category without resolving candidates; for editors that
    /// only need the parent reference.
    pub fn select_category(&mut self, category_id: &str) -> EditResult<()> {
        if !self.categories.iter().any(|c| c.id == category_id) {
            return Err(EditError::validation(format!(
                "Unknown category: {category_id}"
            )));
        }
        self.selected_category = Some(category_id.to_string());
        self.selected_subcategory = None;
        self.candidates.clear();
        self.state = ResolveState::Idle;
        Ok(())
    }

    /// Select a subcategory from the current candidates.
    pub fn select_subcategory(&mut self, subcategory_id: &str) -> EditResult<()> {
        if !self.candidates.iter().any(|s| s.id == subcategory_id) {
            return Err(EditError::validation(format!(
                "Subcategory {subcategory_id} is not under the selected category"
            )));
        }
        self.selected_subcategory = Some(subcategory_id.to_string());
        Ok(())
    }

    /// Change the selected category and repopulate the candidates.
    ///
    /// On fetch failure the new selection stands, the candidate list
    /// stays empty and the error is returned.
    pub async fn change_category<S>(&mut self, store: &S, category_id: &str) -> EditResult<()>
    where
        S: CatalogStore + ?Sized,
    {
        match self.begin_change(category_id) {
            CandidateSource::Embedded(subcategories) => {
                self.candidates = subcategories;
                self.state = ResolveState::Loaded;
                Ok(())
            }
            CandidateSource::Remote { category_name } => {
                self.finish_remote(store.subcategories_of(&category_name).await)
            }
            CandidateSource::Unknown => {
                self.state = ResolveState::Failed;
                Err(EditError::validation(format!(
                    "Unknown category: {category_id}"
                )))
            }
        }
    }

    /// Reload candidates for the current selection, keeping the chosen
    /// subcategory; for edit sessions opening on entity data.
    pub async fn refresh_candidates<S>(&mut self, store: &S) -> EditResult<()>
    where
        S: CatalogStore + ?Sized,
    {
        let Some(category_id) = self.selected_category.clone() else {
            return Ok(());
        };
        let kept = self.selected_subcategory.take();
        let outcome = self.change_category(store, &category_id).await;
        self.selected_subcategory = kept;
        outcome
    }

    /// Sync phase of a category change: the old subcategory selection
    /// and candidates are gone before any fetch begins.
    fn begin_change(&mut self, category_id: &str) -> CandidateSource {
        self.selected_category = Some(category_id.to_string());
        self.selected_subcategory = None;
        self.candidates.clear();
        self.state = ResolveState::Loading;

        let Some(category) = self.categories.iter().find(|c| c.id == category_id) else {
            return CandidateSource::Unknown;
        };
        if category.subcategories.is_empty() {
            CandidateSource::Remote {
                category_name: category.name.clone(),
            }
        } else {
            CandidateSource::Embedded(category.subcategories.clone())
        }
    }

    fn finish_remote(&mut self, fetched: ClientResult<Vec<Subcategory>>) -> EditResult<()> {
        match fetched {
            Ok(subcategories) => {
                self.candidates = subcategories;
                self.state = ResolveState::Loaded;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "subcategory candidate fetch failed");
                self.state = ResolveState::Failed;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str, subcategories: Vec<Subcategory>) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            images: vec![],
            subcategories,
        }
    }

    fn subcategory(id: &str, name: &str, category_id: &str) -> Subcategory {
        Subcategory {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            images: vec![],
        }
    }

    fn resolver_with_two_categories() -> SubcategoryResolver {
        let mut resolver = SubcategoryResolver::new();
        resolver.categories = vec![
            category("c1", "Snacks", vec![subcategory("s1", "Chips", "c1")]),
            category("c2", "Dairy", vec![]),
        ];
        resolver
    }

    #[test]
    fn begin_change_clears_the_old_selection_before_any_fetch() {
        let mut resolver = resolver_with_two_categories();
        resolver.candidates = vec![subcategory("s1", "Chips", "c1")];
        resolver.selected_category = Some("c1".into());
        resolver.selected_subcategory = Some("s1".into());

        let source = resolver.begin_change("c2");

        assert!(matches!(source, CandidateSource::Remote { .. }));
        assert_eq!(resolver.selected_category(), Some("c2"));
        assert_eq!(resolver.selected_subcategory(), None);
        assert!(resolver.candidates().is_empty());
        assert_eq!(resolver.state(), ResolveState::Loading);
    }

    #[test]
    fn embedded_subcategories_resolve_without_a_fetch() {
        let mut resolver = resolver_with_two_categories();
        match resolver.begin_change("c1") {
            CandidateSource::Embedded(subs) => assert_eq!(subs[0].id, "s1"),
            _ => panic!("expected the embedded fast path"),
        }
    }

    #[test]
    fn unknown_ids_fail_the_change() {
        let mut resolver = resolver_with_two_categories();
        assert!(matches!(resolver.begin_change("ghost"), CandidateSource::Unknown));
    }

    #[test]
    fn select_subcategory_requires_a_current_candidate() {
        let mut resolver = resolver_with_two_categories();
        resolver.candidates = vec![subcategory("s1", "Chips", "c1")];

        assert!(resolver.select_subcategory("s1").is_ok());
        assert!(resolver.select_subcategory("s9").is_err());
        assert_eq!(resolver.selected_subcategory(), Some("s1"));
    }

    #[test]
    fn select_category_keeps_candidates_empty() {
        let mut resolver = resolver_with_two_categories();
        resolver.select_category("c2").unwrap();
        assert_eq!(resolver.selected_category(), Some("c2"));
        assert_eq!(resolver.state(), ResolveState::Idle);
        assert!(resolver.select_category("ghost").is_err());
    }

    #[test]
    fn clear_selection_resets_everything() {
        let mut resolver = resolver_with_two_categories();
        resolver.restore(Some("c1".into()), Some("s1".into()));
        resolver.clear_selection();
        assert_eq!(resolver.selected_category(), None);
        assert_eq!(resolver.selected_subcategory(), None);
        assert_eq!(resolver.state(), ResolveState::Idle);
    }
}
