//! Subcategory admin page

use std::sync::Arc;

use kirana_client::{AssetHost, CatalogStore, UploadFile};
use shared::models::Subcategory;

use crate::error::{EditError, EditResult};
use crate::list::CatalogList;
use crate::modal::{ScrollGuard, ScrollLock};
use crate::notify::{ConfirmDelete, NoticeKind, Notifier};
use crate::pages::ListRefresh;
use crate::session::{DeleteOutcome, SubcategorySession, delete_subcategory};

struct Editor {
    session: SubcategorySession,
    _guard: ScrollGuard,
}

/// Subcategory list plus at most one open editor modal
pub struct SubcategoryPage {
    store: Arc<dyn CatalogStore>,
    assets: Arc<dyn AssetHost>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmDelete>,
    scroll: ScrollLock,
    list: CatalogList<Subcategory>,
    editor: Option<Editor>,
}

impl SubcategoryPage {
    pub fn new(
        store: Arc<dyn CatalogStore>,
        assets: Arc<dyn AssetHost>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmDelete>,
        scroll: ScrollLock,
    ) -> Self {
        Self {
            store,
            assets,
            notifier,
            confirm,
            scroll,
            list: CatalogList::new(),
            editor: None,
        }
    }

    /// Re-fetch the subcategory snapshot.
    pub async fn load(&mut self) -> EditResult<()> {
        self.list.load(self.store.as_ref()).await
    }

    pub fn list(&self) -> &CatalogList<Subcategory> {
        &self.list
    }

    pub fn session(&self) -> Option<&SubcategorySession> {
        self.editor.as_ref().map(|e| &e.session)
    }

    pub fn session_mut(&mut self) -> Option<&mut SubcategorySession> {
        self.editor.as_mut().map(|e| &mut e.session)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Open a blank draft; the category dropdown loads before the modal
    /// is usable. A failed load leaves the modal open with an empty
    /// dropdown and surfaces the error.
    pub async fn open_create(&mut self) -> EditResult<()> {
        let mut session = SubcategorySession::create();
        let loaded = session.load_references(self.store.as_ref()).await;
        self.editor = Some(Editor {
            session,
            _guard: self.scroll.engage(),
        });
        loaded
    }

    /// Open the editor on the snapshot entry at `index`.
    pub async fn open_edit(&mut self, index: usize) -> EditResult<()> {
        let subcategory = self.list.get(index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.list.len(),
        })?;
        let mut session = SubcategorySession::edit(subcategory);
        let loaded = session.load_references(self.store.as_ref()).await;
        self.editor = Some(Editor {
            session,
            _guard: self.scroll.engage(),
        });
        loaded
    }

    /// Discard the draft and release the scroll lock.
    pub fn cancel(&mut self) {
        self.editor = None;
    }

    /// Upload files into the open draft.
    pub async fn upload_images(&mut self, files: Vec<UploadFile>) -> EditResult<usize> {
        let Some(editor) = self.editor.as_mut() else {
            return Err(EditError::validation("No subcategory editor is open"));
        };
        let before = editor.session.images().len();
        let failures = editor
            .session
            .images_mut()
            .upload_batch(self.assets.as_ref(), files)
            .await;
        for failure in &failures {
            self.notifier.notify(NoticeKind::Error, &failure.to_string());
        }
        Ok(editor.session.images().len() - before)
    }

    /// Submit the open draft; closes the modal only on success.
    pub async fn submit(&mut self) -> EditResult<String> {
        let Some(editor) = &self.editor else {
            return Err(EditError::validation("No subcategory editor is open"));
        };
        let mut hook = ListRefresh::new(self.store.as_ref(), &mut self.list);
        let outcome = editor
            .session
            .submit(self.store.as_ref(), &mut hook, self.notifier.as_ref())
            .await;
        if hook.closed() {
            self.editor = None;
        }
        outcome
    }

    /// Confirm-then-delete; a successful delete re-fetches the list.
    pub async fn delete(&mut self, id: &str) -> EditResult<DeleteOutcome> {
        let mut hook = ListRefresh::new(self.store.as_ref(), &mut self.list);
        delete_subcategory(
            self.store.as_ref(),
            id,
            self.confirm.as_ref(),
            self.notifier.as_ref(),
            &mut hook,
        )
        .await
    }
}
