//! Category admin page

use std::sync::Arc;

use kirana_client::{AssetHost, CatalogStore, UploadFile};
use shared::models::Category;

use crate::error::{EditError, EditResult};
use crate::list::CatalogList;
use crate::modal::{ScrollGuard, ScrollLock};
use crate::notify::{ConfirmDelete, NoticeKind, Notifier};
use crate::pages::ListRefresh;
use crate::session::{CategorySession, DeleteOutcome, delete_category};

struct Editor {
    session: CategorySession,
    _guard: ScrollGuard,
}

/// Category list plus at most one open editor modal
pub struct CategoryPage {
    store: Arc<dyn CatalogStore>,
    assets: Arc<dyn AssetHost>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmDelete>,
    scroll: ScrollLock,
    list: CatalogList<Category>,
    editor: Option<Editor>,
}

impl CategoryPage {
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

    /// Re-fetch the category snapshot.
    pub async fn load(&mut self) -> EditResult<()> {
        self.list.load(self.store.as_ref()).await
    }

    pub fn list(&self) -> &CatalogList<Category> {
        &self.list
    }

    pub fn session(&self) -> Option<&CategorySession> {
        self.editor.as_ref().map(|e| &e.session)
    }

    pub fn session_mut(&mut self) -> Option<&mut CategorySession> {
        self.editor.as_mut().map(|e| &mut e.session)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Open the Add-Category modal with a blank draft.
    pub fn open_create(&mut self) {
        self.editor = Some(Editor {
            session: CategorySession::create(),
            _guard: self.scroll.engage(),
        });
    }

    /// Open the editor on the snapshot entry at `index`; the draft is a
    /// value copy, the snapshot stays untouched.
    pub fn open_edit(&mut self, index: usize) -> EditResult<()> {
        let category = self.list.get(index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.list.len(),
        })?;
        self.editor = Some(Editor {
            session: CategorySession::edit(category),
            _guard: self.scroll.engage(),
        });
        Ok(())
    }

    /// Discard the draft and release the scroll lock.
    pub fn cancel(&mut self) {
        self.editor = None;
    }

    /// Upload files into the open draft; failures are notified per file
    /// and the successful ones append in completion order.
    pub async fn upload_images(&mut self, files: Vec<UploadFile>) -> EditResult<usize> {
        let Some(editor) = self.editor.as_mut() else {
            return Err(EditError::validation("No category editor is open"));
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

    /// Submit the open draft; on success the list re-fetches and the
    /// modal closes, on failure both stay as they are.
    pub async fn submit(&mut self) -> EditResult<String> {
        let Some(editor) = &self.editor else {
            return Err(EditError::validation("No category editor is open"));
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
        delete_category(
            self.store.as_ref(),
            id,
            self.confirm.as_ref(),
            self.notifier.as_ref(),
            &mut hook,
        )
        .await
    }
}
