//! Product admin page

use std::sync::Arc;

use kirana_client::{AssetHost, CatalogStore, UploadFile};
use shared::models::Product;

use crate::error::{EditError, EditResult};
use crate::list::CatalogList;
use crate::modal::{ScrollGuard, ScrollLock};
use crate::notify::{ConfirmDelete, NoticeKind, Notifier};
use crate::pages::ListRefresh;
use crate::session::{DeleteOutcome, ProductSession, delete_product};

struct Editor {
    session: ProductSession,
    _guard: ScrollGuard,
}

/// Product list plus at most one open editor modal
pub struct ProductPage {
    store: Arc<dyn CatalogStore>,
    assets: Arc<dyn AssetHost>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmDelete>,
    scroll: ScrollLock,
    list: CatalogList<Product>,
    editor: Option<Editor>,
}

impl ProductPage {
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

    /// Re-fetch the product snapshot.
    pub async fn load(&mut self) -> EditResult<()> {
        self.list.load(self.store.as_ref()).await
    }

    pub fn list(&self) -> &CatalogList<Product> {
        &self.list
    }

    pub fn session(&self) -> Option<&ProductSession> {
        self.editor.as_ref().map(|e| &e.session)
    }

    pub fn session_mut(&mut self) -> Option<&mut ProductSession> {
        self.editor.as_mut().map(|e| &mut e.session)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Open a blank draft with the category dropdown loaded.
    pub async fn open_create(&mut self) -> EditResult<()> {
        let mut session = ProductSession::create();
        let loaded = session.load_references(self.store.as_ref()).await;
        self.editor = Some(Editor {
            session,
            _guard: self.scroll.engage(),
        });
        loaded
    }

    /// Open the editor on the snapshot entry at `index`; reference data
    /// (categories and the restored selection's subcategory candidates)
    /// loads alongside.
    pub async fn open_edit(&mut self, index: usize) -> EditResult<()> {
        let product = self.list.get(index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.list.len(),
        })?;
        let mut session = ProductSession::edit(product);
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

    /// Switch the draft's category; the subcategory selection clears
    /// before the new candidates resolve.
    pub async fn change_category(&mut self, category_id: &str) -> EditResult<()> {
        let Some(editor) = self.editor.as_mut() else {
            return Err(EditError::validation("No product editor is open"));
        };
        editor
            .session
            .change_category(self.store.as_ref(), category_id)
            .await
    }

    /// Upload files into the open draft.
    pub async fn upload_images(&mut self, files: Vec<UploadFile>) -> EditResult<usize> {
        let Some(editor) = self.editor.as_mut() else {
            return Err(EditError::validation("No product editor is open"));
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
            return Err(EditError::validation("No product editor is open"));
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
        delete_product(
            self.store.as_ref(),
            id,
            self.confirm.as_ref(),
            self.notifier.as_ref(),
            &mut hook,
        )
        .await
    }
}
