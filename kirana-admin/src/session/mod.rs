//! Entity edit sessions
//!
//! One session owns one draft — a value copy of a stored entity, or a
//! fresh blank — and runs the create/update protocol against the store.
//! A successful submit fires the host hooks in a fixed order: refresh
//! first, so the list view re-fetches server truth, then close. Any
//! failure leaves the session open with the draft intact for a retry.
//!
//! Deletes run beside the sessions: confirm, request, notify, refresh.
//! No open session is required and the close hook is never fired.

mod category;
mod product;
mod subcategory;

pub use category::{CategorySession, delete_category};
pub use product::{ProductSession, delete_product};
pub use subcategory::{SubcategorySession, delete_subcategory};

use async_trait::async_trait;

use crate::error::EditResult;
use crate::notify::{NoticeKind, Notifier};

/// Whether the draft started blank or from a stored entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Edit,
}

/// Hooks a session fires after a successful mutation
#[async_trait]
pub trait SessionHost: Send {
    /// Re-fetch the authoritative list the mutation touched.
    async fn refresh(&mut self);

    /// End the session; the editor surface goes away.
    fn close(&mut self);
}

/// How a delete request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Store acknowledged; carries its message
    Deleted(String),
    /// User declined the confirmation; nothing was sent
    Cancelled,
}

/// Shared tail of every submit: notify, then refresh, then close.
async fn settle_submit<H: SessionHost>(
    sent: EditResult<String>,
    entity: &'static str,
    host: &mut H,
    notifier: &dyn Notifier,
) -> EditResult<String> {
    match sent {
        Ok(ack) => {
            tracing::info!(entity, message = %ack, "draft submitted");
            notifier.notify(NoticeKind::Success, &ack);
            host.refresh().await;
            host.close();
            Ok(ack)
        }
        Err(err) => {
            tracing::warn!(entity, error = %err, "submit failed, draft kept");
            notifier.notify(NoticeKind::Error, &err.to_string());
            Err(err)
        }
    }
}

/// Shared tail of every delete: notify, then refresh. No close hook.
async fn settle_delete<H: SessionHost>(
    sent: EditResult<String>,
    entity: &'static str,
    host: &mut H,
    notifier: &dyn Notifier,
) -> EditResult<DeleteOutcome> {
    match sent {
        Ok(ack) => {
            tracing::info!(entity, message = %ack, "entity deleted");
            notifier.notify(NoticeKind::Success, &ack);
            host.refresh().await;
            Ok(DeleteOutcome::Deleted(ack))
        }
        Err(err) => {
            tracing::warn!(entity, error = %err, "delete failed");
            notifier.notify(NoticeKind::Error, &err.to_string());
            Err(err)
        }
    }
}
