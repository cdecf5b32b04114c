//! Form store
//!
//! Owns the session's [`ShipmentForm`] and is the only writer. Every update
//! publishes a fresh snapshot over a `watch` channel so bound views re-render.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::path::{Edit, FlagPath, Section, TextPath};
use crate::models::ShipmentForm;

/// Description of one applied update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormChange {
    pub section: Section,
    /// `None` when a scalar section was replaced as a whole
    pub field: Option<&'static str>,
    pub revision: u64,
}

impl ShipmentForm {
    /// Produce the next record with one leaf replaced
    ///
    /// Structured sections are copied and replaced; all other sections keep
    /// their `Arc`. A scalar section is replaced with the value directly.
    pub fn with_edit(&self, edit: Edit) -> ShipmentForm {
        let mut next = self.clone();
        match edit {
            Edit::Text(TextPath::TrackingNumber, value) => next.tracking_number = value,
            Edit::Text(TextPath::Sender(field), value) => {
                Arc::make_mut(&mut next.sender).set(field, value);
            }
            Edit::Text(TextPath::Recipient(field), value) => {
                Arc::make_mut(&mut next.recipient).address.set(field, value);
            }
            Edit::Text(TextPath::RecipientCountry, value) => {
                Arc::make_mut(&mut next.recipient).country = value;
            }
            Edit::Text(TextPath::SenderContact, value) => {
                Arc::make_mut(&mut next.sender_notification).contact = value;
            }
            Edit::Text(TextPath::RecipientContact, value) => {
                Arc::make_mut(&mut next.recipient_notification).contact = value;
            }
            Edit::Flag(FlagPath::SenderNotification, value) => {
                Arc::make_mut(&mut next.sender_notification).enabled = value;
            }
            Edit::Flag(FlagPath::RecipientNotification, value) => {
                Arc::make_mut(&mut next.recipient_notification).enabled = value;
            }
            Edit::Flag(FlagPath::DeliveryConfirmation, value) => {
                Arc::make_mut(&mut next.options).delivery_confirmation = value;
            }
            Edit::Flag(FlagPath::Priority, value) => {
                Arc::make_mut(&mut next.options).priority = value;
            }
            Edit::Size(size) => Arc::make_mut(&mut next.options).size = size,
        }
        next
    }
}

/// Single owner of the session's shipment record
#[derive(Debug)]
pub struct FormStore {
    tx: watch::Sender<Arc<ShipmentForm>>,
    revision: u64,
}

impl FormStore {
    pub fn new() -> Self {
        Self::with_form(ShipmentForm::default())
    }

    /// Start from an existing record (e.g. one loaded from a JSON file)
    pub fn with_form(form: ShipmentForm) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(form));
        Self { tx, revision: 0 }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<ShipmentForm> {
        self.tx.borrow().clone()
    }

    /// Number of updates applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply one edit and notify subscribers
    #[instrument(skip(self, edit), fields(path = %edit.path()))]
    pub fn update(&mut self, edit: Edit) -> FormChange {
        let section = edit.section();
        let field = edit.field();

        let next = self.snapshot().with_edit(edit);
        self.revision += 1;
        self.tx.send_replace(Arc::new(next));

        debug!(revision = self.revision, subscribers = self.tx.receiver_count(), "form updated");
        FormChange {
            section,
            field,
            revision: self.revision,
        }
    }

    /// Subscribe to snapshots published after this call
    pub fn subscribe(&self) -> FormSubscription {
        FormSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Change feed for one bound view
#[derive(Debug, Clone)]
pub struct FormSubscription {
    rx: watch::Receiver<Arc<ShipmentForm>>,
}

impl FormSubscription {
    /// Latest snapshot if it changed since the last call
    pub fn latest(&mut self) -> Option<Arc<ShipmentForm>> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Latest snapshot regardless of whether it was already seen
    pub fn current(&self) -> Arc<ShipmentForm> {
        self.rx.borrow().clone()
    }

    /// Wait for the next update; `None` once the store is gone
    pub async fn changed(&mut self) -> Option<Arc<ShipmentForm>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
