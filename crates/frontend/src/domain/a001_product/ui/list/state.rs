use crate::shared::notice::NoticeMessage;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use leptos::prelude::*;

/// Where the one-shot product fetch stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// UI state of one product list instance.
///
/// `products` is `None` until a fetch succeeds. After that it only changes by
/// dropping the entry of a confirmed, successful delete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductListState {
    pub products: Option<Vec<Product>>,
    pub loading: bool,
    pub error: Option<String>,
    pub pending_delete_id: Option<ProductId>,
    pub modal_open: bool,
    pub deleting: bool,
    pub notice: Option<NoticeMessage>,
    notice_seq: u64,
}

impl ProductListState {
    pub fn phase(&self) -> LoadPhase {
        if self.loading {
            LoadPhase::Loading
        } else if self.error.is_some() {
            LoadPhase::LoadFailed
        } else if self.products.is_some() {
            LoadPhase::Loaded
        } else {
            LoadPhase::Idle
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Product>, String>) {
        self.loading = false;
        match result {
            Ok(products) => {
                self.products = Some(products);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Opens the confirmation for `id`, replacing any previous target.
    /// Ignored while a delete is in flight.
    pub fn request_delete(&mut self, id: ProductId) {
        if self.deleting {
            return;
        }
        self.pending_delete_id = Some(id);
        self.modal_open = true;
    }

    /// Closes the confirmation. Ignored while a delete is in flight.
    pub fn cancel_delete(&mut self) {
        if self.deleting {
            return;
        }
        self.pending_delete_id = None;
        self.modal_open = false;
    }

    /// Marks the pending delete as in flight and returns its target, or
    /// `None` when there is nothing to confirm or a delete already runs.
    pub fn begin_delete(&mut self) -> Option<ProductId> {
        if !self.modal_open || self.deleting {
            return None;
        }
        let id = self.pending_delete_id.clone()?;
        self.deleting = true;
        Some(id)
    }

    /// Applies the outcome of the remote delete of `id` and closes the modal.
    pub fn finish_delete(&mut self, id: &ProductId, result: Result<(), String>) {
        self.deleting = false;
        self.modal_open = false;
        self.pending_delete_id = None;
        match result {
            Ok(()) => {
                if let Some(products) = self.products.as_mut() {
                    products.retain(|p| &p.id != id);
                }
            }
            Err(message) => {
                self.notice_seq += 1;
                self.notice = Some(NoticeMessage {
                    id: self.notice_seq,
                    text: message,
                });
            }
        }
    }

    /// Clears the notice if it is still the one with `id`.
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().map(|n| n.id) == Some(id) {
            self.notice = None;
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
