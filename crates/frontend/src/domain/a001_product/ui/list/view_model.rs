use super::card::ProductCard;
use super::state::{create_state, LoadPhase, ProductListState};
use crate::shared::notice::NoticeMessage;
use crate::domain::a001_product::api::ProductsApi;
use contracts::domain::a001_product::aggregate::ProductId;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ViewModel for the product list
///
/// Owns the list state for one mounted view. Async results that arrive after
/// `dispose` are dropped.
#[derive(Clone)]
pub struct ProductListViewModel {
    pub state: RwSignal<ProductListState>,
    alive: Arc<AtomicBool>,
    fetch_started: Arc<AtomicBool>,
}

impl Default for ProductListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListViewModel {
    pub fn new() -> Self {
        Self {
            state: create_state(),
            alive: Arc::new(AtomicBool::new(true)),
            fetch_started: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Called from `on_cleanup` when the view is torn down
    pub fn dispose(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    fn update(&self, f: impl FnOnce(&mut ProductListState)) {
        if self.is_alive() {
            self.state.update(f);
        }
    }

    /// Fetches the product list. Only the first call per view model issues a
    /// request.
    pub async fn on_mount<A: ProductsApi + ?Sized>(&self, api: &A) {
        if self.fetch_started.swap(true, Ordering::SeqCst) || !self.is_alive() {
            return;
        }

        self.update(ProductListState::begin_load);
        log::debug!("Fetching products");

        let result = api.fetch_products().await.map_err(|e| e.to_string());
        if let Err(e) = &result {
            log::error!("Failed to load products: {}", e);
        }
        self.update(|s| s.finish_load(result));
    }

    pub fn request_delete(&self, id: ProductId) {
        self.update(|s| s.request_delete(id));
    }

    pub fn cancel_delete(&self) {
        self.update(ProductListState::cancel_delete);
    }

    /// Deletes the product under confirmation.
    ///
    /// The local list changes only after the remote delete succeeds. A
    /// failure keeps the product, raises a notice and still closes the modal.
    pub async fn confirm_delete<A: ProductsApi + ?Sized>(&self, api: &A) {
        if !self.is_alive() {
            return;
        }
        let Some(id) = self.state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };

        let result = api.delete_product(&id).await;
        match &result {
            Ok(()) => log::info!("Product with ID {} deleted successfully.", id),
            Err(e) => log::error!("Error deleting product with ID {}: {}", id, e),
        }

        let result = result.map_err(|e| format!("Could not delete product: {}", e));
        self.update(|s| s.finish_delete(&id, result));
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.update(|s| s.dismiss_notice(id));
    }

    /// Cards for the current products, in server order
    pub fn cards(&self) -> Vec<ProductCard> {
        self.state.with(|s| {
            s.products
                .as_ref()
                .map(|products| products.iter().map(ProductCard::from).collect())
                .unwrap_or_default()
        })
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.with(ProductListState::phase)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn is_deleting(&self) -> bool {
        self.state.with(|s| s.deleting)
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.with(|s| s.modal_open)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn notice(&self) -> Option<NoticeMessage> {
        self.state.with(|s| s.notice.clone())
    }
}
