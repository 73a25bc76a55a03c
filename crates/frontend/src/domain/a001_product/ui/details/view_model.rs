use crate::domain::a001_product::api::ProductsApi;
use crate::domain::a001_product::ui::list::card::ProductCard;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ViewModel for the single product page
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub product: RwSignal<Option<Product>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    alive: Arc<AtomicBool>,
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            product: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn dispose(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Load the product with the given route id
    pub async fn load<A: ProductsApi + ?Sized>(&self, api: &A, raw_id: &str) {
        let id = match ProductId::from_string(raw_id) {
            Ok(id) => id,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        self.loading.set(true);
        let result = api.fetch_product(&id).await;
        if !self.is_alive() {
            return;
        }

        self.loading.set(false);
        match result {
            Ok(product) => {
                self.product.set(Some(product));
                self.error.set(None);
            }
            Err(e) => {
                log::error!("Failed to load product {}: {}", id, e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    pub fn card(&self) -> Option<ProductCard> {
        self.product.with(|p| p.as_ref().map(ProductCard::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::test_support::{product, reactive_owner, FakeApi};
    use crate::shared::error::ApiError;
    use futures::executor::block_on;

    #[test]
    fn test_load_existing_product() {
        let _owner = reactive_owner();
        let api = FakeApi::with_products(vec![product("7", "cheese burger", 1050)]);
        let vm = ProductDetailsViewModel::new();

        block_on(vm.load(&api, "7"));

        let card = vm.card().unwrap();
        assert_eq!(card.name, "Cheese Burger");
        assert_eq!(card.price, "$10.5");
        assert!(!vm.loading.get_untracked());
        assert!(vm.error.get_untracked().is_none());
    }

    #[test]
    fn test_missing_product_reports_not_found() {
        let _owner = reactive_owner();
        let api = FakeApi::with_products(vec![]);
        let vm = ProductDetailsViewModel::new();

        block_on(vm.load(&api, "404"));

        assert!(vm.card().is_none());
        assert_eq!(vm.error.get_untracked().as_deref(), Some("Not found"));
    }

    #[test]
    fn test_blank_id_skips_request() {
        let _owner = reactive_owner();
        let api = FakeApi::default();
        let vm = ProductDetailsViewModel::new();

        block_on(vm.load(&api, "  "));

        assert_eq!(api.fetch_calls(), 0);
        assert!(vm.error.get_untracked().is_some());
    }

    #[test]
    fn test_result_after_dispose_is_dropped() {
        let _owner = reactive_owner();
        let api = FakeApi::with_products(vec![product("1", "taco", 300)])
            .failing_fetch(ApiError::Network("Network Error".into()));
        let vm = ProductDetailsViewModel::new();
        vm.dispose();

        block_on(vm.load(&api, "1"));

        assert!(vm.error.get_untracked().is_none());
        assert!(vm.product.get_untracked().is_none());
    }
}
