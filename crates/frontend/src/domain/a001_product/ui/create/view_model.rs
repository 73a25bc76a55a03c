use crate::domain::a001_product::api::ProductsApi;
use crate::shared::format::parse_price;
use contracts::domain::a001_product::aggregate::ProductDto;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ViewModel for the create product form
///
/// Price is edited as text in major units and converted to minor units when
/// the form is submitted.
#[derive(Clone)]
pub struct ProductCreateViewModel {
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub picture_url: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    alive: Arc<AtomicBool>,
}

impl Default for ProductCreateViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCreateViewModel {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            picture_url: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn dispose(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    fn build_dto(&self) -> Result<ProductDto, String> {
        let dto = ProductDto {
            name: self.name.get_untracked().trim().to_string(),
            price: parse_price(&self.price.get_untracked())?,
            picture_url: self.picture_url.get_untracked().trim().to_string(),
        };
        dto.validate()?;
        Ok(dto)
    }

    /// Submit stays available while idle so `save` can report invalid input.
    pub fn can_submit(&self) -> bool {
        !self.saving.get()
    }

    /// Save form data to server
    ///
    /// Returns `true` once the product has been created. Validation and
    /// server errors end up in `error` and leave the form as it was.
    pub async fn save<A: ProductsApi + ?Sized>(&self, api: &A) -> bool {
        if self.saving.get_untracked() {
            return false;
        }

        let dto = match self.build_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return false;
            }
        };

        self.saving.set(true);
        self.error.set(None);
        let result = api.create_product(&dto).await;
        if !self.is_alive() {
            return false;
        }
        self.saving.set(false);

        match result {
            Ok(()) => {
                log::info!("Product {} created", dto.name);
                true
            }
            Err(e) => {
                log::error!("Failed to create product {}: {}", dto.name, e);
                self.error.set(Some(e.to_string()));
                false
            }
        }
    }
}
