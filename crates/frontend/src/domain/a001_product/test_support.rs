//! In-memory `ProductsApi` for view-model tests

use super::api::ProductsApi;
use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use futures::channel::oneshot;
use leptos::reactive::owner::Owner;
use std::cell::RefCell;
use std::rc::Rc;

pub fn product(id: &str, name: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        picture_url: format!("https://img.example.com/{}.png", id),
    }
}

/// Installs a reactive owner for signals created by the test.
pub fn reactive_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

#[derive(Default)]
struct FakeState {
    products: Vec<Product>,
    fetch_error: Option<ApiError>,
    delete_error: Option<ApiError>,
    create_error: Option<ApiError>,
    fetch_calls: usize,
    deleted: Vec<ProductId>,
    created: Vec<ProductDto>,
    fetch_gate: Option<oneshot::Receiver<()>>,
    delete_gate: Option<oneshot::Receiver<()>>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<FakeState>>,
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        let api = Self::default();
        api.state.borrow_mut().products = products;
        api
    }

    pub fn failing_fetch(self, err: ApiError) -> Self {
        self.state.borrow_mut().fetch_error = Some(err);
        self
    }

    pub fn failing_delete(self, err: ApiError) -> Self {
        self.state.borrow_mut().delete_error = Some(err);
        self
    }

    pub fn failing_create(self, err: ApiError) -> Self {
        self.state.borrow_mut().create_error = Some(err);
        self
    }

    /// Holds the next fetch until the returned sender fires (or is dropped).
    pub fn gate_fetch(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().fetch_gate = Some(rx);
        tx
    }

    /// Holds the next delete until the returned sender fires (or is dropped).
    pub fn gate_delete(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().delete_gate = Some(rx);
        tx
    }

    pub fn fetch_calls(&self) -> usize {
        self.state.borrow().fetch_calls
    }

    pub fn deleted(&self) -> Vec<ProductId> {
        self.state.borrow().deleted.clone()
    }

    pub fn created(&self) -> Vec<ProductDto> {
        self.state.borrow().created.clone()
    }
}

async fn pass(gate: Option<oneshot::Receiver<()>>) {
    if let Some(rx) = gate {
        let _ = rx.await;
    }
}

#[async_trait(?Send)]
impl ProductsApi for FakeApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let gate = {
            let mut state = self.state.borrow_mut();
            state.fetch_calls += 1;
            state.fetch_gate.take()
        };
        pass(gate).await;

        let state = self.state.borrow();
        match &state.fetch_error {
            Some(err) => Err(err.clone()),
            None => Ok(state.products.clone()),
        }
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let gate = {
            let mut state = self.state.borrow_mut();
            state.fetch_calls += 1;
            state.fetch_gate.take()
        };
        pass(gate).await;

        let state = self.state.borrow();
        if let Some(err) = &state.fetch_error {
            return Err(err.clone());
        }
        state
            .products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_product(&self, dto: &ProductDto) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.created.push(dto.clone());
        match &state.create_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let gate = {
            let mut state = self.state.borrow_mut();
            state.deleted.push(id.clone());
            state.delete_gate.take()
        };
        pass(gate).await;

        match &self.state.borrow().delete_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
