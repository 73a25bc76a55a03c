//! HTTP client for the products API

use crate::shared::api_utils::api_base;
use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use gloo_net::http::{Request, Response};

/// Remote product collection.
///
/// Views depend on this trait rather than on `HttpProductsApi` so they can be
/// driven without a browser.
#[async_trait(?Send)]
pub trait ProductsApi {
    /// `GET /products`
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/:id`
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError>;

    /// `POST /products`
    async fn create_product(&self, dto: &ProductDto) -> Result<(), ApiError>;

    /// `DELETE /products/:id`
    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpProductsApi {
    base: String,
}

impl HttpProductsApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client pointed at the configured API base
    pub fn from_config() -> Self {
        Self::new(api_base())
    }
}

pub fn products_url(base: &str) -> String {
    format!("{}/products", base)
}

pub fn product_url(base: &str, id: &ProductId) -> String {
    format!("{}/products/{}", base, urlencoding::encode(id.as_str()))
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    match response.status() {
        404 => Err(ApiError::NotFound),
        _ if response.ok() => Ok(()),
        status => Err(ApiError::Status(status)),
    }
}

#[async_trait(?Send)]
impl ProductsApi for HttpProductsApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = Request::get(&products_url(&self.base))
            .header("Accept", "application/json")
            .send()
            .await?;
        ensure_ok(&response)?;

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let response = Request::get(&product_url(&self.base, id))
            .header("Accept", "application/json")
            .send()
            .await?;
        ensure_ok(&response)?;

        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_product(&self, dto: &ProductDto) -> Result<(), ApiError> {
        let response = Request::post(&products_url(&self.base))
            .header("Accept", "application/json")
            .json(dto)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await?;
        ensure_ok(&response)
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let response = Request::delete(&product_url(&self.base, id))
            .header("Accept", "application/json")
            .send()
            .await?;
        ensure_ok(&response)
    }
}
