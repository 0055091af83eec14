//! Catalog endpoints.

use reqwest::Method;
use serde::Deserialize;

use crate::admin::{ProductBackend, ProductSubmission};
use crate::client::ApiClient;
use crate::config;
use crate::error::Result;
use crate::models::Product;

/// The backend answers either with the bare record or wrapped in `product`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductPayload {
    Wrapped { product: Product },
    Bare(Product),
}

impl From<ProductPayload> for Product {
    fn from(payload: ProductPayload) -> Self {
        match payload {
            ProductPayload::Wrapped { product } => product,
            ProductPayload::Bare(product) => product,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductListPayload {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

pub struct ProductApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Product>> {
        let payload: ProductListPayload = self.client.get_json(config::PRODUCTS_PATH)?;
        Ok(match payload {
            ProductListPayload::Wrapped { products } => products,
            ProductListPayload::Bare(products) => products,
        })
    }

    pub fn get(&self, product_id: &str) -> Result<Product> {
        let payload: ProductPayload = self.client.get_json(&product_path(product_id))?;
        Ok(payload.into())
    }

    pub fn create(&self, submission: &ProductSubmission) -> Result<Product> {
        let payload: ProductPayload = self.client.send_multipart(
            Method::POST,
            config::PRODUCTS_PATH,
            submission.to_form()?,
        )?;
        Ok(payload.into())
    }

    pub fn update(&self, product_id: &str, submission: &ProductSubmission) -> Result<Product> {
        let payload: ProductPayload = self.client.send_multipart(
            Method::PUT,
            &product_path(product_id),
            submission.to_form()?,
        )?;
        Ok(payload.into())
    }
}

impl ProductBackend for ProductApi<'_> {
    fn create_product(&self, submission: &ProductSubmission) -> Result<Product> {
        self.create(submission)
    }

    fn update_product(&self, product_id: &str, submission: &ProductSubmission) -> Result<Product> {
        self.update(product_id, submission)
    }
}

pub fn product_path(product_id: &str) -> String {
    format!("{}/{}", config::PRODUCTS_PATH, product_id)
}
