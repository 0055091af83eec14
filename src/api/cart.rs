//! Cart endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::checkout::CartBackend;
use crate::client::ApiClient;
use crate::config;
use crate::error::Result;
use crate::models::{Cart, CartLine};

/// `PUT /cart/update` and `PUT /cart/update/min` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityUpdate<'a> {
    pub product_id: &'a str,
    pub quantity: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CartPayload {
    Cart(Cart),
    Lines(Vec<CartLine>),
}

pub struct CartApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CartApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn get(&self) -> Result<Cart> {
        let payload: CartPayload = self.client.get_json(config::CART_PATH)?;
        Ok(match payload {
            CartPayload::Cart(cart) => cart,
            CartPayload::Lines(lines) => Cart::new(lines),
        })
    }

    /// Raise a line to `quantity`.
    pub fn update(&self, product_id: &str, quantity: u32) -> Result<()> {
        self.put_quantity(config::CART_UPDATE_PATH, product_id, quantity)
    }

    /// Lower a line to `quantity`, toward the per-line minimum.
    pub fn update_min(&self, product_id: &str, quantity: u32) -> Result<()> {
        self.put_quantity(config::CART_UPDATE_MIN_PATH, product_id, quantity)
    }

    pub fn remove_line(&self, product_id: &str) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", config::CART_PATH, product_id))
    }

    fn put_quantity(&self, path: &str, product_id: &str, quantity: u32) -> Result<()> {
        let body = QuantityUpdate {
            product_id,
            quantity,
        };
        let _: serde_json::Value = self.client.send_json(Method::PUT, path, &body)?;
        Ok(())
    }
}

impl CartBackend for CartApi<'_> {
    fn fetch_cart(&self) -> Result<Cart> {
        self.get()
    }

    fn increment(&self, product_id: &str, quantity: u32) -> Result<()> {
        self.update(product_id, quantity)
    }

    fn decrement(&self, product_id: &str, quantity: u32) -> Result<()> {
        self.update_min(product_id, quantity)
    }

    fn remove(&self, product_id: &str) -> Result<()> {
        self.remove_line(product_id)
    }
}
