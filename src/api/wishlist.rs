//! Wishlist endpoints, mirrored into the local session store.

use std::cell::RefCell;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::config;
use crate::error::Result;
use crate::models::Product;
use crate::session::SessionStore;

#[derive(Serialize)]
struct WishlistAdd<'a> {
    product_id: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WishlistPayload {
    Wrapped { wishlist: Vec<Product> },
    Bare(Vec<Product>),
}

pub struct WishlistApi<'a> {
    client: &'a ApiClient,
    session: &'a RefCell<SessionStore>,
}

impl<'a> WishlistApi<'a> {
    pub fn new(client: &'a ApiClient, session: &'a RefCell<SessionStore>) -> Self {
        Self { client, session }
    }

    /// Fetch the wishlist and replace the local mirror with it.
    pub fn list(&self) -> Result<Vec<Product>> {
        let payload: WishlistPayload = self.client.get_json(config::WISHLIST_PATH)?;
        let products = match payload {
            WishlistPayload::Wrapped { wishlist } => wishlist,
            WishlistPayload::Bare(products) => products,
        };
        self.session
            .borrow_mut()
            .replace_wishlist(products.iter().map(|p| p.id.clone()).collect())?;
        Ok(products)
    }

    pub fn add(&self, product_id: &str) -> Result<()> {
        let _: serde_json::Value = self.client.send_json(
            Method::POST,
            config::WISHLIST_PATH,
            &WishlistAdd { product_id },
        )?;
        self.session.borrow_mut().add_to_wishlist(product_id)
    }

    pub fn remove(&self, product_id: &str) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", config::WISHLIST_PATH, product_id))?;
        self.session.borrow_mut().remove_from_wishlist(product_id)
    }

    /// Mirror lookup; no network call.
    pub fn contains(&self, product_id: &str) -> bool {
        self.session.borrow().is_wishlisted(product_id)
    }
}
