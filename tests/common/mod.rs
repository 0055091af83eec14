//! Shared fixtures for the storefront SDK integration tests.
//!
//! Provides sample rates, products and carts, plus in-memory fakes of the
//! catalog and cart backends that record every call they receive.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use jewel_storefront_sdk::admin::{ProductBackend, ProductSubmission};
use jewel_storefront_sdk::checkout::CartBackend;
use jewel_storefront_sdk::models::{Cart, CartLine, MetalRate, MetalRates, MetalType, Product};
use jewel_storefront_sdk::{Result, StorefrontError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Gold 5800 + 450 premium, silver 75 + 500 premium.
pub fn sample_rates() -> MetalRates {
    MetalRates {
        gold: Some(MetalRate::new(dec!(5800), dec!(450))),
        silver: Some(MetalRate::new(dec!(75), dec!(500))),
    }
}

/// A persisted gold ring whose stored price matches the engine's output.
pub fn sample_product() -> Product {
    Product {
        id: "prod-001".to_string(),
        name: "Temple Ring".to_string(),
        category: "Rings".to_string(),
        description: "22k temple ring".to_string(),
        price: Some(dec!(66423.85)),
        price_per_gram: Some(dec!(5845.00)),
        weight: Some(dec!(10)),
        metal_name: Some(MetalType::Gold),
        making_charge: Some(dec!(10)),
        gst_val: Some(dec!(3)),
        other_charges: Some(dec!(200)),
        stock: 40,
        images: vec![
            "https://cdn.example.com/ring-front.jpg".to_string(),
            "https://cdn.example.com/ring-side.jpg".to_string(),
        ],
    }
}

pub fn cart_line(product_id: &str, quantity: u32) -> CartLine {
    CartLine {
        product_id: product_id.to_string(),
        name: format!("Item {}", product_id),
        price: dec!(1250.50),
        quantity,
        size: None,
        images: Vec::new(),
        stock: Some(50),
    }
}

pub fn cart_of(quantities: &[(&str, u32)]) -> Cart {
    Cart::new(
        quantities
            .iter()
            .map(|(id, qty)| cart_line(id, *qty))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// FakeProductBackend
// ---------------------------------------------------------------------------

pub enum ProductOutcome {
    Saved,
    Rejected(&'static str),
    Broken,
}

pub struct FakeProductBackend {
    pub outcome: ProductOutcome,
    pub created: RefCell<Vec<ProductSubmission>>,
    pub updated: RefCell<Vec<(String, ProductSubmission)>>,
}

impl FakeProductBackend {
    pub fn new(outcome: ProductOutcome) -> Self {
        Self {
            outcome,
            created: RefCell::new(Vec::new()),
            updated: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.created.borrow().len() + self.updated.borrow().len()
    }

    fn respond(&self, id: &str, submission: &ProductSubmission) -> Result<Product> {
        match self.outcome {
            ProductOutcome::Saved => Ok(Product {
                id: id.to_string(),
                name: submission.name.clone(),
                category: submission.category.clone(),
                description: submission.description.clone(),
                price: Some(dec!(1)),
                price_per_gram: None,
                weight: Some(submission.weight),
                metal_name: Some(submission.metal_name),
                making_charge: Some(submission.making_charge),
                gst_val: None,
                other_charges: Some(submission.other_charges),
                stock: submission.stock,
                images: submission.existing_images.clone(),
            }),
            ProductOutcome::Rejected(msg) => Err(StorefrontError::Backend {
                status: 400,
                message: msg.to_string(),
            }),
            ProductOutcome::Broken => Err(StorefrontError::Json(
                serde_json::from_str::<serde_json::Value>("{not json").unwrap_err(),
            )),
        }
    }
}

impl ProductBackend for FakeProductBackend {
    fn create_product(&self, submission: &ProductSubmission) -> Result<Product> {
        self.created.borrow_mut().push(submission.clone());
        self.respond("prod-new", submission)
    }

    fn update_product(&self, product_id: &str, submission: &ProductSubmission) -> Result<Product> {
        self.updated
            .borrow_mut()
            .push((product_id.to_string(), submission.clone()));
        self.respond(product_id, submission)
    }
}

// ---------------------------------------------------------------------------
// FakeCartBackend
// ---------------------------------------------------------------------------

/// Applies quantity updates to an in-memory cart, like the real backend.
pub struct FakeCartBackend {
    pub cart: RefCell<Cart>,
    pub fail_updates: Cell<bool>,
    pub fail_fetch: Cell<bool>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCartBackend {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart: RefCell::new(cart),
            fail_updates: Cell::new(false),
            fail_fetch: Cell::new(false),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn set_quantity(&self, product_id: &str, quantity: u32) -> Result<()> {
        if self.fail_updates.get() {
            return Err(StorefrontError::Backend {
                status: 409,
                message: "Insufficient stock".to_string(),
            });
        }
        let mut cart = self.cart.borrow_mut();
        let line = cart
            .line_mut(product_id)
            .ok_or_else(|| StorefrontError::NotFound(product_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }
}

impl CartBackend for FakeCartBackend {
    fn fetch_cart(&self) -> Result<Cart> {
        self.calls.borrow_mut().push("fetch".to_string());
        if self.fail_fetch.get() {
            return Err(StorefrontError::Backend {
                status: 500,
                message: "Cart unavailable".to_string(),
            });
        }
        Ok(self.cart.borrow().clone())
    }

    fn increment(&self, product_id: &str, quantity: u32) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("update {} {}", product_id, quantity));
        self.set_quantity(product_id, quantity)
    }

    fn decrement(&self, product_id: &str, quantity: u32) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("update/min {} {}", product_id, quantity));
        self.set_quantity(product_id, quantity)
    }

    fn remove(&self, product_id: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("remove {}", product_id));
        if self.fail_updates.get() {
            return Err(StorefrontError::Backend {
                status: 500,
                message: "Could not remove item".to_string(),
            });
        }
        self.cart
            .borrow_mut()
            .lines
            .retain(|l| l.product_id != product_id);
        Ok(())
    }
}

pub fn decimal(s: &str) -> Decimal {
    s.parse().unwrap()
}
