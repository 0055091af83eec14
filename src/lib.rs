//! Jewelry storefront SDK for Rust.
//!
//! A client for the storefront REST API plus the client-side logic that sits
//! on top of it: live-rate product pricing, the admin product editor, the
//! product detail price breakdown, and the cart quantity / checkout rules.
//!
//! Prices derived here are previews. The backend computes and stores the
//! authoritative price of every product.
//!
//! # Quick start
//!
//! ```no_run
//! use jewel_storefront_sdk::StorefrontSdk;
//! use jewel_storefront_sdk::admin::{ProductEdit, ProductForm};
//! use jewel_storefront_sdk::models::MetalType;
//! use rust_decimal::Decimal;
//!
//! let sdk = StorefrontSdk::builder()
//!     .base_url("https://api.example.com")
//!     .token("secret")
//!     .build()
//!     .unwrap();
//!
//! // Open the product editor against the current metal rates
//! let mut form = ProductForm::new();
//! sdk.open_create_form(&mut form).unwrap();
//! form.apply(ProductEdit::Metal(Some(MetalType::Gold))).unwrap();
//! form.apply(ProductEdit::Weight(Some(Decimal::from(10)))).unwrap();
//! println!("{}", form.final_price_display());
//! ```

pub mod admin;
pub mod api;
#[cfg(feature = "async")]
pub mod async_client;
pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod notify;
pub mod pricing;
pub mod session;

#[cfg(feature = "async")]
pub use async_client::AsyncStorefrontSdk;
pub use client::ApiClient;
pub use error::{Result, StorefrontError};
pub use notify::Notification;
pub use session::SessionStore;

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::admin::ProductForm;
use crate::checkout::CartSession;
use crate::models::Product;
use crate::pricing::PriceBreakdown;

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build) to create the SDK.
pub struct StorefrontSdkBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout: Duration,
    session_dir: Option<PathBuf>,
}

impl Default for StorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            timeout: Duration::from_secs(30),
            session_dir: None,
        }
    }
}

impl StorefrontSdkBuilder {
    /// Start from the environment: `JEWEL_API_URL` and `JEWEL_API_TOKEN`.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(config::ENV_API_URL) {
            builder.base_url = Some(url);
        }
        if let Ok(token) = std::env::var(config::ENV_API_TOKEN) {
            if !token.trim().is_empty() {
                builder.token = Some(token);
            }
        }
        builder
    }

    /// Set the API base URL. Defaults to [`config::DEFAULT_API_BASE`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token. Takes precedence over a token stored in the
    /// session directory.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom session directory.
    ///
    /// If not set, the platform-appropriate cache directory is used
    /// (e.g. `~/.cache/jewel-storefront` on Linux).
    pub fn session_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the SDK. Opens the session store but makes no network calls.
    pub fn build(self) -> Result<StorefrontSdk> {
        let session = SessionStore::open(self.session_dir)?;
        let token = self
            .token
            .or_else(|| session.token().map(str::to_string));
        let base_url = self
            .base_url
            .unwrap_or_else(|| config::DEFAULT_API_BASE.to_string());
        let client = ApiClient::new(&base_url, token, self.timeout)?;
        Ok(StorefrontSdk {
            client,
            session: RefCell::new(session),
        })
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns the [`ApiClient`] and the [`SessionStore`] and exposes the REST
/// endpoints as lightweight borrowing wrappers.
///
/// Created via [`StorefrontSdk::builder()`].
pub struct StorefrontSdk {
    client: ApiClient,
    session: RefCell<SessionStore>,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    // -- Endpoint accessors ------------------------------------------------

    /// Access the metal-rate endpoints (admin).
    pub fn metal_rates(&self) -> api::MetalRateApi<'_> {
        api::MetalRateApi::new(&self.client)
    }

    /// Access the catalog endpoints.
    ///
    /// The returned wrapper implements [`admin::ProductBackend`] and can be
    /// handed straight to [`ProductForm::submit`].
    pub fn products(&self) -> api::ProductApi<'_> {
        api::ProductApi::new(&self.client)
    }

    /// Access the cart endpoints.
    ///
    /// The returned wrapper implements [`checkout::CartBackend`].
    pub fn cart(&self) -> api::CartApi<'_> {
        api::CartApi::new(&self.client)
    }

    /// Access order placement.
    pub fn orders(&self) -> api::OrderApi<'_> {
        api::OrderApi::new(&self.client)
    }

    /// Access the wishlist endpoints. Successful calls update the local mirror.
    pub fn wishlist(&self) -> api::WishlistApi<'_> {
        api::WishlistApi::new(&self.client, &self.session)
    }

    // -- Workflows ---------------------------------------------------------

    /// Fetch current metal rates and open `form` on an empty draft.
    pub fn open_create_form(&self, form: &mut ProductForm) -> Result<()> {
        let rates = self.metal_rates().get()?;
        form.open_create(Some(rates));
        Ok(())
    }

    /// Fetch current metal rates and open `form` on `product`.
    pub fn open_edit_form(&self, form: &mut ProductForm, product: &Product) -> Result<()> {
        let rates = self.metal_rates().get()?;
        form.open_edit(product, Some(rates));
        Ok(())
    }

    /// Fetch the cart into a fresh [`CartSession`].
    pub fn cart_session(&self) -> Result<CartSession> {
        Ok(CartSession::new(self.cart().get()?))
    }

    /// Fetch a product and decompose its stored price.
    pub fn price_breakdown(&self, product_id: &str) -> Result<Option<PriceBreakdown>> {
        let product = self.products().get(product_id)?;
        Ok(pricing::breakdown(&product))
    }

    // -- Session -----------------------------------------------------------

    /// Store a freshly issued bearer token and use it for subsequent requests.
    pub fn sign_in(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.session.borrow_mut().set_token(Some(token.clone()))?;
        self.client.set_token(Some(token));
        info!("session token stored");
        Ok(())
    }

    /// Drop the token and the wishlist mirror.
    pub fn sign_out(&self) -> Result<()> {
        self.session.borrow_mut().clear()?;
        self.client.set_token(None);
        info!("session cleared");
        Ok(())
    }

    pub fn is_signed_in(&self) -> bool {
        self.client.token().is_some()
    }

    /// Product ids in the local wishlist mirror.
    pub fn wishlist_mirror(&self) -> Vec<String> {
        self.session.borrow().wishlist().to_vec()
    }

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.session.borrow();
        write!(
            f,
            "StorefrontSdk(base_url={}, signed_in={}, session_dir={})",
            self.client.base_url(),
            self.is_signed_in(),
            session.dir.display()
        )
    }
}
