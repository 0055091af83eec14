//! Async wrapper around [`StorefrontSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! SDK's HTTP client is blocking, so it must never be driven from an async
//! task directly.
//!
//! # Example
//!
//! ```ignore
//! use jewel_storefront_sdk::AsyncStorefrontSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncStorefrontSdk::builder()
//!         .base_url("https://api.example.com")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let products = sdk.run(|s| s.products().list()).await.unwrap();
//!
//!     // Convenience method for the metal rates
//!     let rates = sdk.metal_rates().await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, StorefrontError};
use crate::models::{Cart, MetalRates};
use crate::StorefrontSdk;

// ---------------------------------------------------------------------------
// AsyncStorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStorefrontSdk`] instance.
pub struct AsyncStorefrontSdkBuilder {
    base_url: Option<String>,
    token: Option<String>,
    session_dir: Option<PathBuf>,
    timeout: Duration,
    from_env: bool,
}

impl Default for AsyncStorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            session_dir: None,
            timeout: Duration::from_secs(30),
            from_env: false,
        }
    }
}

impl AsyncStorefrontSdkBuilder {
    /// Seed the configuration from `JEWEL_API_URL` / `JEWEL_API_TOKEN`.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set a custom session directory.
    pub fn session_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncStorefrontSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = if self.from_env {
                crate::StorefrontSdkBuilder::from_env()
            } else {
                StorefrontSdk::builder()
            };
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(token) = self.token {
                builder = builder.token(token);
            }
            if let Some(dir) = self.session_dir {
                builder = builder.session_dir(dir);
            }
            let sdk = builder.timeout(self.timeout).build()?;
            Ok(AsyncStorefrontSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncStorefrontSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`StorefrontSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`StorefrontSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
#[derive(Clone)]
pub struct AsyncStorefrontSdk {
    inner: Arc<Mutex<StorefrontSdk>>,
}

impl AsyncStorefrontSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncStorefrontSdkBuilder {
        AsyncStorefrontSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&StorefrontSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StorefrontSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| StorefrontError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the live metal rates asynchronously.
    pub async fn metal_rates(&self) -> Result<MetalRates> {
        self.run(|s| s.metal_rates().get()).await
    }

    /// Fetch the cart asynchronously.
    pub async fn cart(&self) -> Result<Cart> {
        self.run(|s| s.cart().get()).await
    }

    /// Close the SDK, releasing all resources on the blocking pool.
    ///
    /// Clones of this handle keep the SDK alive; it is released when the
    /// last one is closed or dropped.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            drop(self.inner);
            Ok(())
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
