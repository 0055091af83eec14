//! Blocking HTTP transport for the storefront API.
//!
//! Wraps a `reqwest` blocking client with the API base URL and the bearer
//! token, and turns non-2xx responses into [`StorefrontError::Backend`]
//! carrying the backend's own message.

use std::cell::RefCell;
use std::time::Duration;

use reqwest::blocking::{multipart::Form, Client, RequestBuilder};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, StorefrontError};

/// Keys the backend uses for human-readable failure text, in lookup order.
const MESSAGE_KEYS: [&str; 3] = ["msg", "error", "message"];

pub struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
    http: Client,
}

impl ApiClient {
    /// Create a client for `base_url` (trailing slashes are ignored).
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RefCell::new(token),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Replace the bearer token used for subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(method = method.as_str(), url = url.as_str(), "storefront request");
        let builder = self.http.request(method, url);
        let token = self.token.borrow().clone();
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::GET, path))
    }

    pub fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(method, path).json(body))
    }

    pub fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T> {
        self.execute(self.request(method, path).multipart(form))
    }

    pub fn delete(&self, path: &str) -> Result<()> {
        let _: serde_json::Value = self.execute(self.request(Method::DELETE, path))?;
        Ok(())
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request.send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let message = backend_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            warn!(status = status.as_u16(), %message, "storefront backend rejected request");
            return Err(StorefrontError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        // Empty 2xx bodies decode as JSON null so `()` and `Value` targets work.
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }
}

/// Pull the backend's failure text out of an error body.
///
/// Looks for `msg`, `error` or `message` at the top level of a JSON object;
/// a short non-JSON body is returned as-is.
pub fn backend_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => MESSAGE_KEYS
            .iter()
            .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string),
        Err(_) if !trimmed.starts_with('<') && trimmed.len() <= 200 => Some(trimmed.to_string()),
        Err(_) => None,
    }
}
