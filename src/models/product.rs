use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::Result;
use crate::models::MetalType;

// ---------------------------------------------------------------------------
// Product — server-owned catalog record
// ---------------------------------------------------------------------------

/// A persisted product. `price` is computed by the backend and is the only
/// price that may be used for persistence or checkout totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub price_per_gram: Option<Decimal>,
    #[serde(default)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub metal_name: Option<MetalType>,
    #[serde(default)]
    pub making_charge: Option<Decimal>,
    #[serde(default)]
    pub gst_val: Option<Decimal>,
    #[serde(default)]
    pub other_charges: Option<Decimal>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// A freshly picked image that has not been uploaded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read an image from disk. The MIME type is guessed from the extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let mime = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("jpg") | Some("jpeg") => Some("image/jpeg"),
            Some("png") => Some("image/png"),
            Some("webp") => Some("image/webp"),
            Some("gif") => Some("image/gif"),
            _ => None,
        };
        Ok(Self {
            file_name,
            bytes,
            mime: mime.map(str::to_string),
        })
    }
}

/// One slot in the editor's ordered image list.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    Upload(ImageUpload),
    /// URL of an image the backend already stores.
    Existing(String),
}

// ---------------------------------------------------------------------------
// ProductDraft — admin editor state
// ---------------------------------------------------------------------------

/// Transient editor copy of a product.
///
/// `price_per_gram` and `final_price` are derived. They are written only by
/// the form controller's recompute step and never sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub stock: u32,
    pub metal_name: Option<MetalType>,
    pub weight: Option<Decimal>,
    pub making_charge: Option<Decimal>,
    pub gst_val: Option<Decimal>,
    pub other_charges: Option<Decimal>,
    pub price_per_gram: Option<Decimal>,
    pub final_price: Option<Decimal>,
    pub images: Vec<ImageRef>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            description: String::new(),
            stock: 0,
            metal_name: None,
            weight: None,
            making_charge: None,
            gst_val: Some(config::DEFAULT_GST_PERCENT),
            other_charges: None,
            price_per_gram: None,
            final_price: None,
            images: Vec::new(),
        }
    }
}

impl ProductDraft {
    /// Populate a draft from a persisted product for editing.
    ///
    /// Derived fields start empty; the controller recomputes them against
    /// the rate snapshot it was opened with.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            stock: product.stock,
            metal_name: product.metal_name,
            weight: product.weight,
            making_charge: product.making_charge,
            gst_val: product.gst_val.or(Some(config::DEFAULT_GST_PERCENT)),
            other_charges: product.other_charges,
            price_per_gram: None,
            final_price: None,
            images: product
                .images
                .iter()
                .cloned()
                .map(ImageRef::Existing)
                .collect(),
        }
    }
}
