//! Multipart payload for `POST /products` and `PUT /products/:id`.
//!
//! Carries the raw draft inputs only. The derived per-gram rate and final
//! price stay local: the backend computes and stores its own price.

use reqwest::blocking::multipart::{Form, Part};
use rust_decimal::Decimal;

use crate::error::{Result, StorefrontError};
use crate::models::{ImageRef, ImageUpload, MetalType, ProductDraft};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSubmission {
    pub name: String,
    pub category: String,
    pub description: String,
    pub stock: u32,
    pub metal_name: MetalType,
    pub weight: Decimal,
    pub making_charge: Decimal,
    pub other_charges: Decimal,
    /// New images, uploaded as binary parts.
    pub uploads: Vec<ImageUpload>,
    /// Already-stored image URLs to retain. Sent only when editing.
    pub existing_images: Vec<String>,
    pub is_edit: bool,
}

impl ProductSubmission {
    /// Build a payload from a draft that has passed validation.
    pub fn from_draft(draft: &ProductDraft, is_edit: bool) -> Result<Self> {
        let metal_name = draft
            .metal_name
            .ok_or_else(|| StorefrontError::Validation("Metal is required".to_string()))?;
        let weight = draft
            .weight
            .ok_or_else(|| StorefrontError::Validation("Weight is required".to_string()))?;

        let mut uploads = Vec::new();
        let mut existing_images = Vec::new();
        for image in &draft.images {
            match image {
                ImageRef::Upload(upload) => uploads.push(upload.clone()),
                ImageRef::Existing(url) => existing_images.push(url.clone()),
            }
        }

        Ok(Self {
            name: draft.name.trim().to_string(),
            category: draft.category.trim().to_string(),
            description: draft.description.clone(),
            stock: draft.stock,
            metal_name,
            weight,
            making_charge: draft.making_charge.unwrap_or(Decimal::ZERO),
            other_charges: draft.other_charges.unwrap_or(Decimal::ZERO),
            uploads,
            existing_images,
            is_edit,
        })
    }

    /// Text parts of the form, in send order.
    ///
    /// `quantity` mirrors `stock`; the backend reads either name.
    pub fn text_fields(&self) -> Result<Vec<(&'static str, String)>> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("category", self.category.clone()),
            ("description", self.description.clone()),
            ("stock", self.stock.to_string()),
            ("quantity", self.stock.to_string()),
            ("metal_name", self.metal_name.name().to_string()),
            ("weight", self.weight.normalize().to_string()),
            ("making_charge", self.making_charge.normalize().to_string()),
            ("other_charges", self.other_charges.normalize().to_string()),
        ];
        if self.is_edit {
            fields.push(("existingImages", serde_json::to_string(&self.existing_images)?));
        }
        Ok(fields)
    }

    pub fn to_form(&self) -> Result<Form> {
        let mut form = Form::new();
        for (key, value) in self.text_fields()? {
            form = form.text(key, value);
        }
        for upload in &self.uploads {
            let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
            if let Some(mime) = &upload.mime {
                part = part.mime_str(mime)?;
            }
            form = form.part("images", part);
        }
        Ok(form)
    }
}
