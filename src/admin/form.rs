//! Admin product editor controller.
//!
//! ```text
//! Closed ──open_create──► Creating ──┐
//!    ▲                               ├──begin_submit──► Submitting ──ok──► Closed
//!    └──────open_edit───► Editing ───┘                      │
//!                            ▲                              │ err
//!                            └──────────────────────────────┘ (back to Creating/Editing)
//! ```
//!
//! Every mutation goes through [`ProductForm::apply`], which always
//! re-derives `price_per_gram` and `final_price` from the current draft and
//! the rate snapshot taken when the form was opened.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::admin::submission::ProductSubmission;
use crate::error::{Result, StorefrontError};
use crate::models::{ImageRef, ImageUpload, MetalRates, MetalType, Product, ProductDraft};
use crate::money::format_inr;
use crate::notify::Notification;
use crate::pricing::{self, PriceQuote, PricingInputs};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in the product name, metal and weight.";

/// Seam between the editor and the catalog backend.
pub trait ProductBackend {
    fn create_product(&self, submission: &ProductSubmission) -> Result<Product>;
    fn update_product(&self, product_id: &str, submission: &ProductSubmission) -> Result<Product>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { product_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Creating,
    Editing { product_id: String },
    /// A save request is in flight. Edits and further submits are refused.
    Submitting { mode: FormMode },
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEdit {
    Name(String),
    Category(String),
    Description(String),
    Stock(u32),
    Metal(Option<MetalType>),
    Weight(Option<Decimal>),
    MakingCharge(Option<Decimal>),
    GstVal(Option<Decimal>),
    OtherCharges(Option<Decimal>),
    AddImage(ImageUpload),
    RemoveImage(usize),
}

pub struct ProductForm {
    state: FormState,
    draft: ProductDraft,
    rates: Option<MetalRates>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            draft: ProductDraft::default(),
            rates: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn rates(&self) -> Option<&MetalRates> {
        self.rates.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self.state, FormState::Creating | FormState::Editing { .. })
    }

    // -- Lifecycle ---------------------------------------------------------

    /// Open an empty draft priced against `rates`.
    pub fn open_create(&mut self, rates: Option<MetalRates>) {
        self.draft = ProductDraft::default();
        self.rates = rates;
        self.state = FormState::Creating;
        self.recompute();
        info!("product form opened for create");
    }

    /// Open a draft populated from `product`, priced against `rates`.
    pub fn open_edit(&mut self, product: &Product, rates: Option<MetalRates>) {
        self.draft = ProductDraft::from_product(product);
        self.rates = rates;
        self.state = FormState::Editing {
            product_id: product.id.clone(),
        };
        self.recompute();
        info!(product_id = %product.id, "product form opened for edit");
    }

    /// Discard the draft.
    pub fn close(&mut self) {
        self.draft = ProductDraft::default();
        self.rates = None;
        self.state = FormState::Closed;
    }

    // -- Editing -----------------------------------------------------------

    /// Apply one edit and re-derive the price fields.
    pub fn apply(&mut self, edit: ProductEdit) -> Result<()> {
        match self.state {
            FormState::Closed => {
                return Err(StorefrontError::InvalidArgument(
                    "Product form is not open".to_string(),
                ))
            }
            FormState::Submitting { .. } => return Err(StorefrontError::SubmitInFlight),
            FormState::Creating | FormState::Editing { .. } => {}
        }

        let draft = &mut self.draft;
        match edit {
            ProductEdit::Name(v) => draft.name = v,
            ProductEdit::Category(v) => draft.category = v,
            ProductEdit::Description(v) => draft.description = v,
            ProductEdit::Stock(v) => draft.stock = v,
            ProductEdit::Metal(v) => draft.metal_name = v,
            ProductEdit::Weight(v) => draft.weight = v,
            ProductEdit::MakingCharge(v) => draft.making_charge = v,
            ProductEdit::GstVal(v) => draft.gst_val = v,
            ProductEdit::OtherCharges(v) => draft.other_charges = v,
            ProductEdit::AddImage(upload) => draft.images.push(ImageRef::Upload(upload)),
            ProductEdit::RemoveImage(index) => {
                if index >= draft.images.len() {
                    return Err(StorefrontError::InvalidArgument(format!(
                        "No image at position {}",
                        index
                    )));
                }
                draft.images.remove(index);
            }
        }
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        let (price_per_gram, final_price) = derive_prices(&self.draft, self.rates.as_ref());
        self.draft.price_per_gram = price_per_gram;
        self.draft.final_price = final_price;
    }

    /// Full breakdown of the previewed price, if one can be computed.
    pub fn quote(&self) -> Option<PriceQuote> {
        pricing::quote(&pricing_inputs(&self.draft))
    }

    /// Read-only "final price" field text. Blank when no price is derivable.
    pub fn final_price_display(&self) -> String {
        format_inr(self.draft.final_price)
    }

    // -- Submission --------------------------------------------------------

    /// Validate the draft and move to `Submitting`.
    ///
    /// Rejected while another submit is in flight, so a double click cannot
    /// create two products.
    pub fn begin_submit(&mut self) -> Result<ProductSubmission> {
        let mode = match &self.state {
            FormState::Closed => {
                return Err(StorefrontError::InvalidArgument(
                    "Product form is not open".to_string(),
                ))
            }
            FormState::Submitting { .. } => return Err(StorefrontError::SubmitInFlight),
            FormState::Creating => FormMode::Create,
            FormState::Editing { product_id } => FormMode::Edit {
                product_id: product_id.clone(),
            },
        };

        validate_draft(&self.draft)?;
        let submission = ProductSubmission::from_draft(&self.draft, mode != FormMode::Create)?;
        self.state = FormState::Submitting { mode };
        Ok(submission)
    }

    /// Settle an in-flight submit.
    ///
    /// Success closes the form. Failure returns to the editing state with the
    /// draft untouched so the admin can retry.
    pub fn finish_submit(
        &mut self,
        outcome: Result<Product>,
    ) -> std::result::Result<Product, Notification> {
        let mode = match &self.state {
            FormState::Submitting { mode } => mode.clone(),
            _ => {
                return Err(Notification::from_error(&StorefrontError::InvalidArgument(
                    "No submission in flight".to_string(),
                )))
            }
        };

        match outcome {
            Ok(product) => {
                info!(product_id = %product.id, "product saved");
                self.close();
                Ok(product)
            }
            Err(e) => {
                warn!(error = %e, "product save failed");
                self.state = match mode {
                    FormMode::Create => FormState::Creating,
                    FormMode::Edit { product_id } => FormState::Editing { product_id },
                };
                Err(Notification::from_error(&e))
            }
        }
    }

    /// Validate, send and settle in one call.
    pub fn submit<B: ProductBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> std::result::Result<Product, Notification> {
        let submission = self.begin_submit().map_err(|e| Notification::from_error(&e))?;
        let outcome = match &self.state {
            FormState::Submitting {
                mode: FormMode::Edit { product_id },
            } => backend.update_product(product_id, &submission),
            _ => backend.create_product(&submission),
        };
        self.finish_submit(outcome)
    }
}

/// Pricing inputs carried by a draft.
pub fn pricing_inputs(draft: &ProductDraft) -> PricingInputs {
    PricingInputs {
        price_per_gram: draft.price_per_gram,
        weight: draft.weight,
        making_charge_percent: draft.making_charge,
        tax_percent: draft.gst_val,
        other_charges: draft.other_charges,
    }
}

/// Derived `(price_per_gram, final_price)` for a draft and rate snapshot.
pub fn derive_prices(
    draft: &ProductDraft,
    rates: Option<&MetalRates>,
) -> (Option<Decimal>, Option<Decimal>) {
    let price_per_gram = pricing::price_per_gram_from(draft.metal_name, rates);
    let inputs = PricingInputs {
        price_per_gram,
        ..pricing_inputs(draft)
    };
    (price_per_gram, pricing::final_price(&inputs))
}

/// Local checks run before any network call.
pub fn validate_draft(draft: &ProductDraft) -> Result<()> {
    let weight_ok = draft.weight.is_some_and(|w| w > Decimal::ZERO);
    if draft.name.trim().is_empty() || draft.metal_name.is_none() || !weight_ok {
        return Err(StorefrontError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }
    let negatives = [
        ("Making charge", draft.making_charge),
        ("GST", draft.gst_val),
        ("Other charges", draft.other_charges),
    ];
    for (label, value) in negatives {
        if value.is_some_and(|v| v < Decimal::ZERO) {
            return Err(StorefrontError::Validation(format!(
                "{} cannot be negative.",
                label
            )));
        }
    }
    Ok(())
}
