//! Read-only decomposition of a persisted product's price.
//!
//! The stored `price` is authoritative; the breakdown only explains it. GST is
//! shown as "Inclusive" and its implied amount is whatever remains after the
//! other components, so the displayed parts always add back up to the total.

use rust_decimal::Decimal;

use crate::config;
use crate::models::Product;
use crate::money::format_inr;
use crate::pricing::{quote, PricingInputs};

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub price_per_gram: Decimal,
    pub weight: Decimal,
    pub base_amount: Decimal,
    pub making_charge_percent: Decimal,
    pub making_amount: Decimal,
    pub gst_percent: Decimal,
    /// Tax already contained in `total`. Never added on top.
    pub gst_inclusive_amount: Decimal,
    pub other_charges: Decimal,
    /// The product's stored price, verbatim.
    pub total: Decimal,
}

/// One display row of the breakdown table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownLine {
    pub label: String,
    pub value: String,
}

/// Decompose a product's stored price.
///
/// Returns `None` (omit the block) when the per-gram rate, weight or price is
/// missing or zero, or when the amounts are too large to represent. Metal
/// value and making charge come from [`quote`], so they match the admin
/// preview to the paisa.
pub fn breakdown(product: &Product) -> Option<PriceBreakdown> {
    let total = product.price.filter(|p| *p > Decimal::ZERO)?;
    let making_charge_percent = product.making_charge.unwrap_or(Decimal::ZERO);
    let gst_percent = product.gst_val.unwrap_or(config::DEFAULT_GST_PERCENT);
    let quote = quote(&PricingInputs {
        price_per_gram: product.price_per_gram,
        weight: product.weight,
        making_charge_percent: Some(making_charge_percent),
        tax_percent: Some(gst_percent),
        other_charges: product.other_charges,
    })?;

    let gst_inclusive_amount = total
        .checked_sub(quote.base_amount)?
        .checked_sub(quote.making_amount)?
        .checked_sub(quote.other_charges)?;

    Some(PriceBreakdown {
        price_per_gram: quote.price_per_gram,
        weight: quote.weight,
        base_amount: quote.base_amount,
        making_charge_percent,
        making_amount: quote.making_amount,
        gst_percent,
        gst_inclusive_amount,
        other_charges: quote.other_charges,
        total,
    })
}

impl PriceBreakdown {
    /// Sum of the displayed components, GST included.
    pub fn components_total(&self) -> Decimal {
        self.base_amount + self.making_amount + self.gst_inclusive_amount + self.other_charges
    }

    pub fn lines(&self) -> Vec<BreakdownLine> {
        vec![
            BreakdownLine {
                label: format!(
                    "Metal value ({} g × {}/g)",
                    self.weight.normalize(),
                    format_inr(Some(self.price_per_gram))
                ),
                value: format_inr(Some(self.base_amount)),
            },
            BreakdownLine {
                label: format!("Making charges ({}%)", self.making_charge_percent.normalize()),
                value: format_inr(Some(self.making_amount)),
            },
            BreakdownLine {
                label: format!("GST ({}%)", self.gst_percent.normalize()),
                value: "Inclusive".to_string(),
            },
            BreakdownLine {
                label: "Other charges".to_string(),
                value: format_inr(Some(self.other_charges)),
            },
            BreakdownLine {
                label: "Total".to_string(),
                value: format_inr(Some(self.total)),
            },
        ]
    }
}
