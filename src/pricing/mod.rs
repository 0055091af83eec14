//! Live-rate jewelry pricing.
//!
//! One pure derivation shared by the admin product editor and the product
//! detail page:
//!
//! ```text
//! price_per_gram = base_rate + premium / divisor      (gold: 10, silver: 1000)
//! base           = price_per_gram × weight
//! making         = base × making_charge% / 100
//! with_tax       = (base + making) × (gst% + 100) / 100
//! final          = with_tax + other_charges
//! ```
//!
//! The admin path rounds `price_per_gram` to 2 dp before it is multiplied by
//! the weight. Backend-stored prices were produced that way, so the rounding
//! point is part of the contract.
//!
//! All arithmetic is checked. An amount too large to represent yields no
//! price rather than a panic.
//!
//! # Example
//!
//! ```rust
//! use jewel_storefront_sdk::models::{MetalRate, MetalType};
//! use jewel_storefront_sdk::pricing::{self, PricingInputs};
//! use rust_decimal::Decimal;
//!
//! let rate = MetalRate::new(Decimal::from(5800), Decimal::from(450));
//! let ppg = pricing::rounded_price_per_gram(MetalType::Gold, &rate).unwrap();
//! let quote = pricing::quote(
//!     &PricingInputs::new(ppg, Decimal::from(10))
//!         .making_charge(Decimal::from(10))
//!         .other_charges(Decimal::from(200)),
//! )
//! .unwrap();
//! assert_eq!(quote.final_price, Decimal::new(6642385, 2));
//! ```

pub mod breakdown;

use rust_decimal::Decimal;

use crate::config;
use crate::models::{MetalRate, MetalRates, MetalType};
use crate::money::round_money;

pub use breakdown::{breakdown, PriceBreakdown};

const GOLD_PREMIUM_DIVISOR: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
const SILVER_PREMIUM_DIVISOR: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

// ---------------------------------------------------------------------------
// Per-gram rate
// ---------------------------------------------------------------------------

/// Unrounded per-gram rate for a metal.
///
/// Gold premiums are quoted per 10 g and silver premiums per 1000 g, hence
/// the different divisors. `None` if the rate overflows.
pub fn price_per_gram(metal: MetalType, rate: &MetalRate) -> Option<Decimal> {
    let divisor = match metal {
        MetalType::Gold => GOLD_PREMIUM_DIVISOR,
        MetalType::Silver => SILVER_PREMIUM_DIVISOR,
    };
    rate.base_rate.checked_add(rate.premium.checked_div(divisor)?)
}

/// Per-gram rate rounded to 2 dp, as written into the editor draft.
pub fn rounded_price_per_gram(metal: MetalType, rate: &MetalRate) -> Option<Decimal> {
    price_per_gram(metal, rate).map(round_money)
}

/// Rounded per-gram rate for `metal` out of a rate snapshot, if both are known.
pub fn price_per_gram_from(metal: Option<MetalType>, rates: Option<&MetalRates>) -> Option<Decimal> {
    let metal = metal?;
    let rate = rates?.for_metal(metal)?;
    rounded_price_per_gram(metal, rate)
}

// ---------------------------------------------------------------------------
// PricingInputs
// ---------------------------------------------------------------------------

/// Inputs to [`quote`]. Absent optional charges count as zero and an absent
/// tax rate falls back to the default GST.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PricingInputs {
    pub price_per_gram: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub making_charge_percent: Option<Decimal>,
    pub tax_percent: Option<Decimal>,
    pub other_charges: Option<Decimal>,
}

impl PricingInputs {
    pub fn new(price_per_gram: Decimal, weight: Decimal) -> Self {
        Self {
            price_per_gram: Some(price_per_gram),
            weight: Some(weight),
            ..Self::default()
        }
    }

    pub fn making_charge(mut self, percent: Decimal) -> Self {
        self.making_charge_percent = Some(percent);
        self
    }

    pub fn tax(mut self, percent: Decimal) -> Self {
        self.tax_percent = Some(percent);
        self
    }

    pub fn other_charges(mut self, amount: Decimal) -> Self {
        self.other_charges = Some(amount);
        self
    }
}

// ---------------------------------------------------------------------------
// PriceQuote
// ---------------------------------------------------------------------------

/// Full derivation of a unit price. Every field is rounded to 2 dp for
/// display; `final_price` is rounded once from the unrounded chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub price_per_gram: Decimal,
    pub weight: Decimal,
    pub base_amount: Decimal,
    pub making_amount: Decimal,
    pub before_tax: Decimal,
    pub tax_percent: Decimal,
    pub tax_amount: Decimal,
    pub with_tax: Decimal,
    pub other_charges: Decimal,
    pub final_price: Decimal,
}

/// Derive a unit price.
///
/// Returns `None` when the weight or per-gram rate is missing or not
/// positive: there is no price to show, which is different from a zero price.
/// Also `None` when any step of the derivation overflows.
pub fn quote(inputs: &PricingInputs) -> Option<PriceQuote> {
    let price_per_gram = inputs.price_per_gram.filter(|p| *p > Decimal::ZERO)?;
    let weight = inputs.weight.filter(|w| *w > Decimal::ZERO)?;
    let making_percent = inputs.making_charge_percent.unwrap_or(Decimal::ZERO);
    let tax_percent = inputs.tax_percent.unwrap_or(config::DEFAULT_GST_PERCENT);
    let other_charges = inputs.other_charges.unwrap_or(Decimal::ZERO);

    let base_amount = price_per_gram.checked_mul(weight)?;
    let making_amount = percent_of(base_amount, making_percent)?;
    let before_tax = base_amount.checked_add(making_amount)?;
    let with_tax = percent_of(before_tax, tax_percent.checked_add(Decimal::ONE_HUNDRED)?)?;
    let final_price = with_tax.checked_add(other_charges)?;

    Some(PriceQuote {
        price_per_gram: round_money(price_per_gram),
        weight,
        base_amount: round_money(base_amount),
        making_amount: round_money(making_amount),
        before_tax: round_money(before_tax),
        tax_percent,
        tax_amount: round_money(with_tax.checked_sub(before_tax)?),
        with_tax: round_money(with_tax),
        other_charges: round_money(other_charges),
        final_price: round_money(final_price),
    })
}

/// `amount × percent / 100`, multiplied first so no precision is lost.
fn percent_of(amount: Decimal, percent: Decimal) -> Option<Decimal> {
    amount.checked_mul(percent)?.checked_div(Decimal::ONE_HUNDRED)
}

/// Final unit price only; `None` under the same conditions as [`quote`].
pub fn final_price(inputs: &PricingInputs) -> Option<Decimal> {
    quote(inputs).map(|q| q.final_price)
}
