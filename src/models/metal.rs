use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

// ---------------------------------------------------------------------------
// MetalType
// ---------------------------------------------------------------------------

/// Metal a piece is made of. Product records spell it `"Gold"`/`"Silver"`;
/// the rate endpoints use the lowercase key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetalType {
    #[serde(alias = "gold", alias = "GOLD")]
    Gold,
    #[serde(alias = "silver", alias = "SILVER")]
    Silver,
}

impl MetalType {
    pub const ALL: [MetalType; 2] = [MetalType::Gold, MetalType::Silver];

    /// Display name, as stored in `metal_name`.
    pub fn name(self) -> &'static str {
        match self {
            MetalType::Gold => "Gold",
            MetalType::Silver => "Silver",
        }
    }

    /// Key used by the metal-rate endpoints.
    pub fn rate_key(self) -> &'static str {
        match self {
            MetalType::Gold => "gold",
            MetalType::Silver => "silver",
        }
    }
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetalType {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        MetalType::ALL
            .into_iter()
            .find(|metal| metal.rate_key() == key)
            .ok_or_else(|| StorefrontError::InvalidArgument(format!("Unknown metal: {}", key)))
    }
}

// ---------------------------------------------------------------------------
// MetalRate — live rate for one metal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetalRate {
    /// Currency per gram.
    pub base_rate: Decimal,
    #[serde(default)]
    pub premium: Decimal,
}

impl MetalRate {
    pub fn new(base_rate: Decimal, premium: Decimal) -> Self {
        Self { base_rate, premium }
    }
}

// ---------------------------------------------------------------------------
// MetalRates — `GET /api/admin/metal-rates` response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetalRates {
    #[serde(default)]
    pub gold: Option<MetalRate>,
    #[serde(default)]
    pub silver: Option<MetalRate>,
}

impl MetalRates {
    pub fn for_metal(&self, metal: MetalType) -> Option<&MetalRate> {
        match metal {
            MetalType::Gold => self.gold.as_ref(),
            MetalType::Silver => self.silver.as_ref(),
        }
    }

    pub fn set(&mut self, metal: MetalType, rate: MetalRate) {
        match metal {
            MetalType::Gold => self.gold = Some(rate),
            MetalType::Silver => self.silver = Some(rate),
        }
    }
}

// ---------------------------------------------------------------------------
// MetalRateUpdate — `POST /api/admin/metal-rates` body
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetalRateUpdate {
    pub metal_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub premium: Decimal,
}

impl MetalRateUpdate {
    pub fn new(metal: MetalType, rate: MetalRate) -> Self {
        Self {
            metal_type: metal.rate_key().to_string(),
            base_rate: rate.base_rate,
            premium: rate.premium,
        }
    }
}
