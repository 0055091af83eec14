use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub full_name: String,
    pub phone: String,
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Online,
    Cod,
}

/// `POST /orders` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub address: Address,
    pub payment_method: PaymentMethod,
}

/// Raw `POST /orders` response. Online orders carry gateway details; COD
/// orders may carry nothing beyond success.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderResponse {
    #[serde(default, alias = "_id")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderConfirmation {
    /// Hand these to the payment gateway checkout.
    Online {
        order_id: String,
        amount: Decimal,
        razorpay_order_id: String,
    },
    CashOnDelivery { order_id: Option<String> },
}
