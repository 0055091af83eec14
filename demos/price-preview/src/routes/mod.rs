pub mod checkout;
pub mod pricing;
pub mod rates;
