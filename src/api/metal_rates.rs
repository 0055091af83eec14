//! `GET`/`POST /api/admin/metal-rates`.

use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::config;
use crate::error::Result;
use crate::models::{MetalRate, MetalRateUpdate, MetalRates, MetalType};

pub struct MetalRateApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MetalRateApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the live rates. Call once per editor open; the result is the
    /// snapshot the editor prices against until it is closed.
    pub fn get(&self) -> Result<MetalRates> {
        self.client.get_json(config::METAL_RATES_PATH)
    }

    /// Set the rate for one metal.
    pub fn set(&self, metal: MetalType, rate: MetalRate) -> Result<()> {
        let body = MetalRateUpdate::new(metal, rate);
        let _: serde_json::Value =
            self.client
                .send_json(Method::POST, config::METAL_RATES_PATH, &body)?;
        info!(metal = %metal, base_rate = %rate.base_rate, premium = %rate.premium, "metal rate updated");
        Ok(())
    }
}
