use std::path::PathBuf;

use rust_decimal::Decimal;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "JEWEL_API_URL";
/// Environment variable carrying a bearer token.
pub const ENV_API_TOKEN: &str = "JEWEL_API_TOKEN";

// Endpoint paths, relative to the API base.
pub const METAL_RATES_PATH: &str = "/api/admin/metal-rates";
pub const PRODUCTS_PATH: &str = "/products";
pub const CART_PATH: &str = "/cart";
pub const CART_UPDATE_PATH: &str = "/cart/update";
pub const CART_UPDATE_MIN_PATH: &str = "/cart/update/min";
pub const ORDERS_PATH: &str = "/orders";
pub const WISHLIST_PATH: &str = "/wishlist";

/// Minimum units per distinct cart line.
pub const MIN_LINE_QUANTITY: u32 = 10;

/// GST percentage applied when the draft does not carry one.
pub const DEFAULT_GST_PERCENT: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

pub const SESSION_FILE: &str = "session.json";

pub fn default_session_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("jewel-storefront")
    } else {
        PathBuf::from(".jewel-storefront")
    }
}
