/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Dispatches blocking SDK calls to the blocking thread pool.
    pub sdk: jewel_storefront_sdk::AsyncStorefrontSdk,
}
