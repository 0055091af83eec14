//! Borrowing wrappers over the storefront REST endpoints, one per domain.

pub mod cart;
pub mod metal_rates;
pub mod orders;
pub mod products;
pub mod wishlist;

pub use cart::CartApi;
pub use metal_rates::MetalRateApi;
pub use orders::OrderApi;
pub use products::ProductApi;
pub use wishlist::WishlistApi;
