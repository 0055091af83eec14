pub mod cart;
pub mod metal;
pub mod order;
pub mod product;

pub use cart::*;
pub use metal::*;
pub use order::*;
pub use product::*;
