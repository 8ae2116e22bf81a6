pub mod amount;
pub mod deposit;
pub mod price;
pub mod price_range;

pub use amount::TokenAmounts;
pub use deposit::Deposit;
pub use price::Price;
pub use price_range::PriceRange;
