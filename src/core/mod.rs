pub mod pricing;
pub mod session;

pub use crate::domain::model::{Feature, Plan, PriceBreakdown, Quote};
pub use crate::domain::ports::CatalogProvider;
pub use crate::utils::error::Result;
