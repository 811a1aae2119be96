pub mod catalog;
pub mod market;
pub mod product;

pub use catalog::Catalog;
pub use market::{DemandLevel, MarketCondition, PricingStrategy, SupplyLevel};
pub use product::{Competitor, Product};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid market condition code: '{0}'")]
    InvalidMarketCondition(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
