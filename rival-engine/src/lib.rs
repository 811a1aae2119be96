pub mod pricing;
pub mod report;

pub use pricing::chosen_price;
pub use report::{price_report, ProductQuote};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("No eligible competitor prices for product: {product}")]
    EmptyPriceSet { product: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
