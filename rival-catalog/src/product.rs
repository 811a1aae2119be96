use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::market::PricingStrategy;

/// A product the company sells, identified by its unique name.
///
/// The name is the catalog key and never changes after creation; the
/// assigned strategy may be replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    name: String,
    strategy: PricingStrategy,
}

impl Product {
    pub fn new(name: impl Into<String>, strategy: PricingStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> PricingStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: PricingStrategy) {
        self.strategy = strategy;
    }
}

// Products compare by name only: catalog iteration order is lexicographic.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Product {}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// A competitor and the prices it has been observed charging.
///
/// Prices are keyed by product name (the catalog key); recording a price
/// twice for the same product keeps the last write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    name: String,
    prices: BTreeMap<String, f64>,
}

impl Competitor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prices: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_price(&mut self, product: &Product, price: f64) {
        self.prices.insert(product.name().to_string(), price);
    }

    /// This competitor's observed price for the product, if it has one
    pub fn price_for(&self, product: &Product) -> Option<f64> {
        self.prices.get(product.name()).copied()
    }

    pub fn prices(&self) -> &BTreeMap<String, f64> {
        &self.prices
    }
}
