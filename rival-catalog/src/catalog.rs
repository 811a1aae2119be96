use std::collections::BTreeMap;

use crate::market::PricingStrategy;
use crate::product::{Competitor, Product};
use crate::CatalogResult;

/// Owned aggregate of all products and competitors.
///
/// Built once by the loader, then read-only for the duration of price
/// computation. Both maps key by name, so iteration is lexicographic and
/// re-adding an existing name overwrites the prior entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
    competitors: BTreeMap<String, Competitor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a product, resolving its strategy from the two-token market
    /// condition code. Fails on an unrecognized code; does not insert.
    pub fn create_product(&self, name: &str, condition_code: &str) -> CatalogResult<Product> {
        let strategy = PricingStrategy::for_code(condition_code)?;
        Ok(Product::new(name, strategy))
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.insert(product.name().to_string(), product);
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Products in lexicographic name order
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn create_competitor(&self, name: &str) -> Competitor {
        Competitor::new(name)
    }

    pub fn add_competitor(&mut self, competitor: Competitor) {
        self.competitors
            .insert(competitor.name().to_string(), competitor);
    }

    pub fn competitor(&self, name: &str) -> Option<&Competitor> {
        self.competitors.get(name)
    }

    pub fn competitor_mut(&mut self, name: &str) -> Option<&mut Competitor> {
        self.competitors.get_mut(name)
    }

    /// Existing competitor by name, or a freshly registered one. Used during
    /// bulk loading so repeated price lines share one competitor record.
    pub fn get_or_create_competitor(&mut self, name: &str) -> &mut Competitor {
        self.competitors
            .entry(name.to_string())
            .or_insert_with(|| Competitor::new(name))
    }

    /// Competitors in lexicographic name order
    pub fn competitors(&self) -> impl Iterator<Item = &Competitor> {
        self.competitors.values()
    }

    pub fn competitor_count(&self) -> usize {
        self.competitors.len()
    }
}
