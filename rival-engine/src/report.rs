use serde::{Deserialize, Serialize};

use rival_catalog::Catalog;

use crate::pricing::chosen_price;
use crate::EngineResult;

/// Chosen price for a single product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuote {
    pub product: String,
    pub chosen_price: f64,
}

/// Chosen price for every product in the catalog, in lexicographic product
/// order. Fails on the first product with no eligible competitor prices.
pub fn price_report(catalog: &Catalog) -> EngineResult<Vec<ProductQuote>> {
    catalog
        .products()
        .map(|product| {
            chosen_price(catalog, product).map(|price| ProductQuote {
                product: product.name().to_string(),
                chosen_price: price,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;

    #[test]
    fn test_report_covers_all_products_in_order() {
        let mut catalog = Catalog::new();
        for (name, condition) in [("laptop", "H L"), ("charger", "H H")] {
            let product = catalog.create_product(name, condition).unwrap();
            catalog.add_product(product);
        }
        let laptop = catalog.product("laptop").unwrap().clone();
        let charger = catalog.product("charger").unwrap().clone();
        let acme = catalog.get_or_create_competitor("Acme");
        acme.record_price(&laptop, 1000.0);
        acme.record_price(&charger, 20.0);

        let report = price_report(&catalog).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].product, "charger");
        assert_eq!(report[0].chosen_price, 20.0);
        assert_eq!(report[1].product, "laptop");
        assert_eq!(report[1].chosen_price, 950.0);
    }

    #[test]
    fn test_report_fails_on_unpriced_product() {
        let mut catalog = Catalog::new();
        let product = catalog.create_product("orphan", "H H").unwrap();
        catalog.add_product(product);

        let err = price_report(&catalog).unwrap_err();
        assert!(matches!(err, EngineError::EmptyPriceSet { product } if product == "orphan"));
    }

    #[test]
    fn test_quote_serializes() {
        let quote = ProductQuote {
            product: "laptop".to_string(),
            chosen_price: 950.0,
        };
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["product"], "laptop");
        assert_eq!(value["chosen_price"], 950.0);
    }
}
