use std::collections::HashMap;

use rival_catalog::{Catalog, Product};

use crate::{EngineError, EngineResult};

/// Compute the chosen competitive price for a product.
///
/// Pipeline: collect every competitor's observed price for the product,
/// drop outliers relative to the one-shot mean, take the mode of what
/// remains, then run it through the product's pricing strategy.
///
/// Fails with [`EngineError::EmptyPriceSet`] when no competitor prices the
/// product, or when the outlier filter removes every collected price.
pub fn chosen_price(catalog: &Catalog, product: &Product) -> EngineResult<f64> {
    let collected = collect_competitor_prices(catalog, product);
    if collected.is_empty() {
        return Err(EngineError::EmptyPriceSet {
            product: product.name().to_string(),
        });
    }

    let filtered = filter_outliers(collected);
    if filtered.is_empty() {
        return Err(EngineError::EmptyPriceSet {
            product: product.name().to_string(),
        });
    }

    let representative = mode(&filtered);
    let price = product.strategy().adjust(representative);
    tracing::debug!(
        product = product.name(),
        representative,
        price,
        "chosen price computed"
    );
    Ok(price)
}

/// Every price any competitor has recorded for this product, in
/// lexicographic competitor-name order. Competitors with no entry for the
/// product are skipped.
pub fn collect_competitor_prices(catalog: &Catalog, product: &Product) -> Vec<f64> {
    catalog
        .competitors()
        .filter_map(|competitor| competitor.price_for(product))
        .collect()
}

/// Remove prices outside ±50% of the unfiltered mean.
///
/// The mean is computed once over the input; it is NOT recomputed as
/// elements drop out. Must not be called with an empty slice.
pub fn filter_outliers(prices: Vec<f64>) -> Vec<f64> {
    let mean = average(&prices);
    prices
        .into_iter()
        .filter(|&price| price >= 0.5 * mean && price <= 1.5 * mean)
        .collect()
}

/// Arithmetic mean. Must not be called with an empty slice.
pub fn average(prices: &[f64]) -> f64 {
    prices.iter().sum::<f64>() / prices.len() as f64
}

/// Most frequently occurring price, tie-broken to the smallest value.
///
/// Prices bucket under exact floating-point equality (bit equality on the
/// finite non-negative values the loader produces) — no epsilon. The result
/// depends only on the multiset of values, not their order. Must not be
/// called with an empty slice.
pub fn mode(prices: &[f64]) -> f64 {
    let mut counts: HashMap<u64, u32> = HashMap::new();
    for &price in prices {
        *counts.entry(price.to_bits()).or_insert(0) += 1;
    }

    let mut best = f64::INFINITY;
    let mut best_count = 0;
    for (&bits, &count) in &counts {
        let value = f64::from_bits(bits);
        if count > best_count || (count == best_count && value < best) {
            best = value;
            best_count = count;
        }
    }
    best
}
