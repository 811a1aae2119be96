use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

/// Supply side of a market condition, from the first flag token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplyLevel {
    High,
    Low,
}

/// Demand side of a market condition, from the second flag token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandLevel {
    High,
    Low,
}

/// Market condition for a product: a supply/demand flag pair.
///
/// Encoded in input data as a two-token code, e.g. "H L" for high supply
/// and low demand. Any other code is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketCondition {
    pub supply: SupplyLevel,
    pub demand: DemandLevel,
}

impl MarketCondition {
    pub fn new(supply: SupplyLevel, demand: DemandLevel) -> Self {
        Self { supply, demand }
    }

    /// The pricing strategy this condition selects. Total: every parsed
    /// condition maps to exactly one strategy.
    pub fn strategy(self) -> PricingStrategy {
        match (self.supply, self.demand) {
            (SupplyLevel::High, DemandLevel::High) => PricingStrategy::HighSupplyHighDemand,
            (SupplyLevel::High, DemandLevel::Low) => PricingStrategy::HighSupplyLowDemand,
            (SupplyLevel::Low, DemandLevel::High) => PricingStrategy::LowSupplyHighDemand,
            (SupplyLevel::Low, DemandLevel::Low) => PricingStrategy::LowSupplyLowDemand,
        }
    }

    /// The two-token code this condition is written as in input data
    pub fn code(self) -> &'static str {
        match (self.supply, self.demand) {
            (SupplyLevel::High, DemandLevel::High) => "H H",
            (SupplyLevel::High, DemandLevel::Low) => "H L",
            (SupplyLevel::Low, DemandLevel::High) => "L H",
            (SupplyLevel::Low, DemandLevel::Low) => "L L",
        }
    }
}

impl FromStr for MarketCondition {
    type Err = CatalogError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let condition = match code {
            "H H" => Self::new(SupplyLevel::High, DemandLevel::High),
            "H L" => Self::new(SupplyLevel::High, DemandLevel::Low),
            "L H" => Self::new(SupplyLevel::Low, DemandLevel::High),
            "L L" => Self::new(SupplyLevel::Low, DemandLevel::Low),
            _ => return Err(CatalogError::InvalidMarketCondition(code.to_string())),
        };
        Ok(condition)
    }
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Final-price adjustment applied to the representative competitor price.
///
/// Closed set of four variants, one per market condition. Pure numeric
/// transform, no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingStrategy {
    HighSupplyHighDemand,
    HighSupplyLowDemand,
    LowSupplyHighDemand,
    LowSupplyLowDemand,
}

impl PricingStrategy {
    pub fn adjust(self, base_price: f64) -> f64 {
        match self {
            Self::HighSupplyHighDemand => base_price,
            Self::HighSupplyLowDemand => base_price * 0.95,
            Self::LowSupplyHighDemand => base_price * 1.05,
            Self::LowSupplyLowDemand => base_price * 1.10,
        }
    }

    /// Resolve a strategy straight from a two-token market condition code
    pub fn for_code(code: &str) -> Result<Self, CatalogError> {
        Ok(code.parse::<MarketCondition>()?.strategy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_resolves() {
        assert_eq!(
            PricingStrategy::for_code("H H").unwrap(),
            PricingStrategy::HighSupplyHighDemand
        );
        assert_eq!(
            PricingStrategy::for_code("H L").unwrap(),
            PricingStrategy::HighSupplyLowDemand
        );
        assert_eq!(
            PricingStrategy::for_code("L H").unwrap(),
            PricingStrategy::LowSupplyHighDemand
        );
        assert_eq!(
            PricingStrategy::for_code("L L").unwrap(),
            PricingStrategy::LowSupplyLowDemand
        );
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = PricingStrategy::for_code("X Y").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidMarketCondition(code) if code == "X Y"));

        // Casing and spacing matter
        assert!("h h".parse::<MarketCondition>().is_err());
        assert!("H  H".parse::<MarketCondition>().is_err());
        assert!("HH".parse::<MarketCondition>().is_err());
    }

    #[test]
    fn test_adjustments() {
        assert_eq!(PricingStrategy::HighSupplyHighDemand.adjust(200.0), 200.0);
        assert_eq!(PricingStrategy::HighSupplyLowDemand.adjust(200.0), 190.0);
        assert_eq!(PricingStrategy::LowSupplyHighDemand.adjust(200.0), 210.0);
        assert!((PricingStrategy::LowSupplyLowDemand.adjust(200.0) - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_code_round_trip() {
        for code in ["H H", "H L", "L H", "L L"] {
            let condition: MarketCondition = code.parse().unwrap();
            assert_eq!(condition.code(), code);
        }
    }
}
