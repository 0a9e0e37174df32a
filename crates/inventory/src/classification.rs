//! ABC classification by annual consumption value.

use serde::{Deserialize, Serialize};

use stockcalc_core::{CalcError, CalcResult};

use crate::records::Product;

/// ABC tier, `A` being the highest consumption value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl core::fmt::Display for AbcClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        };
        f.write_str(s)
    }
}

/// Inclusive lower bounds of classes `A` and `B`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbcThresholds {
    pub umbral_a: f64,
    pub umbral_b: f64,
}

impl Default for AbcThresholds {
    fn default() -> Self {
        Self {
            umbral_a: 1000.0,
            umbral_b: 500.0,
        }
    }
}

impl AbcThresholds {
    pub fn new(umbral_a: f64, umbral_b: f64) -> Self {
        Self { umbral_a, umbral_b }
    }

    /// Tier for an already computed consumption value. Ties go to the higher tier.
    pub fn tier(&self, consumption_value: f64) -> AbcClass {
        if consumption_value >= self.umbral_a {
            AbcClass::A
        } else if consumption_value >= self.umbral_b {
            AbcClass::B
        } else {
            AbcClass::C
        }
    }
}

/// Classify a product; `None` stands for a missing product.
pub fn classify_abc(product: Option<&Product>, thresholds: AbcThresholds) -> CalcResult<AbcClass> {
    let Some(product) = product else {
        return Err(CalcError::invalid_argument(
            "product must not be null or undefined",
        ));
    };
    if product.annual_demand <= 0.0 || product.unit_cost <= 0.0 {
        return Err(CalcError::invalid_argument(
            "product must have demandaAnual and costoUnidad greater than 0",
        ));
    }
    Ok(thresholds.tier(product.annual_consumption_value()))
}

/// Classify every product, keeping input order. Fails on the first invalid product.
pub fn classify_portfolio(
    products: &[Product],
    thresholds: AbcThresholds,
) -> CalcResult<Vec<(String, AbcClass)>> {
    products
        .iter()
        .map(|p| classify_abc(Some(p), thresholds).map(|class| (p.name.clone(), class)))
        .collect()
}
