//! Total inventory cost under the two review policies.

use serde::{Deserialize, Serialize};

use stockcalc_core::{CalcError, CalcResult};

/// Review policy an article is managed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryModel {
    /// Continuous review, constant lot size ordered at the reorder point.
    FixedLot,
    /// Periodic review, order up to a maximum level every period.
    FixedPeriod,
}

/// Fixed-lot total cost: purchase + ordering + holding.
///
/// `D·C + (D/Q)·S + (Q/2)·H`
pub fn fixed_lot_total_cost(
    lot_size: f64,
    demand: f64,
    unit_cost: f64,
    order_cost: f64,
    holding_cost: f64,
) -> CalcResult<f64> {
    // `!(x > 0)` also catches NaN, the closest thing to a null lot size.
    if !(lot_size > 0.0) {
        return Err(CalcError::invalid_argument(
            "cannot compute total cost with lot size equal to 0 or null",
        ));
    }
    Ok(demand * unit_cost + (demand / lot_size) * order_cost + (lot_size / 2.0) * holding_cost)
}

/// Fixed-period total cost: purchase + holding of half the maximum level.
pub fn fixed_period_total_cost(
    demand: f64,
    unit_cost: f64,
    max_inventory: f64,
    holding_cost: f64,
) -> f64 {
    demand * unit_cost + (max_inventory / 2.0) * holding_cost
}
