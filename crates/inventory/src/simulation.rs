//! Day-by-day stock projection.

use crate::records::ReplenishmentEvent;

/// End-of-day stock levels for days `1..=days`.
///
/// Each day consumes `daily_consumption`, then receives every replenishment
/// scheduled for that day, then is clamped at zero. Events may come in any
/// order; events outside `1..=days` never apply.
pub fn simulate_stock(
    initial_stock: f64,
    daily_consumption: f64,
    days: usize,
    replenishments: &[ReplenishmentEvent],
) -> Vec<f64> {
    let mut stock = initial_stock;
    let mut levels = Vec::with_capacity(days);

    for day in 1..=days {
        stock -= daily_consumption;
        stock += replenishments
            .iter()
            .filter(|e| e.day == day)
            .map(|e| e.quantity)
            .sum::<f64>();
        stock = stock.max(0.0);
        levels.push(stock);
    }

    tracing::debug!(days, final_stock = stock, "stock simulation finished");
    levels
}
