//! `InventoryCalculator`: the single entry point over all calculations.
//!
//! Every operation is independent and stateless. The async ones never suspend;
//! they resolve with the computed value (or the validation error) on first poll.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockcalc_core::{CalcResult, Clock, SystemClock};

use crate::classification::{self, AbcClass, AbcThresholds};
use crate::costing::{self, InventoryModel};
use crate::diagnostics;
use crate::records::{Article, InventoryItem, MovementRecord, Product, ReplenishmentEvent};
use crate::replenishment;
use crate::settings::CalculatorSettings;
use crate::simulation;
use crate::sizing::{self, ReorderPointOptions};

/// Inputs for a complete fixed-lot policy of one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedLotInput {
    pub annual_demand: f64,
    pub unit_cost: f64,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub lead_time_days: f64,
    pub service_level: f64,
    pub demand_std_dev: f64,
}

/// Fixed-lot policy: how much to order, when, and what it costs per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedLotPlan {
    pub model: InventoryModel,
    pub lot_size: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryCalculator<C: Clock = SystemClock> {
    settings: CalculatorSettings,
    clock: C,
}

impl InventoryCalculator<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CalculatorSettings) -> Self {
        Self {
            settings,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> InventoryCalculator<C> {
    /// Swap the time source (tests pass a `FixedClock`).
    pub fn with_clock<C2: Clock>(self, clock: C2) -> InventoryCalculator<C2> {
        InventoryCalculator {
            settings: self.settings,
            clock,
        }
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    pub fn optimal_lot_size(&self, demand: f64, order_cost: f64, holding_cost: f64) -> CalcResult<f64> {
        let q = sizing::optimal_lot_size(demand, order_cost, holding_cost)?;
        tracing::debug!(demand, order_cost, holding_cost, lot_size = q, "optimal lot size");
        Ok(q)
    }

    /// Reorder point. `options.working_days` falls back to the configured working days.
    pub async fn reorder_point(
        &self,
        annual_demand: f64,
        lead_time_days: f64,
        safety_stock: f64,
        options: Option<ReorderPointOptions>,
    ) -> CalcResult<f64> {
        let mut options = options.unwrap_or_default();
        options.working_days.get_or_insert(self.settings.working_days);

        let point = sizing::reorder_point(annual_demand, lead_time_days, safety_stock, options)?;
        tracing::debug!(annual_demand, lead_time_days, safety_stock, reorder_point = point, "reorder point");
        Ok(point)
    }

    pub async fn fixed_lot_total_cost(
        &self,
        lot_size: f64,
        demand: f64,
        unit_cost: f64,
        order_cost: f64,
        holding_cost: f64,
    ) -> CalcResult<f64> {
        let cost = costing::fixed_lot_total_cost(lot_size, demand, unit_cost, order_cost, holding_cost)?;
        tracing::debug!(lot_size, demand, total_cost = cost, "fixed-lot total cost");
        Ok(cost)
    }

    pub async fn fixed_period_total_cost(
        &self,
        demand: f64,
        unit_cost: f64,
        max_inventory: f64,
        holding_cost: f64,
    ) -> f64 {
        let cost = costing::fixed_period_total_cost(demand, unit_cost, max_inventory, holding_cost);
        tracing::debug!(demand, max_inventory, total_cost = cost, "fixed-period total cost");
        cost
    }

    /// Safety stock; `NaN` for an unsupported service level.
    pub fn safety_stock(
        &self,
        service_level: f64,
        demand_std_dev: f64,
        lead_time_days: f64,
        review_period_days: Option<f64>,
    ) -> f64 {
        sizing::safety_stock(service_level, demand_std_dev, lead_time_days, review_period_days)
    }

    pub fn max_inventory_fixed_period(
        &self,
        annual_demand: f64,
        review_period_days: f64,
        lead_time_days: f64,
        safety_stock: f64,
    ) -> CalcResult<f64> {
        sizing::max_inventory_fixed_period(
            annual_demand,
            review_period_days,
            lead_time_days,
            safety_stock,
            Some(self.settings.working_days),
        )
    }

    /// EOQ, safety stock, reorder point and total cost in one go.
    ///
    /// An unsupported service level makes the safety stock `NaN`, which the
    /// reorder point then rejects as non-numeric.
    pub async fn plan_fixed_lot(&self, input: FixedLotInput) -> CalcResult<FixedLotPlan> {
        let lot_size = self.optimal_lot_size(input.annual_demand, input.order_cost, input.holding_cost)?;
        let safety_stock = self.safety_stock(
            input.service_level,
            input.demand_std_dev,
            input.lead_time_days,
            None,
        );
        let reorder_point = self
            .reorder_point(input.annual_demand, input.lead_time_days, safety_stock, None)
            .await?;
        let total_cost = self
            .fixed_lot_total_cost(
                lot_size,
                input.annual_demand,
                input.unit_cost,
                input.order_cost,
                input.holding_cost,
            )
            .await?;

        Ok(FixedLotPlan {
            model: InventoryModel::FixedLot,
            lot_size,
            safety_stock,
            reorder_point,
            total_cost,
        })
    }

    pub fn is_replenishment_due(&self, article: &Article, now: DateTime<Utc>, has_open_order: bool) -> bool {
        replenishment::is_replenishment_due(article, now, has_open_order)
    }

    /// [`Self::is_replenishment_due`] evaluated at the clock's current instant.
    pub fn is_replenishment_due_now(&self, article: &Article, has_open_order: bool) -> bool {
        self.is_replenishment_due(article, self.clock.now(), has_open_order)
    }

    /// ABC class; `thresholds` fall back to the configured ones.
    pub fn classify_abc(&self, product: Option<&Product>, thresholds: Option<AbcThresholds>) -> CalcResult<AbcClass> {
        classification::classify_abc(product, thresholds.unwrap_or(self.settings.abc_thresholds))
    }

    pub fn classify_portfolio(
        &self,
        products: &[Product],
        thresholds: Option<AbcThresholds>,
    ) -> CalcResult<Vec<(String, AbcClass)>> {
        classification::classify_portfolio(products, thresholds.unwrap_or(self.settings.abc_thresholds))
    }

    pub fn simulate_stock(
        &self,
        initial_stock: f64,
        daily_consumption: f64,
        days: usize,
        replenishments: &[ReplenishmentEvent],
    ) -> Vec<f64> {
        simulation::simulate_stock(initial_stock, daily_consumption, days, replenishments)
    }

    /// Chronically inactive records as of the clock's current instant.
    pub fn detect_chronic_inactivity(&self, records: &[MovementRecord], threshold_days: i64) -> Vec<String> {
        self.detect_chronic_inactivity_at(records, threshold_days, self.clock.now())
    }

    /// Same as [`Self::detect_chronic_inactivity`] with the configured threshold.
    pub fn detect_chronic_inactivity_default(&self, records: &[MovementRecord]) -> Vec<String> {
        self.detect_chronic_inactivity(records, self.settings.inactivity_threshold_days)
    }

    pub fn detect_chronic_inactivity_at(
        &self,
        records: &[MovementRecord],
        threshold_days: i64,
        now: DateTime<Utc>,
    ) -> Vec<String> {
        let inactive = diagnostics::detect_chronic_inactivity(records, threshold_days, now);
        tracing::debug!(
            checked = records.len(),
            inactive = inactive.len(),
            threshold_days,
            "chronic inactivity scan"
        );
        inactive
    }

    pub fn total_inventory_value(&self, items: &[InventoryItem]) -> CalcResult<f64> {
        diagnostics::total_inventory_value(items)
    }

    pub fn total_inventory_value_json(&self, inventory: &JsonValue) -> CalcResult<f64> {
        diagnostics::total_inventory_value_json(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use stockcalc_core::FixedClock;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn settings_supply_abc_defaults() {
        let settings = CalculatorSettings {
            abc_thresholds: AbcThresholds::new(5000.0, 1000.0),
            ..CalculatorSettings::default()
        };
        let calc = InventoryCalculator::with_settings(settings);
        let p = Product::new("p", 200.0, 6.0);
        assert_eq!(calc.classify_abc(Some(&p), None).unwrap(), AbcClass::B);
        assert_eq!(
            calc.classify_abc(Some(&p), Some(AbcThresholds::default())).unwrap(),
            AbcClass::A
        );
    }

    #[test]
    fn clock_drives_time_based_checks() {
        let calc = InventoryCalculator::new().with_clock(FixedClock::new(at(2025, 6, 23)));
        let article = Article::new(Some(at(2025, 6, 1)), 10);
        assert!(calc.is_replenishment_due_now(&article, false));
        assert!(!calc.is_replenishment_due_now(&article, true));

        let now = at(2025, 6, 23);
        let records = vec![
            MovementRecord::new("old", vec![now - Duration::days(100)]),
            MovementRecord::new("recent", vec![now - Duration::days(10)]),
        ];
        assert_eq!(calc.detect_chronic_inactivity_default(&records), vec!["old".to_string()]);
        assert_eq!(
            calc.detect_chronic_inactivity(&records, 5),
            vec!["old".to_string(), "recent".to_string()]
        );
    }

    #[test]
    fn sync_operations_are_idempotent() {
        let calc = InventoryCalculator::new();
        let events = [ReplenishmentEvent::new(2, 20.0)];
        assert_eq!(
            calc.optimal_lot_size(1000.0, 10.0, 30.0).unwrap().to_bits(),
            calc.optimal_lot_size(1000.0, 10.0, 30.0).unwrap().to_bits()
        );
        assert_eq!(
            calc.safety_stock(0.95, 20.0, 4.0, Some(1.0)),
            calc.safety_stock(0.95, 20.0, 4.0, Some(1.0))
        );
        assert_eq!(
            calc.simulate_stock(50.0, 10.0, 4, &events),
            calc.simulate_stock(50.0, 10.0, 4, &events)
        );
    }
}
