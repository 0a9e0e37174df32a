//! Records passed into calculations.
//!
//! All of these are caller-built value objects. Nothing here is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcalc_core::ValueObject;

/// Article state needed to decide whether it is due for replenishment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Last replenishment instant; `None` if the article was never replenished.
    pub last_replenished_at: Option<DateTime<Utc>>,
    /// Review interval in days.
    pub review_interval_days: i64,
}

impl Article {
    pub fn new(last_replenished_at: Option<DateTime<Utc>>, review_interval_days: i64) -> Self {
        Self {
            last_replenished_at,
            review_interval_days,
        }
    }
}

impl ValueObject for Article {}

/// Product data used for ABC classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    /// Annual demand in units (must be > 0 to classify).
    pub annual_demand: f64,
    /// Cost per unit (must be > 0 to classify).
    pub unit_cost: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, annual_demand: f64, unit_cost: f64) -> Self {
        Self {
            name: name.into(),
            annual_demand,
            unit_cost,
        }
    }

    /// Annual consumption value (demand × unit cost).
    pub fn annual_consumption_value(&self) -> f64 {
        self.annual_demand * self.unit_cost
    }
}

impl ValueObject for Product {}

/// A stocked line for valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub quantity: f64,
    pub unit_cost: f64,
}

impl InventoryItem {
    pub fn new(quantity: f64, unit_cost: f64) -> Self {
        Self { quantity, unit_cost }
    }
}

impl ValueObject for InventoryItem {}

/// Units received on a given simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentEvent {
    /// 1-based day index.
    pub day: usize,
    pub quantity: f64,
}

impl ReplenishmentEvent {
    pub fn new(day: usize, quantity: f64) -> Self {
        Self { day, quantity }
    }
}

impl ValueObject for ReplenishmentEvent {}

/// Movement history of one product, for inactivity detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    pub name: String,
    pub movement_dates: Vec<DateTime<Utc>>,
}

impl MovementRecord {
    pub fn new(name: impl Into<String>, movement_dates: Vec<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            movement_dates,
        }
    }

    /// Most recent movement, if any.
    pub fn last_movement(&self) -> Option<DateTime<Utc>> {
        self.movement_dates.iter().max().copied()
    }
}

impl ValueObject for MovementRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn last_movement_is_the_maximum_not_the_last_element() {
        let d1 = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let d2 = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let d3 = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let record = MovementRecord::new("bolts", vec![d1, d2, d3]);
        assert_eq!(record.last_movement(), Some(d2));
        assert_eq!(MovementRecord::new("empty", vec![]).last_movement(), None);
    }

    #[test]
    fn records_use_camel_case_on_the_wire() {
        let json = serde_json::to_value(InventoryItem::new(10.0, 5.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "quantity": 10.0, "unitCost": 5.0 }));

        let product: Product =
            serde_json::from_str(r#"{"name":"nuts","annualDemand":200,"unitCost":6}"#).unwrap();
        assert_eq!(product, Product::new("nuts", 200.0, 6.0));
        assert_eq!(product.annual_consumption_value(), 1200.0);
    }
}
