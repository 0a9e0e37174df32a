//! Inventory diagnostics: chronic inactivity and total valuation.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use stockcalc_core::{CalcError, CalcResult};

use crate::records::{InventoryItem, MovementRecord};
use crate::replenishment::whole_days_between;

const INVALID_ITEM: &str = "each item must have numeric, non-negative cantidad and costoUnidad";

/// Names of records whose latest movement is more than `threshold_days` before `now`.
///
/// Input order is preserved. Records without any movement date are skipped.
pub fn detect_chronic_inactivity(
    records: &[MovementRecord],
    threshold_days: i64,
    now: DateTime<Utc>,
) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| {
            let last = record.last_movement()?;
            let idle = whole_days_between(last, now);
            (idle > threshold_days).then(|| record.name.clone())
        })
        .collect()
}

/// Sum of `quantity × unit_cost` over all items.
pub fn total_inventory_value(items: &[InventoryItem]) -> CalcResult<f64> {
    items.iter().try_fold(0.0, |total, item| {
        let valid = |v: f64| !v.is_nan() && v >= 0.0;
        if !(valid(item.quantity) && valid(item.unit_cost)) {
            return Err(CalcError::invalid_argument(INVALID_ITEM));
        }
        Ok(total + item.quantity * item.unit_cost)
    })
}

/// [`total_inventory_value`] over untyped JSON.
///
/// The document must be an array of objects carrying a quantity
/// (`cantidad` or `quantity`) and a unit cost (`costoUnidad` or `unitCost`).
pub fn total_inventory_value_json(inventory: &JsonValue) -> CalcResult<f64> {
    let Some(entries) = inventory.as_array() else {
        return Err(CalcError::invalid_argument("inventory must be an array"));
    };

    let items = entries
        .iter()
        .map(|entry| {
            let field = |names: [&str; 2]| {
                names
                    .iter()
                    .find_map(|name| entry.get(*name))
                    .and_then(JsonValue::as_f64)
            };
            match (field(["cantidad", "quantity"]), field(["costoUnidad", "unitCost"])) {
                (Some(quantity), Some(unit_cost)) => Ok(InventoryItem::new(quantity, unit_cost)),
                _ => Err(CalcError::invalid_argument(INVALID_ITEM)),
            }
        })
        .collect::<CalcResult<Vec<_>>>()?;

    total_inventory_value(&items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn inactivity_uses_latest_movement_and_keeps_order() {
        let records = vec![
            MovementRecord::new("stale", vec![now() - Duration::days(200), now() - Duration::days(120)]),
            MovementRecord::new("fresh", vec![now() - Duration::days(300), now() - Duration::days(2)]),
            MovementRecord::new("dusty", vec![now() - Duration::days(95)]),
        ];
        assert_eq!(
            detect_chronic_inactivity(&records, 90, now()),
            vec!["stale".to_string(), "dusty".to_string()]
        );
    }

    #[test]
    fn inactivity_threshold_is_strict() {
        let records = vec![MovementRecord::new("edge", vec![now() - Duration::days(90)])];
        assert!(detect_chronic_inactivity(&records, 90, now()).is_empty());
        assert_eq!(detect_chronic_inactivity(&records, 89, now()), vec!["edge".to_string()]);
    }

    #[test]
    fn records_without_movements_are_skipped() {
        let records = vec![MovementRecord::new("new", vec![])];
        assert!(detect_chronic_inactivity(&records, 0, now()).is_empty());
        assert!(detect_chronic_inactivity(&[], 0, now()).is_empty());
    }

    #[test]
    fn valuation_reference_value() {
        let items = [
            InventoryItem::new(10.0, 5.0),
            InventoryItem::new(3.0, 20.0),
            InventoryItem::new(7.0, 2.5),
        ];
        let total = total_inventory_value(&items).unwrap();
        assert!((total - 127.5).abs() < 1e-9);
        assert_eq!(total_inventory_value(&[]).unwrap(), 0.0);
    }

    #[test]
    fn valuation_rejects_negative_or_nan() {
        for item in [
            InventoryItem::new(-1.0, 5.0),
            InventoryItem::new(1.0, -5.0),
            InventoryItem::new(f64::NAN, 5.0),
        ] {
            let err = total_inventory_value(&[InventoryItem::new(1.0, 1.0), item]).unwrap_err();
            assert_eq!(err.to_string(), INVALID_ITEM);
        }
    }

    #[test]
    fn json_valuation_accepts_both_key_styles() {
        let doc = json!([
            { "cantidad": 10, "costoUnidad": 5 },
            { "quantity": 3, "unitCost": 20 },
            { "cantidad": 7, "costoUnidad": 2.5 },
        ]);
        let total = total_inventory_value_json(&doc).unwrap();
        assert!((total - 127.5).abs() < 1e-9);
    }

    #[test]
    fn json_valuation_requires_an_array() {
        for doc in [json!({ "cantidad": 1, "costoUnidad": 1 }), json!("items"), json!(null)] {
            let err = total_inventory_value_json(&doc).unwrap_err();
            assert_eq!(err.to_string(), "inventory must be an array");
        }
    }

    #[test]
    fn json_valuation_rejects_bad_items() {
        for doc in [
            json!([{ "cantidad": "10", "costoUnidad": 5 }]),
            json!([{ "cantidad": 10 }]),
            json!([{ "cantidad": -10, "costoUnidad": 5 }]),
            json!([42]),
        ] {
            let err = total_inventory_value_json(&doc).unwrap_err();
            assert_eq!(err.to_string(), INVALID_ITEM);
        }
    }
}
