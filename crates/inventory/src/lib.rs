//! Inventory-control calculations.
//!
//! This crate computes order sizing, costs, replenishment decisions, ABC
//! classes, stock projections and diagnostics as deterministic functions
//! (no IO, no storage, no shared state).

pub mod calculator;
pub mod classification;
pub mod costing;
pub mod diagnostics;
pub mod records;
pub mod replenishment;
pub mod settings;
pub mod simulation;
pub mod sizing;

pub use calculator::{FixedLotInput, FixedLotPlan, InventoryCalculator};
pub use classification::{AbcClass, AbcThresholds};
pub use costing::InventoryModel;
pub use records::{Article, InventoryItem, MovementRecord, Product, ReplenishmentEvent};
pub use settings::CalculatorSettings;
pub use sizing::{ReorderPointOptions, ServiceLevel};
pub use stockcalc_core::{CalcError, CalcResult, Clock, FixedClock, SystemClock};
