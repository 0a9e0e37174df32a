//! Order sizing: lot size, reorder point and safety stock.

use serde::{Deserialize, Serialize};

use stockcalc_core::{CalcError, CalcResult};

/// Default number of working days per year.
pub const DEFAULT_WORKING_DAYS: f64 = 365.0;

/// Supported service levels and their standard-normal quantiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLevel {
    P90,
    P95,
    P98,
    P99,
}

impl ServiceLevel {
    pub const ALL: [ServiceLevel; 4] = [Self::P90, Self::P95, Self::P98, Self::P99];

    /// z-score for this service level.
    pub fn z_score(self) -> f64 {
        match self {
            Self::P90 => 1.2816,
            Self::P95 => 1.6449,
            Self::P98 => 2.0537,
            Self::P99 => 2.3263,
        }
    }

    pub fn ratio(self) -> f64 {
        match self {
            Self::P90 => 0.90,
            Self::P95 => 0.95,
            Self::P98 => 0.98,
            Self::P99 => 0.99,
        }
    }

    /// Exact lookup; any other ratio has no entry.
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.ratio() == ratio)
    }
}

/// Economic order quantity: `sqrt(2·D·S / H)`.
///
/// Only the holding cost is validated. Negative demand or ordering cost is not
/// rejected: a negative radicand yields `NaN`.
pub fn optimal_lot_size(demand: f64, order_cost: f64, holding_cost: f64) -> CalcResult<f64> {
    if holding_cost <= 0.0 {
        return Err(CalcError::invalid_argument(
            "holding cost must be greater than 0",
        ));
    }
    Ok(((2.0 * demand * order_cost) / holding_cost).sqrt())
}

/// Optional knobs for [`reorder_point`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPointOptions {
    /// Working days per year; [`DEFAULT_WORKING_DAYS`] when `None`.
    pub working_days: Option<f64>,
    /// Round the result up to the next integer.
    pub round_up: bool,
    /// Added to the daily demand before projecting over the lead time.
    pub daily_demand_deviation: Option<f64>,
}

impl ReorderPointOptions {
    pub fn with_working_days(mut self, days: f64) -> Self {
        self.working_days = Some(days);
        self
    }

    pub fn rounded(mut self) -> Self {
        self.round_up = true;
        self
    }

    pub fn with_daily_demand_deviation(mut self, deviation: f64) -> Self {
        self.daily_demand_deviation = Some(deviation);
        self
    }
}

/// Reorder point: daily demand × lead time + safety stock.
pub fn reorder_point(
    annual_demand: f64,
    lead_time_days: f64,
    safety_stock: f64,
    options: ReorderPointOptions,
) -> CalcResult<f64> {
    let daily = daily_demand(annual_demand, lead_time_days, safety_stock, options.working_days)?;
    let daily = match options.daily_demand_deviation {
        Some(deviation) if deviation != 0.0 && !deviation.is_nan() => daily + deviation,
        _ => daily,
    };

    let point = daily * lead_time_days + safety_stock;
    Ok(if options.round_up { point.ceil() } else { point })
}

/// Order-up-to level of the fixed-period model:
/// daily demand × (review period + lead time) + safety stock.
pub fn max_inventory_fixed_period(
    annual_demand: f64,
    review_period_days: f64,
    lead_time_days: f64,
    safety_stock: f64,
    working_days: Option<f64>,
) -> CalcResult<f64> {
    if !review_period_days.is_finite() {
        return Err(CalcError::invalid_argument("all parameters must be numeric"));
    }
    let daily = daily_demand(annual_demand, lead_time_days, safety_stock, working_days)?;
    if review_period_days < 0.0 {
        return Err(CalcError::invalid_argument(
            "review period must not be negative",
        ));
    }
    Ok(daily * (review_period_days + lead_time_days) + safety_stock)
}

/// Shared validation for demand-over-lead-time formulas.
fn daily_demand(
    annual_demand: f64,
    lead_time_days: f64,
    safety_stock: f64,
    working_days: Option<f64>,
) -> CalcResult<f64> {
    if [annual_demand, lead_time_days, safety_stock]
        .iter()
        .any(|v| !v.is_finite())
    {
        return Err(CalcError::invalid_argument("all parameters must be numeric"));
    }
    if lead_time_days <= 0.0 {
        return Err(CalcError::invalid_argument(
            "lead time must be greater than 0",
        ));
    }
    if annual_demand < 0.0 || safety_stock < 0.0 {
        return Err(CalcError::invalid_argument(
            "annual demand and safety stock must not be negative",
        ));
    }
    let days = working_days.unwrap_or(DEFAULT_WORKING_DAYS);
    if !(days > 0.0) {
        return Err(CalcError::invalid_argument(
            "working days must be greater than 0",
        ));
    }
    Ok(annual_demand / days)
}

/// Safety stock for a constant service level:
/// `ceil(z · σ · sqrt(lead time + review period))`.
///
/// A `service_level` outside the supported table does not fail: the result is
/// `NaN`. A missing, zero or `NaN` review period counts as 0.
pub fn safety_stock(
    service_level: f64,
    demand_std_dev: f64,
    lead_time_days: f64,
    review_period_days: Option<f64>,
) -> f64 {
    let z = match ServiceLevel::from_ratio(service_level) {
        Some(level) => level.z_score(),
        None => {
            tracing::warn!(service_level, "unsupported service level; safety stock is NaN");
            f64::NAN
        }
    };
    let review = review_period_days.filter(|r| !r.is_nan()).unwrap_or(0.0);

    (z * demand_std_dev * (lead_time_days + review).sqrt()).ceil()
}
