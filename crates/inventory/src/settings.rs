//! Calculator defaults, overridable from the environment or a JSON document.

use serde::Deserialize;

use stockcalc_core::{CalcError, CalcResult};

use crate::classification::AbcThresholds;
use crate::sizing::DEFAULT_WORKING_DAYS;

/// Defaults applied when a call does not say otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorSettings {
    pub working_days: f64,
    pub abc_thresholds: AbcThresholds,
    pub inactivity_threshold_days: i64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            working_days: DEFAULT_WORKING_DAYS,
            abc_thresholds: AbcThresholds::default(),
            inactivity_threshold_days: 90,
        }
    }
}

impl CalculatorSettings {
    /// Read overrides from `STOCKCALC_*` variables; unset or unparsable ones keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> CalcResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| CalcError::invalid_argument(format!("invalid calculator settings: {e}")))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            working_days: parsed(&lookup, "STOCKCALC_WORKING_DAYS", defaults.working_days),
            abc_thresholds: AbcThresholds {
                umbral_a: parsed(&lookup, "STOCKCALC_ABC_THRESHOLD_A", defaults.abc_thresholds.umbral_a),
                umbral_b: parsed(&lookup, "STOCKCALC_ABC_THRESHOLD_B", defaults.abc_thresholds.umbral_b),
            },
            inactivity_threshold_days: parsed(
                &lookup,
                "STOCKCALC_INACTIVITY_DAYS",
                defaults.inactivity_threshold_days,
            ),
        }
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: core::str::FromStr + core::fmt::Display + Copy,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{key}={raw:?} is not valid; using default {default}");
            default
        }),
    }
}
