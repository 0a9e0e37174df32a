//! `stockcalc-core` — shared building blocks for the calculation crates.
//!
//! This crate contains **pure** primitives (no IO, no runtime concerns).

pub mod clock;
pub mod error;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CalcError, CalcResult};
pub use value_object::ValueObject;
