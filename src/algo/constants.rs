//! Shared constants used by multiple algorithm modules.
//!
//! Module-specific constants remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979324e+00;

/// π/2
pub(crate) const HPI: f64 = 1.57079632679489662e+00;

/// 1/3, the averaging weight of RF and RC.
pub(crate) const THIRD: f64 = 3.33333333333333333e-01;
