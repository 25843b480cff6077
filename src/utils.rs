//! Shared argument validation and phase reduction.

use crate::algo::constants::{HPI, PI};
use crate::machine::EllipticFloat;
use crate::types::Error;

/// Reject an elliptic parameter outside `[0, 1]`.
///
/// NaN fails both comparisons and is rejected as well. Every public entry
/// point calls this before doing any arithmetic.
#[inline]
pub(crate) fn check_parameter<T: EllipticFloat>(m: T) -> Result<(), Error> {
    if m >= T::zero() && m <= T::one() {
        Ok(())
    } else {
        Err(Error::Domain)
    }
}

/// Split a phase into `k·π + r` with `r ∈ [−π/2, π/2)`.
///
/// `phi2 = phi + π/2`, `r = mod(phi2, π) − π/2`, `k = floor(phi2 / π)`, where
/// `mod` takes the sign of the divisor. Used by the quasi-periodic reduction
/// F(φ + kπ | m) = F(φ | m) + 2k·K(m) (A&S 17.4.3).
///
/// Non-finite input propagates NaN into both parts.
#[inline]
pub(crate) fn reduce_phase<T: EllipticFloat>(phi: T) -> (T, T) {
    let pi = T::from_f64(PI);
    let hpi = T::from_f64(HPI);

    let phi2 = phi + hpi;
    let mut rem = phi2 % pi;
    if rem < T::zero() {
        rem = rem + pi;
    }
    let k = ((phi2 - rem) / pi).round();
    (rem - hpi, k)
}
