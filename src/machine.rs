//! Machine constants and the `EllipticFloat` trait.
//!
//! The Carlson domain bounds follow the underflow/overflow limits of the
//! duplication algorithm: every intermediate of the reduction must stay
//! representable, so each integral carries its own `(tiny, big)` pair.

use num_traits::Float;

/// Floating-point trait for elliptic integral and Jacobi function computation.
///
/// Implemented for `f64` and `f32`. The working precision of a call is the
/// type it is instantiated with; there is no implicit promotion between the
/// two, and every numerical kernel is monomorphic in `Self`.
pub trait EllipticFloat: Float + core::fmt::Debug + Send + Sync + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// Every algorithm constant in this crate is written as an f64 literal.
    fn from_f64(x: f64) -> Self;

    /// Default AGM convergence tolerance: machine epsilon.
    fn tol() -> Self;

    /// `(tiny, big)` for RF and RC: `5·MIN`, `MAX/5`, where `MIN` is the
    /// smallest positive normal number and `MAX` the largest finite one.
    fn rf_bounds() -> (Self, Self);
    /// `(tiny, big)` for RD: `2·MAX^(-2/3)`, `0.1·ERRTOL·MIN^(-2/3)`.
    fn rd_bounds() -> (Self, Self);
    /// `(tiny, big)` for RJ: `(5·MIN)^(1/3)`, `0.3·(MAX/5)^(1/3)`.
    fn rj_bounds() -> (Self, Self);
}

impl EllipticFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn tol() -> f64 {
        Self::MACH_EPSILON
    }
    #[inline]
    fn rf_bounds() -> (f64, f64) {
        (1.1125369292536007e-307, 3.5953862697246315e+307)
    }
    #[inline]
    fn rd_bounds() -> (f64, f64) {
        (6.278939363647028e-206, 1.896101745892058e+201)
    }
    #[inline]
    fn rj_bounds() -> (f64, f64) {
        (4.809554074311741e-103, 9.901548214916537e+101)
    }
}

// Derived constants are written at full f64 precision to document the exact
// formula results; the compiler rounds to f32 at compile time.
#[allow(clippy::excessive_precision)]
impl EllipticFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn tol() -> f32 {
        Self::MACH_EPSILON
    }
    #[inline]
    fn rf_bounds() -> (f32, f32) {
        (5.877472000000001e-38, 6.805647e+37)
    }
    #[inline]
    fn rd_bounds() -> (f32, f32) {
        (4.1033356814487145e-26, 2.9014218861529536e+21)
    }
    #[inline]
    fn rj_bounds() -> (f32, f32) {
        (3.888035213373663e-13, 1224835394236.8713)
    }
}
