//! The symmetric-integral provider seam.
//!
//! The integral layer in [`crate::integrals`] never evaluates an elliptic
//! integral itself; it reduces Legendre-form arguments to Carlson form and
//! hands them to a [`SymmetricIntegrals`] implementation.

use crate::algo::carlson;
use crate::machine::EllipticFloat;
use crate::types::ProviderError;

/// Carlson's symmetric elliptic integrals RF, RD and RJ.
///
/// Implementations report arguments outside their domain as
/// [`ProviderError`]. The integral layer treats any such report as a broken
/// internal invariant.
pub trait SymmetricIntegrals<T: EllipticFloat> {
    /// RF(x, y, z); `x, y, z ≥ 0`, at most one zero.
    fn rf(&self, x: T, y: T, z: T) -> Result<T, ProviderError>;
    /// RD(x, y, z); `x, y ≥ 0` with at most one zero, `z > 0`.
    fn rd(&self, x: T, y: T, z: T) -> Result<T, ProviderError>;
    /// RJ(x, y, z, p); as RF, plus `p ≠ 0`.
    fn rj(&self, x: T, y: T, z: T, p: T) -> Result<T, ProviderError>;
}

/// Built-in provider using Carlson's duplication algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carlson;

impl<T: EllipticFloat> SymmetricIntegrals<T> for Carlson {
    #[inline]
    fn rf(&self, x: T, y: T, z: T) -> Result<T, ProviderError> {
        carlson::rf(x, y, z)
    }

    #[inline]
    fn rd(&self, x: T, y: T, z: T) -> Result<T, ProviderError> {
        carlson::rd(x, y, z)
    }

    #[inline]
    fn rj(&self, x: T, y: T, z: T, p: T) -> Result<T, ProviderError> {
        carlson::rj(x, y, z, p)
    }
}
