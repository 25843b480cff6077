//! Pure Rust elliptic integrals and Jacobi elliptic functions.
//!
//! This crate evaluates, for real arguments and a real parameter
//! `m = k² ∈ [0, 1]`:
//!
//! - complete integrals K(m), E(m) and Π(n|m), and the `(K, E)` pair;
//! - incomplete integrals F(φ|m), E(φ|m) and Π(n; φ|m), reduced to
//!   Carlson's symmetric forms RF, RD and RJ;
//! - the Jacobi amplitude am(u|m) by AGM descent and Landen ascent;
//! - the twelve Jacobi elliptic functions sn, cn, dn, cd, sd, nd, dc, nc,
//!   sc, ns, ds and cs.
//!
//! All functions are generic over [`EllipticFloat`] (`f64` and `f32`) and
//! return [`Error::Domain`] for `m` outside `[0, 1]`.
//!
//! The single-value functions below use the built-in [`Carlson`] provider.
//! The `*_with` variants in [`integrals`] accept any [`SymmetricIntegrals`]
//! implementation.
//!
//! ```
//! let k = elliptic_jacobi::ellipk(0.5_f64).unwrap();
//! assert!((k - 1.8540746773013719).abs() < 1e-14);
//!
//! let t = elliptic_jacobi::ellipj(1.0_f64, 0.5).unwrap();
//! assert!((t.sn * t.sn + t.cn * t.cn - 1.0).abs() < 1e-15);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub(crate) mod algo;
pub mod integrals;
pub mod jacobi;
pub mod machine;
#[cfg(feature = "alloc")]
pub mod map;
pub mod provider;
pub mod types;
pub(crate) mod utils;

pub use jacobi::{
    am, am_with_tol, cd, cn, cs, dc, dn, ds, ellipj, ellipj_with_tol, jacobi, nc, nd, ns, sc,
    sd, sn,
};
pub use machine::EllipticFloat;
pub use provider::{Carlson, SymmetricIntegrals};
pub use types::{Error, Jacobi, JacobiKind, ProviderError};

use integrals::{
    ellipe_inc_with, ellipe_with, ellipf_with, ellipk_with, ellipke_with, ellippi_complete_with,
    ellippi_with,
};

// ── Complete integrals ──

/// Complete elliptic integral of the first kind, K(m). `+∞` at `m = 1`.
#[inline]
pub fn ellipk<T: EllipticFloat>(m: T) -> Result<T, Error> {
    ellipk_with(&Carlson, m)
}

/// Complete elliptic integral of the second kind, E(m). `1` at `m = 1`.
#[inline]
pub fn ellipe<T: EllipticFloat>(m: T) -> Result<T, Error> {
    ellipe_with(&Carlson, m)
}

/// `(K(m), E(m))` sharing one RF evaluation.
///
/// Bit-identical to calling [`ellipk`] and [`ellipe`] separately.
#[inline]
pub fn ellipke<T: EllipticFloat>(m: T) -> Result<(T, T), Error> {
    ellipke_with(&Carlson, m)
}

/// Complete elliptic integral of the third kind, Π(n|m).
#[inline]
pub fn ellippi_complete<T: EllipticFloat>(n: T, m: T) -> Result<T, Error> {
    ellippi_complete_with(&Carlson, n, m)
}

// ── Incomplete integrals ──

/// Incomplete elliptic integral of the first kind, F(φ|m), for any real φ.
#[inline]
pub fn ellipf<T: EllipticFloat>(phi: T, m: T) -> Result<T, Error> {
    ellipf_with(&Carlson, phi, m)
}

/// Incomplete elliptic integral of the second kind, E(φ|m).
///
/// The phase is not reduced; see [`integrals::ellipe_inc_with`].
#[inline]
pub fn ellipe_inc<T: EllipticFloat>(phi: T, m: T) -> Result<T, Error> {
    ellipe_inc_with(&Carlson, phi, m)
}

/// Incomplete elliptic integral of the third kind, Π(n; φ|m).
#[inline]
pub fn ellippi<T: EllipticFloat>(n: T, phi: T, m: T) -> Result<T, Error> {
    ellippi_with(&Carlson, n, phi, m)
}
