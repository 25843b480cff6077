//! Internal numerical kernels.
//!
//! All functions are `pub(crate)`; the public surface lives in
//! [`crate::integrals`] and [`crate::jacobi`].
//!
//! - `agm`: AGM descent with a fixed-capacity ratio buffer, and the Landen
//!   ascent that turns it into the Jacobi amplitude.
//! - `carlson`: duplication algorithm for RF, RD, RJ and RC. Kernels
//!   validate their own domain and report violations as `ProviderError`.
//!
//! # Clippy suppressions
//!
//! `carlson` carries `clippy::excessive_precision`: series coefficients are
//! written as exact rationals and reference values at full precision.

pub(crate) mod constants;

pub(crate) mod agm;
pub(crate) mod carlson;
