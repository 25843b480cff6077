//! Jacobi amplitude and the twelve Jacobi elliptic functions.
//!
//! Everything here is derived from φ = am(u|m):
//! `sn = sin φ`, `cn = cos φ`, `dn = √(1 − m·sn²)`, and the nine ratios
//! `pq = p/q` with `n ≡ 1`.

use crate::algo::agm::amplitude;
use crate::machine::EllipticFloat;
use crate::types::{Error, Jacobi, JacobiKind};
use crate::utils::check_parameter;

/// Jacobi amplitude am(u|m) with the default tolerance (machine epsilon).
///
/// # Errors
/// - `Domain`: `m ∉ [0, 1]`
#[inline]
pub fn am<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    am_with_tol(u, m, T::tol())
}

/// Jacobi amplitude am(u|m), stopping the AGM descent once `|cₙ| ≤ tol`.
///
/// The amplitude is continuous in `u`; it is not wrapped into `[−π, π]`.
///
/// # Errors
/// - `Domain`: `m ∉ [0, 1]`
/// - `ConvergenceFailure`: `tol` is NaN or below what the working precision
///   can resolve
pub fn am_with_tol<T: EllipticFloat>(u: T, m: T, tol: T) -> Result<T, Error> {
    check_parameter(m)?;
    amplitude(u, m, tol)
}

/// sn, cn and dn from a single amplitude evaluation.
///
/// # Errors
/// - `Domain`: `m ∉ [0, 1]`
#[inline]
pub fn ellipj<T: EllipticFloat>(u: T, m: T) -> Result<Jacobi<T>, Error> {
    ellipj_with_tol(u, m, T::tol())
}

/// sn, cn and dn from a single amplitude evaluation with tolerance `tol`.
///
/// `m = 0` gives `(sin u, cos u, 1)` and `m = 1` gives
/// `(tanh u, sech u, sech u)` exactly, without running the AGM.
///
/// # Errors
/// As [`am_with_tol`].
pub fn ellipj_with_tol<T: EllipticFloat>(u: T, m: T, tol: T) -> Result<Jacobi<T>, Error> {
    check_parameter(m)?;
    let zero = T::zero();
    let one = T::one();

    if m == zero {
        return Ok(Jacobi {
            sn: u.sin(),
            cn: u.cos(),
            dn: one,
        });
    }
    if m == one {
        let sech = one / u.cosh();
        return Ok(Jacobi {
            sn: u.tanh(),
            cn: sech,
            dn: sech,
        });
    }

    let phi = amplitude(u, m, tol)?;
    let sn = phi.sin();
    Ok(Jacobi {
        sn,
        cn: phi.cos(),
        dn: (one - m * sn * sn).sqrt(),
    })
}

/// Evaluate one Jacobi function by name.
///
/// ```
/// use elliptic_jacobi::{jacobi, JacobiKind};
///
/// let sd = jacobi(JacobiKind::Sd, 1.0_f64, 0.5, f64::EPSILON).unwrap();
/// assert!((sd - 0.9755100439695337).abs() < 1e-13);
/// ```
///
/// # Errors
/// As [`am_with_tol`].
#[inline]
pub fn jacobi<T: EllipticFloat>(kind: JacobiKind, u: T, m: T, tol: T) -> Result<T, Error> {
    ellipj_with_tol(u, m, tol).map(|t| t.get(kind))
}

/// sn(u|m).
pub fn sn<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Sn, u, m, T::tol())
}

/// cn(u|m).
pub fn cn<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Cn, u, m, T::tol())
}

/// dn(u|m).
pub fn dn<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Dn, u, m, T::tol())
}

/// cd(u|m) = cn/dn.
pub fn cd<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Cd, u, m, T::tol())
}

/// sd(u|m) = sn/dn.
pub fn sd<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Sd, u, m, T::tol())
}

/// nd(u|m) = 1/dn.
pub fn nd<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Nd, u, m, T::tol())
}

/// dc(u|m) = dn/cn.
pub fn dc<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Dc, u, m, T::tol())
}

/// nc(u|m) = 1/cn.
pub fn nc<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Nc, u, m, T::tol())
}

/// sc(u|m) = sn/cn.
pub fn sc<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Sc, u, m, T::tol())
}

/// ns(u|m) = 1/sn.
pub fn ns<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Ns, u, m, T::tol())
}

/// ds(u|m) = dn/sn.
pub fn ds<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Ds, u, m, T::tol())
}

/// cs(u|m) = cn/sn.
pub fn cs<T: EllipticFloat>(u: T, m: T) -> Result<T, Error> {
    jacobi(JacobiKind::Cs, u, m, T::tol())
}
