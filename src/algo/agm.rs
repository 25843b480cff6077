//! Jacobi amplitude by arithmetic-geometric mean (descending Landen).
//!
//! The descent runs the AGM from `(1, √(1−m))` and records the ratio
//! `cₙ/aₙ` at every step. At the limit the parameter has become zero, so the
//! amplitude there is simply `aₙ·u·2ⁿ`; the ascent walks the recorded ratios
//! backwards, undoing one Landen transformation per step (A&S 16.4).

use crate::machine::EllipticFloat;
use crate::types::Error;

/// Capacity of the ratio buffer. The default tolerance converges in at most
/// 10 steps for `f64` anywhere in `[0, 1)`.
pub(crate) const MAX_STEPS: usize = 16;

/// Recorded AGM descent for one `m`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Descent<T: EllipticFloat> {
    /// Common AGM limit `aₙ`.
    pub(crate) limit: T,
    /// Number of steps taken, `n`.
    pub(crate) steps: usize,
    /// `ratios[i] = cᵢ/aᵢ` for `i = 1..=n`; slot 0 is unused.
    ratios: [T; MAX_STEPS + 1],
}

impl<T: EllipticFloat> Descent<T> {
    /// Ratios in descent order, `c₁/a₁ ..= cₙ/aₙ`.
    #[inline]
    pub(crate) fn ratios(&self) -> &[T] {
        &self.ratios[1..=self.steps]
    }
}

/// Run the AGM from `a = 1`, `b = √(1−m)`, `c = √m` until `|c| ≤ tol`.
///
/// `m` must already be validated to lie in `[0, 1)`; at `m = 1` the
/// geometric mean stalls at zero.
///
/// # Errors
/// `ConvergenceFailure` if `tol` is NaN or the buffer fills before `|c|`
/// drops to `tol` (only possible for a tolerance below the rounding floor).
pub(crate) fn descend<T: EllipticFloat>(m: T, tol: T) -> Result<Descent<T>, Error> {
    if tol.is_nan() {
        return Err(Error::ConvergenceFailure);
    }
    let one = T::one();
    let half = T::from_f64(0.5);

    let mut ratios = [T::zero(); MAX_STEPS + 1];
    let mut a = one;
    let mut b = (one - m).sqrt();
    let mut c = m.sqrt();
    let mut n = 0;

    while c.abs() > tol {
        if n == MAX_STEPS {
            return Err(Error::ConvergenceFailure);
        }
        let a_next = half * (a + b);
        let b_next = (a * b).sqrt();
        c = half * (a - b);
        a = a_next;
        b = b_next;
        n += 1;
        ratios[n] = c / a;
    }

    Ok(Descent {
        limit: a,
        steps: n,
        ratios,
    })
}

/// Jacobi amplitude am(u|m) for validated `m ∈ [0, 1]`.
///
/// `m = 0` and `m = 1` use the exact closed forms `u` and `gd(u) =
/// atan(sinh u)`. The result is continuous in `u` (not wrapped into
/// `[−π, π]`).
pub(crate) fn amplitude<T: EllipticFloat>(u: T, m: T, tol: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();
    if m == zero {
        return Ok(u);
    }
    if m == one {
        return Ok(u.sinh().atan());
    }

    let descent = descend(m, tol)?;
    log::trace!(
        "am: AGM descent for m = {:?} took {} steps",
        m,
        descent.steps
    );

    let half = T::from_f64(0.5);
    let mut phi = descent.limit * u * T::from_f64(2.0).powi(descent.steps as i32);
    for &ratio in descent.ratios().iter().rev() {
        phi = half * (phi + (ratio * phi.sin()).asin());
    }
    Ok(phi)
}
