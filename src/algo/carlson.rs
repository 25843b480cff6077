//! Carlson symmetric elliptic integrals RF, RD, RJ and RC.
//!
//! Duplication algorithm of B. C. Carlson, "Numerical computation of real or
//! complex elliptic integrals", Numer. Algorithms 10 (1995). Each step maps
//! `t ← (t + λ)/4` with `λ = √x√y + √x√z + √y√z`, which leaves the integral
//! invariant, until all arguments agree with their weighted mean to within
//! `ERRTOL`; a fifth-order Taylor expansion about the mean finishes the job.
//! The relative truncation error scales as `ERRTOL⁶`.

// Series coefficients are exact rationals written out in full.
#![allow(clippy::excessive_precision)]

use crate::algo::constants::THIRD;
use crate::machine::EllipticFloat;
use crate::types::ProviderError;

const RF_ERRTOL: f64 = 0.0025;
const RD_ERRTOL: f64 = 0.0015;
const RJ_ERRTOL: f64 = 0.0015;
const RC_ERRTOL: f64 = 0.0012;

/// RF(x, y, z) = ½∫₀^∞ dt / √((t+x)(t+y)(t+z)).
///
/// Requires `x, y, z ≥ 0` with at most one of them zero.
pub(crate) fn rf<T: EllipticFloat>(x: T, y: T, z: T) -> Result<T, ProviderError> {
    const C1: f64 = 1.0 / 24.0;
    const C2: f64 = 0.1;
    const C3: f64 = 3.0 / 44.0;
    const C4: f64 = 1.0 / 14.0;

    if x.is_nan() || y.is_nan() || z.is_nan() {
        return Ok(T::nan());
    }
    let zero = T::zero();
    let (tiny, big) = T::rf_bounds();
    if x.min(y).min(z) < zero
        || (x + y).min(x + z).min(y + z) < tiny
        || x.max(y).max(z) > big
    {
        return Err(ProviderError::InvalidArgument);
    }

    let errtol = T::from_f64(RF_ERRTOL);
    let quarter = T::from_f64(0.25);
    let third = T::from_f64(THIRD);

    let (mut xt, mut yt, mut zt) = (x, y, z);
    let (ave, delx, dely, delz) = loop {
        let (sqrtx, sqrty, sqrtz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sqrtx * (sqrty + sqrtz) + sqrty * sqrtz;
        xt = quarter * (xt + lambda);
        yt = quarter * (yt + lambda);
        zt = quarter * (zt + lambda);
        let ave = third * (xt + yt + zt);
        let delx = (ave - xt) / ave;
        let dely = (ave - yt) / ave;
        let delz = (ave - zt) / ave;
        if delx.abs().max(dely.abs()).max(delz.abs()) <= errtol {
            break (ave, delx, dely, delz);
        }
    };

    let e2 = delx * dely - delz * delz;
    let e3 = delx * dely * delz;
    let series = T::one()
        + (T::from_f64(C1) * e2 - T::from_f64(C2) - T::from_f64(C3) * e3) * e2
        + T::from_f64(C4) * e3;
    Ok(series / ave.sqrt())
}

/// RD(x, y, z) = (3/2)∫₀^∞ dt / ((t+z)√((t+x)(t+y)(t+z))).
///
/// Requires `x, y ≥ 0`, `x + y > 0` and `z > 0`.
pub(crate) fn rd<T: EllipticFloat>(x: T, y: T, z: T) -> Result<T, ProviderError> {
    const C1: f64 = 3.0 / 14.0;
    const C2: f64 = 1.0 / 6.0;
    const C3: f64 = 9.0 / 22.0;
    const C4: f64 = 3.0 / 26.0;
    const C5: f64 = 0.25 * C3;
    const C6: f64 = 1.5 * C4;

    if x.is_nan() || y.is_nan() || z.is_nan() {
        return Ok(T::nan());
    }
    let zero = T::zero();
    let (tiny, big) = T::rd_bounds();
    if x.min(y) < zero || (x + y).min(z) < tiny || x.max(y).max(z) > big {
        return Err(ProviderError::InvalidArgument);
    }

    let errtol = T::from_f64(RD_ERRTOL);
    let quarter = T::from_f64(0.25);
    let fifth = T::from_f64(0.2);
    let three = T::from_f64(3.0);

    let (mut xt, mut yt, mut zt) = (x, y, z);
    let mut sum = zero;
    let mut fac = T::one();
    let (ave, delx, dely, delz) = loop {
        let (sqrtx, sqrty, sqrtz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sqrtx * (sqrty + sqrtz) + sqrty * sqrtz;
        sum = sum + fac / (sqrtz * (zt + lambda));
        fac = quarter * fac;
        xt = quarter * (xt + lambda);
        yt = quarter * (yt + lambda);
        zt = quarter * (zt + lambda);
        let ave = fifth * (xt + yt + three * zt);
        let delx = (ave - xt) / ave;
        let dely = (ave - yt) / ave;
        let delz = (ave - zt) / ave;
        if delx.abs().max(dely.abs()).max(delz.abs()) <= errtol {
            break (ave, delx, dely, delz);
        }
    };

    let ea = delx * dely;
    let eb = delz * delz;
    let ec = ea - eb;
    let ed = ea - T::from_f64(6.0) * eb;
    let ee = ed + ec + ec;
    let series = T::one()
        + ed * (-T::from_f64(C1) + T::from_f64(C5) * ed - T::from_f64(C6) * delz * ee)
        + delz
            * (T::from_f64(C2) * ee
                + delz * (-T::from_f64(C3) * ec + delz * T::from_f64(C4) * ea));
    Ok(three * sum + fac * series / (ave * ave.sqrt()))
}

/// RJ(x, y, z, p) = (3/2)∫₀^∞ dt / ((t+p)√((t+x)(t+y)(t+z))).
///
/// Requires `x, y, z ≥ 0` with at most one zero, and `p ≠ 0`. For `p < 0`
/// the Cauchy principal value is returned.
pub(crate) fn rj<T: EllipticFloat>(x: T, y: T, z: T, p: T) -> Result<T, ProviderError> {
    const C1: f64 = 3.0 / 14.0;
    const C2: f64 = 1.0 / 3.0;
    const C3: f64 = 3.0 / 22.0;
    const C4: f64 = 3.0 / 26.0;
    const C5: f64 = 0.75 * C3;
    const C6: f64 = 1.5 * C4;
    const C7: f64 = 0.5 * C2;
    const C8: f64 = C3 + C3;

    if x.is_nan() || y.is_nan() || z.is_nan() || p.is_nan() {
        return Ok(T::nan());
    }
    let zero = T::zero();
    let one = T::one();
    let (tiny, big) = T::rj_bounds();
    if x.min(y).min(z) < zero
        || (x + y).min(x + z).min(y + z).min(p.abs()) < tiny
        || x.max(y).max(z).max(p.abs()) > big
    {
        return Err(ProviderError::InvalidArgument);
    }

    let errtol = T::from_f64(RJ_ERRTOL);
    let quarter = T::from_f64(0.25);
    let fifth = T::from_f64(0.2);
    let two = T::from_f64(2.0);
    let three = T::from_f64(3.0);

    // Principal value: shift to a positive p' (Carlson 1995, eq. 2.22).
    let (mut xt, mut yt, mut zt, mut pt, pv) = if p > zero {
        (x, y, z, p, None)
    } else {
        let xt = x.min(y).min(z);
        let zt = x.max(y).max(z);
        let yt = x + y + z - xt - zt;
        let a = one / (yt - p);
        let b = a * (zt - yt) * (yt - xt);
        let pt = yt + b;
        let rho = xt * zt / yt;
        let tau = p * pt / yt;
        let rcx = rc(rho, tau)?;
        (xt, yt, zt, pt, Some((a, b, rcx)))
    };

    let mut sum = zero;
    let mut fac = one;
    let (ave, delx, dely, delz, delp) = loop {
        let (sqrtx, sqrty, sqrtz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sqrtx * (sqrty + sqrtz) + sqrty * sqrtz;
        let alpha = pt * (sqrtx + sqrty + sqrtz) + sqrtx * sqrty * sqrtz;
        let alpha = alpha * alpha;
        let beta = pt * (pt + lambda) * (pt + lambda);
        sum = sum + fac * rc(alpha, beta)?;
        fac = quarter * fac;
        xt = quarter * (xt + lambda);
        yt = quarter * (yt + lambda);
        zt = quarter * (zt + lambda);
        pt = quarter * (pt + lambda);
        let ave = fifth * (xt + yt + zt + pt + pt);
        let delx = (ave - xt) / ave;
        let dely = (ave - yt) / ave;
        let delz = (ave - zt) / ave;
        let delp = (ave - pt) / ave;
        if delx.abs().max(dely.abs()).max(delz.abs()).max(delp.abs()) <= errtol {
            break (ave, delx, dely, delz, delp);
        }
    };

    let ea = delx * (dely + delz) + dely * delz;
    let eb = delx * dely * delz;
    let ec = delp * delp;
    let ed = ea - three * ec;
    let ee = eb + two * delp * (ea - ec);
    let series = one
        + ed * (-T::from_f64(C1) + T::from_f64(C5) * ed - T::from_f64(C6) * ee)
        + eb * (T::from_f64(C7) + delp * (-T::from_f64(C8) + delp * T::from_f64(C4)))
        + delp * ea * (T::from_f64(C2) - delp * T::from_f64(C3))
        - T::from_f64(C2) * delp * ec;
    let ans = three * sum + fac * series / (ave * ave.sqrt());

    match pv {
        None => Ok(ans),
        // RF is invariant under duplication, so the reduced arguments serve.
        Some((a, b, rcx)) => Ok(a * (b * ans + three * (rcx - rf(xt, yt, zt)?))),
    }
}

/// RC(x, y) = RF(x, y, y), the degenerate case used inside RJ.
///
/// Requires `x ≥ 0` and `y ≠ 0`; for `y < 0` the Cauchy principal value is
/// returned.
pub(crate) fn rc<T: EllipticFloat>(x: T, y: T) -> Result<T, ProviderError> {
    const C1: f64 = 0.3;
    const C2: f64 = 1.0 / 7.0;
    const C3: f64 = 0.375;
    const C4: f64 = 9.0 / 22.0;

    if x.is_nan() || y.is_nan() {
        return Ok(T::nan());
    }
    let zero = T::zero();
    let (tiny, big) = T::rf_bounds();
    if x < zero || y == zero || x + y.abs() < tiny || x + y.abs() > big {
        return Err(ProviderError::InvalidArgument);
    }

    let errtol = T::from_f64(RC_ERRTOL);
    let quarter = T::from_f64(0.25);
    let third = T::from_f64(THIRD);
    let two = T::from_f64(2.0);

    let (mut xt, mut yt, w) = if y > zero {
        (x, y, T::one())
    } else {
        (x - y, -y, x.sqrt() / (x - y).sqrt())
    };
    let (ave, s) = loop {
        let lambda = two * xt.sqrt() * yt.sqrt() + yt;
        xt = quarter * (xt + lambda);
        yt = quarter * (yt + lambda);
        let ave = third * (xt + yt + yt);
        let s = (yt - ave) / ave;
        if s.abs() <= errtol {
            break (ave, s);
        }
    };

    let series = T::one()
        + s * s
            * (T::from_f64(C1)
                + s * (T::from_f64(C2) + s * (T::from_f64(C3) + s * T::from_f64(C4))));
    Ok(w * series / ave.sqrt())
}
