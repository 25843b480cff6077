//! Legendre-form elliptic integrals via Carlson reduction.
//!
//! Every function validates `m ∈ [0, 1]`, rewrites its arguments in Carlson
//! form and combines one or two provider calls:
//!
//! - K(m) = RF(0, 1−m, 1)
//! - E(m) = RF(0, 1−m, 1) − (m/3)·RD(0, 1−m, 1)
//! - F(φ|m) = s·RF(c², Δ², 1)
//! - E(φ|m) = s·RF(c², Δ², 1) − (m/3)·s³·RD(c², Δ², 1)
//! - Π(n; φ|m) = s·RF(c², Δ², 1) + (n/3)·s³·RJ(c², Δ², 1, 1 − n·s²)
//!
//! with `s = sin φ`, `c² = 1 − s²` and `Δ² = 1 − m·s²` (DLMF 19.25).

use crate::algo::constants::HPI;
use crate::machine::EllipticFloat;
use crate::provider::SymmetricIntegrals;
use crate::types::{Error, ProviderError};
use crate::utils::{check_parameter, reduce_phase};

/// Surface a provider failure as the fatal internal-invariant error.
#[inline]
fn provided<T>(result: Result<T, ProviderError>, integral: &str) -> Result<T, Error> {
    result.map_err(|err| {
        log::error!("{integral} rejected reduced arguments: {err}");
        Error::ProviderFailure(err)
    })
}

/// Complete elliptic integral of the first kind, K(m).
///
/// Returns `+∞` at `m = 1`.
///
/// # Errors
/// - `Domain`: `m ∉ [0, 1]`
/// - `ProviderFailure`: the provider rejected `(0, 1−m, 1)`
pub fn ellipk_with<T, P>(provider: &P, m: T) -> Result<T, Error>
where
    T: EllipticFloat,
    P: SymmetricIntegrals<T> + ?Sized,
{
    check_parameter(m)?;
    let one = T::one();
    if m == one {
        return Ok(T::infinity());
    }
    provided(provider.rf(T::zero(), one - m, one), "RF")
}

/// Complete integrals of the first and second kind, `(K(m), E(m))`.
///
/// Shares the single RF evaluation between both results. `K` is
/// bit-identical to [`ellipk_with`] and `E` to [`ellipe_with`].
/// Returns `(+∞, 1)` at `m = 1`.
///
/// # Errors
/// - `Domain`: `m ∉ [0, 1]`
/// - `ProviderFailure`: the provider rejected `(0, 1−m, 1)`
pub fn ellipke_with<T, P>(provider: &P, m: T) -> Result<(T, T), Error>
where
    T: EllipticFloat,
    P: SymmetricIntegrals<T> + ?Sized,
{
    check_parameter(m)?;
    let zero = T::zero();
    let one = T::one();
    if m == one {
        return Ok((T::infinity(), one));
    }
    let y = one - m;
    let rf = provided(provider.rf(zero, y, one), "RF")?;
    let rd = provided(provider.rd(zero, y, one), "RD")?;
    Ok((rf, rf - m * rd / T::from_f64(3.0)))
}

/// Complete elliptic integral of the second kind, E(m).
///
/// Returns `1` at `m = 1`.
///
/// # Errors
/// As [`ellipke_with`].
#[inline]
pub fn ellipe_with<T, P>(provider: &P, m: T) -> Result<T, Error>
where
    T: EllipticFloat,
    P: SymmetricIntegrals<T> + ?Sized,
{
    ellipke_with(provider, m).map(|(_, e)| e)
}

/// Incomplete elliptic integral of the first kind, F(φ|m).
///
/// Any real phase is accepted. Outside `[−π/2, π/2]` the phase is written
/// as `φ = kπ + r` and the quasi-periodicity F(kπ + r|m) = F(r|m) + 2k·K(m)
/// (A&S 17.4.3) is applied once; `r` always lands inside the interval.
///
/// At `m = 1` the integral diverges at `|φ| = π/2`, so `±∞` is returned
/// there and for every phase beyond it.
///
/// # Errors
/// - `Domain`: `m ∉ [0, 1]`
/// - `ProviderFailure`: the provider rejected the reduced arguments
pub fn ellipf_with<T, P>(provider: &P, phi: T, m: T) -> Result<T, Error>
where
    T: EllipticFloat,
    P: SymmetricIntegrals<T> + ?Sized,
{
    check_parameter(m)?;
    if phi.abs() > T::from_f64(HPI) {
        if m == T::one() {
            return Ok(phi.signum() * T::infinity());
        }
        let (r, k) = reduce_phase(phi);
        log::trace!("F: phase {:?} reduced to {:?} + {:?}·π", phi, r, k);
        let f = first_kind_reduced(provider, r, m)?;
        if k == T::zero() {
            return Ok(f);
        }
        let k_m = ellipk_with(provider, m)?;
        return Ok(f + T::from_f64(2.0) * k * k_m);
    }
    first_kind_reduced(provider, phi, m)
}

/// F(φ|m) for `|φ| ≤ π/2` and validated `m`.
fn first_kind_reduced<T, P>(provider: &P, phi: T, m: T) -> Result<T, Error>
where
    T: EllipticFloat,
    P: SymmetricIntegrals<T> + ?Sized,
{
    let one = T::one();
    let sinphi = phi.sin();
    let sinphi2 = sinphi * sinphi;
    if m == one && sinphi2 == one {
        return Ok(sinphi * T::infinity());
    }
    let rf = provided(provider.rf(one - sinphi2, one - m * sinphi2, one), "RF")?;
    Ok(sinphi * rf)
}

/// Incomplete elliptic integral of the second kind, E(φ|m).
///
/// No periodic reduction is applied: the phase is meant to lie in
/// `[−π/2, π/2]`. Outside it the formula is evaluated as written, which
/// yields E(asin(sin φ)|m).
///
/// Returns `sin φ` at `m = 1`, `|sin φ| = 1`, where both Carlson
/// arguments other than `z` vanish.
///
/// # Errors
/// - `Domain`: `m ∉ [0, 1]`
/// - `ProviderFailure`: the provider rejected the reduced arguments
pub fn ellipe_inc_with<T, P>(provider: &P, phi: T, m: T) -> Result<T, Error>
where
    T: EllipticFloat,
    P: SymmetricIntegrals<T> + ?Sized,
{
    check_parameter(m)?;
    let one = T::one();
    let sinphi = phi.sin();
    let sinphi2 = sinphi * sinphi;
    if m == one && sinphi2 == one {
        return Ok(sinphi);
    }
    let cosphi2 = one - sinphi2;
    let y = one - m * sinphi2;
    let rf = provided(provider.rf(cosphi2, y, one), "RF")?;
    let rd = provided(provider.rd(cosphi2, y, one), "RD")?;
    Ok(sinphi * (rf - m * sinphi2 * rd / T::from_f64(3.0)))
}

/// Incomplete elliptic integral of the third kind, Π(n; φ|m).
///
/// Uses the A&S sign convention: the integrand is
/// `1 / ((1 − n·sin²θ)·√(1 − m·sin²θ))`. For `n·sin²φ > 1` the Cauchy
/// principal value is returned. Like [`ellipe_inc_with`], no periodic
/// reduction is applied to `φ`.
///
/// The pole term `1 − n·sin²φ` is formed as `cos²φ + (1 − n)·sin²φ`, so a
/// phase just short of the pole stays finite. Where it is exactly zero, and
/// at `m = 1`, `|sin φ| = 1`, the integral diverges and `±∞` is returned.
///
/// # Errors
/// - `Domain`: `m ∉ [0, 1]`
/// - `Overflow`: `|1 − n·sin²φ|` exceeds the RJ range of `T`
///   (about `1e101` for `f64`, `1e12` for `f32`)
/// - `ProviderFailure`: the provider rejected the reduced arguments
pub fn ellippi_with<T, P>(provider: &P, n: T, phi: T, m: T) -> Result<T, Error>
where
    T: EllipticFloat,
    P: SymmetricIntegrals<T> + ?Sized,
{
    check_parameter(m)?;
    let zero = T::zero();
    let one = T::one();
    let sinphi = phi.sin();
    let cosphi = phi.cos();
    let sinphi2 = sinphi * sinphi;
    let cosphi2 = cosphi * cosphi;
    let p = cosphi2 + (one - n) * sinphi2;
    if p == zero || (m == one && sinphi2 == one) {
        return Ok(sinphi * T::infinity());
    }
    if p.abs() > T::rj_bounds().1 {
        return Err(Error::Overflow);
    }
    let y = one - m * sinphi2;
    let rf = provided(provider.rf(cosphi2, y, one), "RF")?;
    let rj = provided(provider.rj(cosphi2, y, one, p), "RJ")?;
    Ok(sinphi * (rf + n * sinphi2 * rj / T::from_f64(3.0)))
}

/// Complete elliptic integral of the third kind, Π(n|m) = Π(n; π/2|m).
///
/// Returns `+∞` at `n = 1`.
///
/// # Errors
/// As [`ellippi_with`].
pub fn ellippi_complete_with<T, P>(provider: &P, n: T, m: T) -> Result<T, Error>
where
    T: EllipticFloat,
    P: SymmetricIntegrals<T> + ?Sized,
{
    check_parameter(m)?;
    if n == T::one() {
        return Ok(T::infinity());
    }
    ellippi_with(provider, n, T::from_f64(HPI), m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Carlson;
    use core::f64::consts::{FRAC_PI_2, PI};

    /// A provider that rejects everything.
    struct Broken;

    impl SymmetricIntegrals<f64> for Broken {
        fn rf(&self, _: f64, _: f64, _: f64) -> Result<f64, ProviderError> {
            Err(ProviderError::InvalidArgument)
        }
        fn rd(&self, _: f64, _: f64, _: f64) -> Result<f64, ProviderError> {
            Err(ProviderError::InvalidArgument)
        }
        fn rj(&self, _: f64, _: f64, _: f64, _: f64) -> Result<f64, ProviderError> {
            Err(ProviderError::InvalidArgument)
        }
    }

    #[test]
    fn ellipk_reference_values() {
        let cases: &[(f64, f64)] = &[
            (0.0, FRAC_PI_2),
            (0.3, 1.7138894481787911),
            (0.5, 1.8540746773013719),
            (0.9, 2.5780921133481733),
        ];
        for &(m, expected) in cases {
            let got = ellipk_with(&Carlson, m).unwrap();
            assert!(
                (got - expected).abs() < 1e-14,
                "K({m}) = {got}, expected {expected}"
            );
        }
        assert_eq!(ellipk_with(&Carlson, 1.0_f64).unwrap(), f64::INFINITY);
    }

    #[test]
    fn ellipe_reference_values() {
        let cases: &[(f64, f64)] = &[
            (0.0, FRAC_PI_2),
            (0.3, 1.4453630644126653),
            (0.5, 1.3506438810476755),
            (0.9, 1.1047747327040733),
            (1.0, 1.0),
        ];
        for &(m, expected) in cases {
            let got = ellipe_with(&Carlson, m).unwrap();
            assert!(
                (got - expected).abs() < 1e-14,
                "E({m}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn ellipke_matches_separate_calls() {
        for &m in &[0.0_f64, 0.1, 0.5, 0.75, 0.999, 1.0] {
            let (k, e) = ellipke_with(&Carlson, m).unwrap();
            assert_eq!(k.to_bits(), ellipk_with(&Carlson, m).unwrap().to_bits());
            assert_eq!(e.to_bits(), ellipe_with(&Carlson, m).unwrap().to_bits());
        }
    }

    #[test]
    fn ellipf_reference_values() {
        let cases: &[(f64, f64, f64)] = &[
            (0.8, 0.3, 0.8243174027643094),
            (1.0, 0.5, 1.0832167728451688),
            (1.2, 0.8, 1.4884956889493300),
            (2.0, 0.7, 2.8129250806472120),
            (-3.0, 0.4, -3.4132569192625847),
            (10.0, 0.8, 14.145226112695650),
        ];
        for &(phi, m, expected) in cases {
            let got = ellipf_with(&Carlson, phi, m).unwrap();
            assert!(
                (got - expected).abs() < 1e-13,
                "F({phi}, {m}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn ellipf_quasi_periodic() {
        let m = 0.6_f64;
        let k = ellipk_with(&Carlson, m).unwrap();
        let base = ellipf_with(&Carlson, 0.4, m).unwrap();
        for j in -3..=3 {
            let shifted = ellipf_with(&Carlson, 0.4 + j as f64 * PI, m).unwrap();
            let expected = base + 2.0 * j as f64 * k;
            assert!((shifted - expected).abs() < 1e-12, "j = {j}");
        }
    }

    #[test]
    fn ellipf_parameter_one() {
        // F(φ|1) = atanh(sin φ)
        let got = ellipf_with(&Carlson, 1.2_f64, 1.0).unwrap();
        assert!((got - 1.6736992495582429).abs() < 1e-13);
        assert_eq!(
            ellipf_with(&Carlson, FRAC_PI_2, 1.0).unwrap(),
            f64::INFINITY
        );
    }

    #[test]
    fn ellipf_parameter_one_beyond_quarter_period() {
        for &phi in &[1.5 * PI, 2.0, 3.0 * PI, 1.6] {
            let up = ellipf_with(&Carlson, phi, 1.0_f64).unwrap();
            let down = ellipf_with(&Carlson, -phi, 1.0_f64).unwrap();
            assert_eq!(up, f64::INFINITY, "F({phi}|1) = {up}");
            assert_eq!(down, f64::NEG_INFINITY, "F(-{phi}|1) = {down}");
        }
    }

    #[test]
    fn ellipf_zero_parameter_is_identity() {
        for &phi in &[-1.2_f64, 0.0, 0.3, 1.5] {
            let got = ellipf_with(&Carlson, phi, 0.0).unwrap();
            assert!((got - phi).abs() < 1e-15);
        }
    }

    #[test]
    fn ellipe_inc_reference_values() {
        let got = ellipe_inc_with(&Carlson, 1.0_f64, 0.7).unwrap();
        assert!((got - 0.8950684855092523).abs() < 1e-14);
        let got = ellipe_inc_with(&Carlson, 0.5_f64, 0.5).unwrap();
        assert!((got - 0.48991095979251716).abs() < 1e-14);
        let got = ellipe_inc_with(&Carlson, FRAC_PI_2, 0.5).unwrap();
        assert!((got - 1.3506438810476755).abs() < 1e-14);
    }

    #[test]
    fn ellipe_inc_parameter_one() {
        // E(φ|1) = sin φ on [−π/2, π/2]
        for &phi in &[-1.5_f64, -0.4, 0.0, 0.9, 1.5, FRAC_PI_2] {
            let got = ellipe_inc_with(&Carlson, phi, 1.0).unwrap();
            assert!((got - phi.sin()).abs() < 1e-14, "phi = {phi}");
        }
    }

    #[test]
    fn ellippi_reference_values() {
        let got = ellippi_with(&Carlson, 0.3_f64, 1.0, 0.5).unwrap();
        assert!((got - 1.1923254369345582).abs() < 1e-14);
        let got = ellippi_with(&Carlson, -0.5_f64, 0.7, 0.2).unwrap();
        assert!((got - 0.6635410192377511).abs() < 1e-14);
        let got = ellippi_with(&Carlson, 1.5_f64, 0.5, 0.5).unwrap();
        assert!((got - 0.5896550851868641).abs() < 1e-14);
        let got = ellippi_complete_with(&Carlson, 0.3_f64, 0.5).unwrap();
        assert!((got - 2.2503768219439467).abs() < 1e-13);
    }

    #[test]
    fn ellippi_zero_characteristic_is_f() {
        let pi0 = ellippi_with(&Carlson, 0.0_f64, 1.1, 0.4).unwrap();
        let f = ellipf_with(&Carlson, 1.1_f64, 0.4).unwrap();
        assert!((pi0 - f).abs() < 1e-15);
    }

    #[test]
    fn ellippi_parameter_one() {
        // Π(0; φ|1) = atanh(sin φ)
        let got = ellippi_with(&Carlson, 0.0_f64, 1.2, 1.0).unwrap();
        assert!((got - 1.6736992495582429).abs() < 1e-13);
        let got = ellippi_with(&Carlson, 0.0_f64, -0.7, 1.0).unwrap();
        assert!((got + 0.7653504585976829).abs() < 1e-13);

        // Π(n; φ|1) = (atanh s − √n·atanh(√n·s)) / (1 − n), s = sin φ
        let (n, phi) = (0.5_f64, 1.2_f64);
        let s = phi.sin();
        let closed = (s.atanh() - n.sqrt() * (n.sqrt() * s).atanh()) / (1.0 - n);
        let got = ellippi_with(&Carlson, n, phi, 1.0).unwrap();
        assert!((got - 2.2285655830999925).abs() < 1e-13);
        assert!((got - closed).abs() < 1e-13);

        // n < 0: (atanh s + √a·atan(√a·s)) / (1 + a), a = −n
        let got = ellippi_with(&Carlson, -2.0_f64, -0.9, 1.0).unwrap();
        assert!((got + 0.7456343881041144).abs() < 1e-13);

        for &n in &[0.0_f64, 0.5, -2.0] {
            assert_eq!(
                ellippi_with(&Carlson, n, FRAC_PI_2, 1.0).unwrap(),
                f64::INFINITY
            );
            assert_eq!(
                ellippi_with(&Carlson, n, -FRAC_PI_2, 1.0).unwrap(),
                f64::NEG_INFINITY
            );
        }
    }

    #[test]
    fn ellippi_pole() {
        assert_eq!(
            ellippi_complete_with(&Carlson, 1.0_f64, 0.3).unwrap(),
            f64::INFINITY
        );
        // Just short of the pole the integral is large but finite.
        let phi = FRAC_PI_2 - 1e-9;
        let got = ellippi_with(&Carlson, 1.0_f64, phi, 0.3).unwrap();
        let expected = 1195228436.9032004;
        assert!(
            ((got - expected) / expected).abs() < 1e-9,
            "Π(1; π/2 − 1e-9|0.3) = {got}"
        );
    }

    #[test]
    fn ellippi_huge_characteristic_overflows() {
        assert_eq!(ellippi_with(&Carlson, 1e110_f64, 1.0, 0.5), Err(Error::Overflow));
        assert_eq!(ellippi_with(&Carlson, -1e110_f64, 1.0, 0.5), Err(Error::Overflow));
        assert_eq!(ellippi_complete_with(&Carlson, 1e110_f64, 0.5), Err(Error::Overflow));
        // Large but in range.
        let got = ellippi_with(&Carlson, 1e90_f64, 1.0, 0.5).unwrap();
        assert!(got.is_finite());
        // A zero phase never reaches the pole term's range limit.
        assert_eq!(ellippi_with(&Carlson, 1e110_f64, 0.0, 0.5), Ok(0.0));
    }

    #[test]
    fn domain_rejected_before_provider() {
        assert_eq!(ellipk_with(&Broken, -0.1), Err(Error::Domain));
        assert_eq!(ellipk_with(&Broken, 1.1), Err(Error::Domain));
        assert_eq!(ellipf_with(&Broken, 0.5, 1.5), Err(Error::Domain));
        assert_eq!(ellipe_inc_with(&Broken, 0.5, f64::NAN), Err(Error::Domain));
        assert_eq!(ellippi_with(&Broken, 0.2, 0.5, -1.0), Err(Error::Domain));
    }

    #[test]
    fn provider_failure_is_surfaced() {
        let expected = Err(Error::ProviderFailure(ProviderError::InvalidArgument));
        assert_eq!(ellipk_with(&Broken, 0.5), expected);
        assert_eq!(ellipe_with(&Broken, 0.5), expected);
        assert_eq!(ellipf_with(&Broken, 3.0, 0.5), expected);
        assert_eq!(ellippi_with(&Broken, 0.2, 0.5, 0.5), expected);
        // Closed-form paths never reach the provider.
        assert_eq!(ellipk_with(&Broken, 1.0), Ok(f64::INFINITY));
    }

    #[test]
    fn integrals_f32() {
        let k = ellipk_with(&Carlson, 0.5_f32).unwrap();
        assert!((k - 1.8540747).abs() < 1e-5);
        let f = ellipf_with(&Carlson, 2.0_f32, 0.7).unwrap();
        assert!((f - 2.8129251).abs() < 1e-4);
    }
}
