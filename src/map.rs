//! Elementwise evaluation over slices.
//!
//! Each element is evaluated independently with no shared state, so the
//! `par_*` variants (feature `rayon`) return exactly what the sequential
//! ones do. The first error encountered is returned.
//!
//! ```
//! use elliptic_jacobi::{ellipk, map};
//!
//! let ks = map::map1(&[0.0_f64, 0.5, 0.9], ellipk).unwrap();
//! assert_eq!(ks.len(), 3);
//! ```

use alloc::vec::Vec;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::types::Error;

/// Apply `f` to every element of `xs`.
pub fn map1<A, R, F>(xs: &[A], f: F) -> Result<Vec<R>, Error>
where
    A: Copy,
    F: Fn(A) -> Result<R, Error>,
{
    xs.iter().map(|&x| f(x)).collect()
}

/// Apply `f` pairwise to `xs` and `ys`.
///
/// # Errors
/// `ShapeMismatch` if the slices differ in length, otherwise the first
/// error returned by `f`.
pub fn map2<A, B, R, F>(xs: &[A], ys: &[B], f: F) -> Result<Vec<R>, Error>
where
    A: Copy,
    B: Copy,
    F: Fn(A, B) -> Result<R, Error>,
{
    if xs.len() != ys.len() {
        return Err(Error::ShapeMismatch);
    }
    xs.iter().zip(ys).map(|(&x, &y)| f(x, y)).collect()
}

/// Apply `f` to aligned triples from `xs`, `ys` and `zs`.
///
/// # Errors
/// As [`map2`].
pub fn map3<A, B, C, R, F>(xs: &[A], ys: &[B], zs: &[C], f: F) -> Result<Vec<R>, Error>
where
    A: Copy,
    B: Copy,
    C: Copy,
    F: Fn(A, B, C) -> Result<R, Error>,
{
    if xs.len() != ys.len() || xs.len() != zs.len() {
        return Err(Error::ShapeMismatch);
    }
    xs.iter()
        .zip(ys)
        .zip(zs)
        .map(|((&x, &y), &z)| f(x, y, z))
        .collect()
}

/// Parallel [`map1`].
#[cfg(feature = "rayon")]
pub fn par_map1<A, R, F>(xs: &[A], f: F) -> Result<Vec<R>, Error>
where
    A: Copy + Sync,
    R: Send,
    F: Fn(A) -> Result<R, Error> + Sync + Send,
{
    xs.par_iter().map(|&x| f(x)).collect()
}

/// Parallel [`map2`].
#[cfg(feature = "rayon")]
pub fn par_map2<A, B, R, F>(xs: &[A], ys: &[B], f: F) -> Result<Vec<R>, Error>
where
    A: Copy + Sync,
    B: Copy + Sync,
    R: Send,
    F: Fn(A, B) -> Result<R, Error> + Sync + Send,
{
    if xs.len() != ys.len() {
        return Err(Error::ShapeMismatch);
    }
    xs.par_iter()
        .zip(ys.par_iter())
        .map(|(&x, &y)| f(x, y))
        .collect()
}

/// Parallel [`map3`].
#[cfg(feature = "rayon")]
pub fn par_map3<A, B, C, R, F>(xs: &[A], ys: &[B], zs: &[C], f: F) -> Result<Vec<R>, Error>
where
    A: Copy + Sync,
    B: Copy + Sync,
    C: Copy + Sync,
    R: Send,
    F: Fn(A, B, C) -> Result<R, Error> + Sync + Send,
{
    if xs.len() != ys.len() || xs.len() != zs.len() {
        return Err(Error::ShapeMismatch);
    }
    xs.par_iter()
        .zip(ys.par_iter())
        .zip(zs.par_iter())
        .map(|((&x, &y), &z)| f(x, y, z))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ellipf, ellipj, ellipk, ellippi};

    #[test]
    fn map1_evaluates_each_element() {
        let ms = [0.0_f64, 0.3, 0.5, 0.9];
        let ks = map1(&ms, ellipk).unwrap();
        for (&m, &k) in ms.iter().zip(&ks) {
            assert_eq!(k, ellipk(m).unwrap());
        }
    }

    #[test]
    fn map1_first_error_wins() {
        let ms = [0.2_f64, 1.5, -1.0];
        assert_eq!(map1(&ms, ellipk), Err(Error::Domain));
    }

    #[test]
    fn map2_pairs() {
        let us = [0.5_f64, 1.0, 1.5];
        let ms = [0.1_f64, 0.5, 0.9];
        let triples = map2(&us, &ms, ellipj).unwrap();
        assert_eq!(triples.len(), 3);
        assert_eq!(triples[1], ellipj(1.0, 0.5).unwrap());

        let fs = map2(&us, &ms, ellipf).unwrap();
        assert_eq!(fs[2], ellipf(1.5, 0.9).unwrap());
    }

    #[test]
    fn map2_shape_mismatch() {
        let us = [0.5_f64, 1.0];
        let ms = [0.1_f64];
        assert_eq!(map2(&us, &ms, ellipf), Err(Error::ShapeMismatch));
    }

    #[test]
    fn map3_triples() {
        let ns = [0.1_f64, 0.2];
        let phis = [0.4_f64, 0.8];
        let ms = [0.3_f64, 0.6];
        let vals = map3(&ns, &phis, &ms, ellippi).unwrap();
        assert_eq!(vals[0], ellippi(0.1, 0.4, 0.3).unwrap());
        assert_eq!(
            map3(&ns, &phis, &ms[..1], ellippi),
            Err(Error::ShapeMismatch)
        );
    }

    #[test]
    fn empty_input() {
        let empty: [f64; 0] = [];
        assert_eq!(map1(&empty, ellipk), Ok(Vec::new()));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_sequential() {
        let us: Vec<f64> = (0..256).map(|i| i as f64 * 0.05 - 6.0).collect();
        let ms: Vec<f64> = (0..256).map(|i| (i % 11) as f64 / 10.0).collect();
        let seq = map2(&us, &ms, crate::sn).unwrap();
        let par = par_map2(&us, &ms, crate::sn).unwrap();
        assert_eq!(seq, par);

        let ks = par_map1(&ms, ellipk).unwrap();
        assert_eq!(ks, map1(&ms, ellipk).unwrap());
    }
}
