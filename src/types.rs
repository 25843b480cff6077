//! Core types for elliptic integral and Jacobi function computation.

use core::fmt;
use core::str::FromStr;

use crate::machine::EllipticFloat;

/// The three principal Jacobi elliptic functions at one `(u, m)`.
///
/// Returned by [`ellipj`](crate::ellipj), which evaluates the amplitude once
/// and derives all three values from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jacobi<T: EllipticFloat> {
    /// sn(u|m) = sin(am(u|m)).
    pub sn: T,
    /// cn(u|m) = cos(am(u|m)).
    pub cn: T,
    /// dn(u|m) = √(1 − m·sn²).
    pub dn: T,
}

impl<T: EllipticFloat> Jacobi<T> {
    /// Select one of the twelve Jacobi functions from this triple.
    ///
    /// Ratios follow IEEE division, so a vanishing denominator yields
    /// `±∞` or `NaN` rather than an error.
    pub fn get(&self, kind: JacobiKind) -> T {
        let one = T::one();
        let Jacobi { sn, cn, dn } = *self;
        match kind {
            JacobiKind::Sn => sn,
            JacobiKind::Cn => cn,
            JacobiKind::Dn => dn,
            JacobiKind::Cd => cn / dn,
            JacobiKind::Sd => sn / dn,
            JacobiKind::Nd => one / dn,
            JacobiKind::Dc => dn / cn,
            JacobiKind::Nc => one / cn,
            JacobiKind::Sc => sn / cn,
            JacobiKind::Ns => one / sn,
            JacobiKind::Ds => dn / sn,
            JacobiKind::Cs => cn / sn,
        }
    }
}

/// Names of the twelve Jacobi elliptic functions.
///
/// `pq` reads as `p(u)/q(u)` with `n` standing for the constant 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JacobiKind {
    Sn,
    Cn,
    Dn,
    Cd,
    Sd,
    Nd,
    Dc,
    Nc,
    Sc,
    Ns,
    Ds,
    Cs,
}

impl JacobiKind {
    /// All twelve functions, principal triple first.
    pub const ALL: [JacobiKind; 12] = [
        JacobiKind::Sn,
        JacobiKind::Cn,
        JacobiKind::Dn,
        JacobiKind::Cd,
        JacobiKind::Sd,
        JacobiKind::Nd,
        JacobiKind::Dc,
        JacobiKind::Nc,
        JacobiKind::Sc,
        JacobiKind::Ns,
        JacobiKind::Ds,
        JacobiKind::Cs,
    ];

    /// Conventional two-letter name, e.g. `"sn"`.
    pub fn name(self) -> &'static str {
        match self {
            JacobiKind::Sn => "sn",
            JacobiKind::Cn => "cn",
            JacobiKind::Dn => "dn",
            JacobiKind::Cd => "cd",
            JacobiKind::Sd => "sd",
            JacobiKind::Nd => "nd",
            JacobiKind::Dc => "dc",
            JacobiKind::Nc => "nc",
            JacobiKind::Sc => "sc",
            JacobiKind::Ns => "ns",
            JacobiKind::Ds => "ds",
            JacobiKind::Cs => "cs",
        }
    }
}

impl fmt::Display for JacobiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JacobiKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JacobiKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownFunction)
    }
}

/// Failure reported by a symmetric-integral provider.
///
/// The integral layer only produces arguments inside the provider's domain,
/// so any of these surfacing through [`Error::ProviderFailure`] is a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderError {
    /// Negative argument, more than one zero, `p == 0`, or a value outside
    /// the representable range of the duplication algorithm.
    InvalidArgument,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::InvalidArgument => {
                write!(f, "symmetric integral argument outside its domain")
            }
        }
    }
}

impl core::error::Error for ProviderError {}

/// Error type for elliptic integral and Jacobi function computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Elliptic parameter `m` outside `[0, 1]` (or NaN).
    Domain,
    /// Characteristic `n` so large that `1 − n·sin²φ` leaves the range of
    /// the working type.
    Overflow,
    /// The symmetric-integral provider rejected arguments produced by the
    /// reduction layer. Never expected for valid inputs.
    ProviderFailure(ProviderError),
    /// AGM descent did not reach the requested tolerance within its buffer.
    ConvergenceFailure,
    /// Elementwise inputs of different lengths.
    ShapeMismatch,
    /// Unrecognized Jacobi function name.
    UnknownFunction,
}

impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        Error::ProviderFailure(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain => {
                write!(f, "domain error: elliptic parameter m must lie in [0, 1]")
            }
            Error::Overflow => {
                write!(f, "overflow: 1 - n*sin^2(phi) exceeds representable range")
            }
            Error::ProviderFailure(err) => {
                write!(f, "internal invariant violated: {err}")
            }
            Error::ConvergenceFailure => {
                write!(
                    f,
                    "convergence failure: AGM descent did not reach the requested tolerance"
                )
            }
            Error::ShapeMismatch => {
                write!(f, "shape mismatch: elementwise inputs differ in length")
            }
            Error::UnknownFunction => {
                write!(f, "unknown Jacobi function name")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::ProviderFailure(err) => Some(err),
            _ => None,
        }
    }
}
