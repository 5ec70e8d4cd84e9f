//! # Transform kinds
//! The eight real-to-real trigonometric transforms and the boundary symmetry
//! each one implies.
use crate::error::{DttError, Result};
use std::fmt;

/// Discrete trigonometric transform kind.
///
/// The numbering of [`TransformKind::code`] follows the host convention
/// 1..=8: DCT-I..IV, then DST-I..IV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformKind {
    /// DCT-I (REDFT00)
    Dct1,
    /// DCT-II (REDFT10)
    Dct2,
    /// DCT-III (REDFT01)
    Dct3,
    /// DCT-IV (REDFT11)
    Dct4,
    /// DST-I (RODFT00)
    Dst1,
    /// DST-II (RODFT10)
    Dst2,
    /// DST-III (RODFT01)
    Dst3,
    /// DST-IV (RODFT11)
    Dst4,
}

/// Symmetry of the implied periodic extension at one end of a sequence.
///
/// *Whole* means the mirror point is a sample, *half* means it falls
/// halfway between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// whole-sample symmetric
    WholeSymmetric,
    /// whole-sample antisymmetric
    WholeAntisymmetric,
    /// half-sample symmetric
    HalfSymmetric,
    /// half-sample antisymmetric
    HalfAntisymmetric,
}

impl Boundary {
    /// Symmetric ends imply a zero-slope (Neumann) condition.
    #[must_use]
    pub fn is_symmetric(self) -> bool {
        matches!(self, Boundary::WholeSymmetric | Boundary::HalfSymmetric)
    }

    /// Whole-sample ends put the mirror point on a sample.
    #[must_use]
    pub fn is_whole(self) -> bool {
        matches!(
            self,
            Boundary::WholeSymmetric | Boundary::WholeAntisymmetric
        )
    }
}

impl TransformKind {
    /// All kinds in code order.
    pub const ALL: [TransformKind; 8] = [
        TransformKind::Dct1,
        TransformKind::Dct2,
        TransformKind::Dct3,
        TransformKind::Dct4,
        TransformKind::Dst1,
        TransformKind::Dst2,
        TransformKind::Dst3,
        TransformKind::Dst4,
    ];

    /// Parses a host kind code (1..=8).
    ///
    /// # Example
    /// ```
    /// use nddtt::TransformKind;
    /// assert_eq!(TransformKind::from_code(5).unwrap(), TransformKind::Dst1);
    /// assert!(TransformKind::from_code(9).is_err());
    /// ```
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1..=8 => Ok(Self::ALL[(code - 1) as usize]),
            _ => Err(DttError::InvalidKind(code)),
        }
    }

    /// Host kind code (1..=8).
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            TransformKind::Dct1 => 1,
            TransformKind::Dct2 => 2,
            TransformKind::Dct3 => 3,
            TransformKind::Dct4 => 4,
            TransformKind::Dst1 => 5,
            TransformKind::Dst2 => 6,
            TransformKind::Dst3 => 7,
            TransformKind::Dst4 => 8,
        }
    }

    /// FFTW r2r name of the transform with identical normalization.
    #[must_use]
    pub fn fftw_name(self) -> &'static str {
        match self {
            TransformKind::Dct1 => "REDFT00",
            TransformKind::Dct2 => "REDFT10",
            TransformKind::Dct3 => "REDFT01",
            TransformKind::Dct4 => "REDFT11",
            TransformKind::Dst1 => "RODFT00",
            TransformKind::Dst2 => "RODFT10",
            TransformKind::Dst3 => "RODFT01",
            TransformKind::Dst4 => "RODFT11",
        }
    }

    /// Cosine family (DCT-I..IV).
    #[must_use]
    pub fn is_cosine(self) -> bool {
        matches!(
            self,
            TransformKind::Dct1 | TransformKind::Dct2 | TransformKind::Dct3 | TransformKind::Dct4
        )
    }

    /// Boundary symmetry at the (left, right) end of the input.
    #[must_use]
    pub fn symmetry(self) -> (Boundary, Boundary) {
        use Boundary::*;
        match self {
            TransformKind::Dct1 => (WholeSymmetric, WholeSymmetric),
            TransformKind::Dct2 => (HalfSymmetric, HalfSymmetric),
            TransformKind::Dct3 => (WholeSymmetric, WholeAntisymmetric),
            TransformKind::Dct4 => (HalfSymmetric, HalfAntisymmetric),
            TransformKind::Dst1 => (WholeAntisymmetric, WholeAntisymmetric),
            TransformKind::Dst2 => (HalfAntisymmetric, HalfAntisymmetric),
            TransformKind::Dst3 => (WholeAntisymmetric, WholeSymmetric),
            TransformKind::Dst4 => (HalfAntisymmetric, HalfSymmetric),
        }
    }

    /// Kind that undoes `self` up to a factor of the implied period.
    ///
    /// Type I and IV are their own inverse, II and III invert each other.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            TransformKind::Dct2 => TransformKind::Dct3,
            TransformKind::Dct3 => TransformKind::Dct2,
            TransformKind::Dst2 => TransformKind::Dst3,
            TransformKind::Dst3 => TransformKind::Dst2,
            other => other,
        }
    }

    /// Shortest sequence the transform is defined for.
    #[must_use]
    pub fn min_len(self) -> usize {
        match self {
            TransformKind::Dct1 => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformKind::Dct1 => "DCT-I",
            TransformKind::Dct2 => "DCT-II",
            TransformKind::Dct3 => "DCT-III",
            TransformKind::Dct4 => "DCT-IV",
            TransformKind::Dst1 => "DST-I",
            TransformKind::Dst2 => "DST-II",
            TransformKind::Dst3 => "DST-III",
            TransformKind::Dst4 => "DST-IV",
        };
        write!(f, "{}", name)
    }
}

impl TryFrom<i64> for TransformKind {
    type Error = DttError;

    fn try_from(code: i64) -> Result<Self> {
        Self::from_code(code)
    }
}

/// Evaluation point of the gradient relative to the input grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shift {
    /// Same grid as the input (code 0).
    #[default]
    Centered,
    /// Staggered by +dx/2 (code 1).
    Forward,
    /// Staggered by -dx/2 (code 2).
    Backward,
}

impl Shift {
    /// All shifts in code order.
    pub const ALL: [Shift; 3] = [Shift::Centered, Shift::Forward, Shift::Backward];

    /// Host shift code (0..=2).
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Shift::Centered => 0,
            Shift::Forward => 1,
            Shift::Backward => 2,
        }
    }

    /// True for the half-grid shifts.
    #[must_use]
    pub fn is_staggered(self) -> bool {
        self != Shift::Centered
    }
}

impl TryFrom<i64> for Shift {
    type Error = DttError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Shift::Centered),
            1 => Ok(Shift::Forward),
            2 => Ok(Shift::Backward),
            _ => Err(DttError::InvalidShift(code)),
        }
    }
}

/// Kinds applied to the axes of an array: one for all, or one per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindSelection {
    /// Same kind along every axis.
    Uniform(TransformKind),
    /// `kinds[i]` is applied along axis `i`.
    PerAxis(Vec<TransformKind>),
}

impl KindSelection {
    /// Parses host kind codes. A single code selects a uniform kind.
    pub fn from_codes(codes: &[i64]) -> Result<Self> {
        match codes {
            [] => Err(DttError::KindCountMismatch {
                expected: 1,
                got: 0,
            }),
            [code] => Ok(KindSelection::Uniform(TransformKind::from_code(*code)?)),
            _ => codes
                .iter()
                .map(|c| TransformKind::from_code(*c))
                .collect::<Result<Vec<_>>>()
                .map(KindSelection::PerAxis),
        }
    }

    /// Resolves the kind for each of `ndim` axes.
    pub fn resolve(&self, ndim: usize) -> Result<Vec<TransformKind>> {
        match self {
            KindSelection::Uniform(kind) => Ok(vec![*kind; ndim]),
            KindSelection::PerAxis(kinds) if kinds.len() == ndim => Ok(kinds.clone()),
            KindSelection::PerAxis(kinds) => Err(DttError::KindCountMismatch {
                expected: ndim,
                got: kinds.len(),
            }),
        }
    }
}

impl From<TransformKind> for KindSelection {
    fn from(kind: TransformKind) -> Self {
        KindSelection::Uniform(kind)
    }
}

impl From<Vec<TransformKind>> for KindSelection {
    fn from(kinds: Vec<TransformKind>) -> Self {
        KindSelection::PerAxis(kinds)
    }
}

impl From<&[TransformKind]> for KindSelection {
    fn from(kinds: &[TransformKind]) -> Self {
        KindSelection::PerAxis(kinds.to_vec())
    }
}
