//! # Symmetry table
//! Static metadata linking each transform kind to its implied period,
//! its wavenumbers, and the rule used to differentiate it.
//!
//! The gradient of a sequence with a given boundary symmetry is computed by
//! weighting the forward coefficients with their wavenumbers and
//! transforming back with a *different* kind (cosines differentiate into
//! sines and vice versa). Which kind, and which endpoint samples have to be
//! dropped or padded so the lengths fit, depends on the kind and on whether
//! the gradient is evaluated on the input grid or on the half grid. All 24
//! combinations are spelled out in [`RULES`].
use crate::kind::{Shift, TransformKind};
use ndarray::Array1;
use std::f64::consts::PI;

/// Edit applied to one end of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Splice {
    /// Leave the end untouched.
    Keep,
    /// Remove the endpoint sample.
    Drop,
    /// Add a zero sample (derivative vanishes on this boundary).
    Zero,
    /// Add the negated neighbour (derivative is odd about this boundary).
    Reflect,
}

impl Splice {
    /// Change in length caused by this edit.
    #[must_use]
    pub fn delta(self) -> isize {
        match self {
            Splice::Keep => 0,
            Splice::Drop => -1,
            Splice::Zero | Splice::Reflect => 1,
        }
    }
}

/// Length of a sequence of length `len` after a `(head, tail)` splice.
///
/// Returns `None` if the sequence would have to shrink below zero.
#[must_use]
pub fn spliced_len(len: usize, head: Splice, tail: Splice) -> Option<usize> {
    let len = len as isize + head.delta() + tail.delta();
    if len < 0 {
        None
    } else {
        Some(len as usize)
    }
}

/// Applies a `(head, tail)` splice to `data`.
///
/// `Reflect` always mirrors the outermost sample of the *unspliced* input.
/// An empty input stays empty unless zeros are added.
#[must_use]
pub fn splice(data: &[f64], head: Splice, tail: Splice) -> Vec<f64> {
    let first = data.first().copied().unwrap_or(0.);
    let last = data.last().copied().unwrap_or(0.);
    let mut body = data;
    if head == Splice::Drop && !body.is_empty() {
        body = &body[1..];
    }
    if tail == Splice::Drop && !body.is_empty() {
        body = &body[..body.len() - 1];
    }
    let mut out = Vec::with_capacity(body.len() + 2);
    match head {
        Splice::Zero => out.push(0.),
        Splice::Reflect => out.push(-first),
        _ => (),
    }
    out.extend_from_slice(body);
    match tail {
        Splice::Zero => out.push(0.),
        Splice::Reflect => out.push(-last),
        _ => (),
    }
    out
}

/// Sign applied to the weighted coefficients before the inverse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivativeSign {
    /// d/dx cos = -sin
    Negate,
    /// d/dx sin = cos
    Identity,
}

impl DerivativeSign {
    /// Numeric factor.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            DerivativeSign::Negate => -1.,
            DerivativeSign::Identity => 1.,
        }
    }
}

/// Differentiation rule of one (kind, shift) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientRule {
    /// forward kind
    pub kind: TransformKind,
    /// evaluation grid
    pub shift: Shift,
    /// (head, tail) edits on the weighted coefficients
    pub trim: (Splice, Splice),
    /// kind of the inverse pass
    pub inverse: TransformKind,
    /// (head, tail) edits restoring the input length
    pub align: (Splice, Splice),
}

/// Inverse pass of a gradient: edits, paired kind and normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InversePairing {
    /// (head, tail) edits on the weighted coefficients
    pub trim: (Splice, Splice),
    /// kind of the inverse pass
    pub kind: TransformKind,
    /// divisor applied after the inverse pass
    pub period: usize,
}

macro_rules! rule {
    ($kind: ident, $shift: ident, ($th: ident, $tt: ident), $inv: ident, ($ah: ident, $at: ident)) => {
        GradientRule {
            kind: TransformKind::$kind,
            shift: Shift::$shift,
            trim: (Splice::$th, Splice::$tt),
            inverse: TransformKind::$inv,
            align: (Splice::$ah, Splice::$at),
        }
    };
}

/// All (kind, shift) differentiation rules, in kind-code order and
/// centered/forward/backward order within each kind.
///
/// Forward and backward staggering share the trim and the inverse kind, so
/// their unaligned results coincide; they differ only in which end the
/// alignment splice touches.
pub static RULES: [GradientRule; 24] = [
    rule!(Dct1, Centered, (Drop, Drop), Dst1, (Zero, Zero)),
    rule!(Dct1, Forward, (Drop, Keep), Dst3, (Keep, Reflect)),
    rule!(Dct1, Backward, (Drop, Keep), Dst3, (Reflect, Keep)),
    rule!(Dct2, Centered, (Drop, Zero), Dst3, (Keep, Keep)),
    rule!(Dct2, Forward, (Drop, Keep), Dst1, (Keep, Zero)),
    rule!(Dct2, Backward, (Drop, Keep), Dst1, (Zero, Keep)),
    rule!(Dct3, Centered, (Keep, Keep), Dst2, (Zero, Drop)),
    rule!(Dct3, Forward, (Keep, Keep), Dst4, (Keep, Keep)),
    rule!(Dct3, Backward, (Keep, Keep), Dst4, (Reflect, Drop)),
    rule!(Dct4, Centered, (Keep, Keep), Dst4, (Keep, Keep)),
    rule!(Dct4, Forward, (Keep, Keep), Dst2, (Keep, Keep)),
    rule!(Dct4, Backward, (Keep, Keep), Dst2, (Zero, Drop)),
    rule!(Dst1, Centered, (Zero, Zero), Dct1, (Drop, Drop)),
    rule!(Dst1, Forward, (Zero, Keep), Dct3, (Drop, Keep)),
    rule!(Dst1, Backward, (Zero, Keep), Dct3, (Keep, Drop)),
    rule!(Dst2, Centered, (Zero, Drop), Dct3, (Keep, Keep)),
    rule!(Dst2, Forward, (Zero, Keep), Dct1, (Drop, Keep)),
    rule!(Dst2, Backward, (Zero, Keep), Dct1, (Keep, Drop)),
    rule!(Dst3, Centered, (Keep, Keep), Dct2, (Drop, Zero)),
    rule!(Dst3, Forward, (Keep, Keep), Dct4, (Drop, Reflect)),
    rule!(Dst3, Backward, (Keep, Keep), Dct4, (Keep, Keep)),
    rule!(Dst4, Centered, (Keep, Keep), Dct4, (Keep, Keep)),
    rule!(Dst4, Forward, (Keep, Keep), Dct2, (Drop, Zero)),
    rule!(Dst4, Backward, (Keep, Keep), Dct2, (Keep, Keep)),
];

/// Looks up the rule of a (kind, shift) pair.
#[must_use]
pub fn rule(kind: TransformKind, shift: Shift) -> &'static GradientRule {
    let row = (kind.code() - 1) as usize;
    &RULES[3 * row + shift.code() as usize]
}

/// Implied period *M* of a sequence of length `n`.
///
/// The whole-sample kinds share (DCT-I) or exclude (DST-I) their endpoints
/// with the mirror image.
#[must_use]
pub fn period(kind: TransformKind, n: usize) -> usize {
    match kind {
        TransformKind::Dct1 => 2 * n.saturating_sub(1),
        TransformKind::Dst1 => 2 * (n + 1),
        _ => 2 * n,
    }
}

/// Wavenumber indices of the forward coefficients for period `m`.
///
/// Type III and IV coefficients sit on the half-integer indices.
#[must_use]
pub fn wavenumber_indices(kind: TransformKind, m: usize) -> Vec<f64> {
    let half = m / 2;
    match kind {
        TransformKind::Dct1 => (0..=half).map(|n| n as f64).collect(),
        TransformKind::Dct2 => (0..half).map(|n| n as f64).collect(),
        TransformKind::Dst1 => (1..half).map(|n| n as f64).collect(),
        TransformKind::Dst2 => (1..=half).map(|n| n as f64).collect(),
        _ => (0..half).map(|n| n as f64 + 0.5).collect(),
    }
}

/// Wavenumbers `kx = 2 pi n / (M dx)` of a length-`n` sequence with
/// spacing `dx`.
#[must_use]
pub fn wavenumbers(kind: TransformKind, n: usize, dx: f64) -> Array1<f64> {
    let m = period(kind, n);
    let scale = 2. * PI / (m as f64 * dx);
    Array1::from(wavenumber_indices(kind, m)).mapv_into(|i| i * scale)
}

/// Sign picked up by differentiating the basis functions of `kind`.
#[must_use]
pub fn derivative_sign(kind: TransformKind) -> DerivativeSign {
    if kind.is_cosine() {
        DerivativeSign::Negate
    } else {
        DerivativeSign::Identity
    }
}

/// Inverse pass of the gradient of a length-`n` sequence.
#[must_use]
pub fn inverse_pairing(kind: TransformKind, shift: Shift, n: usize) -> InversePairing {
    let rule = rule(kind, shift);
    InversePairing {
        trim: rule.trim,
        kind: rule.inverse,
        period: period(kind, n),
    }
}

/// Splice that restores the input length after the inverse pass.
#[must_use]
pub fn alignment_rule(kind: TransformKind, shift: Shift) -> (Splice, Splice) {
    rule(kind, shift).align
}

/// Shortest input for which both passes of the gradient are defined.
#[must_use]
pub fn min_gradient_len(kind: TransformKind, shift: Shift) -> usize {
    let rule = rule(kind, shift);
    let (head, tail) = rule.trim;
    let needed = rule.inverse.min_len() as isize - head.delta() - tail.delta();
    kind.min_len().max(needed.max(0) as usize)
}

/// Length of the gradient of a length-`n` sequence.
#[must_use]
pub fn gradient_len(kind: TransformKind, shift: Shift, n: usize, align: bool) -> Option<usize> {
    let rule = rule(kind, shift);
    let natural = spliced_len(n, rule.trim.0, rule.trim.1)?;
    if align {
        spliced_len(natural, rule.align.0, rule.align.1)
    } else {
        Some(natural)
    }
}
