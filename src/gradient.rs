//! # Spectral gradient
//! Differentiates a sequence through its trigonometric expansion, honouring
//! the boundary symmetry implied by the transform kind.
//!
//! The pipeline has four stages: forward transform and wavenumber
//! weighting, endpoint edits so the coefficients fit the paired inverse
//! kind, inverse transform and normalization by the implied period, and an
//! optional splice back to the input length. The rule of each stage is
//! taken from [`crate::symmetry::RULES`].
use crate::engine::{check_axis, check_rank, DttHandler};
use crate::error::{DttError, Result};
use crate::kind::{Shift, TransformKind};
use crate::symmetry::{self, splice, GradientRule};
use log::{debug, trace};
use ndarray::{Array, Array1, ArrayBase, Axis, Data, Dimension, Ix1, Zip};

/// Parameters of a gradient evaluation.
///
/// # Example
/// ```
/// use nddtt::{GradientRequest, Shift, TransformKind};
///
/// let request = GradientRequest::new(0.1, TransformKind::Dct2)
///     .with_shift(Shift::Forward)
///     .with_align(false);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientRequest {
    /// grid spacing
    pub spacing: f64,
    /// symmetry of the input
    pub kind: TransformKind,
    /// evaluation grid
    pub shift: Shift,
    /// splice the result back to the input length
    pub align: bool,
}

impl GradientRequest {
    /// Centered, aligned gradient.
    #[must_use]
    pub fn new(spacing: f64, kind: TransformKind) -> Self {
        GradientRequest {
            spacing,
            kind,
            shift: Shift::Centered,
            align: true,
        }
    }

    /// Sets the evaluation grid.
    #[must_use]
    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = shift;
        self
    }

    /// Sets whether the result is spliced back to the input length.
    #[must_use]
    pub fn with_align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    /// Checks the grid spacing.
    pub fn validate(&self) -> Result<()> {
        if self.spacing.is_finite() && self.spacing > 0. {
            Ok(())
        } else {
            Err(DttError::InvalidSpacing(self.spacing))
        }
    }

    /// Length of the gradient of a length-`n` input.
    pub fn output_len(&self, n: usize) -> Result<usize> {
        let min = symmetry::min_gradient_len(self.kind, self.shift);
        if n < min {
            return Err(DttError::TooShort {
                kind: self.kind,
                min,
                len: n,
            });
        }
        symmetry::gradient_len(self.kind, self.shift, n, self.align).ok_or(DttError::TooShort {
            kind: self.kind,
            min,
            len: n,
        })
    }
}

/// Both passes of one gradient call, planned once and shared by all lanes.
struct GradientPlan {
    rule: &'static GradientRule,
    align: bool,
    forward: DttHandler,
    inverse: DttHandler,
    weights: Array1<f64>,
    period: f64,
}

impl GradientPlan {
    fn new(request: &GradientRequest, n: usize) -> Result<Self> {
        request.validate()?;
        request.output_len(n)?;
        let rule = symmetry::rule(request.kind, request.shift);
        let pairing = symmetry::inverse_pairing(request.kind, request.shift, n);
        let sign = symmetry::derivative_sign(request.kind).factor();
        let weights = symmetry::wavenumbers(request.kind, n, request.spacing) * sign;
        let trimmed = symmetry::spliced_len(n, pairing.trim.0, pairing.trim.1).unwrap_or(0);
        debug!(
            "gradient of {} ({:?}, align={}): {} -> {} via {}",
            request.kind, request.shift, request.align, n, trimmed, pairing.kind
        );
        Ok(GradientPlan {
            rule,
            align: request.align,
            forward: DttHandler::new(request.kind, n)?,
            inverse: DttHandler::new(pairing.kind, trimmed)?,
            weights,
            period: pairing.period as f64,
        })
    }

    fn lane(&self, data: &[f64]) -> Vec<f64> {
        let mut coeffs = data.to_vec();
        self.forward.process(&mut coeffs);
        for (c, k) in coeffs.iter_mut().zip(self.weights.iter()) {
            *c *= k;
        }
        let (head, tail) = self.rule.trim;
        let mut out = splice(&coeffs, head, tail);
        self.inverse.process(&mut out);
        for v in out.iter_mut() {
            *v /= self.period;
        }
        trace!(
            "gradient lane: {} coefficients, {} natural samples",
            coeffs.len(),
            out.len()
        );
        if self.align {
            let (head, tail) = self.rule.align;
            splice(&out, head, tail)
        } else {
            out
        }
    }
}

/// # Spectral gradient of a sequence.
///
/// The sequence is expanded in the basis of `request.kind`, differentiated
/// term by term and evaluated on the input grid (`Shift::Centered`) or on
/// the grid staggered by half a sample.
///
/// With `request.align` the result has the length of the input; samples
/// outside the natural result are restored from the boundary symmetry (zero
/// where the derivative vanishes, odd reflection where it is antisymmetric)
/// and surplus boundary samples are dropped. Without alignment the natural
/// result is returned, whose length may differ by one or two, and which is
/// the same for both staggering directions.
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use nddtt::{gradient, GradientRequest, TransformKind};
/// use std::f64::consts::PI;
///
/// // cos(x) on [0, pi] is even at both ends: DCT-I symmetry
/// let n = 10;
/// let dx = PI / (n - 1) as f64;
/// let f = Array1::from_shape_fn(n, |i| (i as f64 * dx).cos());
/// let df = gradient(&f, &GradientRequest::new(dx, TransformKind::Dct1)).unwrap();
/// for (i, d) in df.iter().enumerate() {
///     assert!((d + (i as f64 * dx).sin()).abs() < 1e-10);
/// }
/// ```
pub fn gradient<S>(input: &ArrayBase<S, Ix1>, request: &GradientRequest) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    gradient_axis(input, request, 0)
}

/// Spectral gradient of every lane along `axis` of a 1D, 2D or 3D array.
///
/// The output has the shape of the input except along `axis`, where it has
/// the length of the gradient (see [`GradientRequest::output_len`]).
pub fn gradient_axis<S, D>(
    input: &ArrayBase<S, D>,
    request: &GradientRequest,
    axis: usize,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_rank(input.ndim())?;
    check_axis(axis, input.ndim())?;
    let n = input.len_of(Axis(axis));
    let plan = GradientPlan::new(request, n)?;
    let mut dim = input.raw_dim();
    dim[axis] = request.output_len(n)?;
    let mut output = Array::zeros(dim);
    let mut buffer = vec![0.; n];
    Zip::from(input.lanes(Axis(axis)))
        .and(output.lanes_mut(Axis(axis)))
        .for_each(|x, mut y| {
            for (b, v) in buffer.iter_mut().zip(x.iter()) {
                *b = *v;
            }
            for (o, v) in y.iter_mut().zip(plan.lane(&buffer)) {
                *o = v;
            }
        });
    Ok(output)
}

/// Gradient with host codes: `kind` in 1..=8 and `shift` in 0..=2
/// (centered, +dx/2, -dx/2).
///
/// # Example
/// ```
/// use nddtt::differentiate;
///
/// let f = [0., 1., 0., -1.];
/// assert_eq!(differentiate(&f, 1., 6, 1, true).unwrap().len(), 4);
/// assert!(differentiate(&f, 1., 9, 0, true).is_err());
/// assert!(differentiate(&f, 0., 6, 0, true).is_err());
/// ```
pub fn differentiate(
    input: &[f64],
    spacing: f64,
    kind: i64,
    shift: i64,
    align: bool,
) -> Result<Vec<f64>> {
    let request = GradientRequest::new(spacing, TransformKind::from_code(kind)?)
        .with_shift(Shift::try_from(shift)?)
        .with_align(align);
    let view = ndarray::ArrayView1::from(input);
    Ok(gradient(&view, &request)?.to_vec())
}
