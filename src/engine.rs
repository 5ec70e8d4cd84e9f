//! # Transform engine
//! Executes one batched 1D trigonometric transform along a single axis of
//! an array, or over the fibers of a flat strided buffer.
//!
//! Every call plans its own kernel and drops it on return; nothing is cached
//! between calls.
use crate::error::{DttError, Result};
use crate::kind::TransformKind;
use log::debug;
use ndarray::{Array, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, DataMut, Dimension, Zip};
use ndarray::{ArrayView2, ArrayViewMut2, ShapeBuilder};
use rustdct::{Dct1, Dct2, Dct3, Dct4, DctPlanner, Dst1, Dst2, Dst3, Dst4};

type Kernel = Box<dyn Fn(&mut [f64])>;

/// Planned kernel and scratch for lanes of one length and kind.
///
/// The output follows FFTW's unnormalized r2r definitions, so a forward
/// transform followed by [`TransformKind::inverse`] scales the input by
/// [`crate::symmetry::period`].
pub(crate) struct DttHandler {
    n: usize,
    kind: TransformKind,
    kernel: Kernel,
    buffer: Vec<f64>,
}

impl DttHandler {
    /// Plans a transform of `kind` for lanes of length `n`.
    pub(crate) fn new(kind: TransformKind, n: usize) -> Result<Self> {
        if n < kind.min_len() {
            return Err(DttError::TooShort {
                kind,
                min: kind.min_len(),
                len: n,
            });
        }
        let mut planner = DctPlanner::<f64>::new();
        let kernel: Kernel = match kind {
            TransformKind::Dct1 => {
                let plan = planner.plan_dct1(n);
                Box::new(move |buf: &mut [f64]| plan.process_dct1(buf))
            }
            TransformKind::Dct2 => {
                let plan = planner.plan_dct2(n);
                Box::new(move |buf: &mut [f64]| plan.process_dct2(buf))
            }
            TransformKind::Dct3 => {
                let plan = planner.plan_dct3(n);
                Box::new(move |buf: &mut [f64]| plan.process_dct3(buf))
            }
            TransformKind::Dct4 => {
                let plan = planner.plan_dct4(n);
                Box::new(move |buf: &mut [f64]| plan.process_dct4(buf))
            }
            TransformKind::Dst1 => {
                let plan = planner.plan_dst1(n);
                Box::new(move |buf: &mut [f64]| plan.process_dst1(buf))
            }
            TransformKind::Dst2 => {
                let plan = planner.plan_dst2(n);
                Box::new(move |buf: &mut [f64]| plan.process_dst2(buf))
            }
            TransformKind::Dst3 => {
                let plan = planner.plan_dst3(n);
                Box::new(move |buf: &mut [f64]| plan.process_dst3(buf))
            }
            TransformKind::Dst4 => {
                let plan = planner.plan_dst4(n);
                Box::new(move |buf: &mut [f64]| plan.process_dst4(buf))
            }
        };
        Ok(DttHandler {
            n,
            kind,
            kernel,
            buffer: vec![0.; n],
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    pub(crate) fn kind(&self) -> TransformKind {
        self.kind
    }

    /// Transforms `data` in place.
    ///
    /// rustdct computes half of the FFTW definition for every kind, the
    /// factor 2 restores it.
    pub(crate) fn process(&self, data: &mut [f64]) {
        assert!(
            self.n == data.len(),
            "Size mismatch in dtt, got {} expected {}",
            data.len(),
            self.n
        );
        (self.kernel)(data);
        for d in data.iter_mut() {
            *d *= 2.;
        }
    }

    fn dtt_lane(&mut self, data: ArrayView1<f64>, mut out: ArrayViewMut1<f64>) {
        for (b, d) in self.buffer.iter_mut().zip(data.iter()) {
            *b = *d;
        }
        (self.kernel)(&mut self.buffer);
        for (d, b) in out.iter_mut().zip(self.buffer.iter()) {
            *d = 2. * *b;
        }
    }
}

pub(crate) fn check_rank(ndim: usize) -> Result<()> {
    if (1..=3).contains(&ndim) {
        Ok(())
    } else {
        Err(DttError::UnsupportedRank(ndim))
    }
}

pub(crate) fn check_axis(axis: usize, ndim: usize) -> Result<()> {
    if axis < ndim {
        Ok(())
    } else {
        Err(DttError::InvalidAxis { axis, ndim })
    }
}

/// # Real-to-real trigonometric transform along one axis.
///
/// Writes the transform of every lane of `input` along `axis` into the
/// matching lane of `output`. Both arrays must have the same shape; lanes
/// are addressed through the array strides, so no axis needs to be
/// contiguous.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use nddtt::{dtt_into, TransformKind};
///
/// let (nx, ny) = (6, 4);
/// let data = Array2::from_shape_fn((nx, ny), |(i, j)| (i * ny + j) as f64);
/// let mut vhat = Array2::<f64>::zeros((nx, ny));
/// dtt_into(&data, &mut vhat, TransformKind::Dct2, 0).unwrap();
/// ```
pub fn dtt_into<S, T, D>(
    input: &ArrayBase<S, D>,
    output: &mut ArrayBase<T, D>,
    kind: TransformKind,
    axis: usize,
) -> Result<()>
where
    S: Data<Elem = f64>,
    T: DataMut<Elem = f64>,
    D: Dimension,
{
    check_rank(input.ndim())?;
    check_axis(axis, input.ndim())?;
    if input.shape() != output.shape() {
        return Err(DttError::ShapeMismatch {
            input: input.shape().to_vec(),
            output: output.shape().to_vec(),
        });
    }
    let n = input.len_of(Axis(axis));
    let mut handler = DttHandler::new(kind, n)?;
    debug!(
        "{} ({}) along axis {}: {} lanes of length {}",
        handler.kind(),
        handler.kind().fftw_name(),
        axis,
        input.len() / handler.len().max(1),
        handler.len()
    );
    Zip::from(input.lanes(Axis(axis)))
        .and(output.lanes_mut(Axis(axis)))
        .for_each(|x, y| handler.dtt_lane(x, y));
    Ok(())
}

/// Out-of-place transform along `axis`, returning a new array.
///
/// # Example
/// ```
/// use ndarray::array;
/// use nddtt::{dtt, TransformKind};
///
/// let v = array![1., 2., 3., 4.];
/// let vhat = dtt(&v, TransformKind::Dst2, 0).unwrap();
/// let back = dtt(&vhat, TransformKind::Dst3, 0).unwrap() / 8.;
/// assert!((back[2] - 3.).abs() < 1e-12);
/// ```
pub fn dtt<S, D>(input: &ArrayBase<S, D>, kind: TransformKind, axis: usize) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut output = Array::zeros(input.raw_dim());
    dtt_into(input, &mut output, kind, axis)?;
    Ok(output)
}

/// Memory order of a flat 2D buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// last index varies fastest
    RowMajor,
    /// first index varies fastest
    ColumnMajor,
}

/// Fibers of a flat buffer: `howmany` lanes of `len` samples, `stride`
/// apart within a lane and `dist` apart between lane starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSpec {
    /// samples per fiber
    pub len: usize,
    /// distance between consecutive samples of a fiber
    pub stride: usize,
    /// number of fibers
    pub howmany: usize,
    /// distance between the first samples of consecutive fibers
    pub dist: usize,
}

impl AxisSpec {
    /// Contiguous fibers laid out back to back.
    #[must_use]
    pub fn contiguous(len: usize, howmany: usize) -> Self {
        AxisSpec {
            len,
            stride: 1,
            howmany,
            dist: len,
        }
    }

    /// Fibers along `axis` of a `shape[0] x shape[1]` matrix stored with
    /// `layout`.
    ///
    /// # Example
    /// ```
    /// use nddtt::{AxisSpec, Layout};
    ///
    /// // columns of a column-major 4 x 3 matrix
    /// let spec = AxisSpec::matrix([4, 3], 0, Layout::ColumnMajor).unwrap();
    /// assert_eq!(spec, AxisSpec { len: 4, stride: 1, howmany: 3, dist: 4 });
    /// ```
    pub fn matrix(shape: [usize; 2], axis: usize, layout: Layout) -> Result<Self> {
        check_axis(axis, 2)?;
        let [nr, nc] = shape;
        let spec = match (layout, axis) {
            (Layout::RowMajor, 0) => AxisSpec { len: nr, stride: nc, howmany: nc, dist: 1 },
            (Layout::RowMajor, _) => AxisSpec { len: nc, stride: 1, howmany: nr, dist: nc },
            (Layout::ColumnMajor, 0) => AxisSpec { len: nr, stride: 1, howmany: nc, dist: nr },
            (Layout::ColumnMajor, _) => AxisSpec { len: nc, stride: nr, howmany: nr, dist: 1 },
        };
        Ok(spec)
    }

    /// Number of samples a buffer must hold for this layout.
    #[must_use]
    pub fn required_len(&self) -> usize {
        if self.len == 0 || self.howmany == 0 {
            return 0;
        }
        (self.howmany - 1) * self.dist + (self.len - 1) * self.stride + 1
    }
}

/// Transforms the fibers described by `spec` from `input` into `output`.
///
/// Both buffers share the same layout. Samples not covered by `spec` are
/// left untouched in `output`.
///
/// # Example
/// ```
/// use nddtt::{dtt_strided, AxisSpec, Layout, TransformKind};
///
/// // 3 x 2 matrix in column-major order, transformed along its rows
/// let input = [1., 2., 3., 4., 5., 6.];
/// let mut output = [0.; 6];
/// let spec = AxisSpec::matrix([3, 2], 1, Layout::ColumnMajor).unwrap();
/// dtt_strided(&input, &mut output, TransformKind::Dct2, spec).unwrap();
/// assert_eq!(output[0], 2. * (1. + 4.));
/// ```
pub fn dtt_strided(
    input: &[f64],
    output: &mut [f64],
    kind: TransformKind,
    spec: AxisSpec,
) -> Result<()> {
    let shape = (spec.howmany, spec.len);
    let strides = (spec.dist, spec.stride);
    let input = ArrayView2::from_shape(shape.strides(strides), input)?;
    let mut output = ArrayViewMut2::from_shape(shape.strides(strides), output)?;
    dtt_into(&input, &mut output, kind, 1)
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::{Array1, Array2, Array3};
    use std::f64::consts::PI;

    /// Direct evaluation of the FFTW r2r definitions.
    fn naive(kind: TransformKind, x: &[f64]) -> Vec<f64> {
        let n = x.len();
        let nf = n as f64;
        (0..n)
            .map(|k| {
                let kf = k as f64;
                let sign = if k % 2 == 0 { 1. } else { -1. };
                match kind {
                    TransformKind::Dct1 => {
                        let mut s = x[0] + sign * x[n - 1];
                        for j in 1..n - 1 {
                            s += 2. * x[j] * (PI * j as f64 * kf / (nf - 1.)).cos();
                        }
                        s
                    }
                    TransformKind::Dct2 => (0..n)
                        .map(|j| 2. * x[j] * (PI * (j as f64 + 0.5) * kf / nf).cos())
                        .sum(),
                    TransformKind::Dct3 => {
                        x[0] + (1..n)
                            .map(|j| 2. * x[j] * (PI * j as f64 * (kf + 0.5) / nf).cos())
                            .sum::<f64>()
                    }
                    TransformKind::Dct4 => (0..n)
                        .map(|j| 2. * x[j] * (PI * (j as f64 + 0.5) * (kf + 0.5) / nf).cos())
                        .sum(),
                    TransformKind::Dst1 => (0..n)
                        .map(|j| 2. * x[j] * (PI * (j as f64 + 1.) * (kf + 1.) / (nf + 1.)).sin())
                        .sum(),
                    TransformKind::Dst2 => (0..n)
                        .map(|j| 2. * x[j] * (PI * (j as f64 + 0.5) * (kf + 1.) / nf).sin())
                        .sum(),
                    TransformKind::Dst3 => {
                        sign * x[n - 1]
                            + (0..n - 1)
                                .map(|j| {
                                    2. * x[j] * (PI * (j as f64 + 1.) * (kf + 0.5) / nf).sin()
                                })
                                .sum::<f64>()
                    }
                    TransformKind::Dst4 => (0..n)
                        .map(|j| 2. * x[j] * (PI * (j as f64 + 0.5) * (kf + 0.5) / nf).sin())
                        .sum(),
                }
            })
            .collect()
    }

    fn approx_eq(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        let dif = 1e-9;
        for (a, b) in a.iter().zip(b.iter()) {
            if (a - b).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    /// Kernels reproduce the unnormalized FFTW definitions
    fn test_against_naive() {
        for kind in TransformKind::ALL.iter() {
            for n in [2, 3, 5, 8, 13] {
                let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin() + 0.1 * i as f64).collect();
                let v = Array1::from(x.clone());
                let vhat = dtt(&v, *kind, 0).unwrap();
                approx_eq(&naive(*kind, &x), vhat.as_slice().unwrap());
            }
        }
    }

    #[test]
    /// Transform along non-contiguous axes equals lane-wise 1D transforms
    fn test_axes_match_lanes() {
        let (nx, ny, nz) = (5, 4, 3);
        let data = Array3::from_shape_fn((nx, ny, nz), |(i, j, k)| {
            ((i * ny + j) * nz + k) as f64 * 0.3 - 1.
        });
        for axis in 0..3 {
            let vhat = dtt(&data, TransformKind::Dct4, axis).unwrap();
            for (lane, lane_hat) in data.lanes(Axis(axis)).into_iter().zip(vhat.lanes(Axis(axis))) {
                let x = lane.to_vec();
                approx_eq(&naive(TransformKind::Dct4, &x), &lane_hat.to_vec());
            }
        }
    }

    #[test]
    fn test_strided_matches_ndarray() {
        let (nr, nc) = (4, 5);
        let matrix = Array2::from_shape_fn((nr, nc), |(i, j)| (i as f64 + 1.) * (j as f64 - 2.));
        // column-major flat copy
        let flat: Vec<f64> = matrix.t().iter().copied().collect();
        for axis in 0..2 {
            let expected = dtt(&matrix, TransformKind::Dst2, axis).unwrap();
            let mut out = vec![0.; nr * nc];
            let spec = AxisSpec::matrix([nr, nc], axis, Layout::ColumnMajor).unwrap();
            assert_eq!(spec.required_len(), nr * nc);
            dtt_strided(&flat, &mut out, TransformKind::Dst2, spec).unwrap();
            let got: Vec<f64> = expected.t().iter().copied().collect();
            approx_eq(&got, &out);
        }
        // row-major flat copy
        let flat: Vec<f64> = matrix.iter().copied().collect();
        for axis in 0..2 {
            let expected = dtt(&matrix, TransformKind::Dst2, axis).unwrap();
            let mut out = vec![0.; nr * nc];
            let spec = AxisSpec::matrix([nr, nc], axis, Layout::RowMajor).unwrap();
            dtt_strided(&flat, &mut out, TransformKind::Dst2, spec).unwrap();
            approx_eq(expected.as_slice().unwrap(), &out);
        }
    }

    #[test]
    fn test_strided_rejects_short_buffer() {
        let input = [1., 2., 3.];
        let mut output = [0.; 3];
        let spec = AxisSpec::contiguous(2, 2);
        assert!(matches!(
            dtt_strided(&input, &mut output, TransformKind::Dct2, spec),
            Err(DttError::Layout(_))
        ));
    }

    #[test]
    fn test_errors() {
        let v = Array1::<f64>::zeros(1);
        assert!(matches!(
            dtt(&v, TransformKind::Dct1, 0),
            Err(DttError::TooShort { min: 2, len: 1, .. })
        ));
        assert!(matches!(
            dtt(&v, TransformKind::Dct2, 1),
            Err(DttError::InvalidAxis { axis: 1, ndim: 1 })
        ));
        let a = Array2::<f64>::zeros((3, 4));
        let mut b = Array2::<f64>::zeros((4, 3));
        assert!(matches!(
            dtt_into(&a, &mut b, TransformKind::Dct2, 0),
            Err(DttError::ShapeMismatch { .. })
        ));
        let d = ndarray::Array4::<f64>::zeros((2, 2, 2, 2));
        assert!(matches!(
            dtt(&d, TransformKind::Dct2, 0),
            Err(DttError::UnsupportedRank(4))
        ));
    }

    #[test]
    /// Non-finite samples are not rejected
    fn test_nan_passes_through() {
        let v = Array1::from(vec![1., f64::NAN, 3.]);
        let vhat = dtt(&v, TransformKind::Dct2, 0).unwrap();
        assert!(vhat.iter().any(|x| x.is_nan()));
    }
}
