//! # *n*-dimensional front end
//! Applies the engine along one axis or chains it over all axes of a 1D, 2D
//! or 3D array, with one kind for all axes or one kind per axis.
use crate::engine::{check_axis, check_rank, dtt, dtt_into};
use crate::error::{DttError, Result};
use crate::kind::{KindSelection, TransformKind};
use ndarray::{Array, Array2, Array3, ArrayBase, Data, Dimension, Ix2, Ix3};

/// Declare procedural macro which creates functions for the individual
/// kinds, i.e. nddct1, ..., nddst4.
/// The transform is applied for each vector-lane along the specified axis.
macro_rules! create_transform {
    (
        $(#[$meta:meta])* $i: ident, $kind: expr
    ) => {
        $(#[$meta])*
        pub fn $i<S, D>(input: &ArrayBase<S, D>, axis: usize) -> Result<Array<f64, D>>
        where
            S: Data<Elem = f64>,
            D: Dimension,
        {
            dtt(input, $kind, axis)
        }
    };
}

/// # Discrete trigonometric transform of an array.
///
/// * `axis = Some(a)`: 1D transform of every lane along axis `a`. The
/// selection must name a single kind.
/// * `axis = None`: the transform is applied along every axis in turn, with
/// either one kind for all axes or one kind per axis.
///
/// The output has the shape of the input.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use nddtt::{transform, TransformKind};
///
/// let data = Array2::from_shape_fn((5, 4), |(i, j)| (i + 2 * j) as f64);
/// let kinds = vec![TransformKind::Dct1, TransformKind::Dst2];
/// let vhat = transform(&data, kinds, None).unwrap();
/// assert_eq!(vhat.shape(), data.shape());
/// ```
pub fn transform<S, D, K>(input: &ArrayBase<S, D>, kinds: K, axis: Option<usize>) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    K: Into<KindSelection>,
{
    check_rank(input.ndim())?;
    let selection = kinds.into();
    match axis {
        Some(axis) => {
            check_axis(axis, input.ndim())?;
            let kind = match &selection {
                KindSelection::Uniform(kind) => *kind,
                KindSelection::PerAxis(kinds) if kinds.len() == 1 => kinds[0],
                KindSelection::PerAxis(kinds) => {
                    return Err(DttError::KindCountMismatch {
                        expected: 1,
                        got: kinds.len(),
                    })
                }
            };
            dtt(input, kind, axis)
        }
        None => transform_axes(input, &selection.resolve(input.ndim())?),
    }
}

/// Applies `kinds[i]` along axis `i` for every axis.
fn transform_axes<S, D>(input: &ArrayBase<S, D>, kinds: &[TransformKind]) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    // validate every axis before the first pass
    for (axis, kind) in kinds.iter().enumerate() {
        let n = input.len_of(ndarray::Axis(axis));
        if n < kind.min_len() {
            return Err(DttError::TooShort {
                kind: *kind,
                min: kind.min_len(),
                len: n,
            });
        }
    }
    let mut output = dtt(input, kinds[0], 0)?;
    let mut scratch = Array::zeros(input.raw_dim());
    for (axis, kind) in kinds.iter().enumerate().skip(1) {
        dtt_into(&output, &mut scratch, *kind, axis)?;
        std::mem::swap(&mut output, &mut scratch);
    }
    Ok(output)
}

/// 2D transform with `kinds[0]` along axis 0 and `kinds[1]` along axis 1.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use nddtt::{dtt2, TransformKind};
///
/// let data = Array2::<f64>::ones((4, 3));
/// let vhat = dtt2(&data, [TransformKind::Dct2, TransformKind::Dct2]).unwrap();
/// assert!((vhat[[0, 0]] - 4. * 12.).abs() < 1e-12);
/// ```
pub fn dtt2<S>(input: &ArrayBase<S, Ix2>, kinds: [TransformKind; 2]) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    transform_axes(input, &kinds)
}

/// 3D transform with `kinds[i]` along axis `i`.
pub fn dtt3<S>(input: &ArrayBase<S, Ix3>, kinds: [TransformKind; 3]) -> Result<Array3<f64>>
where
    S: Data<Elem = f64>,
{
    transform_axes(input, &kinds)
}

create_transform!(
    /// Discrete Cosine Transform of type 1 (DCT-I) along `axis`.
    ///
    /// # Example
    /// ```
    /// use ndarray::array;
    /// use nddtt::nddct1;
    ///
    /// let v = array![1., 2., 3.];
    /// let vhat = nddct1(&v, 0).unwrap();
    /// assert!((vhat[0] - (1. + 3. + 2. * 2.)).abs() < 1e-12);
    /// ```
    nddct1,
    TransformKind::Dct1
);

create_transform!(
    /// Discrete Cosine Transform of type 2 (DCT-II) along `axis`.
    nddct2,
    TransformKind::Dct2
);

create_transform!(
    /// Discrete Cosine Transform of type 3 (DCT-III) along `axis`.
    nddct3,
    TransformKind::Dct3
);

create_transform!(
    /// Discrete Cosine Transform of type 4 (DCT-IV) along `axis`.
    nddct4,
    TransformKind::Dct4
);

create_transform!(
    /// Discrete Sine Transform of type 1 (DST-I) along `axis`.
    nddst1,
    TransformKind::Dst1
);

create_transform!(
    /// Discrete Sine Transform of type 2 (DST-II) along `axis`.
    nddst2,
    TransformKind::Dst2
);

create_transform!(
    /// Discrete Sine Transform of type 3 (DST-III) along `axis`.
    nddst3,
    TransformKind::Dst3
);

create_transform!(
    /// Discrete Sine Transform of type 4 (DST-IV) along `axis`.
    nddst4,
    TransformKind::Dst4
);
