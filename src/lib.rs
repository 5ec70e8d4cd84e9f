//! # nddtt: *n*-dimensional discrete trigonometric transforms and spectral gradients
//!
//! This library wraps `rustdct` to perform the eight real-to-real
//! trigonometric transforms (DCT-I..IV and DST-I..IV) along any axis of 1-,
//! 2- and 3-dimensional arrays (ndarray), and builds a spectral derivative
//! on top of them which respects the boundary symmetry implied by each kind.
//!
//! Transforms follow FFTW's unnormalized r2r convention: transforming with a
//! kind and then with its [`TransformKind::inverse`] multiplies the data by
//! the implied period [`symmetry::period`].
//!
//! Every call plans its own kernel, runs it over all lanes along the
//! requested axis and releases it; no plan is kept between calls.
//!
//! ## Example
//! 2-Dimensional DCT-II along first axis and back
//! ```
//! use ndarray::{Array, Dim, Ix};
//! use nddtt::{dtt, TransformKind};
//!
//! let (nx, ny) = (6, 4);
//! let mut data = Array::<f64, Dim<[Ix; 2]>>::zeros((nx, ny));
//! for (i, v) in data.iter_mut().enumerate() {
//!     *v = i as f64;
//! }
//! let vhat = dtt(&data, TransformKind::Dct2, 0).unwrap();
//! let back = dtt(&vhat, TransformKind::Dct3, 0).unwrap() / (2 * nx) as f64;
//! assert!((back[[3, 2]] - data[[3, 2]]).abs() < 1e-10);
//! ```
//!
//! ## Gradient
//! Derivative of a sequence which is odd about both ends (DST-I), evaluated
//! half a sample to the right of every input point
//! ```
//! use ndarray::Array1;
//! use nddtt::{gradient, GradientRequest, Shift, TransformKind};
//! use std::f64::consts::PI;
//!
//! let n = 15;
//! let dx = PI / (n + 1) as f64;
//! let f = Array1::from_shape_fn(n, |i| ((i + 1) as f64 * dx).sin());
//! let request = GradientRequest::new(dx, TransformKind::Dst1).with_shift(Shift::Forward);
//! let df = gradient(&f, &request).unwrap();
//! assert_eq!(df.len(), n);
//! assert!((df[0] - (1.5 * dx).cos()).abs() < 1e-10);
//! ```
#![warn(missing_docs)]
extern crate ndarray;
extern crate rustdct;
mod engine;
pub mod error;
mod gradient;
pub mod kind;
mod nd;
pub mod symmetry;

pub use engine::{dtt, dtt_into, dtt_strided, AxisSpec, Layout};
pub use error::{DttError, Result};
pub use gradient::{differentiate, gradient, gradient_axis, GradientRequest};
pub use kind::{Boundary, KindSelection, Shift, TransformKind};
pub use nd::{dtt2, dtt3, transform};
pub use nd::{nddct1, nddct2, nddct3, nddct4, nddst1, nddst2, nddst3, nddst4};
