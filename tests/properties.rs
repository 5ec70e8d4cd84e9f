use ndarray::Array1;
use nddtt::symmetry::period;
use nddtt::{differentiate, dtt, gradient, GradientRequest, TransformKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

fn random_vec(rng: &mut StdRng, n: usize) -> Array1<f64> {
    (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

fn assert_close(expected: &[f64], got: &[f64], dif: f64) {
    assert_eq!(expected.len(), got.len());
    for (a, b) in expected.iter().zip(got.iter()) {
        if (a - b).abs() > dif {
            panic!("Large difference of values, got {} expected {}.", b, a)
        }
    }
}

#[test]
fn test_roundtrip_all_kinds() {
    let mut rng = StdRng::seed_from_u64(42);
    for kind in TransformKind::ALL.iter() {
        for n in kind.min_len()..=64 {
            let x = random_vec(&mut rng, n);
            let vhat = dtt(&x, *kind, 0).unwrap();
            let back = dtt(&vhat, kind.inverse(), 0).unwrap() / period(*kind, n) as f64;
            assert_close(x.as_slice().unwrap(), back.as_slice().unwrap(), 1e-9);
        }
    }
}

#[test]
fn test_linearity() {
    let mut rng = StdRng::seed_from_u64(123);
    let (a, b) = (1.7, -0.4);
    for kind in TransformKind::ALL.iter() {
        let n = 33;
        let x = random_vec(&mut rng, n);
        let y = random_vec(&mut rng, n);
        let lhs = dtt(&(&x * a + &y * b), *kind, 0).unwrap();
        let rhs = dtt(&x, *kind, 0).unwrap() * a + dtt(&y, *kind, 0).unwrap() * b;
        assert_close(rhs.as_slice().unwrap(), lhs.as_slice().unwrap(), 1e-9);
    }
}

#[test]
fn test_length_invariance() {
    let mut rng = StdRng::seed_from_u64(7);
    for kind in TransformKind::ALL.iter() {
        for n in [2, 3, 17, 64] {
            let x = random_vec(&mut rng, n);
            assert_eq!(dtt(&x, *kind, 0).unwrap().len(), n);
        }
    }
}

#[test]
fn test_centered_aligned_keeps_length() {
    let mut rng = StdRng::seed_from_u64(11);
    for kind in TransformKind::ALL.iter() {
        for n in 3..20 {
            let f = random_vec(&mut rng, n);
            let df = gradient(&f, &GradientRequest::new(0.1, *kind)).unwrap();
            assert_eq!(df.len(), n, "{}", kind);
        }
    }
}

#[test]
fn test_unaligned_shifts_coincide() {
    let mut rng = StdRng::seed_from_u64(5);
    for kind in TransformKind::ALL.iter() {
        let f = random_vec(&mut rng, 12);
        let fwd = differentiate(f.as_slice().unwrap(), 0.25, kind.code(), 1, false).unwrap();
        let bwd = differentiate(f.as_slice().unwrap(), 0.25, kind.code(), 2, false).unwrap();
        assert_eq!(fwd, bwd);
    }
}

#[test]
fn test_cosine_derivative() {
    let n = 10;
    let dx = PI / 9.;
    let x: Vec<f64> = (0..n).map(|i| i as f64 * dx).collect();
    let f: Vec<f64> = x.iter().map(|x| x.cos()).collect();
    let df = differentiate(&f, dx, 1, 0, true).unwrap();
    let expected: Vec<f64> = x.iter().map(|x| -x.sin()).collect();
    assert_close(&expected, &df, 1e-10);
}

#[test]
fn test_staggered_interpolates_between_samples() {
    // DCT-II grid: samples at (j + 1/2) dx, the forward stagger lands on j dx
    let n = 32;
    let dx = PI / n as f64;
    let f: Vec<f64> = (0..n).map(|j| (2. * (j as f64 + 0.5) * dx).cos()).collect();
    let df = differentiate(&f, dx, 2, 1, true).unwrap();
    let expected: Vec<f64> = (0..n)
        .map(|j| -2. * (2. * (j as f64 + 1.) * dx).sin())
        .collect();
    assert_close(&expected, &df, 1e-10);
}

#[test]
fn test_dirichlet_reconstruction() {
    let mut rng = StdRng::seed_from_u64(99);
    let f = random_vec(&mut rng, 20);
    let df = differentiate(f.as_slice().unwrap(), 0.5, 1, 0, true).unwrap();
    assert_eq!(df[0], 0.);
    assert_eq!(df[19], 0.);
}

#[test]
fn test_invalid_arguments() {
    let f = [1., 2., 3.];
    assert!(differentiate(&f, 1., 0, 0, true).is_err());
    assert!(differentiate(&f, -1., 1, 0, true).is_err());
    assert!(differentiate(&f, 1., 1, 3, true).is_err());
    assert!(differentiate(&f[..2], 1., 1, 0, true).is_err());
    assert!(differentiate(&f[..2], 1., 1, 1, true).is_ok());
}
