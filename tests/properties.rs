#[macro_use] extern crate isda_assert_close;

mod shared;

use ::isda::{ColumnKind, Matrix, Vector, ZeroTest};
use ::ndarray::{arr1, arr2, Array2, Axis};
use ::rand::Rng;
use ::std::collections::HashSet;

#[test]
fn sign_vectors_enumerate_hypercube() {
    for p in 1..=8 {
        let all = ::isda::sign_vectors(p).unwrap();
        assert_eq!(all.dim(), (p, 1 << p));

        let mut seen = HashSet::new();
        for (i, col) in all.axis_iter(Axis(1)).enumerate() {
            assert!(col.iter().all(|&x| x == 1.0 || x == -1.0));
            assert_eq!(col, ::isda::sign_vector(p, i as u64 + 1).unwrap());
            seen.insert(col.iter().map(|&x| x < 0.0).collect::<Vec<_>>());
        }
        assert_eq!(seen.len(), 1 << p);
    }
}

#[test]
fn sign_patterns_match_matrix() {
    let all = ::isda::sign_vectors(4).unwrap();
    let patterns: Vec<Vector> = ::isda::sign_patterns(4).unwrap().collect();
    assert_eq!(patterns.len(), all.ncols());
    for (pattern, col) in patterns.iter().zip(all.axis_iter(Axis(1))) {
        assert_eq!(pattern, &col);
    }
}

#[test]
fn sign_errors_are_domain_errors() {
    let err: ::isda::Error = ::isda::sign_vectors(64).unwrap_err().into();
    match &err {
        ::isda::Error::Domain(::isda::DomainError::TooManyBits { len: 64, max: 32 }) => {},
        e => panic!("unexpected error: {:?}", e),
    }
    assert_eq!(
        err.to_string(),
        "pattern length 64 exceeds representable bit width (32 bits)",
    );
}

#[test]
fn documented_examples() {
    assert_close!(abs=1e-15, ::isda::normalize(&arr1(&[3.0, 4.0])), arr1(&[0.6, 0.8]));
    assert_eq!(::isda::normalize(&arr1(&[0.0, 0.0])), arr1(&[0.0, 0.0]));
    assert_eq!(::isda::normalize(&arr1(&[1e-7, 0.0])), arr1(&[0.0, 0.0]));
    assert_eq!(::isda::sgn(&arr1(&[-2.0, 0.0, 3.0])), arr1(&[-1.0, 1.0, 1.0]));

    assert_eq!(
        ::isda::diagonal_matrix(&arr1(&[1.0, 2.0, 3.0])),
        arr2(&[[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]]),
    );
    let eye = Array2::<f64>::eye(3);
    assert_eq!(::isda::diagonal_matrix(&eye), eye);

    let q = ::isda::orthogonalize(&arr2(&[[1.0, 1.0], [0.0, 0.0]]));
    assert_eq!(q.column(1), arr1(&[0.0, 0.0]));
}

#[test]
fn orthogonalize_full_rank_random() {
    let mut rng = ::rand::thread_rng();
    for _ in 0..100 {
        let n = rng.gen_range(2, 15);
        let k = rng.gen_range(1, n + 1);
        let m = shared::random_matrix(&mut rng, (n, k));

        let out = ::isda::orthogonalize_tagged(&m, ZeroTest::default());
        if out.rank() < k {
            // not impossible, just very unlikely
            continue;
        }
        let gram = out.basis.t().dot(&out.basis);
        assert_close!(abs=1e-10, gram, Array2::<f64>::eye(k));
    }
}

#[test]
fn dependent_columns_become_zero() {
    let mut rng = ::rand::thread_rng();
    for _ in 0..20 {
        let m = shared::random_dependent_matrix(&mut rng, 8, 3, 2);
        let out = ::isda::orthogonalize_tagged(&m, ZeroTest::default());
        if out.kinds[..3].iter().any(|&k| k != ColumnKind::Unit) {
            continue;
        }
        assert_eq!(&out.kinds[3..], &[ColumnKind::Degenerate, ColumnKind::Degenerate]);
        assert_eq!(out.basis.column(3), Vector::zeros(8));
        assert_eq!(out.basis.column(4), Vector::zeros(8));
        assert_close!(
            abs=1e-10,
            out.unit_columns().t().dot(&out.unit_columns()),
            Array2::<f64>::eye(3),
        );
    }
}

#[test]
fn projector_of_orthonormal_basis() {
    let mut rng = ::rand::thread_rng();
    for _ in 0..50 {
        let n = rng.gen_range(2, 10);
        let k = rng.gen_range(0, n + 1);
        let q = ::isda::orthogonalize(&shared::random_matrix(&mut rng, (n, k)));

        let p = ::isda::orthogonal_projection(&q);
        assert_eq!(p.dim(), (n, n));
        assert_eq!(p, p.t());
        assert_close!(abs=1e-10, p.dot(&p), p.clone());
        assert!(shared::max_abs(&p.dot(&q)) < 1e-10);
    }
}

#[test]
fn round_trip_is_orthogonal_to_inputs() {
    let mut rng = ::rand::thread_rng();
    for _ in 0..50 {
        let n = rng.gen_range(2, 10);
        let k = rng.gen_range(1, n + 3);
        let m = shared::random_matrix(&mut rng, (n, k));
        let v: Vector = shared::random_matrix(&mut rng, (n, 1)).column(0).to_owned();

        let p = ::isda::orthogonal_projection(&::isda::orthogonalize(&m));
        let pv = ::isda::project(&p, &v).unwrap();
        for col in m.axis_iter(Axis(1)) {
            assert_close!(abs=1e-9, ::isda::dot(&pv, &col), 0.0);
        }
        assert_eq!(::isda::complement_projection(&m), p);
    }
}

#[test]
fn ragged_input_is_a_shape_error() {
    let cols = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
    let err: ::isda::Error = ::isda::orthogonalize_columns(0, &cols).unwrap_err().into();
    match &err {
        ::isda::Error::Shape(::isda::ShapeError::RaggedColumns { column: 1, expected: 3, found: 2 }) => {},
        e => panic!("unexpected error: {:?}", e),
    }
    assert!(::isda::orthogonal_projection_columns(0, &cols).is_err());

    let empty: &[Vec<f64>] = &[];
    assert_eq!(::isda::orthogonal_projection_columns(3, empty).unwrap(), Matrix::eye(3));
}
