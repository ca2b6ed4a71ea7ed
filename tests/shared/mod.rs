use ::isda::Matrix;
use ::ndarray::Axis;
use ::rand::Rng;

/// Entries uniform in `[-1, 1)`.
pub fn random_matrix(rng: &mut impl Rng, (rows, cols): (usize, usize)) -> Matrix
{ Matrix::from_shape_fn((rows, cols), |_| 1.0 - 2.0 * rng.gen::<f64>()) }

/// Tall random matrix whose last `extra` columns are combinations of the others.
pub fn random_dependent_matrix(rng: &mut impl Rng, rows: usize, independent: usize, extra: usize) -> Matrix
{
    let base = random_matrix(rng, (rows, independent));
    let coeffs = random_matrix(rng, (independent, extra));
    let dependent = base.dot(&coeffs);
    ::ndarray::concatenate(Axis(1), &[base.view(), dependent.view()]).unwrap()
}

pub fn max_abs(m: &Matrix) -> f64
{ m.iter().fold(0.0, |acc, &x| f64::max(acc, x.abs())) }
