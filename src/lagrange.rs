// Lagrange interpolation at x = 0, over exact rational arithmetic.
//
// Given k points of a degree-(k-1) polynomial, the constant term is
//
//     f(0) = sum_i  y_i * prod_{j != i} (0 - x_j) / (x_i - x_j)
//
// Products and sums are kept as arbitrary-precision rationals the whole
// way; decoded values can be arbitrarily large, and floating point
// would not reproduce bit-exact results.

use num::bigint::BigInt;
use num::rational::BigRational;
use num::traits::{One, Zero};

use crate::error::Error;
use crate::share::{Point, Secret};

// Recover the constant term from the first k of the supplied points.
//
// Exactly points[0..k] are used, in the order given.  Extra points are
// ignored, never substituted.
pub fn recover_constant(points: &[Point], k: usize) -> Result<Secret, Error> {
    if points.len() < k {
        return Err(Error::InsufficientPoints { have: points.len(), need: k });
    }
    let selected = &points[..k];

    // The basis denominators divide by (x_i - x_j); a repeated abscissa
    // is fatal before any arithmetic happens.
    for (i, p) in selected.iter().enumerate() {
        for q in &selected[i + 1..] {
            if p.x == q.x {
                return Err(Error::DuplicateAbscissa { x: p.x.clone() });
            }
        }
    }

    let mut acc = BigRational::zero();
    for (i, p) in selected.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();
        for (j, q) in selected.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= -&q.x;
            denominator *= &p.x - &q.x;
        }
        acc += BigRational::new(numerator * &p.y, denominator);
    }
    Ok(Secret::from_ratio(acc))
}
