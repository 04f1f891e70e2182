// src/generate/structured.rs

//! Generators for matrices with a guaranteed structural property.
//!
//! Each generator draws uniformly through an injected [`RandomSource`] and
//! constructs the property directly (mirroring the independent degrees of
//! freedom, or conjugating a diagonal seed by a unimodular basis change), so
//! the property holds exactly rather than probabilistically.

use crate::numerics::matrix::Matrix3;
use crate::random::RandomSource;

/// Nine independent uniform entries in `[min, max]`.
pub fn random_matrix(rng: &mut dyn RandomSource, min: i64, max: i64) -> Matrix3 {
    let mut data = [[0i64; 3]; 3];
    for row in &mut data {
        for entry in row {
            *entry = rng.rand_range(min, max);
        }
    }
    Matrix3::new(data)
}

/// Samples the lower triangle (diagonal included) and mirrors it up.
pub fn random_symmetric_matrix(rng: &mut dyn RandomSource, min: i64, max: i64) -> Matrix3 {
    let mut data = [[0i64; 3]; 3];
    for i in 0..3 {
        for j in 0..=i {
            let value = rng.rand_range(min, max);
            data[i][j] = value;
            data[j][i] = value;
        }
    }
    Matrix3::new(data)
}

/// Samples the strict lower triangle and mirrors its negation up; the
/// diagonal is zero by construction, never sampled.
pub fn random_skew_symmetric_matrix(rng: &mut dyn RandomSource, min: i64, max: i64) -> Matrix3 {
    let mut data = [[0i64; 3]; 3];
    for i in 0..3 {
        for j in 0..i {
            let value = rng.rand_range(min, max);
            data[i][j] = value;
            data[j][i] = -value;
        }
    }
    Matrix3::new(data)
}

/// Samples the upper wedge and mirrors it through the center.
pub fn random_centrosymmetric_matrix(rng: &mut dyn RandomSource, min: i64, max: i64) -> Matrix3 {
    let mut data = [[0i64; 3]; 3];
    for i in 0..3 {
        for j in i..3 {
            let value = rng.rand_range(min, max);
            data[i][j] = value;
            data[2 - i][2 - j] = value;
        }
    }
    Matrix3::new(data)
}

/// Three independent diagonal entries, zeros elsewhere.
pub fn random_diagonal_matrix(rng: &mut dyn RandomSource, min: i64, max: i64) -> Matrix3 {
    Matrix3::diagonal(
        rng.rand_range(min, max),
        rng.rand_range(min, max),
        rng.rand_range(min, max),
    )
}

/// Strictly-lower entries in `[min, max]`; the diagonal is fixed to 1 when
/// `ones_on_diagonal` is set (the unimodular building block), sampled
/// otherwise.
pub fn random_lower_triangular_matrix(
    rng: &mut dyn RandomSource,
    min: i64,
    max: i64,
    ones_on_diagonal: bool,
) -> Matrix3 {
    let mut data = [[0i64; 3]; 3];
    for i in 0..3 {
        for j in 0..i {
            data[i][j] = rng.rand_range(min, max);
        }
        data[i][i] = if ones_on_diagonal {
            1
        } else {
            rng.rand_range(min, max)
        };
    }
    Matrix3::new(data)
}

/// Integer matrix with determinant exactly 1.
///
/// Degree 0 multiplies the transpose of one unit lower-triangular draw by a
/// second independent draw (both factors have determinant 1). Each further
/// degree squares the previous result, which grows entry magnitude fast.
pub fn random_unimodular_matrix(rng: &mut dyn RandomSource, degree: u32, scale: i64) -> Matrix3 {
    if degree == 0 {
        let left = random_lower_triangular_matrix(rng, -scale, scale, true).transpose();
        let right = random_lower_triangular_matrix(rng, -scale, scale, true);
        left.multiply(&right)
    } else {
        let base = random_unimodular_matrix(rng, degree - 1, scale);
        base.multiply(&base)
    }
}

/// A matrix and its exact integer inverse, both with determinant 1.
pub fn random_unimodular_pair(rng: &mut dyn RandomSource, scale: i64) -> (Matrix3, Matrix3) {
    let matrix = random_unimodular_matrix(rng, 0, scale);
    let inverse = matrix.integer_inverse();
    (matrix, inverse)
}

/// Same construction as the unimodular base case, but with one diagonal
/// entry of the first factor zeroed, which forces determinant 0.
pub fn random_singular_matrix(rng: &mut dyn RandomSource, scale: i64) -> Matrix3 {
    let factor = random_lower_triangular_matrix(rng, -scale, scale, true);
    let zeroed = rng.rand_range(0, 2) as usize;
    let left = factor.with_entry(zeroed, zeroed, 0).transpose();
    left.multiply(&random_lower_triangular_matrix(rng, -scale, scale, true))
}

/// Conjugates a `{0, 1}` diagonal by a random unimodular basis change, so
/// the square of the result equals itself.
pub fn random_idempotent_matrix(rng: &mut dyn RandomSource, scale: i64) -> Matrix3 {
    let mut diag = [
        rng.rand_range(0, 1),
        rng.rand_range(0, 1),
        rng.rand_range(0, 1),
    ];
    if diag[0] == diag[1] && diag[1] == diag[2] {
        // Break an all-equal diagonal: a scalar seed conjugates to itself.
        let flip = rng.rand_range(0, 2) as usize;
        diag[flip] = 1 - diag[flip];
    }
    conjugate_diagonal(rng, diag, scale)
}

/// Conjugates a `{+1, -1}` diagonal by a random unimodular basis change, so
/// the square of the result is the identity.
pub fn random_involutory_matrix(rng: &mut dyn RandomSource, scale: i64) -> Matrix3 {
    let mut diag = [0i64; 3];
    for entry in &mut diag {
        *entry = if rng.rand_range(0, 1) == 0 { 1 } else { -1 };
    }
    if diag[0] == diag[1] && diag[1] == diag[2] {
        let flip = rng.rand_range(0, 2) as usize;
        diag[flip] = -diag[flip];
    }
    conjugate_diagonal(rng, diag, scale)
}

/// Three independent integer eigenvalues conjugated by a random unimodular
/// basis change.
pub fn random_diagonalizable_matrix(rng: &mut dyn RandomSource, scale: i64) -> Matrix3 {
    let diag = [
        rng.rand_range(-scale, scale),
        rng.rand_range(-scale, scale),
        rng.rand_range(-scale, scale),
    ];
    conjugate_diagonal(rng, diag, scale)
}

/// A conjugated Jordan block with a repeated eigenvalue, hence not
/// diagonalizable.
pub fn random_non_diagonalizable_matrix(
    rng: &mut dyn RandomSource,
    scale: i64,
    eigenvalue_scale: i64,
) -> Matrix3 {
    let (basis, inverse) = random_unimodular_pair(rng, scale);
    let jordan = random_jordan_block(rng, eigenvalue_scale);
    basis.multiply(&jordan).multiply(&inverse)
}

fn random_jordan_block(rng: &mut dyn RandomSource, eigenvalue_scale: i64) -> Matrix3 {
    // Both draws use a single-value range, so the eigenvalues coincide and
    // the second superdiagonal entry is always linked.
    let first = rng.rand_range(eigenvalue_scale, eigenvalue_scale);
    let second = rng.rand_range(eigenvalue_scale, eigenvalue_scale);
    let mut data = [[0i64; 3]; 3];
    data[0][0] = first;
    data[0][1] = 1;
    data[1][1] = first;
    data[1][2] = if first == second { 1 } else { 0 };
    data[2][2] = second;
    Matrix3::new(data)
}

fn conjugate_diagonal(rng: &mut dyn RandomSource, diag: [i64; 3], scale: i64) -> Matrix3 {
    let (basis, inverse) = random_unimodular_pair(rng, scale);
    basis
        .multiply(&Matrix3::diagonal(diag[0], diag[1], diag[2]))
        .multiply(&inverse)
}
