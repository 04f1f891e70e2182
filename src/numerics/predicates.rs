// src/numerics/predicates.rs
// Structural yes/no predicates over Matrix3. These are the ground truth the
// question generator checks its answers against.

use crate::numerics::matrix::Matrix3;

impl Matrix3 {
    /// Every entry below the diagonal is zero.
    pub fn is_upper_triangular(&self) -> bool {
        self.get(1, 0) == 0 && self.get(2, 0) == 0 && self.get(2, 1) == 0
    }

    /// Every entry above the diagonal is zero.
    pub fn is_lower_triangular(&self) -> bool {
        self.get(0, 1) == 0 && self.get(0, 2) == 0 && self.get(1, 2) == 0
    }

    /// Upper or lower triangular.
    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }

    /// Equal to its own transpose.
    pub fn is_symmetric(&self) -> bool {
        self.get(0, 1) == self.get(1, 0)
            && self.get(0, 2) == self.get(2, 0)
            && self.get(1, 2) == self.get(2, 1)
    }

    /// Equal to the negation of its transpose; forces a zero diagonal.
    pub fn is_skew_symmetric(&self) -> bool {
        self.get(0, 0) == 0
            && self.get(1, 1) == 0
            && self.get(2, 2) == 0
            && self.get(0, 1) == -self.get(1, 0)
            && self.get(0, 2) == -self.get(2, 0)
            && self.get(1, 2) == -self.get(2, 1)
    }

    /// Symmetric about its center: `A[i,j] == A[2-i,2-j]`.
    pub fn is_centrosymmetric(&self) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if self.get(i, j) != self.get(2 - i, 2 - j) {
                    return false;
                }
            }
        }
        true
    }

    /// `A * A == A`.
    pub fn is_idempotent(&self) -> bool {
        self.multiply(self) == *self
    }

    /// `A * A == I`.
    pub fn is_involutory(&self) -> bool {
        self.multiply(self) == Matrix3::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_predicates() {
        let lower = Matrix3::from_rows([1, 0, 0], [2, 3, 0], [4, 5, 6]);
        assert!(lower.is_lower_triangular());
        assert!(!lower.is_upper_triangular());
        assert!(lower.is_triangular());
        assert!(lower.transpose().is_upper_triangular());
        assert!(lower.transpose().is_triangular());

        let full = Matrix3::from_rows([1, 2, 0], [3, 4, 0], [0, 0, 5]);
        assert!(!full.is_triangular());
    }

    #[test]
    fn test_diagonal_predicate() {
        assert!(Matrix3::diagonal(4, -2, 0).is_diagonal());
        assert!(Matrix3::zero().is_diagonal());
        assert!(!Matrix3::from_rows([1, 1, 0], [0, 1, 0], [0, 0, 1]).is_diagonal());
    }

    #[test]
    fn test_symmetry_predicates() {
        let sym = Matrix3::from_rows([1, 2, 3], [2, 4, 5], [3, 5, 6]);
        assert!(sym.is_symmetric());
        assert!(!sym.is_skew_symmetric());

        let skew = Matrix3::from_rows([0, 2, -3], [-2, 0, 7], [3, -7, 0]);
        assert!(skew.is_skew_symmetric());
        assert!(!skew.is_symmetric());

        // A nonzero diagonal disqualifies skew symmetry even with mirrored
        // off-diagonal entries.
        let diag = Matrix3::from_rows([1, 2, -3], [-2, 0, 7], [3, -7, 0]);
        assert!(!diag.is_skew_symmetric());
    }

    #[test]
    fn test_centrosymmetric_predicate() {
        let centro = Matrix3::from_rows([1, 2, 3], [4, 5, 4], [3, 2, 1]);
        assert!(centro.is_centrosymmetric());
        assert!(!centro.with_entry(0, 0, 9).is_centrosymmetric());
        assert!(Matrix3::identity().is_centrosymmetric());
    }

    #[test]
    fn test_idempotent_predicate() {
        assert!(Matrix3::identity().is_idempotent());
        assert!(Matrix3::zero().is_idempotent());
        assert!(Matrix3::diagonal(1, 0, 1).is_idempotent());
        assert!(!Matrix3::diagonal(2, 1, 1).is_idempotent());
    }

    #[test]
    fn test_involutory_predicate() {
        assert!(Matrix3::identity().is_involutory());
        assert!(Matrix3::diagonal(-1, 1, -1).is_involutory());
        assert!(!Matrix3::zero().is_involutory());
        // Swapping two basis vectors is its own inverse.
        let swap = Matrix3::from_rows([0, 1, 0], [1, 0, 0], [0, 0, 1]);
        assert!(swap.is_involutory());
    }
}
