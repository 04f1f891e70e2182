// src/numerics/matrix.rs

use core::fmt;

use serde::{Deserialize, Serialize};

/// Immutable 3x3 matrix over `i64`.
///
/// All operations are exact integer arithmetic and produce new values.
/// Generator-produced entries stay within two digits before composition, so
/// every intermediate here fits comfortably in `i64`: the widest one is the
/// row-echelon cross-multiplication, which squares entry magnitudes once per
/// elimination step and tops out near 8e8 for 99-bounded input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix3 {
    data: [[i64; 3]; 3],
}

impl Matrix3 {
    pub fn new(data: [[i64; 3]; 3]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 3 rows
    pub fn from_rows(r0: [i64; 3], r1: [i64; 3], r2: [i64; 3]) -> Self {
        Self { data: [r0, r1, r2] }
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [[0; 3]; 3] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self::diagonal(1, 1, 1)
    }

    /// Diagonal matrix with the given entries, zeros elsewhere.
    pub fn diagonal(d0: i64, d1: i64, d2: i64) -> Self {
        Self {
            data: [[d0, 0, 0], [0, d1, 0], [0, 0, d2]],
        }
    }

    /// Get a single entry
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row][col]
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [i64; 3] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [i64; 3] {
        [self.data[0][idx], self.data[1][idx], self.data[2][idx]]
    }

    /// The full entry grid, row-major.
    pub fn entries(&self) -> [[i64; 3]; 3] {
        self.data
    }

    /// Copy with a single entry replaced.
    pub fn with_entry(self, row: usize, col: usize, value: i64) -> Self {
        let mut data = self.data;
        data[row][col] = value;
        Self { data }
    }

    /// Smallest and largest entry.
    pub fn extremes(&self) -> (i64, i64) {
        let mut min = self.data[0][0];
        let mut max = self.data[0][0];
        for row in &self.data {
            for &entry in row {
                min = min.min(entry);
                max = max.max(entry);
            }
        }
        (min, max)
    }

    pub fn transpose(&self) -> Self {
        let a = &self.data;
        Self {
            data: [
                [a[0][0], a[1][0], a[2][0]],
                [a[0][1], a[1][1], a[2][1]],
                [a[0][2], a[1][2], a[2][2]],
            ],
        }
    }

    /// Standard matrix product.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0i64; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    result[i][j] += self.data[i][k] * other.data[k][j];
                }
            }
        }
        Self { data: result }
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> i64 {
        self.data[0][0] + self.data[1][1] + self.data[2][2]
    }

    /// Determinant by Leibniz expansion along the first row.
    pub fn determinant(&self) -> i64 {
        let a = &self.data;
        a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1])
            - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
            + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0])
    }

    /// Permanent: the determinant expansion with every term added.
    pub fn permanent(&self) -> i64 {
        let a = &self.data;
        a[0][0] * (a[1][1] * a[2][2] + a[1][2] * a[2][1])
            + a[0][1] * (a[1][0] * a[2][2] + a[1][2] * a[2][0])
            + a[0][2] * (a[1][0] * a[2][1] + a[1][1] * a[2][0])
    }

    /// Determinant of the 2x2 submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> i64 {
        debug_assert!(row < 3 && col < 3);
        let (r0, r1) = match row {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        let (c0, c1) = match col {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        self.data[r0][c0] * self.data[r1][c1] - self.data[r0][c1] * self.data[r1][c0]
    }

    /// Signed minor: `(-1)^(row + col) * minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> i64 {
        let sign = if (row + col) % 2 == 0 { 1 } else { -1 };
        sign * self.minor(row, col)
    }

    /// Fraction-free Gaussian elimination with partial pivoting.
    ///
    /// The pivot is the remaining entry of largest absolute value in the
    /// current column; elimination uses integer cross-multiplication
    /// (`B[i,j] = B[i,j]*B[r,k] - B[i,k]*B[r,j]`) so no rationals appear.
    /// The result is a fixed point: reducing it again returns it unchanged.
    pub fn row_echelon_form(&self) -> Self {
        let mut b = self.data;
        let mut r = 0;
        let mut k = 0;
        while r < 3 && k < 3 {
            let mut pivot = r;
            let mut pivot_abs = -1i64;
            for i in r..3 {
                let abs = b[i][k].abs();
                if abs > pivot_abs {
                    pivot_abs = abs;
                    pivot = i;
                }
            }
            if b[pivot][k] != 0 {
                b.swap(r, pivot);
                for i in (r + 1)..3 {
                    if b[i][k] != 0 {
                        for j in (k + 1)..3 {
                            b[i][j] = b[i][j] * b[r][k] - b[i][k] * b[r][j];
                        }
                        b[i][k] = 0;
                    }
                }
                r += 1;
            }
            k += 1;
        }
        Self { data: b }
    }

    /// Count of trailing all-zero rows in the row-echelon form.
    pub fn nullity(&self) -> usize {
        let echelon = self.row_echelon_form();
        let mut nullity = 0;
        for i in (0..3).rev() {
            if echelon.data[i].iter().any(|&entry| entry != 0) {
                break;
            }
            nullity += 1;
        }
        nullity
    }

    pub fn rank(&self) -> usize {
        3 - self.nullity()
    }

    /// Adjugate transpose: `inverse[i,j] = cofactor(j, i)`.
    ///
    /// This is the exact inverse only when the determinant is 1 (for
    /// determinant -1 it yields the negated inverse). Caller contract, not
    /// checked here.
    pub fn integer_inverse(&self) -> Self {
        let mut result = [[0i64; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.cofactor(j, i);
            }
        }
        Self { data: result }
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{} {} {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl Serialize for Matrix3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[i64; 3]; 3]>::deserialize(deserializer)?;
        Ok(Matrix3 { data })
    }
}
