//! # Quaestio - 3x3 Integer Linear-Algebra Quiz Engine
//!
//! Quaestio generates random integer matrices that satisfy (or deliberately
//! violate) named algebraic properties, pairs each matrix with a yes/no
//! question and its ground-truth answer, and composes difficulty-budgeted
//! quizzes biased toward small, readable matrices.
//!
//! ## Core Features
//!
//! - **Exact primitives**: transpose, products, determinant, permanent,
//!   minors and cofactors, fraction-free row reduction, rank/nullity, and
//!   unimodular integer inverses - all in plain `i64`, no floating point.
//! - **Structured generators**: triangular, diagonal, symmetric,
//!   skew-symmetric, centrosymmetric, unimodular, singular, idempotent,
//!   involutory, diagonalizable and non-diagonalizable matrices on demand.
//! - **Sixteen question kinds**: each with a fixed difficulty weight and a
//!   construct-then-verify answer derivation.
//! - **Budgeted composition**: a difficulty budget selects kinds, and a
//!   bounded attempt loop keeps the most readable candidate for each.
//!
//! ## Quick Start
//!
//! ```rust
//! use quaestio::{QuizConfig, StdRandomSource};
//!
//! # fn main() -> Result<(), quaestio::QuizError> {
//! let mut rng = StdRandomSource::seeded(42);
//! let quiz = QuizConfig::default().compose(&mut rng)?;
//!
//! for item in quiz.items() {
//!     println!("{}  {}", item.matrix, item.question);
//! }
//! # Ok(())
//! # }
//! ```

pub mod generate;
pub mod numerics;
pub mod quiz;
pub mod random;

// Re-export the types a host session needs.
pub use generate::question::{Answer, QuestionKind, QuizItem};
pub use numerics::matrix::Matrix3;
pub use quiz::composer::{Quiz, QuizConfig, QuizError};
pub use quiz::session::{QuizSession, Verdict};
pub use random::{RandomSource, StdRandomSource};

/// Version information for the quaestio crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_compose() {
        let mut rng = StdRandomSource::seeded(1);
        let quiz = QuizConfig::default().compose(&mut rng).unwrap();
        assert!(quiz.len() > 0);
    }
}
