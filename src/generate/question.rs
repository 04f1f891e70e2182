// src/generate/question.rs

//! The sixteen question kinds and their per-kind instance generation.
//!
//! Every kind follows the same pattern: flip a fair coin for the intended
//! polarity, construct a matrix accordingly, then derive the recorded answer
//! from the matrix itself. Structural negatives are re-checked against the
//! actual property, because an unconstrained random matrix can satisfy it by
//! accident; value negatives perturb the stated target by a nonzero offset.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::generate::structured::{
    random_centrosymmetric_matrix, random_diagonal_matrix, random_diagonalizable_matrix,
    random_idempotent_matrix, random_involutory_matrix, random_lower_triangular_matrix,
    random_matrix, random_non_diagonalizable_matrix, random_singular_matrix,
    random_skew_symmetric_matrix, random_symmetric_matrix,
};
use crate::numerics::matrix::Matrix3;
use crate::random::RandomSource;

/// The sixteen askable properties.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    Triangularity,
    Diagonality,
    Symmetry,
    SkewSymmetry,
    CentroSymmetry,
    Rank,
    Nullity,
    Determinant,
    Permanent,
    Trace,
    Minor,
    Cofactor,
    Invertibility,
    Involutory,
    Idempotent,
    Diagonalizability,
}

/// Ground-truth answer to a quiz question.
///
/// `Any` is a defensive fallback only: it marks an instance whose generation
/// failed to settle on a definite answer, and the judging layer must accept
/// either response for it. Well-formed generation never produces it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    Any,
}

impl Answer {
    pub fn from_bool(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    /// Judge a submitted yes/no response. `Any` accepts both.
    pub fn accepts(self, response: bool) -> bool {
        match self {
            Answer::Yes => response,
            Answer::No => !response,
            Answer::Any => true,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::Any => "Any",
        };
        f.write_str(text)
    }
}

/// One generated quiz entry: the matrix to show, the question to ask, and
/// the hidden ground truth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub matrix: Matrix3,
    pub question: String,
    pub answer: Answer,
}

type Generator = fn(&mut dyn RandomSource) -> QuizItem;

struct KindProfile {
    kind: QuestionKind,
    difficulty: f32,
    generate: Generator,
}

// Ordered to match the enum discriminants; alignment is asserted in tests.
const PROFILES: [KindProfile; 16] = [
    KindProfile {
        kind: QuestionKind::Triangularity,
        difficulty: 0.25,
        generate: triangularity,
    },
    KindProfile {
        kind: QuestionKind::Diagonality,
        difficulty: 0.25,
        generate: diagonality,
    },
    KindProfile {
        kind: QuestionKind::Symmetry,
        difficulty: 0.25,
        generate: symmetry,
    },
    KindProfile {
        kind: QuestionKind::SkewSymmetry,
        difficulty: 0.25,
        generate: skew_symmetry,
    },
    KindProfile {
        kind: QuestionKind::CentroSymmetry,
        difficulty: 0.25,
        generate: centro_symmetry,
    },
    KindProfile {
        kind: QuestionKind::Rank,
        difficulty: 5.0,
        generate: rank,
    },
    KindProfile {
        kind: QuestionKind::Nullity,
        difficulty: 5.0,
        generate: nullity,
    },
    KindProfile {
        kind: QuestionKind::Determinant,
        difficulty: 3.75,
        generate: determinant,
    },
    KindProfile {
        kind: QuestionKind::Permanent,
        difficulty: 3.75,
        generate: permanent,
    },
    KindProfile {
        kind: QuestionKind::Trace,
        difficulty: 1.0,
        generate: trace,
    },
    KindProfile {
        kind: QuestionKind::Minor,
        difficulty: 3.0,
        generate: minor,
    },
    KindProfile {
        kind: QuestionKind::Cofactor,
        difficulty: 3.25,
        generate: cofactor,
    },
    KindProfile {
        kind: QuestionKind::Invertibility,
        difficulty: 4.0,
        generate: invertibility,
    },
    KindProfile {
        kind: QuestionKind::Involutory,
        difficulty: 6.0,
        generate: involutory,
    },
    KindProfile {
        kind: QuestionKind::Idempotent,
        difficulty: 6.25,
        generate: idempotent,
    },
    KindProfile {
        kind: QuestionKind::Diagonalizability,
        difficulty: 10.0,
        generate: diagonalizability,
    },
];

impl QuestionKind {
    pub const ALL: [QuestionKind; 16] = [
        QuestionKind::Triangularity,
        QuestionKind::Diagonality,
        QuestionKind::Symmetry,
        QuestionKind::SkewSymmetry,
        QuestionKind::CentroSymmetry,
        QuestionKind::Rank,
        QuestionKind::Nullity,
        QuestionKind::Determinant,
        QuestionKind::Permanent,
        QuestionKind::Trace,
        QuestionKind::Minor,
        QuestionKind::Cofactor,
        QuestionKind::Invertibility,
        QuestionKind::Involutory,
        QuestionKind::Idempotent,
        QuestionKind::Diagonalizability,
    ];

    /// Uniform draw over all kinds.
    pub fn sample(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.rand_range(0, 15) as usize]
    }

    /// Fixed difficulty weight used by the quiz composer.
    pub fn difficulty(self) -> f32 {
        self.profile().difficulty
    }

    /// Generate one (matrix, question, answer) instance of this kind.
    pub fn generate(self, rng: &mut dyn RandomSource) -> QuizItem {
        (self.profile().generate)(rng)
    }

    fn profile(self) -> &'static KindProfile {
        let profile = &PROFILES[self as usize];
        debug_assert!(profile.kind == self);
        profile
    }
}

fn structural(matrix: Matrix3, question: &str, holds: bool) -> QuizItem {
    QuizItem {
        matrix,
        question: question.to_string(),
        answer: Answer::from_bool(holds),
    }
}

/// Nonzero perturbation in `±[1, 9]` for false value questions.
fn offset(rng: &mut dyn RandomSource) -> i64 {
    let magnitude = rng.rand_range(1, 9);
    if rng.rand_range(0, 1) == 0 {
        -magnitude
    } else {
        magnitude
    }
}

fn triangularity(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    let matrix = if wants_positive {
        let lower = random_lower_triangular_matrix(rng, -99, 99, false);
        if rng.coin() {
            lower.transpose()
        } else {
            lower
        }
    } else {
        random_matrix(rng, -99, 99)
    };
    structural(matrix, "Is A triangular?", matrix.is_triangular())
}

fn diagonality(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    let matrix = if wants_positive {
        random_diagonal_matrix(rng, -99, 99)
    } else {
        random_matrix(rng, -99, 99)
    };
    structural(matrix, "Is A diagonal?", matrix.is_diagonal())
}

fn symmetry(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    let matrix = if wants_positive {
        random_symmetric_matrix(rng, -99, 99)
    } else {
        random_matrix(rng, -99, 99)
    };
    structural(matrix, "Is A symmetric?", matrix.is_symmetric())
}

fn skew_symmetry(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    let matrix = if wants_positive {
        random_skew_symmetric_matrix(rng, -99, 99)
    } else {
        random_matrix(rng, -99, 99)
    };
    structural(matrix, "Is A skew-symmetric?", matrix.is_skew_symmetric())
}

fn centro_symmetry(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    let matrix = if wants_positive {
        random_centrosymmetric_matrix(rng, -99, 99)
    } else {
        random_matrix(rng, -99, 99)
    };
    structural(matrix, "Is A centrosymmetric?", matrix.is_centrosymmetric())
}

fn rank(rng: &mut dyn RandomSource) -> QuizItem {
    let matrix = random_matrix(rng, -99, 99);
    let target = rng.rand_range(0, 2);
    QuizItem {
        matrix,
        question: format!("Does rank A = {target}?"),
        answer: Answer::from_bool(matrix.rank() as i64 == target),
    }
}

fn nullity(rng: &mut dyn RandomSource) -> QuizItem {
    // Half the instances go through the singular generator so nonzero
    // nullities actually show up.
    let singular_bias = rng.coin();
    let matrix = if singular_bias {
        random_singular_matrix(rng, 6)
    } else {
        random_matrix(rng, -99, 99)
    };
    let target = rng.rand_range(0, 2);
    QuizItem {
        matrix,
        question: format!("Does null A = {target}?"),
        answer: Answer::from_bool(matrix.nullity() as i64 == target),
    }
}

fn determinant(rng: &mut dyn RandomSource) -> QuizItem {
    let truthful = rng.coin();
    let matrix = random_matrix(rng, -20, 20);
    let mut value = matrix.determinant();
    if !truthful {
        value += offset(rng);
    }
    QuizItem {
        matrix,
        question: format!("Does det A = {value}?"),
        answer: Answer::from_bool(truthful),
    }
}

fn permanent(rng: &mut dyn RandomSource) -> QuizItem {
    let truthful = rng.coin();
    let matrix = random_matrix(rng, -20, 20);
    let mut value = matrix.permanent();
    if !truthful {
        value += offset(rng);
    }
    QuizItem {
        matrix,
        question: format!("Does perm A = {value}?"),
        answer: Answer::from_bool(truthful),
    }
}

fn trace(rng: &mut dyn RandomSource) -> QuizItem {
    let truthful = rng.coin();
    let matrix = random_matrix(rng, -99, 99);
    let mut value = matrix.trace();
    if !truthful {
        value += offset(rng);
    }
    QuizItem {
        matrix,
        question: format!("Does tr A = {value}?"),
        answer: Answer::from_bool(truthful),
    }
}

fn minor(rng: &mut dyn RandomSource) -> QuizItem {
    let truthful = rng.coin();
    let matrix = random_matrix(rng, -20, 20);
    let row = rng.rand_range(0, 2) as usize;
    let col = rng.rand_range(0, 2) as usize;
    let mut value = matrix.minor(row, col);
    if !truthful {
        value += offset(rng);
    }
    QuizItem {
        matrix,
        question: format!("Does M{},{} of A = {}?", row + 1, col + 1, value),
        answer: Answer::from_bool(truthful),
    }
}

fn cofactor(rng: &mut dyn RandomSource) -> QuizItem {
    let truthful = rng.coin();
    let matrix = random_matrix(rng, -20, 20);
    let row = rng.rand_range(0, 2) as usize;
    let col = rng.rand_range(0, 2) as usize;
    let mut value = matrix.cofactor(row, col);
    if !truthful {
        value += offset(rng);
    }
    QuizItem {
        matrix,
        question: format!("Does C{},{} of A = {}?", row + 1, col + 1, value),
        answer: Answer::from_bool(truthful),
    }
}

fn invertibility(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    let matrix = if wants_positive {
        random_matrix(rng, -99, 99)
    } else {
        random_singular_matrix(rng, 6)
    };
    structural(matrix, "Is A invertible?", matrix.determinant() != 0)
}

fn involutory(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    let matrix = if wants_positive {
        random_involutory_matrix(rng, 7)
    } else {
        random_matrix(rng, -99, 99)
    };
    structural(matrix, "Is A involutory?", matrix.is_involutory())
}

fn idempotent(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    let matrix = if wants_positive {
        random_idempotent_matrix(rng, 7)
    } else {
        random_matrix(rng, -99, 99)
    };
    structural(matrix, "Is A idempotent?", matrix.is_idempotent())
}

fn diagonalizability(rng: &mut dyn RandomSource) -> QuizItem {
    let wants_positive = rng.coin();
    if wants_positive {
        QuizItem {
            matrix: random_diagonalizable_matrix(rng, 7),
            question: "Is A diagonalizable?".to_string(),
            answer: Answer::Yes,
        }
    } else {
        QuizItem {
            matrix: random_non_diagonalizable_matrix(rng, 5, 3),
            question: "Is A diagonalizable?".to_string(),
            answer: Answer::No,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StdRandomSource;

    fn stated_value(question: &str) -> i64 {
        question
            .trim_end_matches('?')
            .rsplit(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn test_profile_table_matches_enum_order() {
        for kind in QuestionKind::ALL {
            assert_eq!(kind.profile().kind, kind);
        }
    }

    #[test]
    fn test_difficulty_table() {
        assert_eq!(QuestionKind::Triangularity.difficulty(), 0.25);
        assert_eq!(QuestionKind::Diagonality.difficulty(), 0.25);
        assert_eq!(QuestionKind::Symmetry.difficulty(), 0.25);
        assert_eq!(QuestionKind::SkewSymmetry.difficulty(), 0.25);
        assert_eq!(QuestionKind::CentroSymmetry.difficulty(), 0.25);
        assert_eq!(QuestionKind::Trace.difficulty(), 1.0);
        assert_eq!(QuestionKind::Minor.difficulty(), 3.0);
        assert_eq!(QuestionKind::Cofactor.difficulty(), 3.25);
        assert_eq!(QuestionKind::Determinant.difficulty(), 3.75);
        assert_eq!(QuestionKind::Permanent.difficulty(), 3.75);
        assert_eq!(QuestionKind::Invertibility.difficulty(), 4.0);
        assert_eq!(QuestionKind::Rank.difficulty(), 5.0);
        assert_eq!(QuestionKind::Nullity.difficulty(), 5.0);
        assert_eq!(QuestionKind::Involutory.difficulty(), 6.0);
        assert_eq!(QuestionKind::Idempotent.difficulty(), 6.25);
        assert_eq!(QuestionKind::Diagonalizability.difficulty(), 10.0);
    }

    #[test]
    fn test_answer_judging() {
        assert!(Answer::Yes.accepts(true));
        assert!(!Answer::Yes.accepts(false));
        assert!(Answer::No.accepts(false));
        assert!(!Answer::No.accepts(true));
        assert!(Answer::Any.accepts(true));
        assert!(Answer::Any.accepts(false));
    }

    #[test]
    fn test_structural_answers_match_predicates() {
        let mut rng = StdRandomSource::seeded(21);
        for _ in 0..100 {
            let item = QuestionKind::Triangularity.generate(&mut rng);
            assert_eq!(item.answer, Answer::from_bool(item.matrix.is_triangular()));

            let item = QuestionKind::Diagonality.generate(&mut rng);
            assert_eq!(item.answer, Answer::from_bool(item.matrix.is_diagonal()));

            let item = QuestionKind::Symmetry.generate(&mut rng);
            assert_eq!(item.answer, Answer::from_bool(item.matrix.is_symmetric()));

            let item = QuestionKind::SkewSymmetry.generate(&mut rng);
            assert_eq!(
                item.answer,
                Answer::from_bool(item.matrix.is_skew_symmetric())
            );

            let item = QuestionKind::CentroSymmetry.generate(&mut rng);
            assert_eq!(
                item.answer,
                Answer::from_bool(item.matrix.is_centrosymmetric())
            );

            let item = QuestionKind::Invertibility.generate(&mut rng);
            assert_eq!(
                item.answer,
                Answer::from_bool(item.matrix.determinant() != 0)
            );

            let item = QuestionKind::Involutory.generate(&mut rng);
            assert_eq!(item.answer, Answer::from_bool(item.matrix.is_involutory()));

            let item = QuestionKind::Idempotent.generate(&mut rng);
            assert_eq!(item.answer, Answer::from_bool(item.matrix.is_idempotent()));
        }
    }

    #[test]
    fn test_value_questions_state_value_iff_yes() {
        let mut rng = StdRandomSource::seeded(22);
        for _ in 0..100 {
            let item = QuestionKind::Trace.generate(&mut rng);
            let matches = item.matrix.trace() == stated_value(&item.question);
            assert_eq!(item.answer, Answer::from_bool(matches));

            let item = QuestionKind::Determinant.generate(&mut rng);
            let matches = item.matrix.determinant() == stated_value(&item.question);
            assert_eq!(item.answer, Answer::from_bool(matches));

            let item = QuestionKind::Permanent.generate(&mut rng);
            let matches = item.matrix.permanent() == stated_value(&item.question);
            assert_eq!(item.answer, Answer::from_bool(matches));
        }
    }

    #[test]
    fn test_minor_and_cofactor_questions() {
        let mut rng = StdRandomSource::seeded(23);
        for _ in 0..100 {
            let item = QuestionKind::Minor.generate(&mut rng);
            let rest = item.question.strip_prefix("Does M").unwrap();
            let (indices, rest) = rest.split_once(" of A = ").unwrap();
            let (row, col) = indices.split_once(',').unwrap();
            let row = row.parse::<usize>().unwrap() - 1;
            let col = col.parse::<usize>().unwrap() - 1;
            let value: i64 = rest.trim_end_matches('?').parse().unwrap();
            assert_eq!(
                item.answer,
                Answer::from_bool(item.matrix.minor(row, col) == value)
            );

            let item = QuestionKind::Cofactor.generate(&mut rng);
            let rest = item.question.strip_prefix("Does C").unwrap();
            let (indices, rest) = rest.split_once(" of A = ").unwrap();
            let (row, col) = indices.split_once(',').unwrap();
            let row = row.parse::<usize>().unwrap() - 1;
            let col = col.parse::<usize>().unwrap() - 1;
            let value: i64 = rest.trim_end_matches('?').parse().unwrap();
            assert_eq!(
                item.answer,
                Answer::from_bool(item.matrix.cofactor(row, col) == value)
            );
        }
    }

    #[test]
    fn test_rank_and_nullity_questions() {
        let mut rng = StdRandomSource::seeded(24);
        for _ in 0..100 {
            let item = QuestionKind::Rank.generate(&mut rng);
            let target = stated_value(&item.question);
            assert!((0..=2).contains(&target));
            assert_eq!(
                item.answer,
                Answer::from_bool(item.matrix.rank() as i64 == target)
            );

            let item = QuestionKind::Nullity.generate(&mut rng);
            let target = stated_value(&item.question);
            assert!((0..=2).contains(&target));
            assert_eq!(
                item.answer,
                Answer::from_bool(item.matrix.nullity() as i64 == target)
            );
        }
    }

    #[test]
    fn test_diagonalizability_branches() {
        let mut rng = StdRandomSource::seeded(25);
        for _ in 0..50 {
            let item = QuestionKind::Diagonalizability.generate(&mut rng);
            assert_eq!(item.question, "Is A diagonalizable?");
            match item.answer {
                // Negative instances carry the repeated eigenvalue 3 in a
                // Jordan block: shifting by -3 leaves a nilpotent matrix.
                Answer::No => {
                    let mut data = item.matrix.entries();
                    for i in 0..3 {
                        data[i][i] -= 3;
                    }
                    let shifted = Matrix3::new(data);
                    let squared = shifted.multiply(&shifted);
                    assert_eq!(squared.multiply(&shifted), Matrix3::zero());
                }
                Answer::Yes => {}
                Answer::Any => panic!("generation must never produce Any"),
            }
        }
    }

    #[test]
    fn test_generation_never_produces_any() {
        let mut rng = StdRandomSource::seeded(26);
        for kind in QuestionKind::ALL {
            for _ in 0..40 {
                let item = kind.generate(&mut rng);
                assert_ne!(item.answer, Answer::Any, "{kind:?} produced Any");
                assert!(!item.question.is_empty());
            }
        }
    }
}
