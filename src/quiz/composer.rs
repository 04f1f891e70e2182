// src/quiz/composer.rs

//! Difficulty-budgeted quiz composition.
//!
//! Composition runs in two phases. Selection draws random question kinds and
//! accepts each one only while its weight fits strictly under the remaining
//! difficulty budget, stopping once the budget falls to the floor.
//! Instantiation then generates up to `attempt_cap` candidates per selected
//! kind and keeps the one with the smallest entry magnitude, exiting early
//! as soon as a candidate reads well enough.

use serde::{Deserialize, Serialize};

use crate::generate::question::{QuestionKind, QuizItem};
use crate::numerics::matrix::Matrix3;
use crate::random::RandomSource;

/// Errors surfaced by quiz composition.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("invalid quiz configuration: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("difficulty budget selected no questions")]
    Empty,

    #[error("no candidate generated for {kind:?} within the attempt cap")]
    NoCandidate { kind: QuestionKind },
}

/// Tuning knobs for quiz composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Total difficulty the selection phase may spend.
    pub target_difficulty: f32,
    /// Selection stops once the remaining budget drops to this floor.
    pub budget_floor: f32,
    /// Generation attempts per selected kind.
    pub attempt_cap: u32,
    /// Entry-magnitude score below which a candidate is kept immediately.
    pub readability_limit: i64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            target_difficulty: 15.0,
            budget_floor: 1.0,
            attempt_cap: 20,
            readability_limit: 300,
        }
    }
}

impl QuizConfig {
    /// Short session: roughly a third of the default difficulty budget.
    pub fn short_session() -> Self {
        Self {
            target_difficulty: 5.0,
            ..Self::default()
        }
    }

    /// Extended session: double the default difficulty budget.
    pub fn extended_session() -> Self {
        Self {
            target_difficulty: 30.0,
            ..Self::default()
        }
    }

    /// Compose a quiz: select kinds against the budget, then instantiate
    /// each one with the readability-biased attempt loop.
    pub fn compose(&self, rng: &mut dyn RandomSource) -> Result<Quiz, QuizError> {
        self.validate()?;
        let kinds = self.select_kinds(rng);
        tracing::debug!(selected = kinds.len(), "selected question kinds");
        if kinds.is_empty() {
            return Err(QuizError::Empty);
        }
        let mut items = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let item = self
                .pick_readable(kind, rng)
                .ok_or(QuizError::NoCandidate { kind })?;
            tracing::debug!(
                index = items.len(),
                matrix = %item.matrix,
                question = %item.question,
                answer = %item.answer,
                "generated question"
            );
            items.push(item);
        }
        Ok(Quiz { items })
    }

    fn validate(&self) -> Result<(), QuizError> {
        if self.attempt_cap == 0 {
            return Err(QuizError::InvalidConfig {
                reason: "attempt cap must be at least 1",
            });
        }
        if !self.target_difficulty.is_finite() || self.target_difficulty <= 0.0 {
            return Err(QuizError::InvalidConfig {
                reason: "target difficulty must be positive",
            });
        }
        let cheapest = QuestionKind::ALL
            .iter()
            .map(|kind| kind.difficulty())
            .fold(f32::INFINITY, f32::min);
        // A floor below the cheapest weight can strand a remainder that no
        // kind fits under, and selection would never terminate.
        if !self.budget_floor.is_finite() || self.budget_floor < cheapest {
            return Err(QuizError::InvalidConfig {
                reason: "budget floor must cover the cheapest question weight",
            });
        }
        if self.readability_limit <= 0 {
            return Err(QuizError::InvalidConfig {
                reason: "readability limit must be positive",
            });
        }
        Ok(())
    }

    fn select_kinds(&self, rng: &mut dyn RandomSource) -> Vec<QuestionKind> {
        let mut remaining = self.target_difficulty;
        let mut kinds = Vec::new();
        while remaining > self.budget_floor {
            let kind = QuestionKind::sample(rng);
            let weight = kind.difficulty();
            // Strictly less: a kind whose weight exactly matches the
            // remaining budget is passed over.
            if weight < remaining {
                kinds.push(kind);
                remaining -= weight;
            }
        }
        kinds
    }

    fn pick_readable(&self, kind: QuestionKind, rng: &mut dyn RandomSource) -> Option<QuizItem> {
        let cap = self.attempt_cap;
        let candidates = Candidates {
            kind,
            rng,
            remaining: cap,
        };
        let mut best: Option<(i64, QuizItem)> = None;
        for (index, item) in candidates.enumerate() {
            let score = readability_score(&item.matrix);
            let improved = best.as_ref().map_or(true, |(held, _)| score < *held);
            // The final attempt replaces the held candidate even when it
            // scores worse.
            if improved || index as u32 + 1 == cap {
                best = Some((score, item));
            }
            if matches!(&best, Some((held, _)) if *held < self.readability_limit) {
                break;
            }
        }
        best.map(|(_, item)| item)
    }
}

/// Bounded lazy stream of generated candidates for one question kind.
struct Candidates<'a> {
    kind: QuestionKind,
    rng: &'a mut dyn RandomSource,
    remaining: u32,
}

impl Iterator for Candidates<'_> {
    type Item = QuizItem;

    fn next(&mut self) -> Option<QuizItem> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.kind.generate(self.rng))
    }
}

/// The larger-magnitude extreme of the matrix, the "hard to read" score.
fn readability_score(matrix: &Matrix3) -> i64 {
    let (min, max) = matrix.extremes();
    max.max(-min)
}

/// Ordered, immutable sequence of quiz items.
///
/// Built once, consumed sequentially by a session; the composer never
/// re-sorts, so item order is selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    items: Vec<QuizItem>,
}

impl Quiz {
    /// Build a quiz from pre-generated items. An empty quiz is an error.
    pub fn from_items(items: Vec<QuizItem>) -> Result<Self, QuizError> {
        if items.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
