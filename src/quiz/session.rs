// src/quiz/session.rs

//! Session layer: walks a composed quiz and judges submitted answers.
//!
//! The quiz itself is cursor-free; the cursor lives here. It advances only
//! on a correct submission and never rewinds. The session identifier is
//! supplied by the owner (a host managing several sessions hands each one
//! its own id) and appears on every log event.

use crate::generate::question::{Answer, QuizItem};
use crate::quiz::composer::Quiz;

/// Outcome of judging one submitted answer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The submission matched; the cursor advanced. `solved` is set when it
    /// was the final question.
    Correct { solved: bool },
    /// The submission did not match; the cursor stayed put.
    Incorrect { expected: Answer },
    /// The quiz was already finished; nothing to judge.
    AlreadySolved,
}

/// One caller's pass through a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: u32,
    quiz: Quiz,
    index: usize,
    solved: bool,
}

impl QuizSession {
    /// A fresh session at the first question. The id is owner-assigned and
    /// only used for log attribution.
    pub fn new(id: u32, quiz: Quiz) -> Self {
        Self {
            id,
            quiz,
            index: 0,
            solved: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// The question awaiting an answer, or `None` once solved.
    pub fn current(&self) -> Option<&QuizItem> {
        if self.solved {
            return None;
        }
        self.quiz.items().get(self.index)
    }

    /// Zero-based cursor and total question count.
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.quiz.len())
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Judge a yes/no submission against the current question.
    ///
    /// An `Any` ground truth accepts either response. A correct submission
    /// advances the cursor; the final correct submission latches the session
    /// solved.
    pub fn submit(&mut self, answer: bool) -> Verdict {
        let Some(item) = self.current() else {
            return Verdict::AlreadySolved;
        };
        let expected = item.answer;
        if expected.accepts(answer) {
            self.index += 1;
            if self.index >= self.quiz.len() {
                self.solved = true;
                tracing::info!(session = self.id, "quiz solved");
            } else {
                tracing::debug!(
                    session = self.id,
                    index = self.index,
                    total = self.quiz.len(),
                    "correct answer, advancing to the next question"
                );
            }
            Verdict::Correct {
                solved: self.solved,
            }
        } else {
            tracing::debug!(
                session = self.id,
                got = answer,
                expected = %expected,
                "incorrect answer"
            );
            Verdict::Incorrect { expected }
        }
    }
}
