//! Compose a quiz, print every question, then walk a session to solved
//! using the ground-truth answers.
//!
//! Run with `cargo run --example compose_quiz`; set `RUST_LOG=debug` to see
//! the per-question generation events.

use anyhow::Result;
use quaestio::{Answer, QuizConfig, QuizSession, StdRandomSource, Verdict};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut rng = StdRandomSource::new();
    let quiz = QuizConfig::default().compose(&mut rng)?;
    println!("Composed a quiz with {} questions:", quiz.len());
    for (i, item) in quiz.items().iter().enumerate() {
        println!("{:2}. {}  {}", i + 1, item.matrix, item.question);
    }

    let mut session = QuizSession::new(1, quiz);
    while let Some(item) = session.current() {
        let response = matches!(item.answer, Answer::Yes | Answer::Any);
        match session.submit(response) {
            Verdict::Correct { solved: true } => println!("Solved!"),
            Verdict::Correct { solved: false } => {}
            Verdict::Incorrect { expected } => {
                println!("Unexpectedly judged wrong (expected {expected})");
                break;
            }
            Verdict::AlreadySolved => break,
        }
    }
    Ok(())
}
