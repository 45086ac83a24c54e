// src/game/round.rs

use log::info;

use crate::core::random::GameRandom;
use crate::game::answers::{Property, PropertyAnswers};
use crate::relation::generator::random_relation;
use crate::relation::relation::Relation;

pub const CORRECT_MESSAGE: &str = "Correct! Great job.";
pub const INCORRECT_MESSAGE: &str = "Incorrect. Please try again!";

/// State of one quiz round.
///
/// Every transition returns a replacement value; a round is never edited in
/// place, and the relation is swapped wholesale when a new round starts.
#[derive(Debug, Clone)]
pub struct Round {
    pub set_size: usize,
    pub relation: Relation,
    pub guesses: PropertyAnswers,
    pub message: Option<String>,
}

impl Round {
    /// Starts a round with a freshly drawn relation, all guesses off and no
    /// verdict message.
    pub fn new(set_size: usize, rng: &mut GameRandom) -> Self {
        Round {
            set_size,
            relation: random_relation(set_size, rng),
            guesses: PropertyAnswers::default(),
            message: None,
        }
    }

    /// Flips a single guess; relation and message carry over.
    pub fn with_guess_toggled(&self, property: Property) -> Self {
        Round {
            set_size: self.set_size,
            relation: self.relation.clone(),
            guesses: self.guesses.toggled(property),
            message: self.message.clone(),
        }
    }

    /// Ground truth for this round's relation.
    pub fn ground_truth(&self) -> PropertyAnswers {
        PropertyAnswers::evaluate(&self.relation, self.set_size)
    }

    /// Whether the current guesses match ground truth field by field.
    pub fn guesses_match(&self) -> bool {
        self.guesses == self.ground_truth()
    }

    /// Scores the current guesses and sets the verdict message.
    pub fn submitted(&self) -> Self {
        let truth = self.ground_truth();
        let correct = self.guesses == truth;
        info!(
            "submission: guesses {:?}, truth {:?}, correct: {}",
            self.guesses, truth, correct
        );
        let message = if correct {
            CORRECT_MESSAGE
        } else {
            INCORRECT_MESSAGE
        };
        Round {
            set_size: self.set_size,
            relation: self.relation.clone(),
            guesses: self.guesses,
            message: Some(message.to_string()),
        }
    }

    /// The "New Game" transition: a fresh relation at the same set size, with
    /// guesses and message reset.
    pub fn next_round(&self, rng: &mut GameRandom) -> Self {
        Round::new(self.set_size, rng)
    }
}
