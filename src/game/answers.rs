// src/game/answers.rs

use serde::{Deserialize, Serialize};

use crate::relation::properties::{is_reflexive, is_symmetric, is_transitive};
use crate::relation::relation::Relation;

/// One of the three properties a round quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Reflexive,
    Symmetric,
    Transitive,
}

/// One boolean per quizzed property.
///
/// Doubles as the ground-truth triple and as the user's guess triple; guesses
/// start all false and carry no relationship to the truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAnswers {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
}

impl PropertyAnswers {
    /// Ground truth for `relation` over a set of `set_size` elements.
    pub fn evaluate(relation: &Relation, set_size: usize) -> Self {
        PropertyAnswers {
            reflexive: is_reflexive(relation, set_size),
            symmetric: is_symmetric(relation),
            transitive: is_transitive(relation),
        }
    }

    /// A copy with exactly one flag flipped.
    pub fn toggled(mut self, property: Property) -> Self {
        match property {
            Property::Reflexive => self.reflexive = !self.reflexive,
            Property::Symmetric => self.symmetric = !self.symmetric,
            Property::Transitive => self.transitive = !self.transitive,
        }
        self
    }
}
