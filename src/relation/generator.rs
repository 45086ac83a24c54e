// src/relation/generator.rs

use log::debug;

use crate::core::random::GameRandom;
use crate::relation::relation::Relation;

/// Draws a random relation over `{0, …, set_size - 1}`.
///
/// Every ordered pair `(i, j)` is included independently with probability one
/// half. The result may be empty by chance, and always is for `set_size = 0`.
pub fn random_relation(set_size: usize, rng: &mut GameRandom) -> Relation {
    let mut relation = Relation::new();
    for i in 0..set_size {
        for j in 0..set_size {
            if rng.next_double() > 0.5 {
                relation.push(i, j);
            }
        }
    }
    debug!(
        "generated {} of {} possible pairs",
        relation.len(),
        set_size * set_size
    );
    relation
}
