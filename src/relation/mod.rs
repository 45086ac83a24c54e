// src/relation/mod.rs

pub mod generator;
pub mod properties;
pub mod relation;

// Re-export main types for convenience
pub use generator::random_relation;
pub use properties::{is_reflexive, is_symmetric, is_transitive};
pub use relation::{Pair, Relation};
