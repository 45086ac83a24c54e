// src/relation/properties.rs
//
// Property predicates for binary relations over {0, …, n-1}
// Complexity: reflexive O(n·|R|), symmetric O(|R|²), transitive O(|R|³)
// At the default set size of 4, |R| ≤ 16 — every check is trivial.

use log::debug;

use crate::relation::relation::Relation;

/// Checks whether every element of `{0, …, set_size - 1}` relates to itself.
///
/// Vacuously true for `set_size = 0`.
///
/// # Examples
/// ```
/// use relquiz::relation::relation::Relation;
/// use relquiz::relation::properties::is_reflexive;
///
/// let relation = Relation::from_pairs(&[(0, 0), (1, 1)]);
/// assert!(is_reflexive(&relation, 2));
/// assert!(!is_reflexive(&relation, 3));
/// ```
pub fn is_reflexive(relation: &Relation, set_size: usize) -> bool {
    for i in 0..set_size {
        if !relation.contains(i, i) {
            debug!("not reflexive: missing ({}, {})", i, i);
            return false;
        }
    }
    true
}

/// Checks whether every related pair is matched by its mirror image.
///
/// Self-pairs `(a, a)` need no witness. Vacuously true for an empty relation.
///
/// # Examples
/// ```
/// use relquiz::relation::relation::Relation;
/// use relquiz::relation::properties::is_symmetric;
///
/// let relation = Relation::from_pairs(&[(0, 1), (1, 0), (2, 2)]);
/// assert!(is_symmetric(&relation));
/// ```
pub fn is_symmetric(relation: &Relation) -> bool {
    relation
        .iter()
        .all(|p| p.a == p.b || relation.contains(p.b, p.a))
}

/// Checks the chain rule: whenever `(a, b)` and `(b, d)` are related, `(a, d)`
/// must be related too, over every pair of pairs sharing a midpoint.
///
/// Self-pairs get no special casing. Vacuously true when no chain exists.
///
/// # Examples
/// ```
/// use relquiz::relation::relation::Relation;
/// use relquiz::relation::properties::is_transitive;
///
/// let relation = Relation::from_pairs(&[(0, 1), (1, 2), (0, 2)]);
/// assert!(is_transitive(&relation));
/// ```
pub fn is_transitive(relation: &Relation) -> bool {
    relation.iter().all(|p| {
        relation
            .iter()
            .filter(|q| q.a == p.b)
            .all(|q| relation.contains(p.a, q.b))
    })
}
