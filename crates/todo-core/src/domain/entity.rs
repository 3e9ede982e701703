//! Domain Layer - Core Entity Trait
//!
//! Basic contract for entities the remote API hands out.

use std::collections::HashSet;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Drop every entity whose id was already seen, keeping the first one.
///
/// Order of the survivors is preserved.
pub fn dedup_by_id<T: Entity>(entities: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(entities.len());
    entities
        .into_iter()
        .filter(|entity| seen.insert(entity.id().clone()))
        .collect()
}
