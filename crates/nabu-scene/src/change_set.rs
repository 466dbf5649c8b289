use std::collections::HashSet;

use crate::EntityId;

/// Entity identifiers known changed during the current pass.
///
/// Grow-only: insertion is idempotent and there is no removal. One
/// `ChangeSet` lives for exactly one propagation pass and is dropped when the
/// pass returns; the changed tag in the store is the only cross-pass record
/// of who changed.
#[derive(Debug, Default)]
pub struct ChangeSet {
    ids: HashSet<EntityId>,
}

impl ChangeSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an identifier. Re-inserting a present id is a no-op.
    #[inline]
    pub fn insert(&mut self, id: EntityId) {
        self.ids.insert(id);
    }

    /// O(1) amortized membership test.
    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_contains() {
        let mut set = ChangeSet::new();
        assert!(set.is_empty());
        set.insert(EntityId::new(3));
        assert!(set.contains(EntityId::new(3)));
        assert!(!set.contains(EntityId::new(4)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = ChangeSet::new();
        set.insert(EntityId::new(9));
        set.insert(EntityId::new(9));
        assert_eq!(set.len(), 1);
    }
}
