use std::collections::HashMap;

use crate::{EntityId, SceneStore};

#[derive(Debug)]
struct SceneNode {
    id: EntityId,
    parent: EntityId,
    changed: bool,
}

/// Insertion-ordered in-memory store of scene-linked entities.
///
/// The reference host for [`propagate`](crate::propagate): entities are
/// iterated in spawn order, so spawning parents before their children
/// satisfies the topological-order precondition with no extra bookkeeping.
///
/// The world never removes entities; scenes that need despawning live in a
/// fuller store behind the same [`SceneStore`] trait.
#[derive(Debug, Default)]
pub struct SceneWorld {
    nodes: Vec<SceneNode>,
    /// Identity → slot, for host-side operations addressed by id.
    by_id: HashMap<EntityId, usize>,
}

impl SceneWorld {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entity with the given identity and parent.
    ///
    /// `parent` is a weak reference: it need not name a spawned entity, and
    /// [`EntityId::NONE`] makes a root. Identities must be unique and
    /// non-sentinel; both are the host's contract (checked in debug builds).
    pub fn spawn(&mut self, id: EntityId, parent: EntityId) {
        debug_assert!(id.is_some(), "spawn with the NONE sentinel as identity");
        debug_assert!(
            !self.by_id.contains_key(&id),
            "spawn with duplicate identity"
        );
        self.by_id.insert(id, self.nodes.len());
        self.nodes.push(SceneNode {
            id,
            parent,
            changed: false,
        });
    }

    /// Sets the changed tag on the entity with identity `id`.
    ///
    /// This is the host-side marking step that seeds a propagation pass.
    /// Returns `false` if no such entity exists.
    pub fn mark_changed(&mut self, id: EntityId) -> bool {
        match self.by_id.get(&id) {
            Some(&slot) => {
                self.nodes[slot].changed = true;
                true
            }
            None => false,
        }
    }

    /// Clears every changed tag. The host calls this between ticks when it
    /// wants the next pass to start from scratch; the propagation pass
    /// itself never clears.
    pub fn clear_changed(&mut self) {
        for node in &mut self.nodes {
            node.changed = false;
        }
    }

    /// Whether the entity with identity `id` is tagged changed.
    #[inline]
    pub fn is_changed_by_id(&self, id: EntityId) -> bool {
        self.by_id
            .get(&id)
            .is_some_and(|&slot| self.nodes[slot].changed)
    }

    /// Identities of all currently tagged entities, in iteration order.
    pub fn changed_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.changed)
            .map(|node| node.id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SceneStore for SceneWorld {
    type Handle = usize;

    #[inline]
    fn scene_entity(&self, index: usize) -> Option<usize> {
        (index < self.nodes.len()).then_some(index)
    }

    #[inline]
    fn identity(&self, handle: usize) -> Option<EntityId> {
        self.nodes.get(handle).map(|node| node.id)
    }

    #[inline]
    fn parent(&self, handle: usize) -> EntityId {
        self.nodes[handle].parent
    }

    #[inline]
    fn is_changed(&self, handle: usize) -> bool {
        self.nodes[handle].changed
    }

    #[inline]
    fn set_changed(&mut self, handle: usize) {
        self.nodes[handle].changed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagate;

    fn id(raw: i64) -> EntityId {
        EntityId::new(raw)
    }

    #[test]
    fn spawn_order_is_iteration_order() {
        let mut world = SceneWorld::new();
        world.spawn(id(10), EntityId::NONE);
        world.spawn(id(20), id(10));
        world.spawn(id(30), id(10));

        let mut seen = Vec::new();
        let mut index = 0;
        while let Some(handle) = world.scene_entity(index) {
            seen.push(world.identity(handle).unwrap().raw());
            index += 1;
        }
        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn mark_changed_unknown_id_is_rejected() {
        let mut world = SceneWorld::new();
        world.spawn(id(1), EntityId::NONE);
        assert!(world.mark_changed(id(1)));
        assert!(!world.mark_changed(id(2)));
    }

    #[test]
    fn clear_changed_resets_every_tag() {
        let mut world = SceneWorld::new();
        world.spawn(id(1), EntityId::NONE);
        world.spawn(id(2), id(1));
        world.mark_changed(id(1));
        propagate(&mut world).unwrap();
        assert_eq!(world.changed_ids().count(), 2);

        world.clear_changed();
        assert_eq!(world.changed_ids().count(), 0);
    }

    #[test]
    fn propagation_never_clears_a_tag() {
        let mut world = SceneWorld::new();
        world.spawn(id(1), EntityId::NONE);
        world.spawn(id(2), id(1));
        world.mark_changed(id(2));

        // 2 has no changed ancestor; its direct tag must survive the pass.
        propagate(&mut world).unwrap();
        assert!(world.is_changed_by_id(id(2)));
        assert!(!world.is_changed_by_id(id(1)));
    }

    #[test]
    fn set_changed_is_idempotent() {
        let mut world = SceneWorld::new();
        world.spawn(id(5), EntityId::NONE);
        world.set_changed(0);
        world.set_changed(0);
        assert!(world.is_changed_by_id(id(5)));
        assert_eq!(world.changed_ids().count(), 1);
    }
}
