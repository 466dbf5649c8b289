use std::fmt;

use crate::{ChangeSet, EntityId, SceneStore};

/// A scene-linked entity with no identity component.
///
/// Raised by [`propagate`] when the store yields an entity that carries a
/// scene link but answers `None` for its identity. Skipping such an entity
/// would silently under-propagate to its descendants, so the pass aborts
/// instead. Store mutations applied before the abort are kept — they were
/// derived from well-formed entities and remain valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntity {
    /// Position in the store's iteration order at which the entity was found.
    pub position: usize,
    /// The entity's parent identifier, for diagnostics.
    pub parent: EntityId,
}

impl fmt::Display for MalformedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scene entity at position {} (parent {}) has no identity component",
            self.position, self.parent
        )
    }
}

impl std::error::Error for MalformedEntity {}

/// Propagates changed tags from parents to descendants in one linear pass.
///
/// Walks the store's scene-linked entities in cursor order. An entity whose
/// tag is already set seeds the pass-local [`ChangeSet`]; an entity whose
/// parent is in the set joins it and gets its tag written back — the only
/// mutation performed. Entities with no changed ancestor are untouched.
///
/// One pass suffices because of the store's topological-order precondition
/// (see [`SceneStore::scene_entity`]): by the time a child is visited, any
/// ancestor's changed state — pre-existing or discovered earlier in the same
/// pass — is already in the set. No fixpoint iteration, no adjacency lists.
///
/// Tags only ever transition false→true here. The write-back makes repeat
/// passes cheap: an already-tagged entity short-circuits at the seed step.
/// Clearing tags between ticks is the host's job.
///
/// In debug builds, entities visited before their parent are reported with
/// `log::warn!` after the pass. Release builds skip the bookkeeping.
pub fn propagate<S: SceneStore>(store: &mut S) -> Result<(), MalformedEntity> {
    let mut change_set = ChangeSet::new();
    #[cfg(debug_assertions)]
    let mut order_check = OrderCheck::default();

    let mut index = 0;
    while let Some(handle) = store.scene_entity(index) {
        let parent = store.parent(handle);
        let id = store.identity(handle).ok_or(MalformedEntity {
            position: index,
            parent,
        })?;
        let changed = store.is_changed(handle);
        log::trace!("visit {id} parent {parent} changed {changed}");
        #[cfg(debug_assertions)]
        order_check.visit(index, id, parent);

        if changed {
            change_set.insert(id);
        } else if change_set.contains(parent) {
            change_set.insert(id);
            store.set_changed(handle);
        }
        index += 1;
    }

    #[cfg(debug_assertions)]
    order_check.report();
    Ok(())
}

/// Debug-only detector for iteration orders that are not topological.
///
/// Records the first visit position of every identity; an entity whose
/// parent turns up at a later position violates the precondition. Only a
/// warning is emitted — a late parent is indistinguishable from a forest
/// where propagation legitimately had nothing to do.
#[cfg(debug_assertions)]
#[derive(Default)]
struct OrderCheck {
    first_seen: std::collections::HashMap<EntityId, usize>,
    pending: Vec<(usize, EntityId, EntityId)>,
}

#[cfg(debug_assertions)]
impl OrderCheck {
    fn visit(&mut self, position: usize, id: EntityId, parent: EntityId) {
        self.first_seen.entry(id).or_insert(position);
        if parent.is_some() && !self.first_seen.contains_key(&parent) {
            self.pending.push((position, id, parent));
        }
    }

    fn report(&self) {
        for &(position, id, parent) in &self.pending {
            if let Some(&parent_pos) = self.first_seen.get(&parent) {
                log::warn!(
                    "iteration order is not topological: {id} at position {position} \
                     precedes its parent {parent} at position {parent_pos}; \
                     propagation through this edge was skipped"
                );
            }
        }
    }
}
