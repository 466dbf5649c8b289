use crate::EntityId;

/// Read/write surface of an entity store, as seen by the propagation pass.
///
/// The store owns entity lifetimes, component data, and iteration order; this
/// trait exposes only what propagation needs: a positional cursor over the
/// entities that carry a scene-link component, sibling lookups on the yielded
/// handles, and the single narrow mutation (`set_changed`).
///
/// # Iteration order precondition
///
/// `scene_entity` must yield entities in a **topological order** with respect
/// to the parent relation restricted to the entities visited in one pass: if
/// a non-root entity at position `i` has its parent in the same pass, the
/// parent must appear at some position `j < i`. Stores that iterate in
/// insertion order satisfy this whenever parents are created before their
/// children. Violations are not errors the pass can detect with certainty —
/// they silently under-propagate (see [`propagate`](crate::propagate)).
pub trait SceneStore {
    /// Opaque per-entity handle, valid for sibling lookups on `self`.
    type Handle: Copy;

    /// Returns the handle at `index` in the store's iteration order, or
    /// `None` once `index` is past the last scene-linked entity.
    ///
    /// The cursor is restartable: calling with `index = 0` begins a fresh
    /// pass over the same sequence.
    fn scene_entity(&self, index: usize) -> Option<Self::Handle>;

    /// The entity's externally assigned identifier, if it has one.
    ///
    /// A scene-linked entity without an identity is malformed; the
    /// propagation pass aborts on it rather than skip it.
    fn identity(&self, handle: Self::Handle) -> Option<EntityId>;

    /// The entity's parent identifier; [`EntityId::NONE`] for roots.
    ///
    /// Parents are weak references: nothing guarantees the identifier still
    /// resolves to a live entity, and the pass never dereferences it beyond
    /// set membership.
    fn parent(&self, handle: Self::Handle) -> EntityId;

    /// Whether the entity's changed tag is currently set.
    fn is_changed(&self, handle: Self::Handle) -> bool;

    /// Sets the entity's changed tag. Idempotent; never clears.
    fn set_changed(&mut self, handle: Self::Handle);
}
