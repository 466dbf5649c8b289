//! Scene-link components and single-pass change propagation.
//!
//! A scene is a forest of entities linked by parent identifiers. The host
//! marks some entities changed each tick; [`propagate`] then tags every
//! descendant of a changed entity in one linear scan over the store,
//! relying on the store's topological iteration order instead of building
//! an explicit tree.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entity`] | `EntityId` and the `NONE` root sentinel |
//! | [`store`] | `SceneStore`, the narrow store boundary the pass consumes |
//! | [`change_set`] | `ChangeSet`, the pass-local set of changed ids |
//! | [`propagate`] | the propagation pass and `MalformedEntity` |
//! | [`world`] | `SceneWorld`, the in-memory reference store |
//!
//! # Quick start
//!
//! ```rust
//! use nabu_scene::{propagate, EntityId, SceneWorld};
//!
//! let mut world = SceneWorld::new();
//! world.spawn(EntityId::new(1), EntityId::NONE);
//! world.spawn(EntityId::new(2), EntityId::new(1));
//! world.mark_changed(EntityId::new(1));
//!
//! propagate(&mut world).unwrap();
//! assert!(world.is_changed_by_id(EntityId::new(2)));
//! ```

pub mod change_set;
pub mod entity;
pub mod propagate;
pub mod store;
pub mod world;

pub use change_set::ChangeSet;
pub use entity::EntityId;
pub use propagate::{propagate, MalformedEntity};
pub use store::SceneStore;
pub use world::SceneWorld;
