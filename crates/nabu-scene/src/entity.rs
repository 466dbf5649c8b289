use core::fmt;

/// Opaque, process-unique entity identifier.
///
/// Identifiers are assigned and owned by the surrounding entity store; this
/// crate only reads and compares them. The raw value `0` is reserved as the
/// [`NONE`](Self::NONE) sentinel, so stores must hand out non-zero ids.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub i64);

impl EntityId {
    /// Sentinel meaning "no entity". Used as the parent of root entities.
    pub const NONE: EntityId = EntityId(0);

    #[inline]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Returns `true` for the [`NONE`](Self::NONE) sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "entity(none)")
        } else {
            write!(f, "entity({})", self.0)
        }
    }
}
