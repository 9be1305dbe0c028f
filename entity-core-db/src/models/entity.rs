use super::entity_key::EntityKey;

/// Trait for entities: objects with a stable identity distinct from their attribute values
pub trait Entity {
    /// The primary-key type
    type Key: EntityKey;

    /// Returns the primary key of the entity
    fn id(&self) -> &Self::Key;

    /// Returns true when the entity has not been given a key by the store yet
    fn is_transient(&self) -> bool {
        self.id().is_unassigned()
    }

    /// Compares identity, not attribute values.
    ///
    /// Two entities are the same when both carry an assigned key and the keys
    /// are equal. A transient entity is never the same as anything else.
    fn same_identity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        !self.is_transient() && !other.is_transient() && self.id() == other.id()
    }
}
