use std::fmt::Debug;
use std::hash::Hash;

use entity_core_api::{EntityError, EntityResult};
use uuid::Uuid;

/// Trait for primary-key types.
///
/// The `Default` value of a key is its "unassigned" value: the key a transient
/// entity carries before the store hands out a real one.
pub trait EntityKey: Clone + Eq + Hash + Debug + Default + Send + Sync + 'static {
    /// Returns true while the key still holds the unassigned value
    fn is_unassigned(&self) -> bool {
        *self == Self::default()
    }
}

impl EntityKey for i32 {}

impl EntityKey for i64 {}

impl EntityKey for Uuid {}

impl EntityKey for String {}

/// Writes `id` into an unassigned key slot.
///
/// A key is immutable once assigned; a second assignment fails with
/// `EntityError::KeyAlreadyAssigned`.
pub(crate) fn assign_key<K: EntityKey>(slot: &mut K, id: K) -> EntityResult<()> {
    if !slot.is_unassigned() {
        return Err(EntityError::KeyAlreadyAssigned(format!("{slot:?}")));
    }
    if id.is_unassigned() {
        return Err(EntityError::ValidationError(format!(
            "Cannot assign the unassigned key value {id:?}"
        )));
    }
    *slot = id;
    Ok(())
}
