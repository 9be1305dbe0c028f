use async_trait::async_trait;
use sqlx::Database;

use crate::models::entity::Entity;

/// Generic repository trait for loading an entity that is expected to exist
///
/// Unlike [`FindById`](super::FindById), a missing entity is an error
/// (`EntityError::NotFound` boxed).
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type
#[async_trait]
pub trait Load<DB: Database, T: Entity>: Send + Sync {
    /// Load an entity by its primary key
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded entity
    /// * `Err` - An error if the entity could not be loaded
    async fn load(&self, id: &T::Key) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
