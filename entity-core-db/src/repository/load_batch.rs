use async_trait::async_trait;
use sqlx::Database;

use crate::models::entity::Entity;

/// Generic repository trait for loading multiple entities by their keys
///
/// Returns items in the same order as the provided keys.
/// Missing items are represented as None in the result.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type
#[async_trait]
pub trait LoadBatch<DB: Database, T: Entity>: Send + Sync {
    /// Load multiple entities by their primary keys
    ///
    /// # Returns
    /// * `Ok(Vec<Option<T>>)` - A vector of optional entities in the same order as the provided keys
    ///   - `Some(T)` for entities that exist
    ///   - `None` for entities that do not exist
    /// * `Err` - An error if the query could not be executed
    async fn load_batch(&self, ids: &[T::Key]) -> Result<Vec<Option<T>>, Box<dyn std::error::Error + Send + Sync>>;
}
