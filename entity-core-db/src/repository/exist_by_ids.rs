use async_trait::async_trait;
use sqlx::Database;

use crate::models::entity::Entity;

/// Generic repository trait for checking existence of multiple entities by their keys
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type whose key is checked
#[async_trait]
pub trait ExistByIds<DB: Database, T: Entity>: Send + Sync {
    /// Check existence of multiple entities by their primary keys
    ///
    /// # Returns
    /// * `Ok(Vec<(T::Key, bool)>)` - Each key paired with its existence status, in input order
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_ids(&self, ids: &[T::Key]) -> Result<Vec<(T::Key, bool)>, Box<dyn std::error::Error + Send + Sync>>;
}
