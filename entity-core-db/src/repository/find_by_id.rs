use async_trait::async_trait;
use sqlx::Database;

use crate::models::entity::Entity;

/// Generic repository trait for finding entities by their primary key
///
/// Returns an Option to handle cases where the entity might not exist.
/// Soft-deleted entities are reported as missing.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type; its `Key` is the lookup type
///
/// # Example
/// ```ignore
/// impl FindById<Postgres, WidgetModel> for WidgetRepositoryImpl {
///     async fn find_by_id(&self, id: &i32) -> Result<Option<WidgetModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<DB: Database, T: Entity>: Send + Sync {
    /// Find an entity by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(&self, id: &T::Key) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
