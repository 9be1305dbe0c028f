use async_trait::async_trait;
use sqlx::Database;

use crate::models::entity::Entity;

/// Generic repository trait for deleting multiple entities in a batch
///
/// All deletes are performed within a single transaction for atomicity.
/// For soft-deletable entities implementations flag the rows through
/// [`EntityAuditor::stamp_deletion`](crate::auditing::EntityAuditor::stamp_deletion)
/// instead of removing them.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type whose keys are deleted
#[async_trait]
pub trait DeleteBatch<DB: Database, T: Entity>: Send + Sync {
    /// Delete multiple items by their keys in a single transaction
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items deleted; missing or already deleted keys do not count
    /// * `Err` - An error if the transaction could not be executed
    async fn delete_batch(&self, ids: &[T::Key]) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
