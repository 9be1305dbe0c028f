use async_trait::async_trait;
use sqlx::Database;

use crate::models::auditable::Audited;

/// Generic repository trait for updating multiple audited entities in a batch
///
/// All updates are performed within a single transaction for atomicity.
/// Implementations stamp the modification audit of every item before
/// writing; a clock regression rejected by the auditor aborts the batch.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The audited entity type
#[async_trait]
pub trait UpdateBatch<DB: Database, T: Audited>: Send + Sync {
    /// Update multiple items in a single transaction
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The updated entities as stored
    /// * `Err` - An error if the transaction could not be executed
    async fn update_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
