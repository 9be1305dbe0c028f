use async_trait::async_trait;
use sqlx::Database;

use crate::models::auditable::Audited;

/// Generic repository trait for creating multiple audited entities in a batch
///
/// All creates are performed within a single transaction for atomicity.
/// Implementations assign keys to transient items and stamp their creation
/// audit (see [`EntityAuditor::stamp_creation`](crate::auditing::EntityAuditor::stamp_creation))
/// before writing. Returns saved items with those fields populated.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The audited entity type
///
/// # Example
/// ```ignore
/// impl CreateBatch<Postgres, WidgetModel> for WidgetRepositoryImpl {
///     async fn create_batch(&self, items: Vec<WidgetModel>) -> Result<Vec<WidgetModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<DB: Database, T: Audited>: Send + Sync {
    /// Save multiple new items in a single transaction
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The created entities with key and creation audit populated
    /// * `Err` - An error if the transaction could not be executed
    async fn create_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
