use async_trait::async_trait;
use sqlx::Database;

use crate::models::entity::Entity;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for listing entities page by page, ordered by key
///
/// # Example
/// ```ignore
/// use entity_core_db::repository::pagination::PageRequest;
///
/// let page = repo.load_page(PageRequest::new(20, 0)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait LoadPage<DB: Database, T: Entity>: Send + Sync {
    /// Load one page of entities
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested slice and the total count
    /// * `Err` - An error if the query could not be executed
    async fn load_page(&self, page: PageRequest) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
