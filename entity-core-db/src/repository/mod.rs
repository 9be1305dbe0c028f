pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod find_by_id;
pub mod load;
pub mod load_batch;
pub mod load_page;
pub mod pagination;
pub mod update_batch;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use create_batch::*;
pub use delete_batch::*;
pub use exist_by_ids::*;
pub use find_by_id::*;
pub use load::*;
pub use load_batch::*;
pub use load_page::*;
pub use pagination::*;
pub use update_batch::*;
