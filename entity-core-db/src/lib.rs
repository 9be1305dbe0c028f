pub mod auditing;
pub mod models;
pub mod persistence;
pub mod repository;

pub use auditing::*;
pub use models::*;
pub use persistence::PersistedLayout;
