pub mod audit;
pub mod auditable;
pub mod base;
pub mod entity;
pub mod entity_key;

// Re-exports
pub use audit::*;
pub use auditable::*;
pub use base::*;
pub use entity::*;
pub use entity_key::EntityKey;
