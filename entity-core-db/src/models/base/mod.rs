pub mod audited_entity;
pub mod creation_audited_entity;
pub mod full_audited_entity;

pub use audited_entity::*;
pub use creation_audited_entity::*;
pub use full_audited_entity::*;
