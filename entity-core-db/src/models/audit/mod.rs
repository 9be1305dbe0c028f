pub mod creation_audit;
pub mod deletion_audit;
pub mod modification_audit;

pub use creation_audit::*;
pub use deletion_audit::*;
pub use modification_audit::*;
