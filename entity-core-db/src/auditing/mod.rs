pub mod entity_auditor;
pub mod entity_change;

pub use entity_auditor::*;
pub use entity_change::*;
