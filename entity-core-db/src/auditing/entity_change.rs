use serde::{Deserialize, Serialize};

/// Kind of save an audited entity goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityChange {
    Created,
    Updated,
}
