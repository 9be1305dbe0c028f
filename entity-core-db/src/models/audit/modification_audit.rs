use chrono::{DateTime, Utc};
use entity_core_api::UserId;
use serde::{Deserialize, Serialize};

/// Last-modification metadata of an audited entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ModificationAudit {
    /// Never moves backwards once set
    pub last_modification_time: Option<DateTime<Utc>>,
    /// `None` after an anonymous modification
    pub last_modifier_user_id: Option<UserId>,
}
