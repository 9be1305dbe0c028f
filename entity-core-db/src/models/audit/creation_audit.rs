use chrono::{DateTime, Utc};
use entity_core_api::UserId;
use serde::{Deserialize, Serialize};

/// Creation metadata of an audited entity.
///
/// Both fields stay `None` until the entity is first saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CreationAudit {
    pub creation_time: Option<DateTime<Utc>>,
    pub creator_user_id: Option<UserId>,
}
