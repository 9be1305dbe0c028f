use chrono::{DateTime, Utc};
use entity_core_api::UserId;
use serde::{Deserialize, Serialize};

/// # Documentation
/// - Soft-deletion metadata.
/// - A deleted row stays in storage with `is_deleted` set; queries are expected to filter it.
/// - `deletion_time` and `deleter_user_id` are only meaningful while `is_deleted` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DeletionAudit {
    pub is_deleted: bool,
    pub deletion_time: Option<DateTime<Utc>>,
    pub deleter_user_id: Option<UserId>,
}
