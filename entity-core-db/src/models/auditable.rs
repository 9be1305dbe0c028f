use chrono::{DateTime, Utc};
use entity_core_api::UserId;

use super::audit::{CreationAudit, DeletionAudit, ModificationAudit};
use super::entity::Entity;

/// Trait for entities whose creation time and creator are tracked
pub trait CreationAudited: Entity {
    fn creation_audit(&self) -> &CreationAudit;

    /// Mutable access for the auditor; application code should not write these fields
    fn creation_audit_mut(&mut self) -> &mut CreationAudit;

    fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.creation_audit().creation_time
    }

    fn creator_user_id(&self) -> Option<UserId> {
        self.creation_audit().creator_user_id
    }
}

/// Trait for entities whose last modification time and modifier are tracked
pub trait ModificationAudited: Entity {
    fn modification_audit(&self) -> &ModificationAudit;

    /// Mutable access for the auditor; application code should not write these fields
    fn modification_audit_mut(&mut self) -> &mut ModificationAudit;

    fn last_modification_time(&self) -> Option<DateTime<Utc>> {
        self.modification_audit().last_modification_time
    }

    fn last_modifier_user_id(&self) -> Option<UserId> {
        self.modification_audit().last_modifier_user_id
    }
}

/// Entities carrying both creation and modification audit fields
pub trait Audited: CreationAudited + ModificationAudited {}

impl<T: CreationAudited + ModificationAudited> Audited for T {}

/// Trait for entities that are flagged as deleted instead of being removed
pub trait SoftDelete: Entity {
    fn deletion_audit(&self) -> &DeletionAudit;

    fn deletion_audit_mut(&mut self) -> &mut DeletionAudit;

    fn is_deleted(&self) -> bool {
        self.deletion_audit().is_deleted
    }
}

/// Audited entities that are also soft-deletable
pub trait FullAudited: Audited + SoftDelete {}

impl<T: Audited + SoftDelete> FullAudited for T {}
