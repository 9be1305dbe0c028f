use chrono::{DateTime, Utc};
use entity_core_api::{
    ActorProvider, AuditingConfig, Clock, ClockRegressionPolicy, EntityError, EntityResult, UserId,
};
use tracing::{debug, warn};

use super::entity_change::EntityChange;
use crate::models::{Audited, CreationAudited, FullAudited, ModificationAudited};

/// Fills in the audit fields of entities as they are saved.
///
/// The auditor is the only writer of audit fields: the current instant comes
/// from the [`Clock`], the acting user from the [`ActorProvider`].
///
/// # Invariants
/// - Creation fields are written once and never overwritten.
/// - `last_modification_time` never moves backwards; what happens on a clock
///   regression is decided by [`ClockRegressionPolicy`].
/// - With auditing disabled every stamp leaves the entity untouched.
pub struct EntityAuditor<C: Clock, A: ActorProvider> {
    clock: C,
    actor: A,
    config: AuditingConfig,
}

impl<C: Clock, A: ActorProvider> EntityAuditor<C, A> {
    pub fn new(clock: C, actor: A, config: AuditingConfig) -> Self {
        Self {
            clock,
            actor,
            config,
        }
    }

    pub fn config(&self) -> &AuditingConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Stamps an entity for the given kind of save
    pub fn apply<E: Audited>(&self, entity: &mut E, change: EntityChange) -> EntityResult<()> {
        match change {
            EntityChange::Created => {
                self.stamp_creation(entity);
                Ok(())
            }
            EntityChange::Updated => self.stamp_modification(entity),
        }
    }

    /// Sets creation time and creator when they are still empty
    pub fn stamp_creation<E: CreationAudited>(&self, entity: &mut E) {
        if !self.config.enabled {
            return;
        }

        let now = self.clock.now();
        let user_id = self.actor.current_user_id();

        let audit = entity.creation_audit_mut();
        if audit.creation_time.is_none() {
            audit.creation_time = Some(now);
        }
        if audit.creator_user_id.is_none() {
            audit.creator_user_id = user_id;
        }

        debug!(
            entity_id = ?entity.id(),
            creator_user_id = ?entity.creator_user_id(),
            "Stamped creation audit"
        );
    }

    /// Sets last modification time and modifier.
    ///
    /// An anonymous modification clears the modifier.
    pub fn stamp_modification<E: ModificationAudited>(&self, entity: &mut E) -> EntityResult<()> {
        if !self.config.enabled {
            return Ok(());
        }

        let now = self.clock.now();
        let user_id = self.actor.current_user_id();
        self.stamp_modification_at(entity, now, user_id)
    }

    /// Flags a soft-deletable entity as deleted.
    ///
    /// The deletion also counts as a modification. Deleting an entity that is
    /// already deleted changes nothing.
    pub fn stamp_deletion<E: FullAudited>(&self, entity: &mut E) -> EntityResult<()> {
        if !self.config.enabled || entity.is_deleted() {
            return Ok(());
        }

        let now = self.clock.now();
        let user_id = self.actor.current_user_id();

        // Fails before the deletion flag is touched.
        self.stamp_modification_at(entity, now, user_id)?;

        let deletion = entity.deletion_audit_mut();
        deletion.is_deleted = true;
        deletion.deletion_time = Some(now);
        deletion.deleter_user_id = user_id;

        debug!(entity_id = ?entity.id(), deleter_user_id = ?user_id, "Stamped deletion audit");
        Ok(())
    }

    fn stamp_modification_at<E: ModificationAudited>(
        &self,
        entity: &mut E,
        now: DateTime<Utc>,
        user_id: Option<UserId>,
    ) -> EntityResult<()> {
        let stamped = match entity.last_modification_time() {
            Some(stored) if now < stored => match self.config.clock_regression {
                ClockRegressionPolicy::Clamp => {
                    warn!(
                        entity_id = ?entity.id(),
                        %stored,
                        attempted = %now,
                        "Clock moved backwards, keeping stored modification time"
                    );
                    stored
                }
                ClockRegressionPolicy::Reject => {
                    return Err(EntityError::ModificationTimeRegression {
                        stored,
                        attempted: now,
                    });
                }
            },
            _ => now,
        };

        let audit = entity.modification_audit_mut();
        audit.last_modification_time = Some(stamped);
        audit.last_modifier_user_id = user_id;

        debug!(
            entity_id = ?entity.id(),
            last_modifier_user_id = ?user_id,
            "Stamped modification audit"
        );
        Ok(())
    }
}
