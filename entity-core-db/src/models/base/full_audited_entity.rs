use entity_core_api::EntityResult;
use serde::{Deserialize, Serialize};

use crate::models::audit::{CreationAudit, DeletionAudit, ModificationAudit};
use crate::models::entity_key::{assign_key, EntityKey};

/// Embeddable base for audited entities that are soft-deleted.
///
/// Same shape as [`AuditedEntity`](super::AuditedEntity) plus the deletion
/// fields; the key defaults to `i32`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullAuditedEntity<K = i32> {
    id: K,
    #[serde(flatten)]
    creation: CreationAudit,
    #[serde(flatten)]
    modification: ModificationAudit,
    #[serde(flatten)]
    deletion: DeletionAudit,
}

impl<K: EntityKey> FullAuditedEntity<K> {
    pub fn new(id: K) -> Self {
        Self {
            id,
            creation: CreationAudit::default(),
            modification: ModificationAudit::default(),
            deletion: DeletionAudit::default(),
        }
    }

    pub fn transient() -> Self {
        Self::new(K::default())
    }

    pub(crate) fn from_parts(
        id: K,
        creation: CreationAudit,
        modification: ModificationAudit,
        deletion: DeletionAudit,
    ) -> Self {
        Self {
            id,
            creation,
            modification,
            deletion,
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn assign_id(&mut self, id: K) -> EntityResult<()> {
        assign_key(&mut self.id, id)
    }

    pub fn creation(&self) -> &CreationAudit {
        &self.creation
    }

    pub fn creation_mut(&mut self) -> &mut CreationAudit {
        &mut self.creation
    }

    pub fn modification(&self) -> &ModificationAudit {
        &self.modification
    }

    pub fn modification_mut(&mut self) -> &mut ModificationAudit {
        &mut self.modification
    }

    pub fn deletion(&self) -> &DeletionAudit {
        &self.deletion
    }

    pub fn deletion_mut(&mut self) -> &mut DeletionAudit {
        &mut self.deletion
    }
}
