use entity_core_api::EntityResult;
use serde::{Deserialize, Serialize};

use crate::models::audit::CreationAudit;
use crate::models::entity_key::{assign_key, EntityKey};

/// Embeddable base for entities that only track their creation.
///
/// `CreationAuditedEntity` without a parameter uses the conventional `i32` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationAuditedEntity<K = i32> {
    id: K,
    #[serde(flatten)]
    creation: CreationAudit,
}

impl<K: EntityKey> CreationAuditedEntity<K> {
    pub fn new(id: K) -> Self {
        Self {
            id,
            creation: CreationAudit::default(),
        }
    }

    /// A base whose key is still unassigned
    pub fn transient() -> Self {
        Self::new(K::default())
    }

    pub(crate) fn from_parts(id: K, creation: CreationAudit) -> Self {
        Self { id, creation }
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
}
