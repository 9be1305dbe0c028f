use entity_core_api::EntityResult;
use serde::{Deserialize, Serialize};

use crate::models::audit::{CreationAudit, ModificationAudit};
use crate::models::entity_key::{assign_key, EntityKey};

/// Embeddable base for entities whose creation and last modification are audited.
///
/// The key type defaults to `i32`, the key most applications use, so a plain
/// `AuditedEntity` is the integer-keyed base and `AuditedEntity<Uuid>` (or any
/// other [`EntityKey`]) the general form. Both name the same type family.
///
/// The base carries the key and the audit fields but is not an entity by
/// itself. Constructing it is allowed, since every concrete entity has to
/// build the base it embeds. What the base lacks is the entity capability: it
/// does not implement [`Entity`](crate::models::Entity), so a bare base is
/// rejected anywhere an entity is required (see the second example). A concrete
/// entity embeds it, adds its own fields, and declares conformance by
/// implementing [`Entity`](crate::models::Entity),
/// [`CreationAudited`](crate::models::CreationAudited) and
/// [`ModificationAudited`](crate::models::ModificationAudited) through the
/// embedded base. Audit fields are filled in by
/// [`EntityAuditor`](crate::auditing::EntityAuditor) when the entity is saved.
///
/// # Example
/// ```
/// use entity_core_db::models::{
///     AuditedEntity, CreationAudit, CreationAudited, Entity, ModificationAudit,
///     ModificationAudited,
/// };
///
/// struct Widget {
///     base: AuditedEntity,
///     name: String,
/// }
///
/// impl Entity for Widget {
///     type Key = i32;
///
///     fn id(&self) -> &i32 {
///         self.base.id()
///     }
/// }
///
/// impl CreationAudited for Widget {
///     fn creation_audit(&self) -> &CreationAudit {
///         self.base.creation()
///     }
///
///     fn creation_audit_mut(&mut self) -> &mut CreationAudit {
///         self.base.creation_mut()
///     }
/// }
///
/// impl ModificationAudited for Widget {
///     fn modification_audit(&self) -> &ModificationAudit {
///         self.base.modification()
///     }
///
///     fn modification_audit_mut(&mut self) -> &mut ModificationAudit {
///         self.base.modification_mut()
///     }
/// }
///
/// fn key_of<E: Entity<Key = i32>>(entity: &E) -> i32 {
///     *entity.id()
/// }
///
/// let widget = Widget { base: AuditedEntity::new(7), name: "gear".to_string() };
/// assert_eq!(key_of(&widget), 7);
/// assert_eq!(widget.name, "gear");
/// assert!(widget.creation_time().is_none());
/// ```
///
/// The base alone constructs fine but is rejected wherever an entity is
/// required:
/// ```compile_fail
/// use entity_core_db::models::{AuditedEntity, Entity};
///
/// fn requires_entity<E: Entity>(_entity: &E) {}
///
/// let base: AuditedEntity = AuditedEntity::new(7);
/// requires_entity(&base);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedEntity<K = i32> {
    id: K,
    #[serde(flatten)]
    creation: CreationAudit,
    #[serde(flatten)]
    modification: ModificationAudit,
}

impl<K: EntityKey> AuditedEntity<K> {
    /// Builds the base for a concrete entity to embed. The result is not an
    /// [`Entity`](crate::models::Entity) until that entity wraps it.
    pub fn new(id: K) -> Self {
        Self {
            id,
            creation: CreationAudit::default(),
            modification: ModificationAudit::default(),
        }
    }

    /// A base whose key is still unassigned; the store assigns it on create
    pub fn transient() -> Self {
        Self::new(K::default())
    }

    pub(crate) fn from_parts(
        id: K,
        creation: CreationAudit,
        modification: ModificationAudit,
    ) -> Self {
        Self {
            id,
            creation,
            modification,
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    /// Assigns the key of a transient base.
    ///
    /// Fails with `EntityError::KeyAlreadyAssigned` once a key is set.
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
}
