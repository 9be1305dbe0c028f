//! In-memory repository used to exercise the repository traits.

use async_trait::async_trait;
use entity_core_api::{EntityError, FixedActor, ManualClock};
use sqlx::Postgres;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::auditing::EntityAuditor;
use crate::models::Entity;
use crate::repository::{
    CreateBatch, DeleteBatch, ExistByIds, FindById, Load, LoadBatch, LoadPage, Page, PageRequest,
    UpdateBatch,
};
use crate::test_utils::{Gadget, StoredEntity, Widget};

pub struct InMemoryRepository<E: StoredEntity> {
    pub rows: Mutex<BTreeMap<i32, E>>,
    pub auditor: EntityAuditor<Arc<ManualClock>, FixedActor>,
    next_id: Mutex<i32>,
}

impl<E: StoredEntity> InMemoryRepository<E> {
    pub fn new(auditor: EntityAuditor<Arc<ManualClock>, FixedActor>) -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            auditor,
            next_id: Mutex::new(0),
        }
    }
}

#[async_trait]
impl<E: StoredEntity> FindById<Postgres, E> for InMemoryRepository<E> {
    async fn find_by_id(&self, id: &i32) -> Result<Option<E>, Box<dyn Error + Send + Sync>> {
        let rows = self.rows.lock().await;
        Ok(rows.get(id).filter(|e| !e.is_soft_deleted()).cloned())
    }
}

#[async_trait]
impl<E: StoredEntity> Load<Postgres, E> for InMemoryRepository<E> {
    async fn load(&self, id: &i32) -> Result<E, Box<dyn Error + Send + Sync>> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| EntityError::NotFound(format!("entity {id}")).into())
    }
}

#[async_trait]
impl<E: StoredEntity> LoadBatch<Postgres, E> for InMemoryRepository<E> {
    async fn load_batch(&self, ids: &[i32]) -> Result<Vec<Option<E>>, Box<dyn Error + Send + Sync>> {
        let rows = self.rows.lock().await;
        Ok(ids
            .iter()
            .map(|id| rows.get(id).filter(|e| !e.is_soft_deleted()).cloned())
            .collect())
    }
}

#[async_trait]
impl<E: StoredEntity> ExistByIds<Postgres, E> for InMemoryRepository<E> {
    async fn exist_by_ids(&self, ids: &[i32]) -> Result<Vec<(i32, bool)>, Box<dyn Error + Send + Sync>> {
        let rows = self.rows.lock().await;
        Ok(ids
            .iter()
            .map(|id| (*id, rows.get(id).is_some_and(|e| !e.is_soft_deleted())))
            .collect())
    }
}

#[async_trait]
impl<E: StoredEntity> CreateBatch<Postgres, E> for InMemoryRepository<E> {
    async fn create_batch(&self, items: Vec<E>) -> Result<Vec<E>, Box<dyn Error + Send + Sync>> {
        let mut rows = self.rows.lock().await;
        let mut next_id = self.next_id.lock().await;
        let mut last_id = *next_id;

        let mut saved: Vec<E> = Vec::with_capacity(items.len());
        for mut item in items {
            if item.is_transient() {
                last_id += 1;
                item.assign_id(last_id)?;
            } else {
                last_id = last_id.max(*item.id());
            }
            if rows.contains_key(item.id()) || saved.iter().any(|s| s.id() == item.id()) {
                return Err(EntityError::ValidationError(format!("duplicate key {}", item.id())).into());
            }
            self.auditor.stamp_creation(&mut item);
            saved.push(item);
        }

        *next_id = last_id;
        for item in &saved {
            rows.insert(*item.id(), item.clone());
        }
        Ok(saved)
    }
}

#[async_trait]
impl<E: StoredEntity> UpdateBatch<Postgres, E> for InMemoryRepository<E> {
    async fn update_batch(&self, items: Vec<E>) -> Result<Vec<E>, Box<dyn Error + Send + Sync>> {
        let mut rows = self.rows.lock().await;

        let mut updated = Vec::with_capacity(items.len());
        for mut item in items {
            let stored = rows
                .get(item.id())
                .filter(|stored| !stored.is_soft_deleted())
                .ok_or_else(|| EntityError::NotFound(format!("entity {}", item.id())))?;
            // Audit fields come from the stored row, not from the caller.
            *item.creation_audit_mut() = stored.creation_audit().clone();
            *item.modification_audit_mut() = stored.modification_audit().clone();
            item.keep_deletion_state(stored);
            self.auditor.stamp_modification(&mut item)?;
            updated.push(item);
        }

        for item in &updated {
            rows.insert(*item.id(), item.clone());
        }
        Ok(updated)
    }
}

#[async_trait]
impl DeleteBatch<Postgres, Widget> for InMemoryRepository<Widget> {
    async fn delete_batch(&self, ids: &[i32]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut rows = self.rows.lock().await;
        let mut deleted = 0;
        for id in ids {
            if rows.remove(id).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

#[async_trait]
impl DeleteBatch<Postgres, Gadget> for InMemoryRepository<Gadget> {
    async fn delete_batch(&self, ids: &[i32]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut rows = self.rows.lock().await;

        let mut stamped: Vec<Gadget> = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(stored) = rows.get(id) else {
                continue;
            };
            if stored.is_soft_deleted() || stamped.iter().any(|g| g.id() == id) {
                continue;
            }
            let mut gadget = stored.clone();
            self.auditor.stamp_deletion(&mut gadget)?;
            stamped.push(gadget);
        }

        let deleted = stamped.len();
        for gadget in stamped {
            rows.insert(*gadget.id(), gadget);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl<E: StoredEntity> LoadPage<Postgres, E> for InMemoryRepository<E> {
    async fn load_page(&self, page: PageRequest) -> Result<Page<E>, Box<dyn Error + Send + Sync>> {
        let rows = self.rows.lock().await;
        let live: Vec<&E> = rows.values().filter(|e| !e.is_soft_deleted()).collect();
        let items = live
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .map(|e| (*e).clone())
            .collect();
        Ok(Page::new(items, live.len(), page.limit, page.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreationAudited, ModificationAudited, SoftDelete};
    use crate::test_utils::instant;
    use chrono::Duration;
    use entity_core_api::{AuditingConfig, ClockRegressionPolicy};

    fn repository<E: StoredEntity>(config: AuditingConfig) -> InMemoryRepository<E> {
        let clock = Arc::new(ManualClock::new(instant(8, 0)));
        InMemoryRepository::new(EntityAuditor::new(clock, FixedActor(5), config))
    }

    /// Accepts any integer-keyed entity, the way application services do
    fn keys<E: Entity<Key = i32>>(entities: &[E]) -> Vec<i32> {
        entities.iter().map(|e| *e.id()).collect()
    }

    #[tokio::test]
    async fn test_create_batch_assigns_keys_and_stamps() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Widget>(AuditingConfig::default());

        let saved = repo
            .create_batch(vec![Widget::transient("gear"), Widget::transient("cog")])
            .await?;

        assert_eq!(keys(&saved), vec![1, 2]);
        for widget in &saved {
            assert!(!widget.is_transient());
            assert_eq!(widget.creation_time(), Some(instant(8, 0)));
            assert_eq!(widget.creator_user_id(), Some(5));
            assert_eq!(widget.last_modification_time(), None);
        }

        let loaded = repo.load(&2).await?;
        assert_eq!(loaded.name, "cog");
        assert!(loaded.same_identity(&saved[1]));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_batch_keeps_explicit_keys() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Widget>(AuditingConfig::default());

        let saved = repo.create_batch(vec![Widget::new(40, "spring")]).await?;
        assert_eq!(keys(&saved), vec![40]);

        let err = repo.create_batch(vec![Widget::new(40, "again")]).await.unwrap_err();
        assert!(err.to_string().contains("duplicate key 40"));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_batch_stamps_modification_only() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Widget>(AuditingConfig::default());
        let mut widget = repo.create_batch(vec![Widget::transient("gear")]).await?.remove(0);

        repo.auditor.clock().advance(Duration::minutes(15));
        widget.name = "sprocket".to_string();
        widget.creation_audit_mut().creator_user_id = Some(999);
        let updated = repo.update_batch(vec![widget]).await?.remove(0);

        assert_eq!(updated.name, "sprocket");
        assert_eq!(updated.creation_time(), Some(instant(8, 0)));
        assert_eq!(updated.creator_user_id(), Some(5));
        assert_eq!(updated.last_modification_time(), Some(instant(8, 15)));
        assert_eq!(updated.last_modifier_user_id(), Some(5));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_batch_aborts_on_rejected_regression() -> Result<(), Box<dyn Error + Send + Sync>> {
        let config = AuditingConfig {
            clock_regression: ClockRegressionPolicy::Reject,
            ..AuditingConfig::default()
        };
        let repo = repository::<Widget>(config);
        let widget = repo.create_batch(vec![Widget::transient("gear")]).await?.remove(0);
        repo.update_batch(vec![widget.clone()]).await?;

        repo.auditor.clock().set(instant(7, 0));
        let mut renamed = widget.clone();
        renamed.name = "late".to_string();
        assert!(repo.update_batch(vec![renamed]).await.is_err());

        let stored = repo.load(widget.id()).await?;
        assert_eq!(stored.name, "gear");
        assert_eq!(stored.last_modification_time(), Some(instant(8, 0)));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_of_missing_entity_is_not_found() {
        let repo = repository::<Widget>(AuditingConfig::default());
        let err = repo.update_batch(vec![Widget::new(3, "ghost")]).await.unwrap_err();
        assert_eq!(err.to_string(), "Not found: entity 3");
    }

    #[tokio::test]
    async fn test_hard_delete_and_lookups() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Widget>(AuditingConfig::default());
        repo.create_batch(vec![
            Widget::transient("a"),
            Widget::transient("b"),
            Widget::transient("c"),
        ])
        .await?;

        assert_eq!(repo.delete_batch(&[2, 9]).await?, 1);

        assert!(repo.find_by_id(&2).await?.is_none());
        assert!(repo.load(&2).await.is_err());
        assert_eq!(
            repo.exist_by_ids(&[1, 2, 3]).await?,
            vec![(1, true), (2, false), (3, true)]
        );
        let batch = repo.load_batch(&[3, 2, 1]).await?;
        let names: Vec<Option<String>> = batch.into_iter().map(|w| w.map(|w| w.name)).collect();
        assert_eq!(names, vec![Some("c".to_string()), None, Some("a".to_string())]);
        Ok(())
    }

    #[tokio::test]
    async fn test_soft_delete_hides_rows_but_keeps_them() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Gadget>(AuditingConfig::default());
        repo.create_batch(vec![Gadget::new(1, "lamp"), Gadget::new(2, "fan")]).await?;

        repo.auditor.clock().advance(Duration::hours(1));
        assert_eq!(repo.delete_batch(&[1]).await?, 1);
        assert_eq!(repo.delete_batch(&[1]).await?, 0);

        assert!(repo.find_by_id(&1).await?.is_none());
        assert_eq!(repo.exist_by_ids(&[1, 2]).await?, vec![(1, false), (2, true)]);

        let rows = repo.rows.lock().await;
        let lamp = rows.get(&1).expect("soft-deleted row is kept");
        assert!(lamp.is_deleted());
        assert_eq!(lamp.deletion_audit().deletion_time, Some(instant(9, 0)));
        assert_eq!(lamp.deletion_audit().deleter_user_id, Some(5));
        assert_eq!(lamp.last_modification_time(), Some(instant(9, 0)));
        Ok(())
    }

    #[tokio::test]
    async fn test_load_page_skips_deleted() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Gadget>(AuditingConfig::default());
        let gadgets: Vec<Gadget> = (1..=5).map(|i| Gadget::new(i, "g")).collect();
        repo.create_batch(gadgets).await?;
        repo.delete_batch(&[2]).await?;

        let first = repo.load_page(PageRequest::new(2, 0)).await?;
        assert_eq!(keys(&first.items), vec![1, 3]);
        assert_eq!(first.total, 4);
        assert!(first.has_more());

        let second = repo.load_page(PageRequest::new(2, 0).next()).await?;
        assert_eq!(keys(&second.items), vec![4, 5]);
        assert!(second.is_last_page());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_batch_rejects_repeated_key_in_batch() {
        let repo = repository::<Widget>(AuditingConfig::default());

        let err = repo
            .create_batch(vec![Widget::new(7, "a"), Widget::new(7, "b")])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Validation error: duplicate key 7");
        assert!(repo.rows.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_generated_keys_follow_explicit_ones() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Widget>(AuditingConfig::default());
        repo.create_batch(vec![Widget::new(1, "first")]).await?;

        let saved = repo.create_batch(vec![Widget::transient("second")]).await?;
        assert_eq!(keys(&saved), vec![2]);

        repo.create_batch(vec![Widget::new(10, "tenth")]).await?;
        let saved = repo.create_batch(vec![Widget::transient("eleventh")]).await?;
        assert_eq!(keys(&saved), vec![11]);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_of_soft_deleted_entity_is_not_found() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Gadget>(AuditingConfig::default());
        repo.create_batch(vec![Gadget::new(1, "lamp")]).await?;
        let stale = repo.load(&1).await?;
        assert_eq!(repo.delete_batch(&[1]).await?, 1);

        let err = repo.update_batch(vec![stale]).await.unwrap_err();
        assert_eq!(err.to_string(), "Not found: entity 1");

        assert!(repo.find_by_id(&1).await?.is_none());
        assert!(repo.rows.lock().await.get(&1).is_some_and(|g| g.is_deleted()));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_cannot_set_deletion_flag() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = repository::<Gadget>(AuditingConfig::default());
        let mut gadget = repo.create_batch(vec![Gadget::new(1, "lamp")]).await?.remove(0);

        gadget.deletion_audit_mut().is_deleted = true;
        let updated = repo.update_batch(vec![gadget]).await?.remove(0);

        assert!(!updated.is_deleted());
        assert!(repo.find_by_id(&1).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_soft_delete_batch_changes_nothing() -> Result<(), Box<dyn Error + Send + Sync>> {
        let config = AuditingConfig {
            clock_regression: ClockRegressionPolicy::Reject,
            ..AuditingConfig::default()
        };
        let repo = repository::<Gadget>(config);
        repo.create_batch(vec![Gadget::new(1, "lamp"), Gadget::new(2, "fan")]).await?;

        repo.auditor.clock().set(instant(10, 0));
        let fan = repo.load(&2).await?;
        repo.update_batch(vec![fan]).await?;

        repo.auditor.clock().set(instant(9, 0));
        assert!(repo.delete_batch(&[1, 2]).await.is_err());

        let lamp = repo.load(&1).await?;
        assert!(!lamp.is_deleted());
        assert_eq!(lamp.last_modification_time(), None);
        assert!(repo.find_by_id(&2).await?.is_some());
        Ok(())
    }
}
