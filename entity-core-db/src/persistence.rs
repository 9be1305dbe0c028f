//! Persisted layout of the audited base types.
//!
//! Column names follow the field names of the audit values, so a row decoded
//! with `sqlx::FromRow` maps one-to-one onto the embedded base.

use crate::models::{AuditedEntity, CreationAuditedEntity, EntityKey, FullAuditedEntity};

pub const ID_COLUMN: &str = "id";

pub const CREATION_TIME_COLUMN: &str = "creation_time";
pub const CREATOR_USER_ID_COLUMN: &str = "creator_user_id";
pub const LAST_MODIFICATION_TIME_COLUMN: &str = "last_modification_time";
pub const LAST_MODIFIER_USER_ID_COLUMN: &str = "last_modifier_user_id";
pub const IS_DELETED_COLUMN: &str = "is_deleted";
pub const DELETION_TIME_COLUMN: &str = "deletion_time";
pub const DELETER_USER_ID_COLUMN: &str = "deleter_user_id";

/// Columns contributed by an embeddable base, key first
pub trait PersistedLayout {
    const COLUMNS: &'static [&'static str];

    /// Comma separated column list for SELECT and INSERT statements
    fn column_list() -> String {
        Self::COLUMNS.join(", ")
    }

    /// Postgres placeholders (`$1, $2, ...`) matching `COLUMNS`
    fn placeholders() -> String {
        (1..=Self::COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn insert_statement(table: &str) -> String {
        format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            Self::column_list(),
            Self::placeholders()
        )
    }
}

impl<K: EntityKey> PersistedLayout for CreationAuditedEntity<K> {
    const COLUMNS: &'static [&'static str] =
        &[ID_COLUMN, CREATION_TIME_COLUMN, CREATOR_USER_ID_COLUMN];
}

impl<K: EntityKey> PersistedLayout for AuditedEntity<K> {
    const COLUMNS: &'static [&'static str] = &[
        ID_COLUMN,
        CREATION_TIME_COLUMN,
        CREATOR_USER_ID_COLUMN,
        LAST_MODIFICATION_TIME_COLUMN,
        LAST_MODIFIER_USER_ID_COLUMN,
    ];
}

impl<K: EntityKey> PersistedLayout for FullAuditedEntity<K> {
    const COLUMNS: &'static [&'static str] = &[
        ID_COLUMN,
        CREATION_TIME_COLUMN,
        CREATOR_USER_ID_COLUMN,
        LAST_MODIFICATION_TIME_COLUMN,
        LAST_MODIFIER_USER_ID_COLUMN,
        IS_DELETED_COLUMN,
        DELETION_TIME_COLUMN,
        DELETER_USER_ID_COLUMN,
    ];
}

#[cfg(feature = "sqlx")]
pub use row::decode_row;

#[cfg(feature = "sqlx")]
mod row {
    use entity_core_api::{EntityError, EntityResult};
    use sqlx::postgres::{PgRow, Postgres};
    use sqlx::{Decode, FromRow, Row, Type};

    use super::ID_COLUMN;
    use crate::models::{
        AuditedEntity, CreationAudit, CreationAuditedEntity, DeletionAudit, EntityKey,
        FullAuditedEntity, ModificationAudit,
    };

    /// Decodes a row, reporting failures as [`EntityError::DatabaseError`]
    pub fn decode_row<'r, T: FromRow<'r, PgRow>>(row: &'r PgRow) -> EntityResult<T> {
        T::from_row(row).map_err(|e| EntityError::DatabaseError(e.to_string()))
    }

    impl<'r, K> FromRow<'r, PgRow> for CreationAuditedEntity<K>
    where
        K: EntityKey + Decode<'r, Postgres> + Type<Postgres>,
    {
        fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
            Ok(Self::from_parts(
                row.try_get(ID_COLUMN)?,
                CreationAudit::from_row(row)?,
            ))
        }
    }

    impl<'r, K> FromRow<'r, PgRow> for AuditedEntity<K>
    where
        K: EntityKey + Decode<'r, Postgres> + Type<Postgres>,
    {
        fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
            Ok(Self::from_parts(
                row.try_get(ID_COLUMN)?,
                CreationAudit::from_row(row)?,
                ModificationAudit::from_row(row)?,
            ))
        }
    }

    impl<'r, K> FromRow<'r, PgRow> for FullAuditedEntity<K>
    where
        K: EntityKey + Decode<'r, Postgres> + Type<Postgres>,
    {
        fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
            Ok(Self::from_parts(
                row.try_get(ID_COLUMN)?,
                CreationAudit::from_row(row)?,
                ModificationAudit::from_row(row)?,
                DeletionAudit::from_row(row)?,
            ))
        }
    }
}
