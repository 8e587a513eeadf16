use crate::user_store::UserStore;
use crate::{DbError, Result as DbResult};

use oc_core::{CoreError, ErrorLocation, UserAccount};

use std::panic::Location;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// `UserStore` backed by the backend's SQLite database.
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_id(&self, id: &str) -> DbResult<Option<UserAccount>> {
        let row = sqlx::query("SELECT id, name, role, active, permissions FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_account).transpose()
    }
}

#[track_caller]
fn row_to_account(row: SqliteRow) -> DbResult<UserAccount> {
    let role: String = row.try_get("role")?;
    let role = role.parse().map_err(|e: CoreError| DbError::Decode {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // The permissions column is JSON text. Text that is not valid JSON is
    // passed through as a raw string value so the permission evaluator
    // reports the record as corrupt, instead of the store guessing at a
    // repair.
    let permissions = match row.try_get::<Option<String>, _>("permissions")? {
        None => Value::Null,
        Some(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
    };

    Ok(UserAccount {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        role,
        active: row.try_get("active")?,
        permissions,
    })
}
