//! User profile repository implementation using SQLite
//!
//! Provides persistence for profiles keyed by the externally assigned user
//! identifier.

use std::sync::Arc;

use async_trait::async_trait;
use mylearn_core::user::ports::ProfileStore;
use mylearn_domain::{Result as DomainResult, Role, UserProfile, UserServiceError};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use uuid::Uuid;

use super::manager::{map_sql_error, DbConnection, DbManager};
use crate::errors::InfraError;

/// SQLite-backed implementation of `ProfileStore`
pub struct SqliteProfileStore {
    db: Arc<DbManager>,
}

impl SqliteProfileStore {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn get(&self, user_id: Uuid) -> DomainResult<Option<UserProfile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<UserProfile>> {
            let conn = db.get_connection()?;
            select_user_profile(&conn, user_id)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, profile: UserProfile) -> DomainResult<UserProfile> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<UserProfile> {
            let conn = db.get_connection()?;
            upsert_user_profile(&conn, &profile)
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to a UserProfile
fn map_user_profile_row(row: &Row<'_>) -> rusqlite::Result<UserProfile> {
    let user_id: String = row.get(0)?;
    let role: String = row.get(4)?;

    Ok(UserProfile {
        user_id: Uuid::parse_str(&user_id)
            .map_err(|err| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err)))?,
        full_name: row.get(1)?,
        bio: row.get(2)?,
        profile_picture_url: row.get(3)?,
        role: role
            .parse::<Role>()
            .map_err(|err| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(err)))?,
    })
}

/// Fetch a single profile by its identifier
fn select_user_profile(conn: &DbConnection, user_id: Uuid) -> DomainResult<Option<UserProfile>> {
    conn.query_row(
        "SELECT user_id, full_name, bio, profile_picture_url, role
         FROM user_profiles WHERE user_id = ?1",
        params![user_id.to_string()],
        map_user_profile_row,
    )
    .optional()
    .map_err(map_sql_error)
}

/// Insert or replace a profile and return the row as stored
fn upsert_user_profile(conn: &DbConnection, profile: &UserProfile) -> DomainResult<UserProfile> {
    conn.query_row(
        "INSERT INTO user_profiles (user_id, full_name, bio, profile_picture_url, role)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(user_id) DO UPDATE SET
            full_name = excluded.full_name,
            bio = excluded.bio,
            profile_picture_url = excluded.profile_picture_url,
            role = excluded.role
         RETURNING user_id, full_name, bio, profile_picture_url, role",
        params![
            profile.user_id.to_string(),
            &profile.full_name,
            &profile.bio,
            &profile.profile_picture_url,
            profile.role.as_str(),
        ],
        map_user_profile_row,
    )
    .map_err(map_sql_error)
}

fn map_join_error(err: task::JoinError) -> UserServiceError {
    InfraError::from(err).into()
}

// =============================================================================
// Tests
// =============================================================================
