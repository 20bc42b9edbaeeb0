//! Port interfaces for user profile management
//!
//! These traits define the boundary between core business logic and the
//! persistence engine that stores profiles.

use async_trait::async_trait;
use mylearn_domain::{Result, UserProfile};
use uuid::Uuid;

/// Durable storage of one profile per user identifier
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Point lookup. A miss is `Ok(None)`, not an error.
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>>;

    /// Insert or replace the full record keyed by `user_id`, returning the
    /// persisted record.
    async fn save(&self, profile: UserProfile) -> Result<UserProfile>;
}
