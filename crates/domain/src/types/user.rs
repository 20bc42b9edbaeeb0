//! User profile types
//!
//! The profile record owned by this service, keyed by the user identifier
//! assigned by the external authentication system, plus the request and
//! response shapes exchanged over HTTP.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::PLATFORM_NAME;
use crate::impl_domain_enum_conversions;

/// Category of user, fixed when the profile is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Learner,
    Instructor,
    Admin,
}

impl_domain_enum_conversions!(Role {
    Learner => "learner",
    Instructor => "instructor",
    Admin => "admin",
});

/// Bio assigned to freshly created profiles, e.g. `"A new learner on MyLearn."`
pub fn default_bio(role: Role) -> String {
    format!("A new {role} on {PLATFORM_NAME}.")
}

/// User profile as persisted in the profile store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Identifier assigned by the auth system; primary key, never changes
    pub user_id: Uuid,
    pub full_name: String,
    pub bio: String,
    pub profile_picture_url: Option<String>,
    /// Set once at creation; not writable through the update path
    pub role: Role,
}

impl UserProfile {
    /// Build a brand new profile with the role-derived default bio and no
    /// picture.
    pub fn new(user_id: Uuid, full_name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            full_name: full_name.into(),
            bio: default_bio(role),
            profile_picture_url: None,
            role,
        }
    }
}

/// Body of the internal creation call made by the auth service after
/// registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalProfileCreationRequest {
    pub user_id: Uuid,
    pub full_name: String,
    pub role: Role,
}

/// Partial update of the caller's own profile
///
/// `None` means "leave unchanged". A missing key and an explicit `null` are
/// treated the same way, so fields cannot be cleared through this request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

/// Public representation of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub user_id: Uuid,
    pub full_name: String,
    pub bio: String,
    pub profile_picture_url: Option<String>,
    pub role: Role,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            full_name: profile.full_name,
            bio: profile.bio,
            profile_picture_url: profile.profile_picture_url,
            role: profile.role,
        }
    }
}
