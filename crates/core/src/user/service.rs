//! Profile service - creation, lookup and self-update rules

use std::sync::Arc;

use mylearn_domain::{
    InternalProfileCreationRequest, Result, UserProfile, UserProfileResponse,
    UserProfileUpdateRequest, UserServiceError,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ports::ProfileStore;

/// Profile service
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    /// Create a new profile service backed by `store`
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Create the profile for a newly registered user.
    ///
    /// If a profile already exists for `user_id` it is returned unchanged and
    /// the request's fields are discarded.
    pub async fn create_profile(
        &self,
        request: InternalProfileCreationRequest,
    ) -> Result<UserProfileResponse> {
        debug!(user_id = %request.user_id, role = %request.role, "Creating profile for new user");

        if let Some(existing) = self.fetch_profile_by_user_id(request.user_id).await? {
            warn!(user_id = %request.user_id, "Profile already exists, skipping creation");
            return Ok(existing);
        }

        let profile = UserProfile::new(request.user_id, request.full_name, request.role);
        let saved = self.store.save(profile).await?;

        info!(user_id = %saved.user_id, role = %saved.role, "Profile created");
        Ok(saved.into())
    }

    /// Look up a profile. `Ok(None)` when no profile exists.
    pub async fn fetch_profile_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserProfileResponse>> {
        info!(user_id = %user_id, "Fetching user profile");

        Ok(self.store.get(user_id).await?.map(UserProfileResponse::from))
    }

    /// Apply a partial update to an existing profile.
    ///
    /// # Errors
    /// Returns `UserServiceError::NotFound` when no profile exists for
    /// `user_id`.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UserProfileUpdateRequest,
    ) -> Result<UserProfileResponse> {
        info!(user_id = %user_id, "Updating user profile");

        let mut profile = self.store.get(user_id).await?.ok_or_else(|| {
            UserServiceError::NotFound(format!("User profile not found for ID: {user_id}"))
        })?;

        merge_update(&mut profile, request);

        let updated = self.store.save(profile).await?;
        Ok(updated.into())
    }
}

/// Overwrite only the fields present in `request`. The role never changes.
fn merge_update(profile: &mut UserProfile, request: UserProfileUpdateRequest) {
    if let Some(full_name) = request.full_name {
        profile.full_name = full_name;
    }

    if let Some(bio) = request.bio {
        profile.bio = bio;
    }

    if let Some(url) = request.profile_picture_url {
        profile.profile_picture_url = Some(url);
    }
}
