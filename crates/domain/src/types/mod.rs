//! Domain types and models

pub mod user;

pub use user::{
    default_bio, InternalProfileCreationRequest, Role, UserProfile, UserProfileResponse,
    UserProfileUpdateRequest,
};
