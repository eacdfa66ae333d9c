//! User model

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a user, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new unique user ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A registered user document in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier
    pub id: UserId,
    /// Full display name
    pub name: String,
    /// Email address
    pub email: String,
    /// SHA-256 hex digest of the raw credential; never leaves the store layer
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Optional handle; derived client-side when absent
    pub username: Option<String>,
    /// Optional bio; derived client-side when absent
    pub bio: Option<String>,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Last update timestamp (Unix ms)
    pub updated_at: i64,
}

impl UserRecord {
    /// Create a new user record with the given identity and raw credential
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: &str) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            password_hash: hash_credential(password),
            username: None,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Client-visible projection of this record
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            bio: self.bio.clone(),
        }
    }
}

/// Client-visible projection of a user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Optional handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Optional bio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Partial update for a user record; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UserPatch {
    /// Check whether the patch carries no changes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.username.is_none() && self.bio.is_none()
    }

    /// Build a patch carrying every field of a profile
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: Some(profile.name.clone()),
            email: Some(profile.email.clone()),
            username: profile.username.clone(),
            bio: profile.bio.clone(),
        }
    }
}

/// Hash a raw credential for storage (SHA-256 hex)
#[must_use]
pub fn hash_credential(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_id_unique() {
        let id1 = UserId::new();
        let id2 = UserId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_user_id_parse() {
        let id = UserId::new();
        let parsed: UserId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_record_new() {
        let user = UserRecord::new("Arjun Kumar", "arjun.kumar@email.com", "hunter2");
        assert_eq!(user.name, "Arjun Kumar");
        assert_eq!(user.email, "arjun.kumar@email.com");
        assert!(user.username.is_none());
        assert!(user.bio.is_none());
        assert_eq!(user.created_at, user.updated_at);
        assert_ne!(user.password_hash, "hunter2");
    }

    #[test]
    fn test_hash_credential_deterministic() {
        assert_eq!(hash_credential("secret"), hash_credential("secret"));
        assert_ne!(hash_credential("secret"), hash_credential("other"));
    }

    #[test]
    fn test_record_serialization_excludes_credential() {
        let user = UserRecord::new("Arjun", "a@x.com", "secret");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains(&user.password_hash));
    }

    #[test]
    fn test_profile_projection() {
        let mut user = UserRecord::new("Arjun", "a@x.com", "secret");
        user.username = Some("arjun".to_string());

        let profile = user.profile();
        assert_eq!(profile.name, "Arjun");
        assert_eq!(profile.username.as_deref(), Some("arjun"));
        assert!(profile.bio.is_none());
    }

    #[test]
    fn test_patch_from_profile_round_trips_fields() {
        let profile = UserProfile {
            name: "Priya".to_string(),
            email: "p@x.com".to_string(),
            username: Some("priya99".to_string()),
            bio: None,
        };
        let patch = UserPatch::from_profile(&profile);
        assert_eq!(patch.name.as_deref(), Some("Priya"));
        assert_eq!(patch.username.as_deref(), Some("priya99"));
        assert!(patch.bio.is_none());
        assert!(!patch.is_empty());
        assert!(UserPatch::default().is_empty());
    }
}
