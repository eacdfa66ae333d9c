//! Data models for FinVault

mod settings;
mod user;

pub use settings::{
    AccountSettings, DisplaySettings, NotificationSettings, Settings, ThemeMode,
};
pub use user::{hash_credential, UserId, UserPatch, UserProfile, UserRecord};
