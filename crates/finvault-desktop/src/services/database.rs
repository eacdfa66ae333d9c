//! Database service for the desktop application

use std::path::PathBuf;
use std::sync::Arc;

use finvault_core::db::{
    Database, LibSqlSettingsRepository, LibSqlUserRepository, SettingsRepository, UserRepository,
};
use finvault_core::error::Result;
use finvault_core::models::{
    AccountSettings, DisplaySettings, NotificationSettings, Settings, ThemeMode, UserPatch,
    UserProfile, UserRecord,
};
use tokio::sync::Mutex;

/// Service for store operations
///
/// Wraps the database connection and provides thread-safe async access.
#[derive(Clone)]
pub struct DatabaseService {
    db: Arc<Mutex<Database>>,
}

impl DatabaseService {
    /// Open the store at the default (or `FINVAULT_DB_PATH`-overridden) path
    pub async fn new() -> Result<Self> {
        let db_path = Self::db_path();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&db_path).await?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Create an in-memory database service (for testing)
    pub async fn in_memory() -> Result<Self> {
        let db = Database::open_in_memory().await?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Resolve the database path
    fn db_path() -> PathBuf {
        std::env::var("FINVAULT_DB_PATH").map_or_else(
            |_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("finvault")
                    .join("finvault.db")
            },
            PathBuf::from,
        )
    }

    /// Load settings from the store
    pub async fn load_settings(&self) -> Result<Settings> {
        let db = self.db.lock().await;
        let repo = LibSqlSettingsRepository::new(db.connection());
        repo.load().await
    }

    /// Persist the theme preference
    pub async fn save_theme(&self, theme: ThemeMode) -> Result<()> {
        let db = self.db.lock().await;
        let repo = LibSqlSettingsRepository::new(db.connection());
        repo.save_theme(theme).await
    }

    /// Persist the account settings group
    pub async fn save_account(&self, account: &AccountSettings) -> Result<()> {
        let db = self.db.lock().await;
        let repo = LibSqlSettingsRepository::new(db.connection());
        repo.save_account(account).await
    }

    /// Persist the notifications settings group
    pub async fn save_notifications(&self, notifications: &NotificationSettings) -> Result<()> {
        let db = self.db.lock().await;
        let repo = LibSqlSettingsRepository::new(db.connection());
        repo.save_notifications(notifications).await
    }

    /// Persist the display settings group
    pub async fn save_display(&self, display: &DisplaySettings) -> Result<()> {
        let db = self.db.lock().await;
        let repo = LibSqlSettingsRepository::new(db.connection());
        repo.save_display(display).await
    }

    /// Load the signed-in user's profile, if a record exists
    ///
    /// The desktop is single-user: the first (oldest) record is the account.
    pub async fn load_profile(&self) -> Result<Option<UserProfile>> {
        let db = self.db.lock().await;
        let repo = LibSqlUserRepository::new(db.connection());
        Ok(repo.list().await?.first().map(UserRecord::profile))
    }

    /// Write a profile back to the user store and return the stored version
    ///
    /// Creates the record on first save; registration proper happens on the
    /// backend and is out of scope here.
    pub async fn save_profile(&self, profile: &UserProfile) -> Result<UserProfile> {
        let db = self.db.lock().await;
        let repo = LibSqlUserRepository::new(db.connection());

        let id = match repo.list().await?.first() {
            Some(existing) => existing.id,
            None => {
                let record = UserRecord::new(profile.name.clone(), profile.email.clone(), "");
                repo.create(&record).await?;
                tracing::info!("Seeded local user record for {}", record.email);
                record.id
            }
        };

        let updated = repo.update(&id, &UserPatch::from_profile(profile)).await?;
        Ok(updated.profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_save_profile_creates_then_updates() {
        let service = DatabaseService::in_memory().await.unwrap();

        assert!(service.load_profile().await.unwrap().is_none());

        let profile = UserProfile {
            name: "Priya Singh".to_string(),
            email: "p@x.com".to_string(),
            username: Some("priya_singh".to_string()),
            bio: None,
        };
        let saved = service.save_profile(&profile).await.unwrap();
        assert_eq!(saved.username.as_deref(), Some("priya_singh"));

        // Second save updates the same record rather than creating another
        let edited = UserProfile {
            username: Some("priya99".to_string()),
            ..profile
        };
        let saved = service.save_profile(&edited).await.unwrap();
        assert_eq!(saved.username.as_deref(), Some("priya99"));

        let loaded = service.load_profile().await.unwrap().unwrap();
        assert_eq!(loaded.username.as_deref(), Some("priya99"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_settings_round_trip() {
        let service = DatabaseService::in_memory().await.unwrap();

        service.save_theme(ThemeMode::Dark).await.unwrap();
        let settings = service.load_settings().await.unwrap();
        assert_eq!(settings.theme, ThemeMode::Dark);
    }
}
