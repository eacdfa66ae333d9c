//! Settings repository implementation

use crate::error::Result;
use crate::models::{AccountSettings, DisplaySettings, NotificationSettings, Settings};
use libsql::Connection;

/// Trait for settings storage operations (async)
#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    /// Load settings from the database, falling back to defaults per key
    async fn load(&self) -> Result<Settings>;

    /// Save all settings
    async fn save(&self, settings: &Settings) -> Result<()>;

    /// Save only the theme preference
    async fn save_theme(&self, theme: crate::models::ThemeMode) -> Result<()>;

    /// Save only the account group
    async fn save_account(&self, account: &AccountSettings) -> Result<()>;

    /// Save only the notifications group
    async fn save_notifications(&self, notifications: &NotificationSettings) -> Result<()>;

    /// Save only the display group
    async fn save_display(&self, display: &DisplaySettings) -> Result<()>;
}

/// libSQL implementation of `SettingsRepository`
pub struct LibSqlSettingsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlSettingsRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for LibSqlSettingsRepository<'_> {
    async fn load(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Ok(value) = self.get_setting("theme").await {
            settings.theme = serde_json::from_str(&format!("\"{value}\"")).unwrap_or_default();
        }

        if let Ok(value) = self.get_setting("two_factor_enabled").await {
            settings.account.two_factor_enabled = parse_flag(&value);
        }
        if let Ok(value) = self.get_setting("biometric_login_enabled").await {
            settings.account.biometric_login_enabled = parse_flag(&value);
        }

        if let Ok(value) = self.get_setting("budget_alerts").await {
            settings.notifications.budget_alerts = parse_flag(&value);
        }
        if let Ok(value) = self.get_setting("transaction_notifications").await {
            settings.notifications.transaction_notifications = parse_flag(&value);
        }
        if let Ok(value) = self.get_setting("weekly_reports").await {
            settings.notifications.weekly_reports = parse_flag(&value);
        }
        if let Ok(value) = self.get_setting("tax_reminders").await {
            settings.notifications.tax_reminders = parse_flag(&value);
        }

        if let Ok(value) = self.get_setting("currency").await {
            settings.display.currency = value;
        }
        if let Ok(value) = self.get_setting("compact_numbers").await {
            settings.display.compact_numbers = parse_flag(&value);
        }

        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        self.save_theme(settings.theme).await?;
        self.save_account(&settings.account).await?;
        self.save_notifications(&settings.notifications).await?;
        self.save_display(&settings.display).await?;
        Ok(())
    }

    async fn save_theme(&self, theme: crate::models::ThemeMode) -> Result<()> {
        let theme_str = serde_json::to_string(&theme)?.trim_matches('"').to_string();
        self.set_setting("theme", &theme_str).await
    }

    async fn save_account(&self, account: &AccountSettings) -> Result<()> {
        self.set_setting("two_factor_enabled", flag_str(account.two_factor_enabled))
            .await?;
        self.set_setting(
            "biometric_login_enabled",
            flag_str(account.biometric_login_enabled),
        )
        .await
    }

    async fn save_notifications(&self, notifications: &NotificationSettings) -> Result<()> {
        self.set_setting("budget_alerts", flag_str(notifications.budget_alerts))
            .await?;
        self.set_setting(
            "transaction_notifications",
            flag_str(notifications.transaction_notifications),
        )
        .await?;
        self.set_setting("weekly_reports", flag_str(notifications.weekly_reports))
            .await?;
        self.set_setting("tax_reminders", flag_str(notifications.tax_reminders))
            .await
    }

    async fn save_display(&self, display: &DisplaySettings) -> Result<()> {
        self.set_setting("currency", &display.currency).await?;
        self.set_setting("compact_numbers", flag_str(display.compact_numbers))
            .await
    }
}

const fn flag_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl LibSqlSettingsRepository<'_> {
    async fn get_setting(&self, key: &str) -> Result<String> {
        let mut rows = self
            .conn
            .query("SELECT value FROM settings WHERE key = ?", [key])
            .await?;

        if let Some(row) = rows.next().await? {
            let value: String = row.get(0)?;
            Ok(value)
        } else {
            Err(crate::error::Error::NotFound(key.to_string()))
        }
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)",
                [key, value],
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::ThemeMode;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_load_default_settings() {
        let db = setup().await;
        let repo = LibSqlSettingsRepository::new(db.connection());

        let settings = repo.load().await.unwrap();
        assert_eq!(settings.theme, ThemeMode::System);
        assert!(settings.notifications.budget_alerts);
        assert_eq!(settings.display.currency, "INR");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_save_and_load_settings() {
        let db = setup().await;
        let repo = LibSqlSettingsRepository::new(db.connection());

        let mut settings = Settings::default();
        settings.theme = ThemeMode::Dark;
        settings.account.two_factor_enabled = true;
        settings.notifications.weekly_reports = false;
        settings.display.compact_numbers = true;

        repo.save(&settings).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_save_theme_survives_reload() {
        let db = setup().await;
        let repo = LibSqlSettingsRepository::new(db.connection());

        repo.save_theme(ThemeMode::Dark).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.theme, ThemeMode::Dark);
        // Other groups untouched by a theme-only save
        assert!(loaded.account.biometric_login_enabled);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_save_single_group_leaves_others_at_defaults() {
        let db = setup().await;
        let repo = LibSqlSettingsRepository::new(db.connection());

        let notifications = NotificationSettings {
            budget_alerts: false,
            ..NotificationSettings::default()
        };
        repo.save_notifications(&notifications).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert!(!loaded.notifications.budget_alerts);
        assert_eq!(loaded.display, DisplaySettings::default());
        assert_eq!(loaded.theme, ThemeMode::System);
    }
}
