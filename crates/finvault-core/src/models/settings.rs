//! Application settings model

use serde::{Deserialize, Serialize};

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// Account security preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    /// Whether two-factor authentication is enabled
    pub two_factor_enabled: bool,
    /// Whether biometric login is enabled
    pub biometric_login_enabled: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            two_factor_enabled: false,
            biometric_login_enabled: true,
        }
    }
}

/// Notification preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub budget_alerts: bool,
    pub transaction_notifications: bool,
    pub weekly_reports: bool,
    pub tax_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            budget_alerts: true,
            transaction_notifications: true,
            weekly_reports: true,
            tax_reminders: true,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// ISO 4217 currency code used for amount formatting
    pub currency: String,
    /// Abbreviate large amounts (e.g. 1.1L instead of 1,13,000)
    pub compact_numbers: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            compact_numbers: false,
        }
    }
}

/// Application settings, grouped by settings tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Theme mode
    pub theme: ThemeMode,
    /// Account security preferences
    pub account: AccountSettings,
    /// Notification preferences
    pub notifications: NotificationSettings,
    /// Display preferences
    pub display: DisplaySettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeMode::System);
        assert!(!settings.account.two_factor_enabled);
        assert!(settings.account.biometric_login_enabled);
        assert!(settings.notifications.budget_alerts);
        assert_eq!(settings.display.currency, "INR");
    }

    #[test]
    fn test_theme_mode_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).unwrap(),
            "\"dark\""
        );
        let parsed: ThemeMode = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, ThemeMode::System);
    }
}
