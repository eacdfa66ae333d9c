//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use finvault_core::models::{
    AccountSettings, DisplaySettings, NotificationSettings, Settings, ThemeMode, UserProfile,
};

use crate::services::{DatabaseService, ProfileCache};
use crate::theme::ResolvedTheme;
use crate::views::View;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Transient notification kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user-visible notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id; each toast dismisses itself without touching its neighbors
    pub serial: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Removes the toast whose display window has elapsed, leaving the rest visible
fn dismiss_expired(toasts: &mut Vec<Toast>, serial: u64) {
    toasts.retain(|toast| toast.serial != serial);
}

/// Editable copy of the profile tab fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub username: String,
    pub bio: String,
}

impl ProfileForm {
    /// Initialize the form from a (derivation-completed) profile
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            username: profile.username.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
        }
    }

    /// Convert the form back into a profile for saving
    #[must_use]
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            username: (!self.username.is_empty()).then(|| self.username.clone()),
            bio: (!self.bio.is_empty()).then(|| self.bio.clone()),
        }
    }
}

/// Per-tab in-flight save markers
///
/// Lives in [`AppState`] (root scope) rather than in the tab components, so a
/// save started on one tab keeps running and reports its outcome even if the
/// user switches tabs before it completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveFlags {
    pub profile: bool,
    pub account: bool,
    pub appearance: bool,
    pub notifications: bool,
    pub display: bool,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently displayed page
    pub active_view: Signal<View>,
    /// Persisted application settings
    pub settings: Signal<Settings>,
    /// Last detected ambient dark-mode preference
    pub system_dark: Signal<bool>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Profile tab form state
    pub profile_form: Signal<ProfileForm>,
    /// Account tab form state
    pub account_form: Signal<AccountSettings>,
    /// Appearance tab form state
    pub appearance_form: Signal<ThemeMode>,
    /// Notifications tab form state
    pub notifications_form: Signal<NotificationSettings>,
    /// Display tab form state
    pub display_form: Signal<DisplaySettings>,
    /// In-flight saves, one flag per settings tab
    pub saving: Signal<SaveFlags>,
    /// Database service (wrapped in Arc for sharing)
    pub db_service: Signal<Option<Arc<DatabaseService>>>,
    /// Local profile cache
    pub profile_cache: Signal<Arc<ProfileCache>>,
    /// Visible toasts, newest last
    pub toasts: Signal<Vec<Toast>>,
    /// Monotonic toast counter
    pub toast_serial: Signal<u64>,
}

impl AppState {
    /// Show a transient notification alongside any already on screen
    pub fn show_toast(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        let mut toasts = self.toasts;
        let mut serial_signal = self.toast_serial;

        let serial = serial_signal() + 1;
        serial_signal.set(serial);
        toasts.write().push(Toast {
            serial,
            kind,
            title: title.into(),
            description: description.into(),
        });

        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            dismiss_expired(&mut toasts.write(), serial);
        });
    }

    /// Re-resolve the theme from the current mode and ambient preference
    pub fn refresh_theme(&self) {
        let mode = (self.settings)().theme;
        let resolved = crate::theme::resolve_theme(mode, (self.system_dark)());
        let mut theme = self.theme;
        if theme() != resolved {
            theme.set(resolved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn toast(serial: u64, title: &str) -> Toast {
        Toast {
            serial,
            kind: ToastKind::Success,
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_profile_form_round_trip() {
        let profile = UserProfile {
            name: "Priya Singh".to_string(),
            email: "p@x.com".to_string(),
            username: Some("priya99".to_string()),
            bio: Some("bio".to_string()),
        };
        let form = ProfileForm::from_profile(&profile);
        assert_eq!(form.to_profile(), profile);
    }

    #[test]
    fn test_profile_form_empty_fields_become_absent() {
        let form = ProfileForm {
            name: "X".to_string(),
            email: "x@x.com".to_string(),
            username: String::new(),
            bio: String::new(),
        };
        let profile = form.to_profile();
        assert!(profile.username.is_none());
        assert!(profile.bio.is_none());
    }

    #[test]
    fn test_dismiss_expired_keeps_other_toasts() {
        let mut toasts = vec![toast(1, "Profile updated"), toast(2, "Display updated")];
        dismiss_expired(&mut toasts, 1);
        assert_eq!(toasts, vec![toast(2, "Display updated")]);
    }

    #[test]
    fn test_dismiss_expired_unknown_serial_is_noop() {
        let mut toasts = vec![toast(3, "Account updated")];
        dismiss_expired(&mut toasts, 99);
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_save_flags_are_independent() {
        let mut flags = SaveFlags {
            display: true,
            ..SaveFlags::default()
        };
        assert!(!flags.profile);
        assert!(!flags.account);
        assert!(flags.display);
        flags.display = false;
        assert_eq!(flags, SaveFlags::default());
    }
}
