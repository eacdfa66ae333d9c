//! Theme configuration for the desktop app
//!
//! The stored preference is tri-state (light/dark/system). `System` tracks
//! the ambient OS preference live: the app re-detects it periodically and
//! re-resolves the theme, so an OS-level switch flips the UI without the
//! user touching the setting.

pub use finvault_core::models::ThemeMode;

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Check if the theme is dark
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Resolve theme mode against the current ambient preference
#[must_use]
pub const fn resolve_theme(mode: ThemeMode, system_dark: bool) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if system_dark {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect the ambient dark mode preference
///
/// Called at startup and from the ambient-preference poller; deliberately
/// not cached.
#[must_use]
pub fn detect_system_dark_mode() -> bool {
    detect_system_dark_mode_impl()
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode_impl() -> bool {
    use std::process::Command;
    // Check Windows AppsUseLightTheme registry value
    // 0 = dark mode, 1 = light mode
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            stdout.contains("0x0")
        }
        Err(e) => {
            tracing::warn!(
                "Failed to detect system theme: {}. Defaulting to light mode.",
                e
            );
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode_impl() -> bool {
    use std::process::Command;
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            stdout.trim().eq_ignore_ascii_case("dark")
        }
        Err(e) => {
            tracing::warn!(
                "Failed to detect system theme: {}. Defaulting to light mode.",
                e
            );
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode_impl() -> bool {
    // Check GTK theme via environment variable
    std::env::var("GTK_THEME")
        .map(|theme| theme.to_lowercase().contains("dark"))
        .unwrap_or(false)
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode_impl() -> bool {
    false
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_card: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub warning: &'static str,
    pub destructive: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#f7f9fc",
    bg_secondary: "#eef2f7",
    bg_card: "#ffffff",
    text_primary: "#10151c",
    text_secondary: "#5f6b7a",
    text_muted: "#94a0ae",
    border: "#dde4ec",
    primary: "#0ea5e9",
    accent: "#2dd4a7",
    warning: "#f59e0b",
    destructive: "#ef4444",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#0b1016",
    bg_secondary: "#121923",
    bg_card: "#161e2a",
    text_primary: "#e8edf3",
    text_secondary: "#9aa7b5",
    text_muted: "#64707e",
    border: "#232d3a",
    primary: "#38bdf8",
    accent: "#34d399",
    warning: "#fbbf24",
    destructive: "#f87171",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_ignore_ambient_preference() {
        assert_eq!(resolve_theme(ThemeMode::Light, true), ResolvedTheme::Light);
        assert_eq!(resolve_theme(ThemeMode::Dark, false), ResolvedTheme::Dark);
    }

    #[test]
    fn test_system_mode_follows_ambient_preference() {
        assert_eq!(resolve_theme(ThemeMode::System, true), ResolvedTheme::Dark);
        assert_eq!(resolve_theme(ThemeMode::System, false), ResolvedTheme::Light);
    }
}
