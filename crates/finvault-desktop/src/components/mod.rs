//! UI Components
//!
//! Reusable UI components for the desktop application.

mod card;
mod controls;
mod settings;
mod sidebar;
mod toast;

pub use card::{Card, PageHeader};
pub use controls::{SaveButton, SelectField, TextField, Toggle};
pub use settings::{
    AccountTab, AppearanceTab, DisplayTab, NotificationsTab, ProfileTab, SettingRow,
};
pub use sidebar::Sidebar;
pub use toast::ToastHost;
