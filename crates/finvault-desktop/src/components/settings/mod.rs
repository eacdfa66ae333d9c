//! Settings tab components
//!
//! Each tab owns its draft state via the signals on [`crate::state::AppState`]
//! and saves independently, so a failure in one tab never clobbers another.

mod account_tab;
mod appearance_tab;
mod display_tab;
mod notifications_tab;
mod profile_tab;
mod row;

pub use account_tab::AccountTab;
pub use appearance_tab::AppearanceTab;
pub use display_tab::DisplayTab;
pub use notifications_tab::NotificationsTab;
pub use profile_tab::ProfileTab;
pub use row::SettingRow;
