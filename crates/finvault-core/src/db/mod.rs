//! Database layer for FinVault

mod connection;
mod migrations;
mod settings_repository;
mod user_repository;

pub use connection::Database;
pub use settings_repository::{LibSqlSettingsRepository, SettingsRepository};
pub use user_repository::{LibSqlUserRepository, UserRepository};
