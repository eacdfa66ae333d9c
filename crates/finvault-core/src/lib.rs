//! finvault-core - Core library for FinVault
//!
//! This crate contains the shared models, profile derivation, and the
//! user/settings store used by all FinVault interfaces (desktop, API, CLI).

pub mod db;
pub mod error;
pub mod models;
pub mod profile;

pub use error::{Error, Result};
pub use models::{UserId, UserProfile, UserRecord};
