//! Desktop services
//!
//! Store access and the local profile cache.

mod database;
mod profile_cache;

pub use database::DatabaseService;
pub use profile_cache::ProfileCache;
