//! FinVault CLI - inspect and seed the local user store

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use finvault_core::db::{Database, LibSqlUserRepository, UserRepository};
use finvault_core::models::UserRecord;

#[derive(Parser)]
#[command(name = "finvault")]
#[command(about = "Inspect and seed the FinVault user store")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Optional path to local database file
    #[arg(long, value_name = "PATH")]
    db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered users
    #[command(name = "view-users", alias = "users")]
    ViewUsers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Seed a user record
    #[command(name = "add-user")]
    AddUser {
        /// Full display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Raw credential; stored as a SHA-256 digest
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] finvault_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("finvault=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path);

    match cli.command {
        Commands::ViewUsers { json } => run_view_users(json, &db_path).await,
        Commands::AddUser {
            name,
            email,
            password,
        } => run_add_user(&name, &email, &password, &db_path).await,
    }
}

/// Resolve the database path: explicit flag, then env, then the data dir
fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var("FINVAULT_DB_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("finvault")
                .join("finvault.db")
        })
}

async fn open_database(db_path: &Path) -> Result<Database, CliError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Database::open(db_path).await?)
}

#[derive(Debug, Serialize)]
struct UserListItem {
    id: String,
    name: String,
    email: String,
    username: Option<String>,
    created_at: i64,
}

impl UserListItem {
    fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id.as_str(),
            name: record.name.clone(),
            email: record.email.clone(),
            username: record.username.clone(),
            created_at: record.created_at,
        }
    }
}

async fn run_view_users(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path).await?;
    let repo = LibSqlUserRepository::new(db.connection());
    let users = repo.list().await?;

    if as_json {
        let items: Vec<UserListItem> = users.iter().map(UserListItem::from_record).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    for line in format_user_table(&users) {
        println!("{line}");
    }
    Ok(())
}

async fn run_add_user(
    name: &str,
    email: &str,
    password: &str,
    db_path: &Path,
) -> Result<(), CliError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err(CliError::EmptyName);
    }
    if email.is_empty() {
        return Err(CliError::EmptyEmail);
    }

    let db = open_database(db_path).await?;
    let repo = LibSqlUserRepository::new(db.connection());

    if repo.find_by_email(email).await?.is_some() {
        return Err(CliError::DuplicateEmail(email.to_string()));
    }

    let record = UserRecord::new(name, email, password);
    repo.create(&record).await?;
    println!("{}", record.id);
    Ok(())
}

/// Render an aligned table of users, header first
fn format_user_table(users: &[UserRecord]) -> Vec<String> {
    let name_width = column_width("NAME", users.iter().map(|u| u.name.as_str()));
    let email_width = column_width("EMAIL", users.iter().map(|u| u.email.as_str()));

    let mut lines = vec![format!(
        "{:<name_width$}  {:<email_width$}  USERNAME",
        "NAME", "EMAIL"
    )];
    for user in users {
        let username = user.username.as_deref().unwrap_or("-");
        lines.push(format!(
            "{:<name_width$}  {:<email_width$}  {username}",
            user.name, user.email
        ));
    }
    lines
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str, email: &str, username: Option<&str>) -> UserRecord {
        let mut record = UserRecord::new(name, email, "x");
        record.username = username.map(String::from);
        record
    }

    #[test]
    fn test_table_columns_align() {
        let users = vec![
            record("Arjun Kumar", "arjun.kumar@email.com", Some("arjun_kumar")),
            record("Li", "li@x.com", None),
        ];
        let lines = format_user_table(&users);

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "NAME         EMAIL                  USERNAME"
        );
        assert_eq!(
            lines[1],
            "Arjun Kumar  arjun.kumar@email.com  arjun_kumar"
        );
        assert_eq!(lines[2], "Li           li@x.com               -");
    }

    #[test]
    fn test_resolve_db_path_explicit_wins() {
        let path = resolve_db_path(Some(PathBuf::from("/tmp/custom.db")));
        assert_eq!(path, PathBuf::from("/tmp/custom.db"));
    }
}
