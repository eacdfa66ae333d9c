//! User repository implementation

use crate::error::{Error, Result};
use crate::models::{UserId, UserPatch, UserRecord};
use libsql::{params, Connection, Row};

/// Trait for user storage operations (async)
#[allow(async_fn_in_trait)]
pub trait UserRepository {
    /// Insert a new user record
    async fn create(&self, user: &UserRecord) -> Result<()>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>>;

    /// Find a user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    /// Apply a partial update and return the updated record
    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<UserRecord>;

    /// List registered users, oldest first
    async fn list(&self) -> Result<Vec<UserRecord>>;
}

/// libSQL implementation of `UserRepository`
pub struct LibSqlUserRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlUserRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a user from a database row
    fn parse_user(row: &Row) -> Result<UserRecord> {
        let id: String = row.get(0)?;
        Ok(UserRecord {
            id: id
                .parse()
                .map_err(|_| Error::Database(format!("Invalid user ID in store: {id}")))?,
            name: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
            username: row.get(4)?,
            bio: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    async fn find_where(&self, condition: &str, param: String) -> Result<Option<UserRecord>> {
        let sql = format!(
            "SELECT id, name, email, password_hash, username, bio, created_at, updated_at
             FROM users WHERE {condition}"
        );
        let mut rows = self.conn.query(&sql, params![param]).await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::parse_user(&row)?)),
            None => Ok(None),
        }
    }
}

impl UserRepository for LibSqlUserRepository<'_> {
    async fn create(&self, user: &UserRecord) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO users (id, name, email, password_hash, username, bio, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    user.id.as_str(),
                    user.name.clone(),
                    user.email.clone(),
                    user.password_hash.clone(),
                    user.username.clone(),
                    user.bio.clone(),
                    user.created_at,
                    user.updated_at
                ],
            )
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>> {
        self.find_where("id = ?", id.as_str()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        self.find_where("email = ? COLLATE NOCASE", email.to_string())
            .await
    }

    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<UserRecord> {
        let Some(mut user) = self.find_by_id(id).await? else {
            return Err(Error::NotFound(id.to_string()));
        };

        if patch.is_empty() {
            return Ok(user);
        }

        if let Some(name) = &patch.name {
            user.name = name.clone();
        }
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(username) = &patch.username {
            user.username = Some(username.clone());
        }
        if let Some(bio) = &patch.bio {
            user.bio = Some(bio.clone());
        }
        user.updated_at = chrono::Utc::now().timestamp_millis();

        let rows = self
            .conn
            .execute(
                "UPDATE users SET name = ?, email = ?, username = ?, bio = ?, updated_at = ?
                 WHERE id = ?",
                params![
                    user.name.clone(),
                    user.email.clone(),
                    user.username.clone(),
                    user.bio.clone(),
                    user.updated_at,
                    user.id.as_str()
                ],
            )
            .await?;

        if rows == 0 {
            return Err(Error::NotFound(id.to_string()));
        }

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<UserRecord>> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, name, email, password_hash, username, bio, created_at, updated_at
                 FROM users ORDER BY created_at ASC",
                (),
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(Self::parse_user(&row)?);
        }

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_create_and_find_by_id() {
        let db = setup().await;
        let repo = LibSqlUserRepository::new(db.connection());

        let user = UserRecord::new("Arjun Kumar", "arjun.kumar@email.com", "secret");
        repo.create(&user).await.unwrap();

        let fetched = repo.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_find_by_email_case_insensitive() {
        let db = setup().await;
        let repo = LibSqlUserRepository::new(db.connection());

        let user = UserRecord::new("Priya Singh", "p@x.com", "secret");
        repo.create(&user).await.unwrap();

        let fetched = repo.find_by_email("P@X.COM").await.unwrap().unwrap();
        assert_eq!(fetched.id, user.id);

        let missing = repo.find_by_email("nobody@x.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_duplicate_email_rejected() {
        let db = setup().await;
        let repo = LibSqlUserRepository::new(db.connection());

        repo.create(&UserRecord::new("A", "same@x.com", "x"))
            .await
            .unwrap();
        let result = repo.create(&UserRecord::new("B", "same@x.com", "y")).await;
        assert!(result.is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_update_applies_patch() {
        let db = setup().await;
        let repo = LibSqlUserRepository::new(db.connection());

        let user = UserRecord::new("Priya Singh", "p@x.com", "secret");
        repo.create(&user).await.unwrap();

        let patch = UserPatch {
            username: Some("priya99".to_string()),
            ..UserPatch::default()
        };
        let updated = repo.update(&user.id, &patch).await.unwrap();

        assert_eq!(updated.username.as_deref(), Some("priya99"));
        assert_eq!(updated.name, "Priya Singh");
        assert!(updated.updated_at >= user.updated_at);

        // Persisted, not just returned
        let fetched = repo.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(fetched.username.as_deref(), Some("priya99"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_update_missing_user() {
        let db = setup().await;
        let repo = LibSqlUserRepository::new(db.connection());

        let result = repo.update(&UserId::new(), &UserPatch::default()).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_empty_patch_is_noop() {
        let db = setup().await;
        let repo = LibSqlUserRepository::new(db.connection());

        let user = UserRecord::new("A", "a@x.com", "x");
        repo.create(&user).await.unwrap();

        let unchanged = repo.update(&user.id, &UserPatch::default()).await.unwrap();
        assert_eq!(unchanged, user);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_oldest_first() {
        let db = setup().await;
        let repo = LibSqlUserRepository::new(db.connection());

        let first = UserRecord::new("A", "a@x.com", "x");
        let second = UserRecord::new("B", "b@x.com", "y");
        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].created_at <= users[1].created_at);
    }
}
