//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use vendor_portal_core::{Email, UserId};

use super::RepositoryError;
use crate::models::user::User;

/// Database row for a user.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(User {
            id: UserId::new(self.id),
            email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, created_at, updated_at
            FROM portal.users
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, created_at, updated_at
            FROM portal.users
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Create a new user with email and password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_with_password(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO portal.users (email)
            VALUES ($1)
            RETURNING id, email, created_at, updated_at
            ",
        )
        .bind(email.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        let user = row.into_user()?;

        sqlx::query(
            r"
            INSERT INTO portal.user_password (user_id, password_hash)
            VALUES ($1, $2)
            ",
        )
        .bind(user.id.as_i32())
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Get a user's password hash by email.
    ///
    /// Returns `None` if the user doesn't exist or has no password set.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserPasswordRow>(
            r"
            SELECT u.id, u.email, u.created_at, u.updated_at, p.password_hash
            FROM portal.users u
            LEFT JOIN portal.user_password p ON u.id = p.user_id
            WHERE u.email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let Some(password_hash) = r.password_hash else {
            return Ok(None);
        };

        let user = UserRow {
            id: r.id,
            email: r.email,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
        .into_user()?;

        Ok(Some((user, password_hash)))
    }
}

/// Database row for a user joined with their password hash.
#[derive(sqlx::FromRow)]
struct UserPasswordRow {
    id: i32,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    password_hash: Option<String>,
}
