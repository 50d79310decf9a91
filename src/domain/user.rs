//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    /// Salted hash string, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Given name
    #[schema(example = "Ann")]
    pub name: String,
    /// Family name
    #[schema(example = "Lee")]
    pub surname: String,
    /// Plaintext password, hashed before storage
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// User update data transfer object.
///
/// Fields left as `None` were not supplied by the caller and
/// must stay untouched during the merge.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    /// New given name
    #[schema(example = "Jane")]
    pub name: Option<String>,
    /// New family name
    #[schema(example = "Doe")]
    pub surname: Option<String>,
    /// New plaintext password, hashed before storage
    pub password: Option<String>,
}

/// User response (safe to return to client, excludes the password hash)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Given name
    #[schema(example = "Ann")]
    pub name: String,
    /// Family name
    #[schema(example = "Lee")]
    pub surname: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
