//! User entity - the identity behind posts, comments and reactions

use chrono::{DateTime, Utc};

/// Registered member of the dating site.
///
/// Accounts are provisioned elsewhere; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub known_as: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: i64, username: String) -> Self {
        Self {
            id,
            username,
            known_as: None,
            photo_url: None,
            created_at: Utc::now(),
        }
    }

    /// Public nickname, falling back to the empty string
    pub fn known_as_or_default(&self) -> &str {
        self.known_as.as_deref().unwrap_or_default()
    }

    /// Main photo URL, falling back to the empty string
    pub fn photo_or_default(&self) -> &str {
        self.photo_url.as_deref().unwrap_or_default()
    }
}
