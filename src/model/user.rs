use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The identity shared by every kind of account.
///
/// Two users are the same account when both `id` and `email` match.
/// The password is only ever held as a salted bcrypt hash.
#[derive(Clone)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    password_hash: String,
    pub active: bool,
}

impl User {
    /// Creates an active user around an already-hashed password.
    pub(crate) fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: String,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash,
            active: true,
        }
    }

    pub(crate) fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub(crate) fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.email == other.email
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.email.hash(state);
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("active", &self.active)
            .finish()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User #{} {} <{}> ({})",
            self.id,
            self.name,
            self.email,
            if self.active { "active" } else { "inactive" }
        )
    }
}

/// The role an account plays in the gym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Role {
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "MEMBER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities every account variant provides.
///
/// Each variant (currently only [`Member`](crate::model::Member)) wraps a [`User`]
/// and decides for itself how credentials are checked.
pub trait Account {
    fn user(&self) -> &User;

    /// Checks a plaintext password against the stored hash.
    fn authenticate(&self, password: &str) -> bool;

    fn role(&self) -> Role;
}
