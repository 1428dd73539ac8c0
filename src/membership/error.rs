//! Error types for membership operations.

use thiserror::Error;

/// Errors that can occur while managing member credentials.
#[derive(Debug, Error)]
pub enum MembershipError {
    /// bcrypt refused to hash the password (e.g., cost out of range).
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}
