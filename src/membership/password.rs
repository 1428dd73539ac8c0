//! Salted bcrypt hashing for member passwords.

use tracing::warn;

use super::MembershipError;

pub fn hash_password(password: &str, cost: u32) -> Result<String, MembershipError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// A malformed stored hash counts as a failed check.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match bcrypt::verify(password, password_hash) {
        Ok(matches) => matches,
        Err(e) => {
            warn!(error = %e, "Stored password hash unreadable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted_and_verifiable() {
        let first = hash_password("password123", 4).unwrap();
        let second = hash_password("password123", 4).unwrap();
        assert_ne!(first, second);
        assert_ne!(first, "password123");
        assert!(verify_password("password123", &first));
        assert!(verify_password("password123", &second));
        assert!(!verify_password("wrongpassword", &first));
    }

    #[test]
    fn test_bad_inputs() {
        assert!(matches!(
            hash_password("password123", 2),
            Err(MembershipError::PasswordHash(_))
        ));
        assert!(!verify_password("password123", "not-a-bcrypt-hash"));
    }
}
