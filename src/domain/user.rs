//! Account owner entity.
//!
//! The journal core only ever references a user through its [`UserId`];
//! credential storage and session handling live outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::ValidationError;
use super::id::UserId;

/// An account that owns journal entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user after checking the registration constraints:
    /// a display name of at least two characters and a plausible email.
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();

        if name.chars().count() < 2 {
            return Err(ValidationError {
                field: "name",
                reason: "name must be at least 2 characters".to_string(),
            });
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => {
                return Err(ValidationError {
                    field: "email",
                    reason: "invalid email address".to_string(),
                })
            }
        }

        Ok(Self {
            id: UserId::new(),
            email,
            name,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn try_new_accepts_valid_registration() {
        let user = User::try_new("Demo User", "demo@crypto.com", Utc::now()).unwrap();
        assert_eq!(user.name, "Demo User");
        assert_eq!(user.email, "demo@crypto.com");
    }

    #[test]
    fn try_new_rejects_short_name() {
        let err = User::try_new("D", "demo@crypto.com", Utc::now()).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn try_new_rejects_mangled_email() {
        for email in ["not-an-email", "@crypto.com", "demo@nodot"] {
            let err = User::try_new("Demo User", email, Utc::now()).unwrap_err();
            assert_eq!(err.field, "email", "email {email:?} should be rejected");
        }
    }

    #[test]
    fn try_new_assigns_unique_ids() {
        let a = User::try_new("Demo User", "a@crypto.com", Utc::now()).unwrap();
        let b = User::try_new("Demo User", "b@crypto.com", Utc::now()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
