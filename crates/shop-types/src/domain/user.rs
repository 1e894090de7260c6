use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MISSING_USER_FIELDS: &str = "Please provide all required fields.";

/// A registered account. The password is stored and returned as supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Fields a client may overwrite on an existing user. Absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    pub fn new(username: String, email: String, password: String) -> anyhow::Result<Self> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            anyhow::bail!(MISSING_USER_FIELDS);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            username,
            email,
            password,
        })
    }

    pub fn apply(&mut self, changes: UserUpdate) {
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(password) = changes.password {
            self.password = password;
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new("alice".into(), "alice@example.com".into(), "s3cret".into()).unwrap()
    }

    #[test]
    fn new_user_gets_fresh_id() {
        let a = alice();
        let b = alice();
        assert_ne!(a.id, b.id);
        assert_eq!(a.username, "alice");
        assert_eq!(a.email, "alice@example.com");
        assert_eq!(a.password, "s3cret");
    }

    #[test]
    fn empty_fields_are_rejected() {
        let no_name = User::new("".into(), "a@b.com".into(), "pw".into());
        assert_eq!(no_name.unwrap_err().to_string(), MISSING_USER_FIELDS);

        let no_email = User::new("bob".into(), "".into(), "pw".into());
        assert!(no_email.is_err());

        let no_password = User::new("bob".into(), "b@c.com".into(), "".into());
        assert!(no_password.is_err());
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut user = alice();
        let id = user.id;
        user.apply(UserUpdate {
            username: Some("alicia".into()),
            ..Default::default()
        });
        assert_eq!(user.id, id);
        assert_eq!(user.username, "alicia");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password, "s3cret");
    }

    #[test]
    fn password_comparison_is_exact() {
        let user = alice();
        assert!(user.password_matches("s3cret"));
        assert!(!user.password_matches("S3cret"));
        assert!(!user.password_matches(""));
    }
}
