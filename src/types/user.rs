//! Staff accounts

use super::patch::{double_option, merge};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier
pub type UserId = u32;

/// A staff member who can operate the system
///
/// The password is accepted on input but never serialized back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub role: String,
    pub full_name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl NewUser {
    pub(crate) fn into_user(self, id: UserId, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            role: self.role,
            full_name: self.full_name,
            email: self.email,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        merge(&mut user.username, self.username);
        merge(&mut user.password, self.password);
        merge(&mut user.role, self.role);
        merge(&mut user.full_name, self.full_name);
        merge(&mut user.email, self.email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_not_serialized() {
        let user = NewUser {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: "Administrator".to_string(),
            full_name: "Admin Staff".to_string(),
            email: None,
        }
        .into_user(1, Utc::now());

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"username\":\"admin\""));
        assert!(!json.contains("admin123"));
        assert!(!json.contains("password"));
    }
}
