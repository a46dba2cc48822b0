//! User entity and request body

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of POST /users and PUT /users/{id}.
///
/// Both fields are required for deserialization; no further validation
/// is applied. Echoed back verbatim as the create/update response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach a database-assigned id.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_requires_both_fields() {
        assert!(serde_json::from_str::<UserInput>(r#"{"name":"Ann"}"#).is_err());
        assert!(serde_json::from_str::<UserInput>(r#"{"email":"ann@x.com"}"#).is_err());
    }

    #[test]
    fn input_ignores_unknown_fields() {
        let input: UserInput =
            serde_json::from_str(r#"{"id":99,"name":"Ann","email":"ann@x.com"}"#).unwrap();
        assert_eq!(input, UserInput::new("Ann", "ann@x.com"));
    }

    #[test]
    fn user_serializes_all_columns() {
        let user = UserInput::new("Ann", "ann@x.com").into_user(1);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Ann", "email": "ann@x.com"})
        );
    }
}
