use serde::{Deserialize, Serialize};

/// A registered account and its genre preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique across the store
    pub username: String,
    /// Stored and compared as plain text
    pub password: String,
    /// Preferred genres in the order the user entered them
    pub genres: Vec<String>,
    /// Fee charged once at registration, never changed afterwards
    pub membership_fee: f64,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        genres: Vec<String>,
        membership_fee: f64,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            genres,
            membership_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("alice", "pw", vec!["Drama".to_string()], 9.99);
        assert_eq!(user.username, "alice");
        assert_eq!(user.password, "pw");
        assert_eq!(user.genres, vec!["Drama"]);
        assert_eq!(user.membership_fee, 9.99);
    }

    #[test]
    fn test_user_serialization() {
        let user = User::new("bob", "secret", vec!["Action".to_string()], 9.99);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "bob");
        assert_eq!(json["genres"][0], "Action");
        assert_eq!(json["membership_fee"], 9.99);
    }
}
