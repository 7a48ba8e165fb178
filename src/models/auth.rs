// src/models/auth.rs - Session and authentication payloads

use serde::{Deserialize, Serialize};

/// The seller account attached to the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl SellerUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Initials for the avatar fallback in the header.
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        match (first, last) {
            (Some(f), Some(l)) => format!("{}{}", f, l).to_uppercase(),
            (Some(f), None) => f.to_uppercase().to_string(),
            _ => "?".to_string(),
        }
    }
}

/// Created on login success, persisted through the platform storage, and
/// destroyed on logout or any 401 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SellerUser,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordPayload {
    pub token: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_initials() {
        let user = SellerUser {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            image: None,
        };
        assert_eq!(user.initials(), "AL");
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_session_roundtrip() {
        let session = Session {
            token: "tok_123".into(),
            user: SellerUser {
                id: 7,
                first_name: "Jo".into(),
                last_name: "Vega".into(),
                email: "jo@example.com".into(),
                image: Some("https://cdn.example.com/jo.png".into()),
            },
        };
        let raw = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, session);
    }
}
