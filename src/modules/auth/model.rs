use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use blogdeck_models::UserId;

/// Email and password, both present and non-empty.
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

fn credentials(email: Option<String>, password: Option<String>) -> Option<Credentials> {
    match (email, password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Some(Credentials { email, password })
        }
        _ => None,
    }
}

impl LoginRequest {
    pub fn into_credentials(self) -> Option<Credentials> {
        credentials(self.email, self.password)
    }
}

impl RegisterRequest {
    pub fn into_credentials(self) -> Option<Credentials> {
        credentials(self.email, self.password)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_empty_fields_fail_validation() {
        let missing = LoginRequest {
            email: Some("a@x.com".to_string()),
            password: None,
        };
        assert!(missing.validate().is_err());

        let empty = LoginRequest {
            email: Some(String::new()),
            password: Some("pw".to_string()),
        };
        assert!(empty.validate().is_err());
        assert!(empty.into_credentials().is_none());
    }

    #[test]
    fn test_complete_request_yields_credentials() {
        let request = RegisterRequest {
            email: Some("a@x.com".to_string()),
            password: Some("pw1".to_string()),
        };
        assert!(request.validate().is_ok());

        let credentials = request.into_credentials().unwrap();
        assert_eq!(credentials.email, "a@x.com");
        assert_eq!(credentials.password, "pw1");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            email: "a@x.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{:?}", credentials).contains("hunter2"));
    }
}
