//! JWT claim structure for bearer tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity carried by an access token.
///
/// The claims are trusted once the signature and expiry check out; nothing
/// here is looked up again, so a token stays valid for a user that has since
/// been deleted until it expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user ID
    pub user_id: Uuid,
    /// Subject email at issuance
    pub email: String,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            user_id: Uuid::nil(),
            email: "test@example.com".to_string(),
            iat: 1234567800,
            exp: 1234571400,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""user_id":"00000000-0000-0000-0000-000000000000""#));
        assert!(serialized.contains(r#""email":"test@example.com""#));
        assert!(serialized.contains(r#""exp":1234571400"#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"user_id":"6f1b7c8e-2a5d-4c3b-9e8f-0a1b2c3d4e5f","email":"user@test.com","iat":9999999900,"exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(
            claims.user_id.to_string(),
            "6f1b7c8e-2a5d-4c3b-9e8f-0a1b2c3d4e5f"
        );
        assert_eq!(claims.email, "user@test.com");
        assert_eq!(claims.exp, 9999999999);
    }
}
