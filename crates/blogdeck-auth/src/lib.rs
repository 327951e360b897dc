//! # Blogdeck Auth
//!
//! Bearer token issuance and verification.
//!
//! - [`claims`]: the [`Claims`] carried by every token
//! - [`jwt`]: the [`TokenService`] and its [`TokenError`] kinds
//!
//! # Example
//!
//! ```ignore
//! use blogdeck_auth::TokenService;
//! use blogdeck_config::JwtConfig;
//!
//! let tokens = TokenService::from_config(&JwtConfig::from_env());
//!
//! let token = tokens.issue(user_id, "user@example.com")?;
//! let claims = tokens.verify(&token)?;
//! assert_eq!(claims.user_id, user_id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TokenError, TokenService};
