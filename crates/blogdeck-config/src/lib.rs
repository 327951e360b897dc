//! # Blogdeck Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`password`]: bcrypt work factor
//! - [`cors`]: allowed origins
//! - [`server`]: bind address
//!
//! Every loader falls back to a default when its variable is absent or does
//! not parse, so `from_env()` never fails.
//!
//! # Example
//!
//! ```ignore
//! use blogdeck_config::{CorsConfig, JwtConfig, PasswordConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let password_config = PasswordConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod password;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use password::PasswordConfig;
pub use server::ServerConfig;
