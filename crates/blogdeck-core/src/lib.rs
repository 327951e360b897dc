//! # Blogdeck Core
//!
//! Foundational types shared by every Blogdeck crate:
//!
//! - [`errors`]: the [`AppError`] type and its HTTP response conversion
//! - [`password`]: bcrypt hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use blogdeck_core::{AppError, PasswordHasher};
//!
//! let hasher = PasswordHasher::default();
//! let hash = hasher.hash("secure_password").await?;
//! assert!(hasher.verify("secure_password", &hash).await?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Post not found"));
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind, INVALID_CREDENTIALS};
pub use password::{PasswordHasher, hash_password, hash_password_with_cost, verify_password};
