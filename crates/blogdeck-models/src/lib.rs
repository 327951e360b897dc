//! # Blogdeck Models
//!
//! Domain entities stored by the Blogdeck API.
//!
//! - [`ids`]: strongly-typed UUID identifiers
//! - [`users`]: user records and their public view
//! - [`posts`]: posts with their embedded comments
//!
//! Request DTOs live next to the handlers that accept them; this crate only
//! holds what the stores read and write.

pub mod ids;
pub mod posts;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use ids::{CommentId, PostId, UserId};
pub use posts::{Comment, CommentUpdate, NewPost, Post, PostUpdate};
pub use users::{NewUser, User, UserRecord};
