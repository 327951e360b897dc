//! # Blogdeck CLI
//!
//! Account creation and database seeding for Blogdeck development.
//!
//! The seeder works against the [`UserStore`](blogdeck_db::UserStore) and
//! [`PostStore`](blogdeck_db::PostStore) traits, so it can fill either the
//! PostgreSQL stores or the in-memory ones.
//!
//! ## Usage
//!
//! ```ignore
//! use blogdeck_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_posts(50).with_comments(3);
//! seed_all(&users, &posts, &hasher, config).await?;
//! ```

pub mod seeder;
