//! Fake data generation.

mod posts;
mod users;

pub use posts::{generate_comments, generate_posts, seed_posts};
pub use users::{generate_users, seed_users};

use std::time::Instant;

use blogdeck_core::PasswordHasher;
use blogdeck_db::{PostStore, UserStore};

/// Plaintext password shared by every seeded account.
pub const SEED_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub users: usize,
    pub posts: usize,
    pub comments_per_post: usize,
}

impl SeedConfig {
    pub fn new(users: usize) -> Self {
        Self {
            users,
            posts: users * 2,
            comments_per_post: 3,
        }
    }

    pub fn with_posts(mut self, posts: usize) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_comments(mut self, comments_per_post: usize) -> Self {
        self.comments_per_post = comments_per_post;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
}

/// Seeds users, then posts authored by them with comments attached.
///
/// The seed password is hashed once and shared by every account.
pub async fn seed_all(
    users: &dyn UserStore,
    posts: &dyn PostStore,
    hasher: &PasswordHasher,
    config: SeedConfig,
) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!("🌱 Seeding database...");

    let password_hash = hasher.hash(SEED_PASSWORD).await.map_err(|e| e.error)?;

    let created_users = seed_users(users, config.users, &password_hash).await?;
    let authors: Vec<String> = created_users.iter().map(|u| u.email.clone()).collect();

    let (post_count, comment_count) =
        seed_posts(posts, config.posts, config.comments_per_post, &authors).await?;

    println!("✅ Seeding complete in {:?}", start_time.elapsed());
    println!("   Seeded accounts use the password: {}", SEED_PASSWORD);

    Ok(SeedSummary {
        users: created_users.len(),
        posts: post_count,
        comments: comment_count,
    })
}
