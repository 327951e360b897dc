//! # Blogdeck DB
//!
//! Persistence for the Blogdeck API.
//!
//! - [`store`]: the [`UserStore`] and [`PostStore`] traits the handlers consume
//! - [`postgres`]: PostgreSQL implementations using SQLx
//! - [`memory`]: in-memory implementations for tests and database-less runs
//!
//! # Example
//!
//! ```ignore
//! use blogdeck_db::{PgPostStore, PgUserStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url).await?;
//! run_migrations(&pool).await?;
//!
//! let users = PgUserStore::new(pool.clone());
//! let posts = PgPostStore::new(pool);
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

use sqlx::postgres::PgPoolOptions;

// Re-export commonly used types at crate root
pub use error::StoreError;
pub use memory::{MemoryPostStore, MemoryUserStore};
pub use postgres::{PgPostStore, PgUserStore};
pub use sqlx::PgPool;
pub use store::{DeleteResult, PostFilter, PostStore, UpdateResult, UserStore};

/// Connects a PostgreSQL pool.
///
/// The pool is cheaply cloneable and meant to be created once at startup and
/// shared by every store.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Applies the embedded migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
