use std::sync::Arc;

use blogdeck_auth::TokenService;
use blogdeck_config::{CorsConfig, JwtConfig, PasswordConfig};
use blogdeck_core::PasswordHasher;
use blogdeck_db::{
    MemoryPostStore, MemoryUserStore, PgPostStore, PgUserStore, PostStore, UserStore,
    init_db_pool, run_migrations,
};
use tracing::{info, warn};

/// Shared, read-only application state.
///
/// Everything here is fixed at startup: the stores share one connection
/// pool, and the token service holds the signing key it was built with.
#[derive(Clone, Debug)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    pub tokens: Arc<TokenService>,
    pub hasher: PasswordHasher,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        posts: Arc<dyn PostStore>,
        tokens: TokenService,
        hasher: PasswordHasher,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            users,
            posts,
            tokens: Arc::new(tokens),
            hasher,
            cors_config,
        }
    }

    /// State backed by in-memory stores.
    pub fn in_memory(tokens: TokenService, hasher: PasswordHasher, cors_config: CorsConfig) -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryPostStore::new()),
            tokens,
            hasher,
            cors_config,
        )
    }
}

/// Builds the state from the environment.
///
/// Connects to PostgreSQL and applies migrations when `DATABASE_URL` is set,
/// otherwise falls back to in-memory stores.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_dev_secret() {
        warn!("JWT_SECRET is not set, using the development secret");
    }

    let tokens = TokenService::from_config(&jwt_config);
    let hasher = PasswordHasher::new(PasswordConfig::from_env().bcrypt_cost);
    // First use creates the dummy hash; do it before serving logins.
    hasher
        .verify_dummy("")
        .await
        .map_err(|e| e.error.context("invalid BCRYPT_COST"))?;
    let cors_config = CorsConfig::from_env();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        warn!("DATABASE_URL is not set, data will be kept in memory only");
        return Ok(AppState::in_memory(tokens, hasher, cors_config));
    };

    let pool = init_db_pool(&database_url).await?;
    run_migrations(&pool).await?;
    info!("Connected to database and applied migrations");

    Ok(AppState::new(
        Arc::new(PgUserStore::new(pool.clone())),
        Arc::new(PgPostStore::new(pool)),
        tokens,
        hasher,
        cors_config,
    ))
}
