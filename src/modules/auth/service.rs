use anyhow::anyhow;
use tracing::{info, instrument};

use blogdeck_auth::TokenService;
use blogdeck_core::{AppError, PasswordHasher};
use blogdeck_db::{StoreError, UserStore};
use blogdeck_models::{NewUser, UserRecord};

use super::model::{Credentials, LoginResponse, RegisterResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn register_user(
        users: &dyn UserStore,
        hasher: &PasswordHasher,
        credentials: Credentials,
    ) -> Result<RegisterResponse, AppError> {
        let password_hash = hasher.hash(&credentials.password).await?;

        let user = users
            .insert_one(NewUser {
                email: credentials.email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::DuplicateEmail => AppError::conflict(anyhow!("Email already registered")),
                other => AppError::internal(other),
            })?;

        info!(user_id = %user.id, "User registered");

        Ok(RegisterResponse {
            success: true,
            user_id: user.id,
        })
    }

    /// Unknown email and wrong password fail identically.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login_user(
        users: &dyn UserStore,
        hasher: &PasswordHasher,
        tokens: &TokenService,
        credentials: Credentials,
    ) -> Result<LoginResponse, AppError> {
        let user: Option<UserRecord> = users
            .find_by_email(&credentials.email)
            .await
            .map_err(AppError::internal)?;

        let Some(user) = user else {
            hasher.verify_dummy(&credentials.password).await?;
            return Err(AppError::invalid_credentials());
        };

        let is_valid = hasher
            .verify(&credentials.password, &user.password_hash)
            .await?;

        if !is_valid {
            return Err(AppError::invalid_credentials());
        }

        let token = tokens
            .issue(user.id.into_inner(), &user.email)
            .map_err(AppError::internal)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            success: true,
            token,
        })
    }
}
