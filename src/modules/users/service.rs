use anyhow::anyhow;
use tracing::{info, instrument};

use blogdeck_core::AppError;
use blogdeck_db::UserStore;
use blogdeck_models::{User, UserId};

pub struct UserService;

impl UserService {
    #[instrument(skip(users))]
    pub async fn get_users(users: &dyn UserStore) -> Result<Vec<User>, AppError> {
        let records = users.find_all().await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    #[instrument(skip(users))]
    pub async fn get_user(users: &dyn UserStore, id: UserId) -> Result<User, AppError> {
        users
            .find_by_id(id)
            .await?
            .map(User::from)
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    #[instrument(skip(users))]
    pub async fn delete_user(users: &dyn UserStore, id: UserId) -> Result<(), AppError> {
        if !users.delete_one(id).await?.deleted() {
            return Err(AppError::not_found(anyhow!("User not found")));
        }

        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
