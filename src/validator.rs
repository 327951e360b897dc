use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use blogdeck_core::AppError;

/// Message for a body whose required fields are absent or empty.
///
/// Never names the missing field.
pub const MISSING_FIELDS: &str = "Missing required fields";

/// JSON body extractor that runs `validator` checks after deserializing.
///
/// Every failure is a 400. Requests model required fields as
/// `#[validate(required, length(min = 1))] Option<String>` so that an absent
/// field and an empty one are rejected the same way, with [`MISSING_FIELDS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                AppError::bad_request(anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|_| AppError::bad_request(anyhow!(MISSING_FIELDS)))?;

        Ok(ValidatedJson(value))
    }
}
