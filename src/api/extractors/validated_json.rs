//! JSON extractor that runs `validator` rules after deserialization.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has already passed its validation rules.
///
/// Both malformed JSON and failed field rules surface as a 400 with
/// the offending messages joined into one string.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        if let Err(errors) = value.validate() {
            return Err(AppError::validation(join_messages(&errors)));
        }

        Ok(ValidatedJson(value))
    }
}

fn join_messages(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();
    for (field, errs) in errors.field_errors() {
        for err in errs {
            match &err.message {
                Some(msg) => messages.push(msg.to_string()),
                None => messages.push(format!("{} is invalid", field)),
            }
        }
    }
    messages.join(", ")
}
