use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RUserRegister;
use crate::utils::webutils::valid_email;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("/register")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<Response> {
    if !valid_email(&body.email) {
        return Err(AppError::Validation(format!(
            "invalid email address: {}",
            body.email
        )));
    }

    let body = body.into_inner();
    let email = body.email.clone();
    db.register_user(body.name, body.email).await?;

    info!(target: "audit", "User registered: {}", email);

    Ok(ApiResponse::Ok(Response {
        message: "Registration successful".to_string(),
    }))
}
