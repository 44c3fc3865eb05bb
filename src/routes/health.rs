use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: String,
}

#[get("/health")]
async fn health(db: web::Data<Arc<PostgresService>>) -> ApiResult<Response> {
    db.ping()
        .await
        .map_err(|_| AppError::Internal("database connection failed".to_string()))?;

    Ok(ApiResponse::Ok(Response {
        status: "ok".to_string(),
    }))
}
