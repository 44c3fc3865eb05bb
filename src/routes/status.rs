use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: String,
    pub students_registered: u64,
    pub courses_available: u64,
}

/// Two independent counts; exact consistency between them is not promised.
#[get("/status")]
async fn status(db: web::Data<Arc<PostgresService>>) -> ApiResult<Response> {
    let students_registered = db.count_users().await?;
    let courses_available = db.count_courses().await?;

    Ok(ApiResponse::Ok(Response {
        status: "OK".to_string(),
        students_registered,
        courses_available,
    }))
}
