use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::course::REnrollment;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::session::SessionContext;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("/enroll")]
async fn enroll(
    session: SessionContext,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<REnrollment>,
) -> ApiResult<Response> {
    let user_id = session.require_user()?;
    db.enroll_user(user_id, body.course_id).await?;

    Ok(ApiResponse::Ok(Response {
        message: "Enrolled successfully".to_string(),
    }))
}
