use actix_web::{get, web};
use entity::course::Model as CourseModel;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::session::SessionContext;

/// A list of 0 or 1 courses, kept as a list for interface uniformity
/// with `/courses`.
#[get("/my-courses")]
async fn my_courses(
    session: SessionContext,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<CourseModel>> {
    let user_id = session.require_user()?;
    Ok(ApiResponse::Ok(db.enrolled_courses(user_id).await?))
}
