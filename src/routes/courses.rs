use actix_web::{get, web};
use entity::course::Model as CourseModel;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/courses")]
async fn courses(db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<CourseModel>> {
    Ok(ApiResponse::Ok(db.list_courses().await?))
}
