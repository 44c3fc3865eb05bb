use actix_web::{http::header, post, web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::user::RLogin;
use crate::utils::session::SessionContext;

/// Identity lookup by claimed attributes, not authentication: there is no
/// password, a row matching both name and email is the whole check.
#[post("/login")]
async fn login(
    session: SessionContext,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> Result<HttpResponse, AppError> {
    let user = db
        .find_user_by_credentials(&body.name, &body.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    session.persist_user(user.id)?;
    info!(target: "audit", "User {} logged in.", user.email);

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/my-courses"))
        .finish())
}
