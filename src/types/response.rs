use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[test]
    fn variants_map_to_200() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(
            ApiResponse::Ok(serde_json::json!({"message": "hi"}))
                .respond_to(&req)
                .status(),
            StatusCode::OK
        );
        assert_eq!(
            ApiResponse::<()>::EmptyOk.respond_to(&req).status(),
            StatusCode::OK
        );
    }
}
