use actix_http::Request;
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use std::sync::Arc;

use course_registry::db::postgres_service::PostgresService;
use course_registry::routes::configure_routes;
use course_registry::utils::session::SESSION_COOKIE;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(configure_routes)
    }
}

/// Session middleware with a throwaway key; Secure off for plain-HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// POST /register, returning the response status.
#[allow(dead_code)]
pub async fn register<S, B>(app: &S, name: &str, email: &str) -> StatusCode
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(serde_json::json!({ "name": name, "email": email }))
        .to_request();
    test::call_service(app, req).await.status()
}

/// POST /login and hand back the signed session cookie as a `name=value`
/// pair ready for a Cookie header.
#[allow(dead_code)]
pub async fn login_cookie<S, B>(app: &S, name: &str, email: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({ "name": name, "email": email }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let raw = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a session cookie")
        .to_str()
        .expect("cookie header is ascii");
    raw.split(';').next().unwrap().to_string()
}
