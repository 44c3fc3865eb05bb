use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use entity::course::Model as CourseModel;
use serde::Deserialize;
use tracing::warn;

use crate::relay::client::ApiClient;
use crate::relay::pages;
use crate::utils::session::SESSION_COOKIE;

#[derive(Deserialize)]
pub struct CredentialsForm {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct EnrollmentForm {
    pub course_id: i32,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
}

pub fn configure_relay_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(register_form)
        .service(register)
        .service(login_form)
        .service(login)
        .service(dashboard)
        .service(courses)
        .service(logout)
        .service(enroll)
        .service(unenroll);
}

/// The visitor's own API session cookie, ready to forward. The relay never
/// shares one client session across visitors.
fn forwarded_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| format!("{}={}", c.name(), c.value()))
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn gateway_error(e: reqwest::Error) -> HttpResponse {
    warn!("API request failed: {e}");
    HttpResponse::BadGateway().body(format!("Error: {e}"))
}

/// Pull the human-readable message out of an API error body.
async fn api_error_text(res: reqwest::Response) -> String {
    match res.json::<serde_json::Value>().await {
        Ok(body) => body["message"]
            .as_str()
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => "unknown error".to_string(),
    }
}

#[get("/")]
async fn home() -> HttpResponse {
    redirect_to("/login")
}

#[get("/register")]
async fn register_form() -> HttpResponse {
    html(pages::register_page())
}

#[post("/register")]
async fn register(api: web::Data<ApiClient>, form: web::Form<CredentialsForm>) -> HttpResponse {
    match api.register(&form.name, &form.email).await {
        Ok(res) if res.status().is_success() => redirect_to("/login"),
        Ok(res) => HttpResponse::Ok().body(format!("Error: {}", api_error_text(res).await)),
        Err(e) => gateway_error(e),
    }
}

#[get("/login")]
async fn login_form(query: web::Query<LoginQuery>) -> HttpResponse {
    html(pages::login_page(query.error.as_deref()))
}

#[post("/login")]
async fn login(api: web::Data<ApiClient>, form: web::Form<CredentialsForm>) -> HttpResponse {
    match api.login(&form.name, &form.email).await {
        Ok(res) if res.status().is_success() || res.status().is_redirection() => {
            let mut out = redirect_to("/dashboard");
            // Hand the API's session cookie to the visitor's browser.
            for value in res.headers().get_all(reqwest::header::SET_COOKIE) {
                if let Some(cookie) = value
                    .to_str()
                    .ok()
                    .and_then(|raw| header::HeaderValue::from_str(raw).ok())
                {
                    out.headers_mut().append(header::SET_COOKIE, cookie);
                }
            }
            out
        }
        Ok(_) => redirect_to("/login?error=Invalid%20credentials"),
        Err(e) => gateway_error(e),
    }
}

#[get("/dashboard")]
async fn dashboard(req: HttpRequest, api: web::Data<ApiClient>) -> HttpResponse {
    let Some(cookie) = forwarded_cookie(&req) else {
        return redirect_to("/login");
    };
    match api.my_courses(&cookie).await {
        Ok(res) if res.status() == reqwest::StatusCode::UNAUTHORIZED => redirect_to("/login"),
        Ok(res) if res.status().is_success() => match res.json::<Vec<CourseModel>>().await {
            Ok(course_list) => html(pages::dashboard_page(&course_list)),
            Err(e) => gateway_error(e),
        },
        Ok(res) => HttpResponse::Ok().body(format!("Error: {}", api_error_text(res).await)),
        Err(e) => gateway_error(e),
    }
}

#[get("/courses")]
async fn courses(api: web::Data<ApiClient>) -> HttpResponse {
    match api.courses().await {
        Ok(res) if res.status().is_success() => match res.json::<Vec<CourseModel>>().await {
            Ok(courses) => html(pages::courses_page(&courses)),
            Err(e) => gateway_error(e),
        },
        Ok(res) => HttpResponse::Ok().body(format!("Error: {}", api_error_text(res).await)),
        Err(e) => gateway_error(e),
    }
}

#[get("/logout")]
async fn logout() -> HttpResponse {
    let mut out = redirect_to("/login");
    let mut expired = Cookie::new(SESSION_COOKIE, "");
    expired.set_path("/");
    if let Err(e) = out.add_removal_cookie(&expired) {
        warn!("failed to expire session cookie: {e}");
    }
    out
}

#[post("/enroll")]
async fn enroll(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    form: web::Form<EnrollmentForm>,
) -> HttpResponse {
    let Some(cookie) = forwarded_cookie(&req) else {
        return redirect_to("/login");
    };
    match api.enroll(&cookie, form.course_id).await {
        Ok(res) if res.status().is_success() => redirect_to("/dashboard"),
        Ok(res) => {
            HttpResponse::Ok().body(format!("Enrollment failed: {}", api_error_text(res).await))
        }
        Err(e) => gateway_error(e),
    }
}

#[post("/unenroll")]
async fn unenroll(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    form: web::Form<EnrollmentForm>,
) -> HttpResponse {
    let Some(cookie) = forwarded_cookie(&req) else {
        return redirect_to("/login");
    };
    match api.unenroll(&cookie, form.course_id).await {
        Ok(res) if res.status().is_success() => redirect_to("/dashboard"),
        Ok(res) => {
            HttpResponse::Ok().body(format!("Unenrollment failed: {}", api_error_text(res).await))
        }
        Err(e) => gateway_error(e),
    }
}
