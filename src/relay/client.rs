//! Thin client for the API service. Every call that needs identity takes
//! the visitor's own cookie header; the relay holds no session of its own.

use reqwest::{header, redirect, Client, Response};
use serde_json::json;

pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        // The login 303 must reach the browser, not get followed here.
        let http = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn register(&self, name: &str, email: &str) -> Result<Response, reqwest::Error> {
        self.http
            .post(self.url("/register"))
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await
    }

    pub async fn login(&self, name: &str, email: &str) -> Result<Response, reqwest::Error> {
        self.http
            .post(self.url("/login"))
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await
    }

    pub async fn my_courses(&self, cookie: &str) -> Result<Response, reqwest::Error> {
        self.http
            .get(self.url("/my-courses"))
            .header(header::COOKIE, cookie)
            .send()
            .await
    }

    pub async fn courses(&self) -> Result<Response, reqwest::Error> {
        self.http.get(self.url("/courses")).send().await
    }

    pub async fn enroll(&self, cookie: &str, course_id: i32) -> Result<Response, reqwest::Error> {
        self.http
            .post(self.url("/enroll"))
            .header(header::COOKIE, cookie)
            .json(&json!({ "course_id": course_id }))
            .send()
            .await
    }

    pub async fn unenroll(&self, cookie: &str, course_id: i32) -> Result<Response, reqwest::Error> {
        self.http
            .delete(self.url("/unenroll"))
            .header(header::COOKIE, cookie)
            .json(&json!({ "course_id": course_id }))
            .send()
            .await
    }
}
