mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use entity::course::Model as CourseModel;

#[tokio::test]
async fn test_course_listing_returns_seeded_catalogue() {
    let ctx = TestContext::new().await;
    let tc = TestClient::new(ctx.db.clone());
    let app = test::init_service(tc.create_app()).await;

    // No identity cookie needed for the catalogue.
    let req = test::TestRequest::get().uri("/courses").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let courses: Vec<CourseModel> = test::read_body_json(resp).await;
    assert_eq!(courses.len(), 4);
    assert_eq!(courses[0].id, 1);
    assert_eq!(courses[0].title, "OOPs");
    assert!(courses
        .iter()
        .all(|c| c.description.as_deref().is_some_and(|d| !d.is_empty())));
}

#[tokio::test]
async fn test_my_courses_requires_identity() {
    let ctx = TestContext::new().await;
    let tc = TestClient::new(ctx.db.clone());
    let app = test::init_service(tc.create_app()).await;

    let req = test::TestRequest::get().uri("/my-courses").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_cookie_is_rejected() {
    let ctx = TestContext::new().await;
    let tc = TestClient::new(ctx.db.clone());
    let app = test::init_service(tc.create_app()).await;

    // A forged raw-id cookie fails the signature check and counts as no
    // session at all.
    let req = test::TestRequest::get()
        .uri("/my-courses")
        .insert_header(("Cookie", "registry_session=1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
