mod common;

use actix_web::{http::StatusCode, test};
use common::{client, client::TestClient, test_data, TestContext};

#[tokio::test]
async fn test_registration_flow_success() {
    let ctx = TestContext::new().await;
    let tc = TestClient::new(ctx.db.clone());
    let app = test::init_service(tc.create_app()).await;

    let user_data = test_data::sample_user();
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Registration successful");

    // Row exists and is unenrolled.
    let user = ctx
        .db
        .find_user_by_credentials(&user_data.name, &user_data.email)
        .await
        .expect("lookup failed")
        .expect("user missing after registration");
    assert_eq!(user.email, user_data.email);
    assert_eq!(user.course_id, None);
}

#[tokio::test]
async fn test_registration_duplicate_email_conflicts() {
    let ctx = TestContext::new().await;
    let tc = TestClient::new(ctx.db.clone());
    let app = test::init_service(tc.create_app()).await;

    assert_eq!(
        client::register(&app, "Ann", "ann@x.com").await,
        StatusCode::OK
    );

    // Same email, different name: still a conflict.
    assert_eq!(
        client::register(&app, "Somebody Else", "ann@x.com").await,
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_registration_rejects_invalid_email() {
    let ctx = TestContext::new().await;
    let tc = TestClient::new(ctx.db.clone());
    let app = test::init_service(tc.create_app()).await;

    assert_eq!(
        client::register(&app, "Ann", "not-an-email").await,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_registration_allows_blank_name() {
    let ctx = TestContext::new().await;
    let tc = TestClient::new(ctx.db.clone());
    let app = test::init_service(tc.create_app()).await;

    // Only the email is validated beyond type coercion.
    assert_eq!(
        client::register(&app, "", "blank@x.com").await,
        StatusCode::OK
    );
}
