//! Integration tests for GET /api/verify/{token}

mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tc_api::create_app;
use tc_api::middleware::create_cors;
use tc_shared::config::CorsConfig;

use common::{quiet_mail, test_state, token_from_link, ISSUER, SECRET};

fn mint(secret: &str, issuer: &str, issued_at: chrono::DateTime<Utc>) -> String {
    let claims = json!({
        "text": "HELLO",
        "email": "user@example.com",
        "iat": issued_at.timestamp(),
        "exp": (issued_at + Duration::hours(24)).timestamp(),
        "iss": issuer,
    });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

#[actix_web::test]
async fn test_convert_then_verify_round_trip() {
    let app = test::init_service(create_app(
        test_state(quiet_mail()),
        create_cors(&CorsConfig::default()),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/convert")
        .set_json(json!({ "text": "hello world", "email": "user@example.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = token_from_link(body["paymentLink"].as_str().unwrap());

    // Verification is repeatable
    let mut seen = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri(&format!("/api/verify/{}", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["text"], "HELLO WORLD");
        assert_eq!(body["data"]["email"], "user@example.com");
        seen.push(body["data"].clone());
    }
    assert_eq!(seen[0], seen[1]);
}

#[actix_web::test]
async fn test_verify_accepts_token_from_same_secret() {
    let app = test::init_service(create_app(
        test_state(quiet_mail()),
        create_cors(&CorsConfig::default()),
    ))
    .await;

    let token = mint(SECRET, ISSUER, Utc::now());
    let req = test::TestRequest::get()
        .uri(&format!("/api/verify/{}", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_verify_rejects_bad_tokens_uniformly() {
    let app = test::init_service(create_app(
        test_state(quiet_mail()),
        create_cors(&CorsConfig::default()),
    ))
    .await;

    let valid = mint(SECRET, ISSUER, Utc::now());
    let (head, signature) = valid.rsplit_once('.').unwrap();
    let mut sig: Vec<char> = signature.chars().collect();
    let mid = sig.len() / 2;
    sig[mid] = if sig[mid] == 'A' { 'B' } else { 'A' };
    let tampered = format!("{}.{}", head, sig.into_iter().collect::<String>());

    let expired = mint(SECRET, ISSUER, Utc::now() - Duration::hours(25));
    let wrong_secret = mint("some-other-secret", ISSUER, Utc::now());
    let wrong_issuer = mint(SECRET, "someone-else", Utc::now());

    for token in [
        tampered.as_str(),
        expired.as_str(),
        wrong_secret.as_str(),
        wrong_issuer.as_str(),
        "garbage",
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/verify/{}", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "token: {}", token);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid or expired token");
        assert_eq!(body["code"], "INVALID_TOKEN");
    }
}
