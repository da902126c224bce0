//! Authentication and authorization tests
//!
//! These run without a database: every request here is rejected (or
//! answered) before any query executes.

use axum::http::{Method, StatusCode};
use fundlift_auth::{TokenClaims, UserRole};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::common::{body_json, token_for, TestApp, TestConfig};

#[tokio::test]
async fn health_check_is_public() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_route_names_the_api() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app.request(Method::GET, "/", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn me_requires_a_token() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app.request(Method::GET, "/auth/me", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_rejects_garbage_token() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app
        .request(Method::GET, "/auth/me", Some("not-a-jwt"), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn owner_dashboard_rejects_investors() {
    let app = TestApp::new_without_database().await.unwrap();
    let token = token_for(UserRole::Investor);
    let response = app
        .request(Method::GET, "/campaigns/my", Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn campaign_creation_rejects_investors() {
    let app = TestApp::new_without_database().await.unwrap();
    let token = token_for(UserRole::Investor);
    let response = app
        .request(
            Method::POST,
            "/campaigns",
            Some(&token),
            Some(serde_json::json!({
                "title": "T", "description": "D", "country": "KE",
                "target_amount": "100.00",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_routes_reject_non_admins() {
    let app = TestApp::new_without_database().await.unwrap();

    for role in [UserRole::Investor, UserRole::BusinessOwner] {
        let token = token_for(role);
        for uri in [
            "/admin/campaigns/pending",
            "/admin/users",
            "/admin/audit-logs",
            "/admin/stats",
        ] {
            let response = app.request(Method::GET, uri, Some(&token), None).await;
            assert_eq!(
                response.status(),
                StatusCode::FORBIDDEN,
                "{} should be admin-only",
                uri
            );
        }
    }
}

#[tokio::test]
async fn payment_initiation_rejects_business_owners() {
    let app = TestApp::new_without_database().await.unwrap();
    let token = token_for(UserRole::BusinessOwner);
    let response = app
        .request(
            Method::POST,
            "/payments/initiate",
            Some(&token),
            Some(serde_json::json!({
                "campaign_id": "4b7cbd63-6f1c-4dca-a0d3-52d86d20b011",
                "amount": "100.00",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn signup_rejects_invalid_email() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app
        .request(
            Method::POST,
            "/auth/signup",
            None,
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "password123",
                "role": "investor",
                "country": "KE",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn signup_rejects_short_password() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app
        .request(
            Method::POST,
            "/auth/signup",
            None,
            Some(serde_json::json!({
                "email": "amina@example.com",
                "password": "short",
                "role": "investor",
                "country": "KE",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_rejects_unknown_role() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app
        .request(
            Method::POST,
            "/auth/signup",
            None,
            Some(serde_json::json!({
                "email": "amina@example.com",
                "password": "password123",
                "role": "superuser",
                "country": "KE",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn confirm_rejects_malformed_body() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({ "transaction_id": "not-a-uuid" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn issued_tokens_carry_the_expected_claims() {
    let token = token_for(UserRole::BusinessOwner);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    let decoded = decode::<TokenClaims>(
        &token,
        &DecodingKey::from_secret(TestConfig::from_env().jwt_secret.as_ref()),
        &validation,
    )
    .expect("token should validate");

    let claims = decoded.claims;
    assert_eq!(claims.role, UserRole::BusinessOwner);
    assert_eq!(claims.email, "test@example.com");
    assert_eq!(claims.exp - claims.iat, 3600);
}
