//! Admin surface tests (require Postgres)

use axum::http::{Method, StatusCode};
use fundlift_auth::UserRole;
use serial_test::serial;

use crate::common::{body_json, unique_email, TestApp};

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn kyc_review_flow() {
    let app = TestApp::new().await.unwrap();
    let (_, investor_id) = app
        .signup(UserRole::Investor, &unique_email("investor"))
        .await;
    let (admin_token, admin_id) = app.signup(UserRole::Admin, &unique_email("admin")).await;

    // New profiles start with pending KYC
    let response = app
        .request(
            Method::GET,
            "/admin/users?kyc_status=pending",
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let users = body_json(response).await;
    assert!(users
        .as_array()
        .unwrap()
        .iter()
        .any(|u| u["id"] == investor_id.to_string()));

    // Verify the investor, recording the reviewing admin
    let response = app
        .request(
            Method::POST,
            &format!("/admin/users/{}/kyc", investor_id),
            Some(&admin_token),
            Some(serde_json::json!({ "status": "verified" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["kyc_status"], "verified");
    assert_eq!(user["kyc_updated_by"], admin_id.to_string());
    assert!(user["kyc_updated_at"].is_string());

    // Unknown user
    let response = app
        .request(
            Method::POST,
            "/admin/users/4b7cbd63-6f1c-4dca-a0d3-52d86d20b011/kyc",
            Some(&admin_token),
            Some(serde_json::json!({ "status": "rejected" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn role_filter_on_user_listing() {
    let app = TestApp::new().await.unwrap();
    let (_, owner_id) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (admin_token, _) = app.signup(UserRole::Admin, &unique_email("admin")).await;

    let response = app
        .request(
            Method::GET,
            "/admin/users?role=business_owner",
            Some(&admin_token),
            None,
        )
        .await;
    let users = body_json(response).await;
    let users = users.as_array().unwrap();
    assert!(users.iter().any(|u| u["id"] == owner_id.to_string()));
    assert!(users.iter().all(|u| u["role"] == "business_owner"));
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn audit_log_records_moderation_actions() {
    let app = TestApp::new().await.unwrap();
    let (owner_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (admin_token, admin_id) = app.signup(UserRole::Admin, &unique_email("admin")).await;

    let campaign_id = app
        .create_live_campaign(&owner_token, &admin_token, "1000.00")
        .await;

    let response = app
        .request(
            Method::GET,
            &format!("/admin/audit-logs?action=CAMPAIGN_APPROVED&actor_id={}", admin_id),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();
    assert!(entries.iter().any(|e| {
        e["action"] == "CAMPAIGN_APPROVED"
            && e["details"]["campaign_id"] == campaign_id.to_string()
    }));
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn signup_and_login_are_audited() {
    let app = TestApp::new().await.unwrap();
    let email = unique_email("audited");
    let (_, user_id) = app.signup(UserRole::Investor, &email).await;

    let response = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(serde_json::json!({ "email": email, "password": "password123" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (admin_token, _) = app.signup(UserRole::Admin, &unique_email("admin")).await;
    for action in ["USER_SIGNUP", "USER_LOGIN"] {
        let response = app
            .request(
                Method::GET,
                &format!("/admin/audit-logs?action={}&actor_id={}", action, user_id),
                Some(&admin_token),
                None,
            )
            .await;
        let entries = body_json(response).await;
        assert!(
            !entries.as_array().unwrap().is_empty(),
            "{} should be audited",
            action
        );
    }
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn stats_reflect_platform_activity() {
    let app = TestApp::new().await.unwrap();
    let (owner_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (admin_token, _) = app.signup(UserRole::Admin, &unique_email("admin")).await;
    app.create_live_campaign(&owner_token, &admin_token, "1000.00")
        .await;

    let response = app
        .request(Method::GET, "/admin/stats", Some(&admin_token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    assert!(stats["total_users"].as_i64().unwrap() >= 2);
    assert!(stats["total_campaigns"].as_i64().unwrap() >= 1);
    assert!(stats["live_campaigns"].as_i64().unwrap() >= 1);
    assert!(stats["total_raised"].is_string());
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn pending_queue_only_shows_pending_campaigns() {
    let app = TestApp::new().await.unwrap();
    let (owner_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (admin_token, _) = app.signup(UserRole::Admin, &unique_email("admin")).await;

    // One live, one still pending
    app.create_live_campaign(&owner_token, &admin_token, "1000.00")
        .await;
    let response = app
        .request(
            Method::POST,
            "/campaigns",
            Some(&owner_token),
            Some(serde_json::json!({
                "title": "Still pending",
                "description": "Awaiting review",
                "country": "KE",
                "target_amount": "500.00",
            })),
        )
        .await;
    let pending_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            Method::GET,
            "/admin/campaigns/pending",
            Some(&admin_token),
            None,
        )
        .await;
    let queue = body_json(response).await;
    let queue = queue.as_array().unwrap();
    assert!(queue.iter().any(|c| c["id"].as_str() == Some(&pending_id)));
    assert!(queue.iter().all(|c| c["status"] == "pending"));
}
