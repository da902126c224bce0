//! Campaign lifecycle tests (require Postgres)

use axum::http::{Method, StatusCode};
use fundlift_auth::UserRole;
use serial_test::serial;

use crate::common::{body_json, unique_email, TestApp};

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn submission_and_approval_lifecycle() {
    let app = TestApp::new().await.unwrap();
    let (owner_token, owner_id) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (admin_token, _) = app.signup(UserRole::Admin, &unique_email("admin")).await;

    // Submit a campaign: starts pending
    let response = app
        .request(
            Method::POST,
            "/campaigns",
            Some(&owner_token),
            Some(serde_json::json!({
                "title": "Solar kiosks",
                "description": "Charging kiosks for rural markets",
                "country": "KE",
                "target_amount": "50000.00",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let campaign = body_json(response).await;
    assert_eq!(campaign["status"], "pending");
    assert_eq!(campaign["owner_id"], owner_id.to_string());
    let id = campaign["id"].as_str().unwrap().to_string();

    // The public marketplace defaults to live listings
    let response = app.request(Method::GET, "/campaigns", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert!(!listed
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == campaign["id"]));

    // The owner dashboard shows it regardless of status
    let response = app
        .request(Method::GET, "/campaigns/my", Some(&owner_token), None)
        .await;
    let mine = body_json(response).await;
    assert!(mine
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == campaign["id"]));

    // Admin approves: pending -> live, approver recorded
    let response = app
        .request(
            Method::POST,
            &format!("/admin/campaigns/{}/approve", id),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let approved = body_json(response).await;
    assert_eq!(approved["status"], "live");
    assert!(approved["approved_by"].is_string());
    assert!(approved["approved_at"].is_string());

    // Now the marketplace lists it
    let response = app.request(Method::GET, "/campaigns", None, None).await;
    let listed = body_json(response).await;
    assert!(listed
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == campaign["id"]));

    // A duplicate approval is an invalid transition
    let response = app
        .request(
            Method::POST,
            &format!("/admin/campaigns/{}/approve", id),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn rejection_records_the_reason() {
    let app = TestApp::new().await.unwrap();
    let (owner_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (admin_token, _) = app.signup(UserRole::Admin, &unique_email("admin")).await;

    let response = app
        .request(
            Method::POST,
            "/campaigns",
            Some(&owner_token),
            Some(serde_json::json!({
                "title": "Incomplete pitch",
                "description": "No plan yet",
                "country": "KE",
                "target_amount": "1000.00",
            })),
        )
        .await;
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    // Rejection requires a reason
    let response = app
        .request(
            Method::POST,
            &format!("/admin/campaigns/{}/reject", id),
            Some(&admin_token),
            Some(serde_json::json!({ "reason": "" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request(
            Method::POST,
            &format!("/admin/campaigns/{}/reject", id),
            Some(&admin_token),
            Some(serde_json::json!({ "reason": "Business plan missing" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rejected = body_json(response).await;
    assert_eq!(rejected["status"], "rejected");
    assert_eq!(rejected["rejection_reason"], "Business plan missing");

    // Rejected is terminal: approving it now fails
    let response = app
        .request(
            Method::POST,
            &format!("/admin/campaigns/{}/approve", id),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn only_the_owner_can_edit() {
    let app = TestApp::new().await.unwrap();
    let (owner_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (other_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("other"))
        .await;

    let response = app
        .request(
            Method::POST,
            "/campaigns",
            Some(&owner_token),
            Some(serde_json::json!({
                "title": "Original title",
                "description": "Description",
                "country": "KE",
                "target_amount": "1000.00",
            })),
        )
        .await;
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            Method::PUT,
            &format!("/campaigns/{}", id),
            Some(&other_token),
            Some(serde_json::json!({ "title": "Hijacked" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The owner's partial update goes through
    let response = app
        .request(
            Method::PUT,
            &format!("/campaigns/{}", id),
            Some(&owner_token),
            Some(serde_json::json!({ "title": "Better title" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Better title");
    assert_eq!(updated["description"], "Description");
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn live_campaigns_are_frozen() {
    let app = TestApp::new().await.unwrap();
    let (owner_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (admin_token, _) = app.signup(UserRole::Admin, &unique_email("admin")).await;

    let id = app
        .create_live_campaign(&owner_token, &admin_token, "1000.00")
        .await;

    let response = app
        .request(
            Method::PUT,
            &format!("/campaigns/{}", id),
            Some(&owner_token),
            Some(serde_json::json!({ "title": "Too late" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn missing_campaign_is_404() {
    let app = TestApp::new().await.unwrap();
    let response = app
        .request(
            Method::GET,
            "/campaigns/4b7cbd63-6f1c-4dca-a0d3-52d86d20b011",
            None,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
