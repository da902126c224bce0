//! Payment flow tests (require Postgres)

use axum::http::{Method, StatusCode};
use fundlift_auth::UserRole;
use serial_test::serial;

use crate::common::{body_json, unique_email, TestApp};

async fn setup_live_campaign(app: &TestApp, target: &str) -> (String, String, uuid::Uuid) {
    let (owner_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;
    let (admin_token, _) = app.signup(UserRole::Admin, &unique_email("admin")).await;
    let campaign_id = app
        .create_live_campaign(&owner_token, &admin_token, target)
        .await;
    (owner_token, admin_token, campaign_id)
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn initiate_requires_a_live_campaign() {
    let app = TestApp::new().await.unwrap();
    let (investor_token, _) = app
        .signup(UserRole::Investor, &unique_email("investor"))
        .await;
    let (owner_token, _) = app
        .signup(UserRole::BusinessOwner, &unique_email("owner"))
        .await;

    // Unknown campaign
    let response = app
        .request(
            Method::POST,
            "/payments/initiate",
            Some(&investor_token),
            Some(serde_json::json!({
                "campaign_id": "4b7cbd63-6f1c-4dca-a0d3-52d86d20b011",
                "amount": "100.00",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Pending campaign: exists but not live
    let response = app
        .request(
            Method::POST,
            "/campaigns",
            Some(&owner_token),
            Some(serde_json::json!({
                "title": "Unreviewed",
                "description": "Still pending",
                "country": "KE",
                "target_amount": "1000.00",
            })),
        )
        .await;
    let campaign_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            Method::POST,
            "/payments/initiate",
            Some(&investor_token),
            Some(serde_json::json!({
                "campaign_id": campaign_id,
                "amount": "100.00",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn full_payment_flow_credits_the_campaign() {
    let app = TestApp::new().await.unwrap();
    let (_, admin_token, campaign_id) = setup_live_campaign(&app, "1000.00").await;
    let (investor_token, _) = app
        .signup(UserRole::Investor, &unique_email("investor"))
        .await;

    // Initiate: transaction goes pending -> processing with a stub session
    let response = app
        .request(
            Method::POST,
            "/payments/initiate",
            Some(&investor_token),
            Some(serde_json::json!({
                "campaign_id": campaign_id,
                "amount": "250.00",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let session = body_json(response).await;
    assert_eq!(session["status"], "processing");
    let txn_id = session["transaction_id"].as_str().unwrap().to_string();
    assert_eq!(
        session["session_id"].as_str().unwrap(),
        format!("stub_session_{}", txn_id)
    );
    // Checkout URL is built from the configured base
    assert_eq!(
        session["checkout_url"].as_str().unwrap(),
        format!(
            "http://localhost:3000/payments/stub-checkout?ref={}",
            txn_id
        )
    );

    // Gateway callback confirms success
    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({
                "transaction_id": txn_id,
                "gateway_reference": "stub_ref_1",
                "status": "completed",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let txn = body_json(response).await;
    assert_eq!(txn["status"], "completed");
    assert_eq!(txn["gateway_reference"], "stub_ref_1");
    assert!(txn["completed_at"].is_string());

    // The campaign is credited and still live
    let response = app
        .request(Method::GET, &format!("/campaigns/{}", campaign_id), None, None)
        .await;
    let campaign = body_json(response).await;
    assert_eq!(campaign["raised_amount"], "250.00");
    assert_eq!(campaign["status"], "live");

    // Replayed callback must not double-count
    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({
                "transaction_id": txn_id,
                "gateway_reference": "stub_ref_1",
                "status": "completed",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request(Method::GET, &format!("/campaigns/{}", campaign_id), None, None)
        .await;
    assert_eq!(body_json(response).await["raised_amount"], "250.00");

    // Visible to the investor and to admins, not to strangers
    let response = app
        .request(
            Method::GET,
            &format!("/payments/{}", txn_id),
            Some(&investor_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(
            Method::GET,
            &format!("/payments/{}", txn_id),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (stranger_token, _) = app
        .signup(UserRole::Investor, &unique_email("stranger"))
        .await;
    let response = app
        .request(
            Method::GET,
            &format!("/payments/{}", txn_id),
            Some(&stranger_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // And it shows up in the investor's history
    let response = app
        .request(Method::GET, "/payments/my", Some(&investor_token), None)
        .await;
    let mine = body_json(response).await;
    assert!(mine
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].as_str() == Some(txn_id.as_str())));
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn reaching_the_target_completes_the_campaign() {
    let app = TestApp::new().await.unwrap();
    let (_, _, campaign_id) = setup_live_campaign(&app, "500.00").await;
    let (investor_token, _) = app
        .signup(UserRole::Investor, &unique_email("investor"))
        .await;

    let response = app
        .request(
            Method::POST,
            "/payments/initiate",
            Some(&investor_token),
            Some(serde_json::json!({
                "campaign_id": campaign_id,
                "amount": "500.00",
            })),
        )
        .await;
    let txn_id = body_json(response).await["transaction_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({
                "transaction_id": txn_id,
                "gateway_reference": "stub_ref_2",
                "status": "completed",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(Method::GET, &format!("/campaigns/{}", campaign_id), None, None)
        .await;
    let campaign = body_json(response).await;
    assert_eq!(campaign["status"], "completed");
    assert!(campaign["completed_at"].is_string());

    // A completed campaign no longer accepts contributions
    let response = app
        .request(
            Method::POST,
            "/payments/initiate",
            Some(&investor_token),
            Some(serde_json::json!({
                "campaign_id": campaign_id,
                "amount": "10.00",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn failed_payments_leave_the_campaign_untouched() {
    let app = TestApp::new().await.unwrap();
    let (_, _, campaign_id) = setup_live_campaign(&app, "1000.00").await;
    let (investor_token, _) = app
        .signup(UserRole::Investor, &unique_email("investor"))
        .await;

    let response = app
        .request(
            Method::POST,
            "/payments/initiate",
            Some(&investor_token),
            Some(serde_json::json!({
                "campaign_id": campaign_id,
                "amount": "250.00",
            })),
        )
        .await;
    let txn_id = body_json(response).await["transaction_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({
                "transaction_id": txn_id,
                "gateway_reference": "stub_ref_3",
                "status": "failed",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "failed");

    let response = app
        .request(Method::GET, &format!("/campaigns/{}", campaign_id), None, None)
        .await;
    assert_eq!(body_json(response).await["raised_amount"], "0.00");
}

#[tokio::test]
#[serial]
#[ignore] // Requires Postgres - run locally
async fn refunds_debit_the_campaign() {
    let app = TestApp::new().await.unwrap();
    let (_, _, campaign_id) = setup_live_campaign(&app, "1000.00").await;
    let (investor_token, _) = app
        .signup(UserRole::Investor, &unique_email("investor"))
        .await;

    let response = app
        .request(
            Method::POST,
            "/payments/initiate",
            Some(&investor_token),
            Some(serde_json::json!({
                "campaign_id": campaign_id,
                "amount": "250.00",
            })),
        )
        .await;
    let txn_id = body_json(response).await["transaction_id"]
        .as_str()
        .unwrap()
        .to_string();

    // A refund callback for a transaction that never completed is rejected
    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({
                "transaction_id": txn_id,
                "gateway_reference": "stub_refund_1",
                "status": "refunded",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({
                "transaction_id": txn_id,
                "gateway_reference": "stub_ref_4",
                "status": "completed",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(Method::GET, &format!("/campaigns/{}", campaign_id), None, None)
        .await;
    assert_eq!(body_json(response).await["raised_amount"], "250.00");

    // Gateway reports the payment refunded: transaction moves to refunded
    // and the campaign's total is corrected
    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({
                "transaction_id": txn_id,
                "gateway_reference": "stub_refund_1",
                "status": "refunded",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let txn = body_json(response).await;
    assert_eq!(txn["status"], "refunded");
    assert_eq!(txn["gateway_reference"], "stub_refund_1");

    let response = app
        .request(Method::GET, &format!("/campaigns/{}", campaign_id), None, None)
        .await;
    let campaign = body_json(response).await;
    assert_eq!(campaign["raised_amount"], "0.00");
    assert_eq!(campaign["status"], "live");

    // Refunded is terminal: a second refund is rejected
    let response = app
        .request(
            Method::POST,
            "/payments/confirm",
            None,
            Some(serde_json::json!({
                "transaction_id": txn_id,
                "gateway_reference": "stub_refund_1",
                "status": "refunded",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request(Method::GET, &format!("/campaigns/{}", campaign_id), None, None)
        .await;
    assert_eq!(body_json(response).await["raised_amount"], "0.00");
}

#[tokio::test]
async fn stub_checkout_page_is_served() {
    let app = TestApp::new_without_database().await.unwrap();
    let response = app
        .request(
            Method::GET,
            "/payments/stub-checkout?ref=txn-123",
            None,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}
