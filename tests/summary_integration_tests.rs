mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{build_test_app, entrepreneur_payload, get, idea_payload, investor_payload, post_json};
use investmatch_backend::entities::ideas;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::json;

#[tokio::test]
async fn test_root_greeting() {
    let (app, _db) = build_test_app().await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Hello from InvestMatch Backend!"));
}

#[tokio::test]
async fn test_all_data_on_empty_database() {
    let (app, _db) = build_test_app().await;

    let (status, body) = get(&app, "/api/summary/all-data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["entrepreneurs"], json!([]));
    assert_eq!(
        body["summary"],
        json!({
            "totalEntrepreneurs": 0,
            "totalIdeas": 0,
            "totalInvestors": 0,
            "totalFundingRequested": 0.0,
            "totalInvestmentCapacity": 0.0
        })
    );
}

#[tokio::test]
async fn test_all_data_totals() {
    let (app, _db) = build_test_app().await;

    post_json(&app, "/api/entrepreneurs/register", &entrepreneur_payload("a@example.com", "HealthTech")).await;
    post_json(&app, "/api/ideas/submit", &idea_payload("ScanCare", "healthcare", json!(50000))).await;
    post_json(&app, "/api/ideas/submit", &idea_payload("FarmLink", "agritech", json!(25000))).await;
    post_json(&app, "/api/investors/proposals", &investor_payload("v@example.com", "Healthcare", 100000.0)).await;

    let (status, body) = get(&app, "/api/summary/all-data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["totalEntrepreneurs"], 1);
    assert_eq!(body["summary"]["totalIdeas"], 2);
    assert_eq!(body["summary"]["totalInvestors"], 1);
    assert_eq!(body["summary"]["totalFundingRequested"], 75000.0);
    assert_eq!(body["summary"]["totalInvestmentCapacity"], 100000.0);
    assert_eq!(body["ideas"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_health_counts() {
    let (app, _db) = build_test_app().await;

    post_json(&app, "/api/investors/proposals", &investor_payload("v@example.com", "FinTech", 100000.0)).await;

    let (status, body) = get(&app, "/api/summary/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API is working");
    assert_eq!(body["counts"], json!({ "entrepreneurs": 0, "ideas": 0, "investors": 1 }));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_stats() {
    let (app, _db) = build_test_app().await;

    for (email, sector) in [
        ("a@example.com", "FinTech"),
        ("b@example.com", "fintech"),
        ("c@example.com", "EdTech"),
    ] {
        post_json(&app, "/api/entrepreneurs/register", &entrepreneur_payload(email, sector)).await;
    }
    post_json(&app, "/api/ideas/submit", &idea_payload("ScanCare", "healthcare", json!(40000))).await;
    post_json(&app, "/api/ideas/submit", &idea_payload("FarmLink", "agritech", json!(20000))).await;
    post_json(&app, "/api/investors/proposals", &investor_payload("v@example.com", "FinTech", 100000.0)).await;
    post_json(
        &app,
        "/api/auth/register",
        &json!({ "name": "Asha Rao", "email": "asha@example.com", "password": "secret123" }),
    )
    .await;

    let (status, body) = get(&app, "/api/summary/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["counts"],
        json!({ "entrepreneurs": 3, "ideas": 2, "investors": 1, "users": 1 })
    );
    assert_eq!(body["totals"]["fundingRequested"], 60000.0);
    assert_eq!(body["totals"]["averageFundingRequested"], 30000.0);
    assert_eq!(body["ideasByStatus"][0], json!({ "status": "Submitted", "count": 2 }));
    assert_eq!(body["topSectors"][0]["count"], 2);
    assert_eq!(body["topSectors"][1], json!({ "sector": "EdTech", "count": 1 }));
    assert_eq!(body["topSectorInterests"], json!([{ "sector": "FinTech", "count": 1 }]));
}

#[tokio::test]
async fn test_matching() {
    let (app, db) = build_test_app().await;

    post_json(
        &app,
        "/api/ideas/submit",
        &idea_payload("ScanCare", "AI-powered healthcare diagnostics", json!(50000)),
    )
    .await;
    post_json(
        &app,
        "/api/ideas/submit",
        &idea_payload("MegaHospital", "Chain of healthcare centres", json!(900000000)),
    )
    .await;
    post_json(&app, "/api/investors/proposals", &investor_payload("big@example.com", "healthcare", 100000.0)).await;
    post_json(&app, "/api/investors/proposals", &investor_payload("small@example.com", "healthcare", 10000.0)).await;
    post_json(&app, "/api/investors/proposals", &investor_payload("fin@example.com", "FinTech", 5000000.0)).await;

    // Only submitted ideas are matched
    let now = Utc::now();
    ideas::ActiveModel {
        entrepreneur_name: Set("Ravi Kumar".to_string()),
        idea_title: Set("ClinicOS".to_string()),
        description: Set("healthcare scheduling".to_string()),
        funding_needed: Set(20000.0),
        email: Set("ravi@example.com".to_string()),
        status: Set("Approved".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let (status, body) = get(&app, "/api/summary/matching").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMatches"], 1);
    let group = &body["matches"][0];
    assert_eq!(group["idea"]["ideaTitle"], "ScanCare");
    let investors: Vec<&str> = group["investors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["email"].as_str().unwrap())
        .collect();
    assert_eq!(investors, ["big@example.com"]);
}

#[tokio::test]
async fn test_matching_without_investors() {
    let (app, _db) = build_test_app().await;

    post_json(&app, "/api/ideas/submit", &idea_payload("ScanCare", "healthcare", json!(50000))).await;

    let (status, body) = get(&app, "/api/summary/matching").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "matches": [], "totalMatches": 0 }));
}
