mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::Value;
use sqlx::Row;
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn confirmed_rows(app: &TestApp, class_id: &str) -> i64 {
    let row = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE class_id = ? AND status = 'CONFIRMED'")
        .bind(class_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    row.get("count")
}

async fn get_occupancy(app: &TestApp, class_id: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/classes/{}", class_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["occupancy"].clone()
}

#[tokio::test]
async fn test_full_class_rejects_further_bookings() {
    let app = TestApp::new().await;
    let u1 = app.register("u1").await;
    let u2 = app.register("u2").await;
    let u3 = app.register("u3").await;

    let start = Utc::now() + Duration::days(1);
    let class_id = app.create_class(&u1, "Small Class", 2, start, start + Duration::hours(1)).await;

    assert_eq!(app.book(&u1, &class_id).await.status(), StatusCode::OK);
    assert_eq!(app.book(&u2, &class_id).await.status(), StatusCode::OK);

    let third = app.book(&u3, &class_id).await;
    assert_eq!(third.status(), StatusCode::CONFLICT);
    let body = parse_body(third).await;
    assert_eq!(body["error"], "Class is fully booked");

    // Ledger unchanged by the failed attempt
    assert_eq!(confirmed_rows(&app, &class_id).await, 2);

    let occupancy = get_occupancy(&app, &class_id).await;
    assert_eq!(occupancy["fullness"], "FULL");
    assert_eq!(occupancy["remaining_spots"], 0);
}

#[tokio::test]
async fn test_eight_of_ten_is_near_full() {
    let app = TestApp::new().await;
    let admin = app.register("admin").await;

    let start = Utc::now() + Duration::days(1);
    let class_id = app.create_class(&admin, "Popular Class", 10, start, start + Duration::hours(1)).await;

    for i in 0..8 {
        let member = app.register(&format!("member{}", i)).await;
        assert_eq!(app.book(&member, &class_id).await.status(), StatusCode::OK);
    }

    let occupancy = get_occupancy(&app, &class_id).await;
    assert_eq!(occupancy["fullness"], "NEAR_FULL");
    assert_eq!(occupancy["remaining_spots"], 2);
    assert_eq!(occupancy["booked_count"], 8);
}

#[tokio::test]
async fn test_last_seat_race_admits_exactly_one() {
    let app = TestApp::new().await;
    let admin = app.register("admin").await;

    let start = Utc::now() + Duration::days(1);
    let class_id = app.create_class(&admin, "Contested Class", 5, start, start + Duration::hours(1)).await;

    for i in 0..4 {
        let member = app.register(&format!("early{}", i)).await;
        assert_eq!(app.book(&member, &class_id).await.status(), StatusCode::OK);
    }

    let racer_a = app.register("racer_a").await;
    let racer_b = app.register("racer_b").await;

    let (res_a, res_b) = tokio::join!(
        app.book(&racer_a, &class_id),
        app.book(&racer_b, &class_id)
    );

    let statuses = [res_a.status(), res_b.status()];
    let winners = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let losers = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();

    assert_eq!(winners, 1, "exactly one racer gets the last seat, got {:?}", statuses);
    assert_eq!(losers, 1);

    // The capacity invariant holds
    assert_eq!(confirmed_rows(&app, &class_id).await, 5);
}

#[tokio::test]
async fn test_capacity_one_goes_straight_to_full() {
    let app = TestApp::new().await;
    let u1 = app.register("solo1").await;
    let u2 = app.register("solo2").await;

    let start = Utc::now() + Duration::days(1);
    let class_id = app.create_class(&u1, "Private Session", 1, start, start + Duration::hours(1)).await;

    let occupancy = get_occupancy(&app, &class_id).await;
    assert_eq!(occupancy["fullness"], "OPEN");

    assert_eq!(app.book(&u1, &class_id).await.status(), StatusCode::OK);

    let occupancy = get_occupancy(&app, &class_id).await;
    assert_eq!(occupancy["fullness"], "FULL");

    assert_eq!(app.book(&u2, &class_id).await.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_cancellation_frees_a_seat() {
    let app = TestApp::new().await;
    let u1 = app.register("w1").await;
    let u2 = app.register("w2").await;

    let start = Utc::now() + Duration::days(1);
    let class_id = app.create_class(&u1, "Tiny Class", 1, start, start + Duration::hours(1)).await;

    let booking = parse_body(app.book(&u1, &class_id).await).await;
    assert_eq!(app.book(&u2, &class_id).await.status(), StatusCode::CONFLICT);

    app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri(format!("/api/v1/bookings/{}/cancel", booking["id"].as_str().unwrap()))
            .header(axum::http::header::COOKIE, format!("access_token={}", u1.access_token))
            .header("X-CSRF-Token", &u1.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(app.book(&u2, &class_id).await.status(), StatusCode::OK);
    assert_eq!(confirmed_rows(&app, &class_id).await, 1);
}
