use reviewsense_web::handlers::health_check;

#[tokio::test]
async fn health_reports_ok() {
    let response = health_check().await;
    let body = response.0;

    assert_eq!(body.status, "ok");
    assert!(!body.message.is_empty());
}
