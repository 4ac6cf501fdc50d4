use bakery_storefront_api::routes::health::health_check;

#[tokio::test]
async fn health_check_reports_ok_in_the_standard_envelope() {
    let body = health_check().await.0;

    assert_eq!(body.message, "Health check");
    assert_eq!(body.data.expect("health data").status, "ok");

    // Health carries an empty meta block, not a paginated one.
    let meta = body.meta.expect("meta");
    assert!(meta.page.is_none());
    assert!(meta.per_page.is_none());
    assert!(meta.total.is_none());
    assert!(meta.total_pages.is_none());
}
