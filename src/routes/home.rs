use axum::response::Html;

/// Submission form plus the check-reply dialogs.
pub async fn index() -> Html<&'static str> {
	Html(include_str!("../../static/index.html"))
}

#[tokio::test]
async fn test_index_serves_check_reply_page() {
	use axum::response::IntoResponse;

	let response = index().await.into_response();
	assert_eq!(response.status(), axum::http::StatusCode::OK);
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
	let page = String::from_utf8(bytes.to_vec()).unwrap();
	assert!(page.contains("Check Reply"));
	assert!(page.contains("/getmessage?code="));
}
