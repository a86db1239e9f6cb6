#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::helpers::make_test_app;

    async fn seed_subject(app: &Router) {
        let req = Request::builder()
            .method("POST")
            .uri("/subject")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({ "id": "CS101", "name": "Intro to CS" }).to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    async fn send(app: &Router, method: &str, uri: &str) -> StatusCode {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.clone().oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn delete_subject_by_id() {
        let (app, _db) = make_test_app().await;
        seed_subject(&app).await;

        assert_eq!(send(&app, "DELETE", "/subject/CS101").await, StatusCode::OK);
        assert_eq!(
            send(&app, "GET", "/subject/CS101").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn delete_unknown_subject_is_not_found() {
        let (app, _db) = make_test_app().await;
        assert_eq!(
            send(&app, "DELETE", "/subject/ghost").await,
            StatusCode::NOT_FOUND
        );
    }
}
