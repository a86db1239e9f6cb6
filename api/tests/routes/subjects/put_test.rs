#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::helpers::make_test_app;

    async fn seed_subject(app: &Router) {
        let req = Request::builder()
            .method("POST")
            .uri("/subject")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "id": "CS101",
                    "name": "Intro to CS",
                    "term": "1",
                    "year": "2026",
                    "section": ["1"],
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    async fn put_json(app: &Router, uri: &str, body: Value) -> StatusCode {
        let req = Request::builder()
            .method("PUT")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(req).await.unwrap().status()
    }

    async fn get_data(app: &Router, uri: &str) -> Value {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        json["data"].clone()
    }

    #[tokio::test]
    async fn update_subject_fields() {
        let (app, _db) = make_test_app().await;
        seed_subject(&app).await;

        let status = put_json(
            &app,
            "/subject/CS101",
            json!({ "name": "Intro to Computing", "section": ["1", "2"] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let data = get_data(&app, "/subject/CS101").await;
        assert_eq!(data["name"], "Intro to Computing");
        assert_eq!(data["sections"], json!(["1", "2"]));
        // Untouched fields survive.
        assert_eq!(data["term"], "1");
        assert_eq!(data["year"], "2026");
    }

    #[tokio::test]
    async fn update_unknown_subject_is_not_found() {
        let (app, _db) = make_test_app().await;

        let status = put_json(&app, "/subject/ghost", json!({ "name": "X" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
