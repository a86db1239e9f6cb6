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

    async fn seed_user(app: &Router) {
        let req = Request::builder()
            .method("POST")
            .uri("/user")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({ "id": "u1", "name": "Ada", "email": "ada@test.com" }).to_string(),
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

    async fn get_json(app: &Router, uri: &str) -> Value {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn update_user_name_and_email() {
        let (app, _db) = make_test_app().await;
        seed_user(&app).await;

        // The legacy surface addresses updates by user id.
        let status = put_json(
            &app,
            "/user/u1",
            json!({ "name": "Ada L.", "email": "lovelace@test.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json = get_json(&app, "/user/lovelace@test.com").await;
        assert_eq!(json["data"]["name"], "Ada L.");
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let (app, _db) = make_test_app().await;
        seed_user(&app).await;

        let status = put_json(&app, "/user/u1", json!({ "name": "Ada L." })).await;
        assert_eq!(status, StatusCode::OK);

        let json = get_json(&app, "/user/ada@test.com").await;
        assert_eq!(json["data"]["name"], "Ada L.");
        assert_eq!(json["data"]["email"], "ada@test.com");
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let (app, _db) = make_test_app().await;

        let status = put_json(&app, "/user/ghost", json!({ "name": "X" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
