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

    async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn create_user_with_initial_enrollments() {
        let (app, _db) = make_test_app().await;

        // "subject" is the legacy wire name for the enrollment list.
        let (status, json) = post_json(
            &app,
            "/user",
            json!({
                "id": "u1",
                "name": "Ada",
                "email": "ada@test.com",
                "subject": [
                    { "id": "CS101", "section": "1", "type": "lecture", "image": "" }
                ],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["id"], "u1");
        assert_eq!(json["data"]["subjects"][0]["id"], "CS101");
        assert_eq!(json["data"]["subjects"][0]["type"], "lecture");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (app, _db) = make_test_app().await;

        let user = json!({ "id": "u1", "name": "Ada", "email": "ada@test.com" });
        let (status, _) = post_json(&app, "/user", user.clone()).await;
        assert_eq!(status, StatusCode::CREATED);

        let dup = json!({ "id": "u2", "name": "Ada 2", "email": "ada@test.com" });
        let (status, json) = post_json(&app, "/user", dup).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn add_subject_to_existing_user() {
        let (app, _db) = make_test_app().await;

        post_json(
            &app,
            "/user",
            json!({ "id": "u1", "name": "Ada", "email": "ada@test.com" }),
        )
        .await;

        let (status, json) = post_json(
            &app,
            "/user/ada@test.com/subject",
            json!({ "id": "CS101", "section": "2", "type": "lab", "image": "" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
    }

    #[tokio::test]
    async fn add_subject_to_unknown_user_is_not_found() {
        let (app, _db) = make_test_app().await;

        let (status, json) = post_json(
            &app,
            "/user/ghost@test.com/subject",
            json!({ "id": "CS101" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
    }
}
