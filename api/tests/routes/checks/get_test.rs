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

    async fn seed_session_with_checks(app: &Router) {
        let req = Request::builder()
            .method("POST")
            .uri("/check")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "sid": "CS101",
                    "name": "CS101-W1",
                    "section": "1",
                    "passcode": ["7421"],
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        for student in ["S1", "S2", "S3"] {
            let req = Request::builder()
                .method("POST")
                .uri("/check/CS101-W1/std")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    json!({ "std": student, "passcodecheck": "7421" }).to_string(),
                ))
                .unwrap();
            let response = app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn get_session_for_subject_includes_ordered_checks() {
        let (app, _db) = make_test_app().await;
        seed_session_with_checks(&app).await;

        let (status, json) = get_json(&app, "/check/CS101").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["sid"], "CS101");
        assert_eq!(json["data"]["name"], "CS101-W1");

        let checks = json["data"]["checks"].as_array().unwrap();
        let students: Vec<&str> = checks
            .iter()
            .map(|c| c["student_id"].as_str().unwrap())
            .collect();
        assert_eq!(students, ["S1", "S2", "S3"]);

        // Timestamps are rendered in the display zone.
        for check in checks {
            let submitted_at = check["submitted_at"].as_str().unwrap();
            assert!(submitted_at.ends_with("+07:00"), "got {submitted_at}");
        }
    }

    #[tokio::test]
    async fn get_session_for_unknown_subject_is_not_found() {
        let (app, _db) = make_test_app().await;

        let (status, json) = get_json(&app, "/check/PHY999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn list_session_checks_preserves_append_order() {
        let (app, _db) = make_test_app().await;
        seed_session_with_checks(&app).await;

        let (status, json) = get_json(&app, "/checkname/CS101-W1/check").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);

        let students: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["student_id"].as_str().unwrap())
            .collect();
        assert_eq!(students, ["S1", "S2", "S3"]);
    }

    #[tokio::test]
    async fn list_checks_for_unknown_session_is_not_found() {
        let (app, _db) = make_test_app().await;

        let (status, _) = get_json(&app, "/checkname/ghost/check").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
