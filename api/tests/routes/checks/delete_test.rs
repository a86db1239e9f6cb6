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

    async fn create_session(app: &Router, name: &str) {
        let req = Request::builder()
            .method("POST")
            .uri("/check")
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({ "sid": "CS101", "name": name, "passcode": ["7421"] }).to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    async fn check_in(app: &Router, name: &str, student: &str) {
        let req = Request::builder()
            .method("POST")
            .uri(format!("/check/{name}/std"))
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({ "std": student, "passcodecheck": "7421" }).to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    async fn send_delete(app: &Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("DELETE")
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

    async fn list_students(app: &Router, name: &str) -> Vec<String> {
        let req = Request::builder()
            .method("GET")
            .uri(format!("/checkname/{name}/check"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["student_id"].as_str().unwrap().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn delete_session_by_name() {
        let (app, _db) = make_test_app().await;
        create_session(&app, "CS101-W1").await;

        let (status, json) = send_delete(&app, "/check/CS101-W1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);

        // Session is gone; a second delete finds nothing.
        let (status, _) = send_delete(&app, "/check/CS101-W1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn remove_student_pulls_every_matching_check() {
        let (app, _db) = make_test_app().await;
        create_session(&app, "CS101-W2").await;
        for student in ["S1", "S2", "S1"] {
            check_in(&app, "CS101-W2", student).await;
        }

        let (status, json) = send_delete(&app, "/checkname/CS101-W2/check/S1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);

        assert_eq!(list_students(&app, "CS101-W2").await, ["S2"]);
    }

    #[tokio::test]
    async fn remove_unknown_student_is_a_no_op_success() {
        let (app, _db) = make_test_app().await;
        create_session(&app, "CS101-W3").await;
        check_in(&app, "CS101-W3", "S1").await;

        let (status, json) = send_delete(&app, "/checkname/CS101-W3/check/S9").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);

        assert_eq!(list_students(&app, "CS101-W3").await, ["S1"]);
    }

    #[tokio::test]
    async fn remove_student_in_unknown_session_is_not_found() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send_delete(&app, "/checkname/ghost/check/S1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
    }
}
