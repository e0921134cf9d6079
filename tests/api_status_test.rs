//! Integration tests for the status API

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::test_utils::{
        body_to_string, test_app, test_app_missing_corpus, test_app_missing_credential,
    };

    async fn get_status(app: axum::Router) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
        (status, body)
    }

    /// Tests that a fully configured app reports ready with no reason
    #[tokio::test]
    async fn it_reports_ready() {
        let (app, _dir) = test_app("http://localhost:2222");

        let (status, body) = get_status(app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ready"], true);
        assert!(body.get("reason").is_none());
    }

    /// Tests that the missing-corpus condition is reported with its
    /// specific message
    #[tokio::test]
    async fn it_reports_the_missing_corpus_reason() {
        let (app, _dir) = test_app_missing_corpus("http://localhost:2222");

        let (status, body) = get_status(app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ready"], false);
        assert!(
            body["reason"]
                .as_str()
                .unwrap()
                .contains("Legal text file not found")
        );
    }

    /// Tests that the missing-credential condition is reported with
    /// its specific message
    #[tokio::test]
    async fn it_reports_the_missing_credential_reason() {
        let (app, _dir) = test_app_missing_credential("http://localhost:2222");

        let (status, body) = get_status(app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ready"], false);
        assert!(
            body["reason"]
                .as_str()
                .unwrap()
                .contains("OPENAI_API_KEY")
        );
    }
}
