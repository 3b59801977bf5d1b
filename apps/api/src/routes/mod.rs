pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/formats", get(handlers::handle_list_formats))
        .route("/api/v1/classify", post(handlers::handle_classify))
        .route("/api/v1/render", post(handlers::handle_render))
        .route("/api/v1/generate", post(handlers::handle_generate))
        // Agent endpoint used by the portfolio front end
        .route("/a2ui-agent/a2a/query", post(handlers::handle_query))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::state::test_support::{test_state, StubLlm};
    use crate::templates::skeletons;

    async fn call(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(StubLlm::replying(""), None));
        let (status, body) = call(app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "folio-api");
        assert_eq!(body["model"], "gemini-2.5-flash");
        assert_eq!(body["result_cache"], false);
    }

    #[tokio::test]
    async fn test_formats_lists_every_format() {
        let app = build_router(test_state(StubLlm::replying(""), None));
        let (status, body) = call(app, "GET", "/api/v1/formats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["registry_version"], crate::templates::REGISTRY_VERSION);

        let formats = body["formats"].as_array().unwrap();
        assert_eq!(formats.len(), 17);
        let podcast = formats.iter().find(|f| f["format"] == "podcast").unwrap();
        assert_eq!(podcast["structured_reply"], false);
        let quiz = formats.iter().find(|f| f["format"] == "quiz").unwrap();
        assert_eq!(quiz["structured_reply"], true);
    }

    #[tokio::test]
    async fn test_classify_endpoint() {
        let app = build_router(test_state(StubLlm::replying(""), None));
        let (status, body) = call(
            app.clone(),
            "POST",
            "/api/v1/classify",
            Some(json!({"message": "awards: 2024"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"format": "awards", "topic": "2024"}));

        let (_, body) = call(
            app,
            "POST",
            "/api/v1/classify",
            Some(json!({"message": "tell me a random fact"})),
        )
        .await;
        assert_eq!(body["format"], Value::Null);
    }

    #[tokio::test]
    async fn test_render_endpoint_previews_instruction() {
        let llm = StubLlm::replying("");
        let app = build_router(test_state(llm.clone(), None));
        let (status, body) = call(
            app,
            "POST",
            "/api/v1/render",
            Some(json!({"format": "certs", "topic": "cloud"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["format"], "certs");
        assert!(body["text"].as_str().unwrap().contains("FOCUS TOPIC: cloud"));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_unknown_format_is_400() {
        let llm = StubLlm::replying("");
        let app = build_router(test_state(llm.clone(), None));
        let (status, body) = call(
            app,
            "POST",
            "/api/v1/generate",
            Some(json!({"format": "nonexistent_format", "topic": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_returns_a2ui() {
        let app = build_router(test_state(StubLlm::replying(skeletons::CERTS), None));
        let (status, body) = call(
            app,
            "POST",
            "/api/v1/generate",
            Some(json!({"format": "certs"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "content");
        assert_eq!(body["surfaceId"], "portfolioContent");
        assert_eq!(body["source"]["provider"], "Credly / Google");
        assert!(body["a2ui"][0]["beginRendering"].is_object());
    }

    #[tokio::test]
    async fn test_generate_llm_failure_is_502() {
        let app = build_router(test_state(StubLlm::failing(), None));
        let (status, body) = call(
            app,
            "POST",
            "/api/v1/generate",
            Some(json!({"format": "quiz"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_query_rejects_empty_message() {
        let app = build_router(test_state(StubLlm::replying(""), None));
        let (status, body) = call(
            app,
            "POST",
            "/a2ui-agent/a2a/query",
            Some(json!({"message": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_query_general_chat() {
        let app = build_router(test_state(StubLlm::replying("Seattle."), None));
        let (status, body) = call(
            app,
            "POST",
            "/a2ui-agent/a2a/query",
            Some(json!({"message": "where does he live", "session_id": "abc"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "chat");
        assert_eq!(body["text"], "Seattle.");
        assert!(body["request_id"].is_string());
    }
}
