//! Assistant integration tests
//!
//! Covers degraded mode without a backend and the full completion path
//! against a mock OpenAI-compatible provider.

#[cfg(test)]
mod tests {
    use crate::common::assertions::AssistantReplyAssertions;
    use crate::common::fixtures::AssistantConfigFactory;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use workbench_rs::config::AssistantConfig;
    use workbench_rs::core::assistant::{CompletionBackend, CompletionClient, CompletionMessage};
    use workbench_rs::core::intent::{
        CONNECTION_FALLBACK, DEFAULT_GREETING, EMPTY_COMPLETION_FALLBACK,
    };
    use workbench_rs::core::models::HealthStatus;
    use workbench_rs::{AssistantService, Intent, NavigationKey, PortalError};

    const IT_MESSAGE: &str = "My printer is broken, the wifi has issues and I cant \
                              access my email, please help fix this error";

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        })
    }

    fn client_for(server: &MockServer) -> CompletionClient {
        CompletionClient::new(&AssistantConfigFactory::pointing_at(&server.uri())).unwrap()
    }

    // ==================== Degraded Mode ====================

    /// Test that small talk gets the greeting when no backend exists
    #[tokio::test]
    async fn test_degraded_mode_greets() {
        let service = AssistantService::new(None);

        let reply = service.chat("good morning", &[]).await;

        assert_eq!(reply.response, DEFAULT_GREETING);
        assert!(reply.success);
        assert!(reply.error.is_none());
        reply.assert_classified_as(Intent::General);
        assert!(reply.suggestions.contains(&NavigationKey::Dashboard));
    }

    /// Test that confident intents get their script when no backend exists
    #[tokio::test]
    async fn test_degraded_mode_uses_scripts() {
        let service = AssistantService::new(None);

        let reply = service.chat(IT_MESSAGE, &[]).await;

        reply.assert_classified_as(Intent::ItSupport);
        assert!(reply.success);
        assert!(reply.response.contains("Submit a Ticket"));
        assert_eq!(reply.suggestions[0], NavigationKey::ItSupport);
    }

    /// Test the health report without a backend
    #[tokio::test]
    async fn test_degraded_health_reports_unconfigured() {
        let service = AssistantService::new(None);

        let health = service.health().await;

        assert_eq!(health.status, HealthStatus::Degraded);
        assert!(!health.configured);
        assert!(health.error_message.is_none());
    }

    // ==================== Completion Client ====================

    /// Test a completion round trip against a mock provider
    #[tokio::test]
    async fn test_completion_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [{ "role": "user", "content": "ping" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("pong")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let content = client
            .complete(vec![CompletionMessage::user("ping")])
            .await
            .unwrap();

        assert_eq!(content.as_deref(), Some("pong"));
    }

    /// Test that an empty completion comes back as None
    #[tokio::test]
    async fn test_empty_completion_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("")))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let content = client
            .complete(vec![CompletionMessage::user("ping")])
            .await
            .unwrap();

        assert!(content.is_none());
    }

    /// Test that a provider error surfaces as a completion error
    #[tokio::test]
    async fn test_provider_error_is_completion_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .complete(vec![CompletionMessage::user("ping")])
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::Completion(_)));
        assert!(err.to_string().contains("500"));
    }

    /// Test that construction fails without an API key
    #[tokio::test]
    async fn test_missing_api_key_fails_construction() {
        let config = AssistantConfig {
            api_key: None,
            ..AssistantConfigFactory::pointing_at("http://localhost:9")
        };

        let err = CompletionClient::new(&config).unwrap_err();

        assert!(matches!(err, PortalError::Config(_)));
    }

    /// Test the health probe against a healthy provider
    #[tokio::test]
    async fn test_health_probe_reports_healthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let health = client.health_check().await;

        assert_eq!(health.status, HealthStatus::Healthy);
        assert!(health.configured);
        assert!(health.error_message.is_none());
    }

    /// Test the health probe against a failing provider
    #[tokio::test]
    async fn test_health_probe_reports_unhealthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let health = client.health_check().await;

        assert_eq!(health.status, HealthStatus::Unhealthy);
        assert!(health.configured);
        assert!(health.error_message.unwrap().contains("503"));
    }

    // ==================== Service over a Backend ====================

    /// Test that the service hands the completion text through
    #[tokio::test]
    async fn test_service_passes_completion_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "messages": [
                    { "role": "system" },
                    { "role": "user", "content": "what can you do" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(completion_body("Quite a lot, actually.")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let service = AssistantService::new(Some(Arc::new(client)));

        let reply = service.chat("what can you do", &[]).await;

        assert_eq!(reply.response, "Quite a lot, actually.");
        reply.assert_answered();
    }

    /// Test that chat history travels with the request
    #[tokio::test]
    async fn test_history_travels_with_the_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "messages": [
                    { "role": "system" },
                    { "role": "user", "content": "hi" },
                    { "role": "assistant", "content": "hello!" },
                    { "role": "user", "content": "thanks" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(completion_body("any time")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let service = AssistantService::new(Some(Arc::new(client)));

        let history = [
            workbench_rs::ChatTurn {
                text: "hi".to_string(),
                is_bot: false,
            },
            workbench_rs::ChatTurn {
                text: "hello!".to_string(),
                is_bot: true,
            },
        ];
        let reply = service.chat("thanks", &history).await;

        assert_eq!(reply.response, "any time");
    }

    /// Test that a backend failure falls back without dropping the analysis
    #[tokio::test]
    async fn test_service_reports_backend_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let service = AssistantService::new(Some(Arc::new(client)));

        let reply = service.chat("good morning", &[]).await;

        assert!(!reply.success);
        assert!(reply.error.is_some());
        assert_eq!(reply.response, CONNECTION_FALLBACK);
        reply.assert_classified_as(Intent::General);
        assert!(reply.suggestions.contains(&NavigationKey::Dashboard));
    }

    /// Test that a confident intent keeps its script on backend failure
    #[tokio::test]
    async fn test_failure_fallback_prefers_scripts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let service = AssistantService::new(Some(Arc::new(client)));

        let reply = service.chat(IT_MESSAGE, &[]).await;

        assert!(!reply.success);
        assert!(reply.response.contains("Submit a Ticket"));
    }

    /// Test the fallback for a completion with no content
    #[tokio::test]
    async fn test_service_falls_back_on_empty_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("")))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let service = AssistantService::new(Some(Arc::new(client)));

        let reply = service.chat("good morning", &[]).await;

        assert!(reply.success);
        assert!(reply.error.is_none());
        assert_eq!(reply.response, EMPTY_COMPLETION_FALLBACK);
    }
}
