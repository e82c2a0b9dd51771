#[cfg(test)]
mod tests {
    use crate::config::CompletionConfig;
    use crate::tools::completion::{ChatClient, Completion};
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_config(server: &MockServer) -> CompletionConfig {
        CompletionConfig {
            api_url: format!("{}/openai/v1/chat/completions", server.uri()),
            api_key: Some("test-key".to_string()),
            timeout: Duration::from_secs(5),
            ..CompletionConfig::default()
        }
    }

    fn chat_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        })
    }

    #[tokio::test]
    async fn returns_assistant_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_string_contains("llama-3.1-70b-versatile"))
            .and(body_string_contains("expert HTML parser"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("[{\"x\":1}]")))
            .expect(1)
            .mount(&server)
            .await;

        let client = ChatClient::new(completion_config(&server)).unwrap();
        let reply = client
            .complete("You are an expert HTML parser.", "Parse this.")
            .await
            .unwrap();

        assert_eq!(reply, "[{\"x\":1}]");
    }

    #[tokio::test]
    async fn error_status_is_a_completion_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = ChatClient::new(completion_config(&server)).unwrap();
        let err = client.complete("sys", "user").await.unwrap_err();

        assert_eq!(err.kind(), "completion_error");
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn empty_choices_is_a_completion_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let client = ChatClient::new(completion_config(&server)).unwrap();
        let err = client.complete("sys", "user").await.unwrap_err();

        assert_eq!(err.kind(), "completion_error");
        assert!(err.to_string().contains("no choices"));
    }
}
