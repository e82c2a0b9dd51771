#[cfg(test)]
mod tests {
    use crate::config::PortalConfig;
    use crate::engine::SearchStrategy;
    use crate::tools::fetch::utils::validate_response;
    use crate::tools::fetch::TransportStrategy;
    use crate::types::{SearchQuery, StrategyKind};
    use reqwest::StatusCode;
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn padded_html(marker: &str) -> String {
        let filler = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut body = String::new();
        while body.len() < 400 {
            body.push_str(filler);
        }
        format!("<!DOCTYPE html><html><body>{marker} {body}</body></html>")
    }

    fn portal_config(server: &MockServer) -> PortalConfig {
        PortalConfig {
            form_url: format!("{}/pePI/jsp/patentes/PatenteSearchBasico.jsp", server.uri()),
            submit_url: format!("{}/pePI/servlet/PatenteServletController", server.uri()),
            timeout: Duration::from_secs(5),
            ..PortalConfig::default()
        }
    }

    fn form_page() -> String {
        padded_html(
            r#"<form method="post">
                <input type="hidden" name="ViewState" value="state-token-42">
                <input type="hidden" name="sessao" value="xyz">
                <input type="text" name="textoPesquisa">
            </form>"#,
        )
    }

    #[tokio::test]
    async fn replays_form_state_and_returns_results_page() {
        let server = MockServer::start().await;
        let config = portal_config(&server);

        Mock::given(method("GET"))
            .and(path("/pePI/jsp/patentes/PatenteSearchBasico.jsp"))
            .respond_with(ResponseTemplate::new(200).set_body_string(form_page()))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/pePI/servlet/PatenteServletController"))
            .and(header("Referer", config.form_url.as_str()))
            .and(body_string_contains("ViewState=state-token-42"))
            .and(body_string_contains("sessao=xyz"))
            .and(body_string_contains("textoPesquisa=paracetamol"))
            .and(body_string_contains("tipoSearchBas=1"))
            .and(body_string_contains("searchBasico=Pesquisar"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(padded_html("RESULTS-MARKER")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let strategy = TransportStrategy::new(config).unwrap();
        let query = SearchQuery::new("paracetamol").unwrap();
        let doc = strategy.attempt(&query).await.unwrap();

        assert_eq!(doc.produced_by, StrategyKind::Transport);
        assert!(doc.html.contains("RESULTS-MARKER"));
    }

    #[tokio::test]
    async fn form_page_error_fails_the_attempt() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pePI/jsp/patentes/PatenteSearchBasico.jsp"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let strategy = TransportStrategy::new(portal_config(&server)).unwrap();
        let query = SearchQuery::new("paracetamol").unwrap();
        let err = strategy.attempt(&query).await.unwrap_err();

        assert_eq!(err.kind(), "transport_error");
        assert!(err.to_string().contains("form page"));
    }

    #[tokio::test]
    async fn gated_results_page_fails_the_attempt() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pePI/jsp/patentes/PatenteSearchBasico.jsp"))
            .respond_with(ResponseTemplate::new(200).set_body_string(form_page()))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/pePI/servlet/PatenteServletController"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(padded_html("Please enable JavaScript to continue")),
            )
            .mount(&server)
            .await;

        let strategy = TransportStrategy::new(portal_config(&server)).unwrap();
        let query = SearchQuery::new("paracetamol").unwrap();
        let err = strategy.attempt(&query).await.unwrap_err();

        assert_eq!(err.kind(), "transport_error");
        assert!(err.to_string().contains("gated response"));
    }

    #[tokio::test]
    async fn missing_form_still_submits_bare_query() {
        // An empty form-state map is not an error at this layer; the
        // submission simply carries only the fixed search fields.
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pePI/jsp/patentes/PatenteSearchBasico.jsp"))
            .respond_with(ResponseTemplate::new(200).set_body_string(padded_html("<p>no form</p>")))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/pePI/servlet/PatenteServletController"))
            .and(body_string_contains("textoPesquisa=aspirina"))
            .respond_with(ResponseTemplate::new(200).set_body_string(padded_html("OK")))
            .mount(&server)
            .await;

        let strategy = TransportStrategy::new(portal_config(&server)).unwrap();
        let query = SearchQuery::new("aspirina").unwrap();
        assert!(strategy.attempt(&query).await.is_ok());
    }

    #[test]
    fn rejects_invalid_endpoint_overrides() {
        let config = PortalConfig {
            form_url: "not a url".to_string(),
            ..PortalConfig::default()
        };
        assert!(TransportStrategy::new(config).is_err());
    }

    #[test]
    fn validate_response_rejects_non_success_status() {
        let html = padded_html("fine");
        assert!(validate_response(StatusCode::NOT_FOUND, &html).is_err());
        assert!(validate_response(StatusCode::INTERNAL_SERVER_ERROR, &html).is_err());
    }

    #[test]
    fn validate_response_rejects_short_body() {
        let err = validate_response(StatusCode::OK, "<html></html>").unwrap_err();
        assert!(err.contains("too short"));
    }

    #[test]
    fn validate_response_rejects_non_html() {
        let json = format!("{{\"filler\": \"{}\"}}", "x".repeat(400));
        let err = validate_response(StatusCode::OK, &json).unwrap_err();
        assert!(err.contains("missing HTML markers"));
    }

    #[test]
    fn validate_response_accepts_results_page() {
        assert!(validate_response(StatusCode::OK, &padded_html("results")).is_ok());
    }
}
