#[cfg(test)]
mod http_sanity_checker {

    use std::sync::Arc;

    use sanity_check::http_client;
    use sanity_check::http_client::reqwest_http_client::ReqwestHttpClient;
    use sanity_check::sanity_checker::error::Error;
    use sanity_check::sanity_checker::http_sanity_checker::HttpSanityChecker;
    use sanity_check::sanity_checker::run;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_endpoint(status: u16, body: &'static str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/random_joke"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .named("random joke endpoint")
            .mount(&mock_server)
            .await;

        mock_server
    }

    fn checker_for(mock_server: &MockServer) -> HttpSanityChecker {
        HttpSanityChecker::new(
            Arc::new(ReqwestHttpClient::default()),
            format!("{}/random_joke", mock_server.uri()),
        )
    }

    #[tokio::test]
    async fn should_print_the_body_and_succeed_on_200() {
        let mock_server = mock_endpoint(200, "ok").await;
        let checker = checker_for(&mock_server);
        let mut out = Vec::new();

        let exit_status = run(&checker, &mut out).await.unwrap();

        assert_eq!(exit_status, 0);
        assert_eq!(out, b"Request successful!\nResponse content: ok\n".to_vec());
    }

    #[tokio::test]
    async fn should_print_the_status_and_fail_on_404() {
        let mock_server = mock_endpoint(404, "no jokes here").await;
        let checker = checker_for(&mock_server);
        let mut out = Vec::new();

        let exit_status = run(&checker, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(exit_status, 1);
        assert!(out.contains("404"));
        assert!(!out.contains("no jokes here"));
    }

    #[tokio::test]
    async fn should_print_the_status_and_fail_on_500() {
        let mock_server = mock_endpoint(500, "boom").await;
        let checker = checker_for(&mock_server);
        let mut out = Vec::new();

        let exit_status = run(&checker, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(exit_status, 1);
        assert_eq!(out, "Request failed. Status code: 500\n");
    }

    #[tokio::test]
    async fn should_fail_when_the_connection_cannot_be_established() {
        let checker = HttpSanityChecker::new(
            Arc::new(ReqwestHttpClient::default()),
            "http://127.0.0.1:1/random_joke",
        );
        let mut out = Vec::new();

        let result = run(&checker, &mut out).await;

        assert!(matches!(
            result,
            Err(Error::Request(http_client::error::Error::Network(_)))
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn should_send_exactly_one_request_per_invocation() {
        let mock_server = mock_endpoint(503, "").await;
        let checker = checker_for(&mock_server);

        run(&checker, &mut Vec::new()).await.unwrap();

        let received = mock_server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].method.as_str(), "GET");
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn should_report_a_redirect_as_a_failure_without_following_it() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/random_joke"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/other"))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/other"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .expect(0)
            .mount(&mock_server)
            .await;

        let checker = checker_for(&mock_server);
        let mut out = Vec::new();

        let exit_status = run(&checker, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(exit_status, 1);
        assert_eq!(out, "Request failed. Status code: 302\n");
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
    }
}
