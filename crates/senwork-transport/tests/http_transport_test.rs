//! Integration tests for HTTP transport

use rstest::rstest;
use senwork_transport::{HttpRequest, HttpTransport, Transport, TransportError};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_http_request_builder() {
    let request = HttpRequest::new("GET", "https://example.com")
        .with_header("Authorization", "Bearer token123")
        .with_header("Content-Type", "application/json");

    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "https://example.com");
    assert_eq!(request.headers.len(), 2);
    assert_eq!(
        request.headers.get("Authorization"),
        Some(&"Bearer token123".to_string())
    );
}

#[tokio::test]
async fn test_sends_headers_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"name":"Sen"}"#))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "abc")
                .set_body_string(r#"{"success":true}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = HttpRequest::new("post", format!("{}/api/contact", mock_server.uri()))
        .with_header("Content-Type", "application/json")
        .with_body(br#"{"name":"Sen"}"#.to_vec());

    let response = transport.send_http(request).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.get_header("X-Request-Id"), Some("abc"));
    assert_eq!(response.text().unwrap(), r#"{"success":true}"#);

    mock_server.verify().await;
}

#[rstest]
#[case(400)]
#[case(404)]
#[case(500)]
#[case(503)]
#[tokio::test]
async fn test_error_statuses_are_not_transport_errors(#[case] status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/about"))
        .respond_with(ResponseTemplate::new(status).set_body_string("Server Error"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let response = transport
        .send_http(HttpRequest::new("GET", format!("{}/api/about", mock_server.uri())))
        .await
        .unwrap();

    assert_eq!(response.status, status);
    assert!(response.is_error());
    assert_eq!(response.text().unwrap(), "Server Error");
}

#[tokio::test]
async fn test_unreachable_host_is_a_connection_error() {
    // Nothing listens on the tcpmux port of the loopback interface
    let transport = HttpTransport::new().unwrap();
    let err = transport
        .send_http(HttpRequest::new("GET", "http://127.0.0.1:1/api/about"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Connection(_)), "got {err:?}");
}
