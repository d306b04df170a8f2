use serde_json::json;
use smscenter::{
    KeyClient, KeyClientBuilder, MessageText, Mobile, Password, SendOptions, SendSms, SenderId,
    SmsCenterClient, SmsCenterError, Username,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, max_retries: u32) -> SmsCenterClient {
    SmsCenterClient::builder("test_key")
        .base_url(format!("{}/api/", server.uri()))
        .max_retries(max_retries)
        .backoff_factor(0.0)
        .build()
        .unwrap()
}

#[tokio::test]
async fn balance_request_carries_type_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me/balance"))
        .and(query_param("type", "json"))
        .and(query_param("key", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "remarks": "Success",
            "error": "0",
            "balance": "100.00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server, 0).balance().check().await.unwrap();
    assert_eq!(response.balance.as_deref(), Some("100.00"));
}

#[tokio::test]
async fn send_sms_encodes_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sms/send"))
        .and(query_param("to", "306912345678"))
        .and(query_param("text", "Hello world & more"))
        .and(query_param("from", "SMSCenter"))
        .and(query_param("flash", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "id": 987,
            "cost": "1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = SendSms::new(
        Mobile::new("306912345678").unwrap(),
        MessageText::new("Hello world & more").unwrap(),
        SenderId::new("SMSCenter").unwrap(),
        SendOptions {
            flash: Some(true),
            ..Default::default()
        },
    );
    let response = client(&server, 0).sms().send(&request).await.unwrap();
    assert_eq!(response.id.as_deref(), Some("987"));
}

#[tokio::test]
async fn transient_status_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me/balance"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/me/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "balance": "5.00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server, 2).balance().check().await.unwrap();
    assert_eq!(response.balance.as_deref(), Some("5.00"));
}

#[tokio::test]
async fn exhausted_retries_surface_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me/balance"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(2)
        .mount(&server)
        .await;

    let err = client(&server, 1).balance().check().await.unwrap_err();
    match err {
        SmsCenterError::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body.as_deref(), Some("Bad Gateway"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, 3).balance().check().await.unwrap_err();
    assert!(matches!(err, SmsCenterError::HttpStatus { status: 400, .. }));
}

#[tokio::test]
async fn invalid_key_is_a_credential_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/group/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "error": "101",
            "remarks": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let err = client(&server, 0).groups().list().await.unwrap_err();
    match err {
        SmsCenterError::Credential(failure) => {
            assert_eq!(failure.code.as_deref(), Some("101"));
            assert_eq!(failure.message.as_deref(), Some("Invalid API key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn closed_client_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "1"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server, 0);
    client.close();
    client.close();

    let err = client.balance().check().await.unwrap_err();
    assert!(matches!(err, SmsCenterError::Closed));
}

#[tokio::test]
async fn key_client_sends_credentials_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key/get"))
        .and(query_param("username", "user"))
        .and(query_param("password", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "key": "fresh_key"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key_client = KeyClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .build()
        .unwrap();
    let key = key_client
        .get_key(
            &Username::new("user").unwrap(),
            &Password::new("secret").unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(key.as_str(), "fresh_key");

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests[0]
            .url
            .query_pairs()
            .all(|(name, _)| name != "key")
    );
}

fn key_builder(server: &MockServer) -> KeyClientBuilder {
    KeyClient::builder()
        .base_url(format!("{}/api/", server.uri()))
        .max_retries(1)
        .backoff_factor(0.0)
}

#[tokio::test]
async fn from_credentials_reuses_builder_settings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key/get"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/key/get"))
        .and(query_param("username", "user"))
        .and(query_param("password", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "key": "fresh_key"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/me/balance"))
        .and(query_param("key", "fresh_key"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/me/balance"))
        .and(query_param("key", "fresh_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "balance": "12.00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SmsCenterClient::from_credentials_with(key_builder(&server), "user", "secret")
        .await
        .unwrap();
    let response = client.balance().check().await.unwrap();
    assert_eq!(response.balance.as_deref(), Some("12.00"));
}

#[tokio::test]
async fn from_credentials_without_key_is_a_credential_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "remarks": "Success"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = SmsCenterClient::from_credentials_with(key_builder(&server), "user", "secret")
        .await
        .unwrap_err();
    match err {
        SmsCenterError::Credential(failure) => {
            assert_eq!(failure.message.as_deref(), Some("No API key in response"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn reset_api_key_calls_key_reset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key/reset"))
        .and(query_param("username", "user"))
        .and(query_param("password", "secret"))
        .and(query_param("type", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "key": "rotated_key"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = SmsCenterClient::reset_api_key_with(key_builder(&server), "user", "secret")
        .await
        .unwrap();
    assert_eq!(key.as_str(), "rotated_key");
}
