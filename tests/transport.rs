mod common;

use mockito::Matcher;
use optimizely::{ApiResponse, ClientConfig, Error, Method, TokenType};
use serde_json::{json, Value};

use common::{client, API_KEY};

#[test]
fn oauth_token_is_sent_as_bearer() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/projects/1")
        .match_header("authorization", "Bearer oauth-token")
        .match_header("token", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"id": 1}"#)
        .create();

    let client = ClientConfig::from_api_key("oauth-token")
        .token_type(TokenType::OAuth)
        .base_url(server.url())
        .to_client()
        .unwrap();
    client.projects().get(1).unwrap();

    mock.assert();
}

#[test]
fn user_agent_identifies_the_client() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/projects/1")
        .match_header(
            "user-agent",
            Matcher::Regex(r"^optimizely-client-rust/\d+\.\d+\.\d+$".to_owned()),
        )
        .with_status(200)
        .with_body(r#"{"id": 1}"#)
        .create();

    client(&server).projects().get(1).unwrap();

    mock.assert();
}

#[test]
fn get_without_body_has_no_content_type() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/projects/")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create();

    assert!(client(&server).projects().list().unwrap().is_empty());

    mock.assert();
}

#[test]
fn error_statuses_map_to_variants() {
    let mut server = mockito::Server::new();
    let client = client(&server);

    let cases: [(usize, fn(&Error) -> bool); 7] = [
        (400, |e| matches!(e, Error::BadRequest(_))),
        (401, |e| matches!(e, Error::Unauthorized(_))),
        (403, |e| matches!(e, Error::Forbidden(_))),
        (404, |e| matches!(e, Error::NotFound(_))),
        (429, |e| matches!(e, Error::TooManyRequests(_))),
        (503, |e| matches!(e, Error::ServiceUnavailable(_))),
        (500, |e| matches!(e, Error::Api { status: 500, .. })),
    ];

    for (status, is_expected) in cases {
        let mock = server
            .mock("GET", "/projects/42")
            .with_status(status)
            .with_body(r#"{"message": "mock"}"#)
            .expect(1)
            .create();

        let err = client.projects().get(42).unwrap_err();
        assert!(is_expected(&err), "status {status} gave {err:?}");
        assert_eq!(err.status(), Some(status as u16));

        mock.assert();
        mock.remove();
    }
}

#[test]
fn send_reaches_unmodeled_endpoints() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/experiments/12345/schedules/")
        .match_header("token", API_KEY)
        .match_body(Matcher::Json(json!({"start_time": "2015-01-01T00:00:00Z"})))
        .with_status(202)
        .with_body(r#"{"id": 1}"#)
        .create();

    let response: ApiResponse<Value> = client(&server)
        .send(
            Method::POST,
            "experiments/12345/schedules/",
            Some(&json!({"start_time": "2015-01-01T00:00:00Z"})),
        )
        .unwrap();

    mock.assert();
    assert_eq!(response, ApiResponse::Single(json!({"id": 1})));
}

#[test]
fn base_url_path_is_preserved() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/experiment/v1/projects/7")
        .with_status(200)
        .with_body(r#"{"id": 7}"#)
        .create();

    let client = ClientConfig::from_api_key(API_KEY)
        .base_url(format!("{}/experiment/v1", server.url()))
        .to_client()
        .unwrap();
    assert_eq!(client.projects().get(7).unwrap().id, Some(7));

    mock.assert();
}
