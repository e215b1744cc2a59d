//! Chat adapter: request construction, reply parsing, error classification

use crate::integration::fake_transport::FakeTransport;
use crate::integration::mock_server::{MockServerFixture, CHAT_PATH};
use ai_lib_lite::chat::CHAT_TIMEOUT;
use ai_lib_lite::{
    Chat, ChatConfig, Error, HttpConfig, Message, MessageRole, OpenAiChat, ProviderErrorKind,
};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

const HI_THERE: &str = r#"{"choices":[{"message":{"content":"hi there"}}]}"#;

fn chat_over(transport: Arc<FakeTransport>) -> OpenAiChat {
    let config = ChatConfig::new()
        .with_api_key("sk-test")
        .with_base_url("https://llm.example.test/v1");
    OpenAiChat::with_transport(config, transport).unwrap()
}

#[test]
fn test_call_returns_first_choice_content() {
    let transport = FakeTransport::respond(200, HI_THERE);
    let chat = chat_over(transport.clone());

    assert_eq!(chat.call("hello").unwrap(), "hi there");

    let (request, body) = transport.single_request();
    assert_eq!(request.url, "https://llm.example.test/v1/chat/completions");
    assert_eq!(request.timeout, CHAT_TIMEOUT);
    assert_eq!(request.header("Authorization"), Some("Bearer sk-test"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert!(request.header("x-client-request-id").is_some());
    assert_eq!(
        body,
        json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": "hello"}],
            "temperature": 0.0
        })
    );
}

#[test]
fn test_generate_wraps_reply_as_assistant_message() {
    let transport = FakeTransport::respond(200, HI_THERE);
    let chat = chat_over(transport);

    let reply = chat.generate(&[vec![Message::human("hello")]]).unwrap();
    assert_eq!(reply.role(), MessageRole::Assistant);
    assert_eq!(reply.content(), "hi there");
}

#[test]
fn test_generate_flattens_conversations_in_order() {
    let transport = FakeTransport::respond(200, HI_THERE);
    let chat = chat_over(transport.clone());

    let batch = vec![
        vec![Message::system("be brief"), Message::human("first")],
        vec![Message::ai("earlier answer"), Message::human("second")],
    ];
    chat.generate(&batch).unwrap();

    let (_, body) = transport.single_request();
    assert_eq!(
        body["messages"],
        json!([
            {"role": "system", "content": "be brief"},
            {"role": "user", "content": "first"},
            {"role": "assistant", "content": "earlier answer"},
            {"role": "user", "content": "second"}
        ])
    );
}

#[test]
fn test_temperature_and_model_are_sent() {
    let transport = FakeTransport::respond(200, HI_THERE);
    let config = ChatConfig::new()
        .with_model("gpt-4")
        .with_temperature(0.5);
    let chat = OpenAiChat::with_transport(config, transport.clone()).unwrap();

    chat.call("hi").unwrap();

    let (_, body) = transport.single_request();
    assert_eq!(body["model"], "gpt-4");
    assert_eq!(body["temperature"], json!(0.5));
}

#[test]
fn test_quota_exceeded_is_classified() {
    let transport = FakeTransport::respond(429, "You have exceeded your current quota");
    let chat = chat_over(transport);

    let err = chat.generate(&[vec![Message::human("hello")]]).unwrap_err();
    match &err {
        Error::Provider(provider) => {
            assert_eq!(provider.kind(), ProviderErrorKind::QuotaExceeded);
            assert_eq!(provider.status(), 429);
            assert_eq!(provider.detail(), "You have exceeded your current quota");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    assert!(err.to_string().contains("Error code 429"));
}

#[test]
fn test_call_classifies_failures_too() {
    let transport = FakeTransport::respond(503, "overloaded");
    let chat = chat_over(transport);

    let err = chat.call("hello").unwrap_err();
    assert_eq!(err.provider_kind(), Some(ProviderErrorKind::EngineOverloaded));
}

#[test]
fn test_empty_batch_is_sent_as_is() {
    let transport = FakeTransport::respond(400, "'messages' must contain at least one message");
    let chat = chat_over(transport.clone());

    let err = chat.generate(&[]).unwrap_err();
    assert_eq!(err.provider_kind(), Some(ProviderErrorKind::UnknownError));

    let (_, body) = transport.single_request();
    assert_eq!(body["messages"], json!([]));
}

#[test]
fn test_malformed_body_is_a_decode_error() {
    let transport = FakeTransport::respond(200, "<html>gateway</html>");
    let chat = chat_over(transport);

    let err = chat.call("hello").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    assert_eq!(err.provider_kind(), None);
}

#[test]
fn test_no_choices_is_empty_result() {
    let transport = FakeTransport::respond(200, r#"{"choices":[]}"#);
    let chat = chat_over(transport);

    let err = chat.call("hello").unwrap_err();
    assert!(matches!(err, Error::EmptyResult { .. }));
}

#[test]
fn test_filtered_reply_with_null_content_is_empty_text() {
    let transport = FakeTransport::respond(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":null},"finish_reason":"content_filter"}]}"#,
    );
    let chat = chat_over(transport);

    assert_eq!(chat.call("hi").unwrap(), "");
    let reply = chat.generate(&[vec![Message::human("hi")]]).unwrap();
    assert_eq!(reply.role(), MessageRole::Assistant);
    assert_eq!(reply.content(), "");
}

#[test]
fn test_transport_failure_is_not_classified() {
    let transport = FakeTransport::fail("connection refused");
    let chat = chat_over(transport);

    let err = chat.call("hello").unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_invalid_temperature_rejected_at_construction() {
    let transport = FakeTransport::respond(200, HI_THERE);
    let config = ChatConfig::new().with_temperature(-1.0);

    let err = OpenAiChat::with_transport(config, transport.clone()).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_proxy_comes_from_config_record() {
    let config = ChatConfig::new()
        .with_http(HttpConfig::default().with_proxy_url("ftp://proxy.example.test:21"));

    let err = OpenAiChat::new(config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("http.proxy_url"));
}

#[test]
fn test_shared_across_threads() {
    let transport = FakeTransport::respond(200, HI_THERE);
    let chat: Arc<dyn Chat> = Arc::new(chat_over(transport.clone()));

    std::thread::scope(|scope| {
        for i in 0..4 {
            let chat = Arc::clone(&chat);
            scope.spawn(move || {
                assert_eq!(chat.call(&format!("q{i}")).unwrap(), "hi there");
            });
        }
    });

    assert_eq!(transport.requests().len(), 4);
}

#[test]
fn test_end_to_end_with_mock_server() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture
        .server
        .mock("POST", CHAT_PATH)
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(HI_THERE)
        .create();

    let chat = OpenAiChat::new(fixture.chat_config()).unwrap();
    assert_eq!(chat.call("hello").unwrap(), "hi there");
    mock.assert();
}

#[test]
fn test_end_to_end_unauthorized() {
    let mut fixture = MockServerFixture::new();
    let mock = fixture.mock_json_response(
        CHAT_PATH,
        401,
        r#"{"error":{"message":"Incorrect API key provided: sk-test.","type":"invalid_request_error"}}"#,
    );

    let chat = OpenAiChat::new(fixture.chat_config()).unwrap();
    let err = chat
        .generate(&[vec![Message::system("x"), Message::human("y")]])
        .unwrap_err();

    assert_eq!(err.provider_kind(), Some(ProviderErrorKind::IncorrectApiKey));
    mock.assert();
}
