use super::*;
use super::config::TelegramTimeouts;

#[test]
fn parse_reply_ok() {
    assert!(parse_reply(200, r#"{"ok":true,"result":{"message_id":1}}"#).is_ok());
}

#[test]
fn parse_reply_http_error_keeps_status() {
    let err = parse_reply(401, r#"{"ok":false,"description":"Unauthorized"}"#).unwrap_err();
    assert!(matches!(err, TelegramError::ApiResponse { status: 401, .. }));
}

#[test]
fn parse_reply_ok_false_is_rejected_with_description() {
    let err = parse_reply(200, r#"{"ok":false,"description":"chat not found"}"#).unwrap_err();
    match err {
        TelegramError::Rejected(description) => assert_eq!(description, "chat not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_reply_garbage_body_is_rejected() {
    assert!(matches!(parse_reply(200, "<html>"), Err(TelegramError::Rejected(_))));
}

#[test]
fn client_from_config_keeps_chat_id() {
    let cfg = TelegramConfig {
        bot_token: "123:abc".into(),
        chat_id: "-100200".into(),
        api_base: "http://127.0.0.1:1".into(),
        timeouts: TelegramTimeouts { request_secs: 1, connect_secs: 1 },
    };
    let client = TelegramClient::from_config(&cfg).unwrap();
    assert_eq!(client.chat_id(), "-100200");
}

#[tokio::test]
async fn notify_unreachable_endpoint_is_request_error_without_token() {
    let cfg = TelegramConfig {
        bot_token: "123:topsecret".into(),
        chat_id: "c".into(),
        // Port 9 (discard) on localhost is closed in test environments.
        api_base: "http://127.0.0.1:9".into(),
        timeouts: TelegramTimeouts { request_secs: 2, connect_secs: 1 },
    };
    let client = TelegramClient::from_config(&cfg).unwrap();
    let err = client.notify("hi").await.unwrap_err();
    assert!(matches!(err, TelegramError::ApiRequest(_)));
    assert!(!err.to_string().contains("topsecret"));
}
