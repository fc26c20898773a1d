use serde_json::json;
use std::sync::OnceLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub static MAILER_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();
// Dropping the server shuts it down, so it has to outlive init_demo.
static MAILER_MOCK_SERVER: OnceLock<MockServer> = OnceLock::new();

pub const DEMO_MESSAGE_ID: &str = "demo-message-1";

/// Start an in-process mailer API stub and publish its URI through
/// [`MAILER_MOCK_SERVER_URI`]. Calling it again is a no-op.
pub async fn init_demo() {
    if MAILER_MOCK_SERVER_URI.get().is_some() {
        return;
    }

    let mock_server = MockServer::start().await;
    mock_send_transactional(&mock_server).await;
    mock_get_messages(&mock_server).await;
    mock_get_message(&mock_server).await;
    mock_subscribe(&mock_server).await;
    mock_get_subscriptions(&mock_server).await;

    MAILER_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());
    MAILER_MOCK_SERVER.get_or_init(|| mock_server);
}

// region Messages
async fn mock_send_transactional(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/send_transactional"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": DEMO_MESSAGE_ID,
            "status": "queued",
        })))
        .mount(mock_server)
        .await;
}

async fn mock_get_messages(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [
                {"id": DEMO_MESSAGE_ID, "subject": "Welcome", "status": "delivered"},
            ],
        })))
        .mount(mock_server)
        .await;
}

async fn mock_get_message(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/messages/{DEMO_MESSAGE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": DEMO_MESSAGE_ID,
            "subject": "Welcome",
            "status": "delivered",
        })))
        .mount(mock_server)
        .await;
}
// endregion

// region Subscriptions
async fn mock_subscribe(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/subscription"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": "subscribed",
        })))
        .mount(mock_server)
        .await;
}

async fn mock_get_subscriptions(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/subscription"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscriptions": ["demo-list"],
        })))
        .mount(mock_server)
        .await;
}
// endregion

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_init_demo_and_serve_canned_responses() {
        init_demo().await;
        init_demo().await;

        let uri = MAILER_MOCK_SERVER_URI.get().unwrap();
        let response = reqwest::Client::new()
            .post(format!("{uri}/send_transactional"))
            .json(&json!({"users": []}))
            .send()
            .await
            .unwrap();

        assert_eq!(200, response.status().as_u16());
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(DEMO_MESSAGE_ID, body["id"]);
    }
}
