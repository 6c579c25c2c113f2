use super::*;
use crate::cms::{CmsClient, Populate};
use crate::config::CmsTimeouts;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Address that nothing listens on, so requests fail at connect.
fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn form(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm { name: name.into(), email: email.into(), message: message.into() }
}

/// Counts calls so tests can assert validation never reaches the network.
#[derive(Default)]
struct CountingCms {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl CmsBackend for CountingCms {
    async fn get_json(&self, _path: &str, _populate: &Populate) -> Result<Value, CmsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Null)
    }

    async fn post_json(&self, _path: &str, _body: &Value) -> Result<Value, CmsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Null)
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_accepts_complete_form() {
    assert_eq!(form("Ada", "ada@example.com", "Hello").validate(), Ok(()));
}

#[test]
fn validate_rejects_blank_fields() {
    assert_eq!(form("", "ada@example.com", "Hi").validate(), Err(ContactError::MissingFields));
    assert_eq!(form("Ada", "", "Hi").validate(), Err(ContactError::MissingFields));
    assert_eq!(form("Ada", "ada@example.com", "   ").validate(), Err(ContactError::MissingFields));
}

#[test]
fn validate_rejects_bad_email_shapes() {
    for email in ["ada", "ada@example", "@.", "ada example.com"] {
        assert_eq!(
            form("Ada", email, "Hi").validate(),
            Err(ContactError::InvalidEmail),
            "expected {email:?} to be rejected"
        );
    }
}

#[test]
fn error_messages_match_form_copy() {
    assert_eq!(ContactError::MissingFields.to_string(), "Please fill out all fields.");
    assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address.");
}

// =============================================================================
// rejection_message
// =============================================================================

#[test]
fn rejection_message_prefers_backend_message() {
    let body = r#"{"data":null,"error":{"status":400,"name":"ValidationError","message":"email must be unique"}}"#;
    assert_eq!(rejection_message(400, body), "email must be unique");
}

#[test]
fn rejection_message_falls_back_on_unparsable_body() {
    assert_eq!(rejection_message(502, "<html>bad gateway</html>"), "Failed to send message. Status: 502");
}

#[test]
fn rejection_message_falls_back_when_message_missing() {
    assert_eq!(rejection_message(403, r#"{"error":{"status":403}}"#), "Failed to send message. Status: 403");
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn empty_message_fails_without_network_call() {
    let cms = CountingCms::default();
    let state = submit(&cms, &form("Ada", "ada@example.com", "")).await;
    assert_eq!(state, ContactState::Failed("Please fill out all fields.".into()));
    assert_eq!(cms.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invalid_email_fails_without_network_call() {
    let cms = CountingCms::default();
    let state = submit(&cms, &form("Ada", "not-an-email", "Hello")).await;
    assert_eq!(state, ContactState::Failed("Please enter a valid email address.".into()));
    assert_eq!(cms.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn success_response_yields_sent_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .and(body_json(json!({
            "data": { "name": "Ada", "email": "ada@example.com", "message": "Hello" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 7 } })))
        .expect(1)
        .mount(&server)
        .await;

    let cms = CmsClient::new(&server.uri(), CmsTimeouts { request_secs: 5, connect_secs: 2 }).unwrap();
    let state = submit(&cms, &form(" Ada ", "ada@example.com", "Hello")).await;
    assert_eq!(
        state,
        ContactState::Sent { message: SENT_MESSAGE.into(), data: json!({ "data": { "id": 7 } }) }
    );
}

#[tokio::test]
async fn rejected_submission_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "data": null,
            "error": { "status": 400, "name": "ValidationError", "message": "Too many requests from you" }
        })))
        .mount(&server)
        .await;

    let cms = CmsClient::new(&server.uri(), CmsTimeouts { request_secs: 5, connect_secs: 2 }).unwrap();
    let state = submit(&cms, &form("Ada", "ada@example.com", "Hello")).await;
    assert_eq!(state, ContactState::Failed("Too many requests from you".into()));
}

#[tokio::test]
async fn transport_failure_is_generic() {
    let cms = CmsClient::new(&closed_port_uri(), CmsTimeouts { request_secs: 2, connect_secs: 1 }).unwrap();
    let state = submit(&cms, &form("Ada", "ada@example.com", "Hello")).await;
    assert_eq!(state, ContactState::Failed(UNEXPECTED_MESSAGE.into()));
}
