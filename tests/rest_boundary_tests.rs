// REST boundary tests - exercising /api/translate over real HTTP
//
// The router is bound to an ephemeral port and driven with reqwest, with a
// stub translator standing in for the providers.

use async_trait::async_trait;
use kanji_mix::application::{RemoteTranslator, TranslateError, Translator, translate_for_display};
use kanji_mix::server::router;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

// ============================================================================
// Test Translator
// ============================================================================

enum Behaviour {
    Reply(&'static str),
    Fail(&'static str),
}

struct StubTranslator {
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl StubTranslator {
    fn replying(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            behaviour: Behaviour::Reply(text),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            behaviour: Behaviour::Fail(message),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(&self, _text: &str) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Reply(text) => Ok(text.to_string()),
            Behaviour::Fail(message) => Err(TranslateError::Service {
                status: 500,
                message: message.to_string(),
            }),
        }
    }
}

async fn spawn(translator: Arc<StubTranslator>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = router(translator);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

fn translate_url(addr: SocketAddr) -> String {
    format!("http://{addr}/api/translate")
}

fn allow_origin(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn translates_valid_request() {
    let stub = StubTranslator::replying("挨拶.");
    let addr = spawn(stub.clone()).await;

    let response = Client::new()
        .post(translate_url(addr))
        .json(&json!({ "text": "こんにちは" }))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response).as_deref(), Some("*"));
    let body: Value = response.json().await.expect("json");
    assert_eq!(body, json!({ "translated_text": "挨拶." }));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn missing_text_is_bad_request() {
    let stub = StubTranslator::replying("unused");
    let addr = spawn(stub.clone()).await;
    let client = Client::new();

    for payload in [json!({}), json!({ "text": "" }), json!({ "text": "   \n" })] {
        let response = client
            .post(translate_url(addr))
            .json(&payload)
            .send()
            .await
            .expect("send");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {payload}");
        let body: Value = response.json().await.expect("json");
        assert_eq!(body, json!({ "error": "Text is required" }));
    }
    assert_eq!(stub.calls(), 0, "providers must not be called without text");
}

#[tokio::test]
async fn malformed_body_is_server_error() {
    let stub = StubTranslator::replying("unused");
    let addr = spawn(stub.clone()).await;

    let response = Client::new()
        .post(translate_url(addr))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.expect("json");
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn provider_failure_is_server_error_with_cors() {
    let stub = StubTranslator::failing("deepseek failed, openai fallback also failed");
    let addr = spawn(stub).await;

    let response = Client::new()
        .post(translate_url(addr))
        .json(&json!({ "text": "私は学生です" }))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(allow_origin(&response).as_deref(), Some("*"));
    let body: Value = response.json().await.expect("json");
    let error = body["error"].as_str().expect("error string");
    assert!(error.contains("fallback also failed"), "got {error}");
}

#[tokio::test]
async fn preflight_is_answered_with_cors_headers() {
    let stub = StubTranslator::replying("unused");
    let addr = spawn(stub.clone()).await;

    let response = Client::new()
        .request(reqwest::Method::OPTIONS, translate_url(addr))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response).as_deref(), Some("*"));

    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_uppercase();
    for method in ["GET", "POST", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let headers = response
        .headers()
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(headers.contains("content-type"), "got {headers}");
    assert!(headers.contains("authorization"), "got {headers}");
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn other_methods_are_rejected() {
    let addr = spawn(StubTranslator::replying("unused")).await;

    let response = Client::new()
        .get(translate_url(addr))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let addr = spawn(StubTranslator::replying("unused")).await;
    let client = Client::new();

    let health: Value = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");
    assert_eq!(health["status"], "ok");

    let doc: Value = client
        .get(format!("http://{addr}/api-doc/openapi.json"))
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("json");
    assert!(doc["paths"]["/api/translate"].is_object());
}

#[tokio::test]
async fn remote_translator_round_trip_is_sanitized() {
    let addr = spawn(StubTranslator::replying("私 は  学生 カタカナ")).await;
    let remote = RemoteTranslator::new(&format!("http://{addr}/"));

    let raw = remote.translate("私は学生です").await.expect("translate");
    assert_eq!(raw, "私 は  学生 カタカナ");

    let display = translate_for_display(&remote, "私は学生です")
        .await
        .expect("translate");
    assert_eq!(display, "私 学生");
}

#[tokio::test]
async fn remote_translator_surfaces_service_errors() {
    let addr = spawn(StubTranslator::failing("both providers down")).await;
    let remote = RemoteTranslator::new(&format!("http://{addr}"));

    let err = remote.translate("こんにちは").await.unwrap_err();
    match err {
        TranslateError::Service { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("both providers down"), "got {message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn remote_translator_reports_unreachable_service() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let remote = RemoteTranslator::new(&format!("http://{addr}"));
    let err = remote.translate("こんにちは").await.unwrap_err();
    assert!(matches!(err, TranslateError::Unreachable(_)), "got {err}");
}
