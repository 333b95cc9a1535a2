//! Timing log emitted by the request log middleware.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use projects_api::config::ServiceConfig;
use serde_json::json;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

mod common;

/// One "Request completed" event.
#[derive(Debug, Clone, PartialEq)]
struct Completed {
    request: String,
    status: u64,
    elapsed_ms: f64,
}

#[derive(Default)]
struct CompletedVisitor {
    message: Option<String>,
    request: Option<String>,
    status: Option<u64>,
    elapsed_ms: Option<f64>,
}

impl Visit for CompletedVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{:?}", value)),
            "request" => self.request = Some(format!("{:?}", value)),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "status" {
            self.status = Some(value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "elapsed_ms" {
            self.elapsed_ms = Some(value);
        }
    }
}

/// Layer collecting every completed-request event.
#[derive(Clone, Default)]
struct CaptureCompleted {
    events: Arc<Mutex<Vec<Completed>>>,
}

impl CaptureCompleted {
    fn take(&self) -> Vec<Completed> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl<S: Subscriber> Layer<S> for CaptureCompleted {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = CompletedVisitor::default();
        event.record(&mut visitor);
        if visitor.message.as_deref() != Some("Request completed") {
            return;
        }
        self.events.lock().unwrap().push(Completed {
            request: visitor.request.unwrap_or_default(),
            status: visitor.status.unwrap_or_default(),
            elapsed_ms: visitor.elapsed_ms.unwrap_or(-1.0),
        });
    }
}

fn assert_logged(events: &[Completed], request: &str, status: StatusCode) {
    let matching: Vec<_> = events.iter().filter(|e| e.request == request).collect();
    assert_eq!(matching.len(), 1, "expected one log line for {request}: {events:?}");
    assert_eq!(matching[0].status, u64::from(status.as_u16()), "{request}");
    assert!(matching[0].elapsed_ms >= 0.0, "{request}");
}

// Current-thread runtime: the server tasks run on this thread and see the
// scoped subscriber.
#[tokio::test]
async fn test_every_request_is_timed() {
    let capture = CaptureCompleted::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut config = ServiceConfig::default();
    config.limits.max_body_size = 64;
    let server = common::start_server_with(config).await;
    let client = common::client();
    let unknown = "6f1c2a3e-9b4d-4c7a-8e21-0f5d3b9a7c11";

    let res = client.get(server.url("/projects")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .put(server.url("/projects/abc"))
        .json(&json!({ "title": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .delete(server.url(&format!("/projects/{unknown}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(server.url("/projects"))
        .json(&json!({ "title": "x".repeat(256), "owner": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let events = capture.take();
    assert_eq!(events.len(), 4, "{events:?}");
    assert_logged(&events, "[GET] /projects", StatusCode::OK);
    assert_logged(&events, "[PUT] /projects/abc", StatusCode::BAD_REQUEST);
    assert_logged(
        &events,
        &format!("[DELETE] /projects/{unknown}"),
        StatusCode::BAD_REQUEST,
    );
    assert_logged(&events, "[POST] /projects", StatusCode::PAYLOAD_TOO_LARGE);
}
