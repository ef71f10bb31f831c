//! End-to-end notification flow tests.
//!
//! These tests drive the public API the way a script binding would: parse an
//! options bag, construct a notification in an execution context, then hand
//! it to a dispatcher either directly or through the background worker.
//!
//! Scenarios:
//! 1. Construct and show with no platform backend available
//! 2. Show through a connected backend and receive its identifier
//! 3. Backend that never connected is never asked to send
//! 4. Caller errors are reported before anything is displayed

use serde_json::json;
use std::sync::{Arc, Mutex};
use url::Url;
use web_notifications::backend::unimplemented::UnimplementedBackend;
use web_notifications::services::DocumentContext;
use web_notifications::{
    Dispatcher, ErrorKind, NotificationBackend, NotificationBuilder, NotificationConfig,
    NotificationError, NotificationId, NotificationOptions, ShowWorker, NOT_DISPLAYED,
};

/// Backend that records every title it is asked to display.
struct RecordingBackend {
    connected: bool,
    next_id: NotificationId,
    sent: Arc<Mutex<Vec<String>>>,
}

impl NotificationBackend for RecordingBackend {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) {}

    fn send(&mut self, title: &str) -> NotificationId {
        self.sent.lock().unwrap().push(title.to_string());
        self.next_id
    }
}

fn recording(connected: bool, next_id: NotificationId) -> (Dispatcher, Arc<Mutex<Vec<String>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let backend = RecordingBackend {
        connected,
        next_id,
        sent: sent.clone(),
    };
    (Dispatcher::new(Box::new(backend)), sent)
}

fn page() -> DocumentContext {
    DocumentContext::window(Url::parse("https://mail.example.com/inbox/").unwrap())
}

/// Test: "Hello" with empty options on a platform without a backend
#[test]
fn test_hello_without_backend() {
    let notification = NotificationBuilder::default()
        .construct("Hello", &NotificationOptions::default(), &page())
        .unwrap();

    let dispatcher = Dispatcher::new(Box::new(UnimplementedBackend));
    assert_eq!(
        web_notifications::services::show_steps(&dispatcher, notification.record()),
        None
    );
}

/// Test: options bag parsed from JSON, shown through the worker
#[tokio::test]
async fn test_json_options_through_worker() {
    let options = NotificationOptions::from_json(json!({
        "body": "3 new messages",
        "tag": "inbox",
        "renotify": true,
        "icon": "../static/icon.png",
        "navigate": "thread?id=9",
        "timestamp": 1_700_000_000_000u64,
        "data": {"unread": 3}
    }))
    .unwrap();

    let builder = NotificationBuilder::default();
    let notification = builder.construct("Mail", &options, &page()).unwrap();

    assert_eq!(notification.icon(), "https://mail.example.com/static/icon.png");
    assert_eq!(
        notification.navigate(),
        "https://mail.example.com/inbox/thread?id=9"
    );
    assert_eq!(notification.timestamp(), 1_700_000_000_000);
    assert_eq!(notification.data(builder.serializer()), json!({"unread": 3}));
    assert_eq!(
        notification.record().origin().ascii_serialization(),
        "https://mail.example.com"
    );

    let (dispatcher, sent) = recording(true, 42);
    let handle = ShowWorker::start_background(Arc::new(dispatcher), &NotificationConfig::default());

    assert_eq!(handle.show_notification(&notification).await.unwrap(), Some(42));
    assert_eq!(*sent.lock().unwrap(), ["Mail"]);
}

/// Test: a disconnected backend is never asked to send
#[test]
fn test_disconnected_backend_skips_send() {
    let (dispatcher, sent) = recording(false, 42);
    assert_eq!(dispatcher.notify("x"), None);
    assert!(sent.lock().unwrap().is_empty());
}

/// Test: the service answering 0 means nothing was displayed
#[test]
fn test_not_displayed_sentinel() {
    let (dispatcher, sent) = recording(true, NOT_DISPLAYED);
    assert_eq!(dispatcher.notify("x"), None);
    assert_eq!(sent.lock().unwrap().len(), 1);
}

/// Test: caller errors surface as type errors and nothing is built
#[test]
fn test_caller_errors() {
    let builder = NotificationBuilder::default();

    let renotify = NotificationOptions::from_json(json!({"renotify": true})).unwrap();
    let err = builder.construct("x", &renotify, &page()).unwrap_err();
    assert!(matches!(err, NotificationError::EmptyTagWithRenotify));
    assert_eq!(err.kind(), ErrorKind::TypeError);

    let actions = NotificationOptions::from_json(json!({
        "actions": [{"action": "a", "title": "A"}]
    }))
    .unwrap();
    let err = builder.construct("x", &actions, &page()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeError);

    let silent = NotificationOptions::from_json(json!({"silent": true, "vibrate": [200]})).unwrap();
    assert!(matches!(
        builder.construct("x", &silent, &page()),
        Err(NotificationError::SilentWithVibrate)
    ));
}

/// Test: unresolvable URLs never fail construction
#[test]
fn test_bad_urls_are_dropped() {
    let options = NotificationOptions::from_json(json!({
        "icon": "http://[::1",
        "image": "https://exa mple.com/",
        "badge": "http://host:99999/",
        "navigate": "http://[zz]/"
    }))
    .unwrap();

    let notification = NotificationBuilder::default()
        .construct("x", &options, &page())
        .unwrap();

    assert_eq!(notification.icon(), "");
    assert_eq!(notification.image(), "");
    assert_eq!(notification.badge(), "");
    assert_eq!(notification.navigate(), "");
}
