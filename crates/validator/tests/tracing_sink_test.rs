//! The default sink reports through `tracing`.
//!
//! A capturing layer stands in for the application's subscriber.

use std::sync::Arc;

use chain_validator::prelude::*;
use chain_validator::sink::TARGET;
use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Captured {
    level: Level,
    target: String,
    message: String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureLayer {
    fn events(&self) -> Vec<Captured> {
        self.events.lock().clone()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().push(Captured {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.0,
        });
    }
}

struct Person {
    name: String,
    developer: bool,
}

fn mario() -> Person {
    Person {
        name: "Mario".to_string(),
        developer: false,
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let subscriber = Registry::default().with(layer.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, layer.events())
}

#[test]
fn failing_rule_emits_error_event() {
    let person = mario();
    let chain = ChainBuilder::of(&person)
        .link(|p| &p.name, |n| n == "Mario")
        .link_with_message(|p| &p.developer, |dev| *dev, "The person must be a developer!")
        .bond();

    let (result, events) = capture(|| chain.validate());

    assert_eq!(result, Ok(false));
    assert_eq!(
        events,
        vec![Captured {
            level: Level::ERROR,
            target: TARGET.to_string(),
            message: "The person must be a developer!".to_string(),
        }]
    );
}

#[test]
fn passing_chain_emits_nothing() {
    let person = mario();
    let chain = ChainBuilder::of(&person)
        .link_with_message(|p| &p.name, |n| n == "Mario", "bad name")
        .bond();

    let (result, events) = capture(|| chain.validate());

    assert_eq!(result, Ok(true));
    assert!(events.is_empty());
}

#[test]
fn warning_severity_maps_to_warn_level() {
    let person = mario();
    let chain = ChainBuilder::of(&person)
        .link_with_message(|p| &p.name, |n| n == "Mauro", "bad name")
        .with_config(ChainConfig::default().with_failure_severity(Severity::Warning))
        .bond();

    let (_, events) = capture(|| chain.validate());

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(events[0].message, "bad name");
}

#[test]
fn fault_is_reported_at_error_level() {
    let person = mario();
    let chain = ChainBuilder::of(&person)
        .link_map(|p| p.name.chars().nth(99), |c| c.expect("no 100th letter") == 'x')
        .bond();

    let (result, events) = capture(|| chain.validate());

    assert_eq!(result, Ok(false));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].message, "no 100th letter");
}
