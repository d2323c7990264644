#![forbid(unsafe_code)]
#![cfg(feature = "tracing")]

//! Tracing instrumentation tests.
//!
//! ```sh
//! cargo test -p tether-layout --features tracing --test tracing_tests
//! ```

use std::sync::{Arc, Mutex};

use tether_core::{Size, XInt, YInt};
use tether_layout::dsl::{left_to, top_to};
use tether_layout::{Container, LayoutConfig, MeasureSpec, Measured};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Captured {
    Span(String),
    Event { level: tracing::Level, message: String },
}

/// A tracing Layer that records span names and event messages.
struct Capture {
    records: Arc<Mutex<Vec<Captured>>>,
}

struct MessageVisitor(Option<String>);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.records
            .lock()
            .unwrap()
            .push(Captured::Span(attrs.metadata().name().to_string()));
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        self.records.lock().unwrap().push(Captured::Event {
            level: *event.metadata().level(),
            message: visitor.0.unwrap_or_default(),
        });
    }
}

fn with_capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let records = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        records: Arc::clone(&records),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = records.lock().unwrap().clone();
    out
}

type Node = fn(MeasureSpec, MeasureSpec) -> Measured;

fn node(w: MeasureSpec, h: MeasureSpec) -> Measured {
    Measured::new(w.apply(10), h.apply(10))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn passes_open_spans() {
    let records = with_capture(|| {
        let mut c: Container<Node> = Container::new(LayoutConfig::new());
        let a = c.add_child(node as Node);
        c.apply_layout(a, left_to(|_| Ok(XInt(0))), top_to(|_| Ok(YInt(0))))
            .unwrap();
        c.measure(Size::new(100, 100)).unwrap();
        c.layout(|_, _, _| {}).unwrap();
    });

    assert!(records.contains(&Captured::Span("tether.measure".into())), "{records:?}");
    assert!(records.contains(&Captured::Span("tether.layout".into())), "{records:?}");
    assert!(
        records.iter().any(|r| matches!(
            r,
            Captured::Event { level, message } if *level == tracing::Level::DEBUG
                && message.contains("cleared")
        )),
        "{records:?}"
    );
    assert!(
        records.iter().any(|r| matches!(
            r,
            Captured::Event { level, message } if *level == tracing::Level::TRACE
                && message.contains("measured")
        )),
        "{records:?}"
    );
}

#[test]
fn cycles_are_warned() {
    let records = with_capture(|| {
        let mut c: Container<Node> = Container::new(LayoutConfig::new());
        let a = c.add_child(node as Node);
        c.apply_layout(a, left_to(move |s| s.right(a)), top_to(|_| Ok(YInt(0))))
            .unwrap();
        c.measure(Size::new(100, 100)).unwrap();
        assert!(c.layout(|_, _, _| {}).is_err());
    });

    assert!(
        records.iter().any(|r| matches!(
            r,
            Captured::Event { level, message } if *level == tracing::Level::WARN
                && message.contains("circular reference")
        )),
        "{records:?}"
    );
}
