use std::io;
use std::sync::{Arc, Mutex};

use maybe::{O, option};
use tracing::Level;

/// Shared sink the fmt subscriber writes into.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("capture lock")).into_owned()
    }
}

/// Runs `f` under a TRACE-level subscriber and returns everything it logged.
fn capture_trace<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let sink = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_get_on_none_logs_event() {
    println!("=== Testing trace: get on None ===");
    let logs = capture_trace(|| {
        assert!(O::<u8>::NONE.get().is_err());
    });
    println!("{logs}");
    assert!(logs.contains("get called on None"), "missing event in: {logs}");
    assert!(logs.contains("TRACE"));
    println!("✓ get failure traced");
}

#[test]
fn test_get_on_some_logs_nothing() {
    let logs = capture_trace(|| {
        assert_eq!(O::some(1u8).get(), Ok(1));
    });
    assert!(!logs.contains("get called on None"), "unexpected event in: {logs}");
}

#[test]
fn test_absent_input_logs_classification() {
    let logs = capture_trace(|| {
        assert!(option(None::<u8>).is_empty());
    });
    assert!(logs.contains("input absent, yielding None"), "missing event in: {logs}");
    assert!(!logs.contains("input present"));
}

#[test]
fn test_present_input_logs_classification() {
    let logs = capture_trace(|| {
        assert!(option(0u8).is_defined());
    });
    assert!(logs.contains("input present"), "missing event in: {logs}");
    assert!(!logs.contains("input absent"));
}
