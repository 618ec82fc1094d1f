//! Registration diagnostics
//!
//! Warnings are the only diagnostic channel, so these tests install a
//! capturing `log` backend and count the records each registration emits.
//! Records are kept per thread, which keeps parallel tests apart.

#![cfg(feature = "log")]

use log::{Level, LevelFilter, Log, Metadata, Record};
use route_trie::{Matcher, MatcherConfig};
use std::cell::RefCell;

struct CaptureLogger;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn capture() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.with(|records| records.borrow_mut().clear());
}

fn warnings() -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

#[test]
fn test_duplicate_registration_warns_once() {
    capture();
    let mut m = Matcher::default();
    m.register_pattern("/users/:id");
    assert!(warnings().is_empty());

    m.register_pattern("users//:id");
    let warnings = warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("/users/:id"));
    assert!(warnings[0].contains("overwriting"));
}

#[test]
fn test_static_duplicate_warns() {
    capture();
    let mut m = Matcher::default();
    m.register_pattern("/about");
    m.register_pattern("/about");
    assert_eq!(warnings().len(), 1);
}

#[test]
fn test_literal_marker_collision_warns() {
    capture();
    let mut m = Matcher::new(MatcherConfig::new().dynamic_param_prefix('$')).unwrap();
    m.register_pattern("/users/:id");
    m.register_pattern("/users/$id");
    assert_eq!(warnings().len(), 1);
    assert_eq!(m.len(), 1);
}

#[test]
fn test_quiet_suppresses_duplicate_warning() {
    capture();
    let mut m = Matcher::new(MatcherConfig::new().quiet(true)).unwrap();
    m.register_pattern("/users/:id");
    m.register_pattern("/users/:id");
    assert!(warnings().is_empty());
    assert_eq!(m.len(), 1);
}

#[test]
fn test_trailing_slash_warns_in_explicit_index_mode() {
    capture();
    let mut m = Matcher::new(MatcherConfig::new().explicit_index_segment("_index")).unwrap();
    let pattern = m.register_pattern("/dashboard/");
    assert_eq!(pattern.normalized_pattern(), "/dashboard");

    let warnings = warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("/dashboard/"));
    assert!(warnings[0].contains("trailing slash"));
}

#[test]
fn test_trailing_slash_is_quiet_when_requested() {
    capture();
    let mut m = Matcher::new(
        MatcherConfig::new()
            .explicit_index_segment("_index")
            .quiet(true),
    )
    .unwrap();
    m.register_pattern("/dashboard/");
    assert!(warnings().is_empty());
}

#[test]
fn test_trailing_slash_without_explicit_index_is_silent() {
    capture();
    let mut m = Matcher::default();
    m.register_pattern("/dashboard/");
    assert!(warnings().is_empty());
}
