#![allow(unused_crate_dependencies, reason = "These are tests, not the main crate.")]

//! Kept in its own test binary, so that nothing has touched the global logger beforehand.

mod common;


use std::sync::Arc;

use anchored_log::{
    AsArg as _, Level, Logger, TextLogger,
    default_logger, infof, set_shared_logger, uses_default_logger,
};
use anchored_log::logger::DEFAULT_PREFIX;

use self::common::lock_global_logger;


#[test]
fn default_logger_is_installed_without_setup() {
    let _guard = lock_global_logger();
    assert!(uses_default_logger());

    let line = default_logger().render(Level::Info, "x=%d", &[5_i32.as_arg()]);
    assert!(line.contains("INFO: x=5"), "unexpected line {line:?}");
    assert!(line.starts_with(DEFAULT_PREFIX));
    assert_eq!(line.matches('\n').count(), 1);
    assert!(line.ends_with('\n'));

    // Goes to standard error; this only checks that nothing panics.
    infof!("x=%d", 5);

    assert!(uses_default_logger());
}

#[test]
fn default_layout_is_written_to_the_sink() {
    let _guard = lock_global_logger();

    let sink = Arc::new(TextLogger::new(DEFAULT_PREFIX, Vec::<u8>::new()));
    assert!(sink.timestamps());

    let previous = set_shared_logger(Arc::clone(&sink) as Arc<dyn Logger>);
    infof!("x=%d", 5);
    drop(set_shared_logger(previous));
    assert!(uses_default_logger());

    let written = sink.with_sink(|bytes| String::from_utf8(bytes.clone()).unwrap());
    assert!(written.contains("INFO: x=5"), "unexpected output {written:?}");

    // "anchored " + "YYYY/MM/DD HH:MM:SS" + " INFO: x=5\n"
    let stamp = written
        .strip_prefix(DEFAULT_PREFIX)
        .and_then(|rest| rest.strip_suffix(" INFO: x=5\n"))
        .unwrap();
    assert_eq!(stamp.len(), 19, "unexpected timestamp {stamp:?}");
    assert_eq!(stamp.matches('/').count(), 2);
    assert_eq!(stamp.matches(':').count(), 2);
}
