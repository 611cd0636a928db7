//! Logging from thread-local destructors while the thread exits

use std::cell::RefCell;
use std::sync::Arc;
use std::thread;
use timber::test_support::CaptureDispatcher;
use timber::{Logger, mdc};

struct LogOnDrop(Option<Logger>);

impl Drop for LogOnDrop {
    fn drop(&mut self) {
        if let Some(logger) = self.0.take() {
            let _guard = mdc::put_scoped("phase", "teardown");
            logger.info("logged from a destructor");
        }
    }
}

thread_local! {
    static LATE: RefCell<LogOnDrop> = const { RefCell::new(LogOnDrop(None)) };
}

fn arm(capture: &CaptureDispatcher, name: &'static str) {
    LATE.with(|late| {
        late.borrow_mut().0 = Some(Logger::new(name, Arc::new(capture.clone())));
    });
}

#[test]
fn test_log_from_destructor_registered_before_context() {
    let capture = CaptureDispatcher::new();
    let worker = capture.clone();

    thread::spawn(move || {
        arm(&worker, "late");
        mdc::put("k", "v");
    })
    .join()
    .unwrap();

    let records = capture.records_for("late");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "logged from a destructor");
}

#[test]
fn test_log_from_destructor_registered_after_context() {
    let capture = CaptureDispatcher::new();
    let worker = capture.clone();

    thread::spawn(move || {
        mdc::put("k", "v");
        arm(&worker, "later");
    })
    .join()
    .unwrap();

    let records = capture.records_for("later");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "logged from a destructor");
}
