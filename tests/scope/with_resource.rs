use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};

use error_defer::traits::Close;
use error_defer::with_resource;

struct Journal<'a> {
    log: &'a RefCell<Vec<String>>,
    close_error: Option<&'static str>,
}

impl Close for Journal<'_> {
    type Error = &'static str;

    fn close(self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push("close".to_string());
        match self.close_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Journal<'_> {
    fn append(&mut self, entry: &str) {
        self.log.borrow_mut().push(entry.to_string());
    }
}

#[test]
fn closes_after_body_and_keeps_value() {
    let log = RefCell::new(Vec::new());
    let journal = Journal {
        log: &log,
        close_error: None,
    };

    let result: Result<u32, &str> = with_resource(journal, |journal| {
        journal.append("write");
        Ok(7)
    });

    assert_eq!(result, Ok(7));
    assert_eq!(*log.borrow(), vec!["write", "close"]);
}

#[test]
fn close_error_replaces_success() {
    let log = RefCell::new(Vec::new());
    let journal = Journal {
        log: &log,
        close_error: Some("disk full"),
    };

    let result: Result<u32, &str> = with_resource(journal, |_| Ok(7));

    assert_eq!(result, Err("disk full"));
}

#[test]
fn body_error_beats_close_error() {
    let log = RefCell::new(Vec::new());
    let journal = Journal {
        log: &log,
        close_error: Some("disk full"),
    };

    let result: Result<u32, &str> = with_resource(journal, |journal| {
        journal.append("lookup");
        Err::<(), _>("not found")?;
        journal.append("unreachable");
        Ok(7)
    });

    assert_eq!(result, Err("not found"));
    assert_eq!(*log.borrow(), vec!["lookup", "close"]);
}

#[test]
fn body_panic_still_closes() {
    let log = RefCell::new(Vec::new());
    let journal = Journal {
        log: &log,
        close_error: Some("disk full"),
    };

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let _: Result<(), &str> = with_resource(journal, |_| panic!("primary logic blew up"));
    }));

    assert!(outcome.is_err());
    assert_eq!(*log.borrow(), vec!["close"]);
}

#[test]
fn close_error_converts_into_body_error() {
    #[derive(Debug, PartialEq)]
    enum AppError {
        Io(&'static str),
    }

    impl From<&'static str> for AppError {
        fn from(value: &'static str) -> Self {
            AppError::Io(value)
        }
    }

    let body_calls = Cell::new(0);
    let log = RefCell::new(Vec::new());
    let journal = Journal {
        log: &log,
        close_error: Some("disk full"),
    };

    let result: Result<(), AppError> = with_resource(journal, |_| {
        body_calls.set(body_calls.get() + 1);
        Ok(())
    });

    assert_eq!(result, Err(AppError::Io("disk full")));
    assert_eq!(body_calls.get(), 1);
    assert_eq!(*log.borrow(), vec!["close"]);
}
