use std::fmt;

use error_defer::capture;

#[derive(Debug, Clone, PartialEq, Eq)]
enum StoreError {
    NotFound,
    DiskFull,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => f.write_str("not found"),
            StoreError::DiskFull => f.write_str("disk full"),
        }
    }
}

struct Handle {
    close_fails: bool,
}

impl Handle {
    fn close(&self) -> Result<(), StoreError> {
        if self.close_fails {
            Err(StoreError::DiskFull)
        } else {
            Ok(())
        }
    }
}

fn store(primary_fails: bool, close_fails: bool) -> Result<(), StoreError> {
    let handle = Handle { close_fails };
    let mut result = if primary_fails {
        Err(StoreError::NotFound)
    } else {
        Ok(())
    };
    capture(&mut result, || handle.close());
    result
}

#[test]
fn primary_succeeds_cleanup_fails() {
    let result = store(false, true);
    assert_eq!(result, Err(StoreError::DiskFull));
    assert_eq!(result.unwrap_err().to_string(), "disk full");
}

#[test]
fn primary_fails_cleanup_fails() {
    assert_eq!(store(true, true), Err(StoreError::NotFound));
}

#[test]
fn primary_succeeds_cleanup_succeeds() {
    assert_eq!(store(false, false), Ok(()));
}

#[test]
fn primary_fails_cleanup_succeeds() {
    assert_eq!(store(true, false), Err(StoreError::NotFound));
}

struct Closer;

impl Closer {
    fn close(&self) -> Result<(), String> {
        Err("<had problem closing!>".to_string())
    }
}

fn open_thingie() -> Result<Closer, String> {
    Ok(Closer)
}

#[test]
fn ignored_close_loses_the_error_but_captured_close_keeps_it() {
    let return1 = (|| -> Result<(), String> {
        let thing = open_thingie()?;
        let _ = thing.close();
        Ok(())
    })();

    let return2 = (|| -> Result<(), String> {
        let thing = open_thingie()?;
        let mut result = Ok(());
        capture(&mut result, || thing.close());
        result
    })();

    assert_eq!(format!("return1 == {:?}", return1), "return1 == Ok(())");
    assert_eq!(
        format!("return2 == {}", return2.unwrap_err()),
        "return2 == <had problem closing!>"
    );
}
