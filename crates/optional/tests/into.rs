use std::any::Any;
use std::cell::{OnceCell, RefCell};
use std::error::Error as StdError;

use optional::{Error, Optional};

type BoxError = Box<dyn StdError + Send + Sync>;

#[test]
fn get_into_stores_present_value() {
    let mut s = String::new();
    Optional::of(String::from("foo")).unwrap().get_into(&mut s).unwrap();
    assert_eq!(s, "foo");

    let mut is: Vec<i32> = Vec::new();
    Optional::of(vec![1, 2, 3]).unwrap().get_into(&mut is).unwrap();
    assert_eq!(is, vec![1, 2, 3]);
}

#[test]
fn get_into_on_empty_leaves_destination_untouched() {
    let mut s = String::from("untouched");
    assert_eq!(Optional::<String>::empty().get_into(&mut s), Err(Error::EmptyValue));
    assert_eq!(s, "untouched");
}

#[test]
fn get_into_checks_dynamic_destination_type() {
    let mut i = 0i32;
    let err = Optional::of("foo").unwrap().get_into(&mut i as &mut dyn Any).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(i, 0);

    let mut s = "";
    Optional::of("foo").unwrap().get_into(&mut s as &mut dyn Any).unwrap();
    assert_eq!(s, "foo");
}

#[test]
fn get_into_rejects_borrowed_cell() {
    let cell = RefCell::new(0u32);
    let guard = cell.borrow_mut();
    assert_eq!(Optional::of(5u32).unwrap().get_into(&cell), Err(Error::NotAWritableDestination));
    drop(guard);

    Optional::of(5u32).unwrap().get_into(&cell).unwrap();
    assert_eq!(*cell.borrow(), 5);
}

#[test]
fn or_else_into_stores_fallback() {
    let mut s = "";
    Optional::empty().or_else_into("baz", &mut s).unwrap();
    assert_eq!(s, "baz");

    Optional::of("qux").unwrap().or_else_into("baz", &mut s).unwrap();
    assert_eq!(s, "qux");
}

#[test]
fn or_else_into_replaces_null_error() {
    let missing: Option<BoxError> = None;
    let mut err_dst: Option<BoxError> = None;

    Optional::of_nilable(missing)
        .or_else_into(Some("some error".into()), &mut err_dst)
        .unwrap();

    assert_eq!(err_dst.map(|e| e.to_string()), Some(String::from("some error")));
}

#[test]
fn or_else_get_into_stores_supplied_value() {
    let mut s = "";
    Optional::empty().or_else_get_into(|| "baz", &mut s).unwrap();
    assert_eq!(s, "baz");
}

#[test]
fn or_else_get_into_once_cell() {
    let cell = OnceCell::new();
    Optional::of(1u8).unwrap().or_else_get_into(|| 2, &cell).unwrap();
    assert_eq!(Optional::<u8>::empty().or_else_get_into(|| 2, &cell), Err(Error::NotAWritableDestination));
    assert_eq!(cell.get(), Some(&1));
}

#[test]
fn or_else_panic_into_stores_present_value() {
    let mut s = "";
    Optional::of("baz").unwrap().or_else_panic_into("some message", &mut s).unwrap();
    assert_eq!(s, "baz");
}

#[test]
#[should_panic(expected = "some message")]
fn or_else_panic_into_panics_when_empty() {
    let mut s = "";
    let _ = Optional::<&str>::empty().or_else_panic_into("some message", &mut s);
}
