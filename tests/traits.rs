use std::any::Any;
use std::borrow::Cow;
use std::cell::Cell;

use fault_barrier::{attempt, attempt_with, AttemptResultExt, FaultCategory, IntoFaultInfo};

#[test]
fn test_str_into_fault_info() {
    let fault = "static message".into_fault_info();
    assert_eq!(fault.description(), "static message");
    assert_eq!(fault.category(), FaultCategory::Intercepted);
}

#[test]
fn test_string_into_fault_info() {
    let fault = String::from("owned message").into_fault_info();
    assert_eq!(fault.description(), "owned message");
}

#[test]
fn test_cow_into_fault_info() {
    let borrowed: Cow<'static, str> = Cow::Borrowed("borrowed");
    assert_eq!(borrowed.into_fault_info().description(), "borrowed");

    let owned: Cow<'static, str> = Cow::Owned("owned".to_string());
    assert_eq!(owned.into_fault_info().description(), "owned");
}

#[test]
fn test_panic_payload_downcast_ladder() {
    let payload: Box<dyn Any + Send> = Box::new("str payload");
    assert_eq!(payload.into_fault_info().description(), "str payload");

    let payload: Box<dyn Any + Send> = Box::new(String::from("string payload"));
    assert_eq!(payload.into_fault_info().description(), "string payload");

    let payload: Box<dyn Any + Send> = Box::new(7_u8);
    let fault = payload.into_fault_info();
    assert!(!fault.description().is_empty());
    assert_eq!(fault.category(), FaultCategory::Intercepted);
}

#[test]
fn test_ctx_leaves_success_untouched() {
    let outcome = attempt_with(|| 5).ctx("should not appear");
    assert_eq!(outcome.unwrap(), 5);
}

#[test]
fn test_ctx_appends_context_frame() {
    let outcome = attempt(|| panic!("boom")).ctx("outer operation");

    let fault = outcome.unwrap_err();
    assert_eq!(fault.fault_chain(), "outer operation -> boom");
}

#[test]
fn test_ctx_with_is_lazy_on_success() {
    let called = Cell::new(false);

    let outcome = attempt_with(|| 1).ctx_with(|| {
        called.set(true);
        "expensive".to_string()
    });

    assert!(outcome.is_ok());
    assert!(!called.get());
}

#[test]
fn test_ctx_with_formats_on_failure() {
    let user_id = 42;
    let outcome = attempt(|| panic!("not found"))
        .ctx_with(|| format!("loading user {}", user_id));

    let fault = outcome.unwrap_err();
    assert_eq!(fault.fault_chain(), "loading user 42 -> not found");
}
