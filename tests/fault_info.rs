use std::error::Error;

use fault_barrier::{FaultCategory, FaultInfo};

#[test]
fn test_fault_chain_format() {
    let fault = FaultInfo::intercepted("core fault")
        .with_context("ctx1")
        .with_context("ctx2")
        .set_code(500);

    assert_eq!(
        format!("{}", fault),
        "ctx2 -> ctx1 -> core fault (code: 500)"
    );
}

#[test]
fn test_fault_chain_without_context() {
    let fault = FaultInfo::intercepted("core fault");

    assert_eq!(format!("{}", fault), "core fault");
    assert_eq!(fault.code(), None);
}

#[test]
fn test_alternate_display_cascades() {
    let fault = FaultInfo::intercepted("core fault")
        .with_context("ctx1")
        .with_context("ctx2")
        .set_code(500);

    let expected = "Fault: core fault (code: 500)\n\
                    Category: intercepted fault\n\
                    Context:\n  - ctx2\n  - ctx1\n";
    assert_eq!(format!("{:#}", fault), expected);
}

#[test]
fn test_alternate_display_without_context() {
    let fault = FaultInfo::intercepted("core fault");

    assert_eq!(
        format!("{:#}", fault),
        "Fault: core fault\nCategory: intercepted fault"
    );
}

#[test]
fn test_context_iter_is_lifo() {
    let fault = FaultInfo::intercepted("fault")
        .with_context("ctx1")
        .with_context("ctx2");

    let mut iter = fault.context_iter();
    assert_eq!(iter.next().map(String::as_str), Some("ctx2"));
    assert_eq!(iter.next().map(String::as_str), Some("ctx1"));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_with_contexts_extends_stack() {
    let fault = FaultInfo::intercepted("fault")
        .with_contexts(["ctx1".to_string(), "ctx2".to_string()]);

    assert_eq!(fault.fault_chain(), "ctx2 -> ctx1 -> fault");
}

#[test]
fn test_blank_description_is_replaced() {
    let fault = FaultInfo::intercepted("   ");

    assert!(!fault.description().is_empty());
    assert_ne!(fault.description().trim(), "");
}

#[test]
fn test_missing_work_payload() {
    let fault = FaultInfo::missing_work();

    assert_eq!(fault.category(), FaultCategory::MissingWork);
    assert_eq!(fault.description(), "no unit of work was supplied");
    assert_eq!(fault.category().as_str(), "missing work");
}

#[test]
fn test_error_trait_impl() {
    let fault = FaultInfo::intercepted("root cause").with_context("context");

    let boxed: Box<dyn Error> = Box::new(fault);
    assert_eq!(boxed.to_string(), "context -> root cause");
    assert!(boxed.source().is_none());
}

#[test]
fn test_clone_and_eq() {
    let fault = FaultInfo::intercepted("fault")
        .with_context("ctx")
        .set_code(7);

    assert_eq!(fault.clone(), fault);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let fault = FaultInfo::intercepted("serialized fault")
        .with_context("ctx")
        .set_code(400);

    let json = serde_json::to_string(&fault).unwrap();
    let back: FaultInfo = serde_json::from_str(&json).unwrap();

    assert_eq!(back, fault);
    assert_eq!(back.category(), FaultCategory::Intercepted);
}
