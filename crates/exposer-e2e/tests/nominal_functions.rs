//! Free functions and the `World` class through the bound module.

use exposer::prelude::*;

fn bindings() -> Bindings {
    exposer_e2e::bindings().unwrap()
}

#[test]
fn test_do_nothing() {
    let bindings = bindings();
    assert_eq!(bindings.call("doNothing", &[]).unwrap(), Dynamic::Void);
}

#[test]
fn test_hello_world() {
    let bindings = bindings();
    assert_eq!(
        bindings.call("helloWorld", &[]).unwrap(),
        Dynamic::from("Hello world")
    );
}

#[test]
fn test_add() {
    let bindings = bindings();
    let sum = bindings
        .call("add", &[Dynamic::Int(1), Dynamic::Int(2)])
        .unwrap();
    assert_eq!(sum, Dynamic::Int(3));
}

#[test]
fn test_add_rejects_bad_arguments() {
    let bindings = bindings();

    let err = bindings.call("add", &[Dynamic::Int(1)]).unwrap_err();
    assert!(matches!(err, CallError::ArityMismatch { expected: 2, got: 1, .. }));

    let err = bindings
        .call("add", &[Dynamic::Int(1), Dynamic::from("2")])
        .unwrap_err();
    assert!(matches!(err, CallError::Argument { index: 1, .. }));
    assert!(err.conversion().unwrap().is_type_mismatch());

    let err = bindings
        .call("add", &[Dynamic::Int(i64::from(i32::MAX) + 1), Dynamic::Int(0)])
        .unwrap_err();
    assert!(err.conversion().unwrap().is_range_error());
}

#[test]
fn test_unknown_function() {
    let bindings = bindings();
    let err = bindings.call("goodbyeWorld", &[]).unwrap_err();
    assert!(matches!(err, CallError::UnknownSymbol { .. }));
}

#[test]
fn test_classes_are_bound() {
    let bindings = bindings();
    let world = bindings.construct("World", &[]).unwrap();
    assert!(!world.is_null());
    assert_eq!(world.as_object().unwrap().type_name(), "World");
}

#[test]
fn test_methods_are_bound() {
    let bindings = bindings();
    let mut world = bindings.construct("World", &[]).unwrap();
    bindings
        .invoke(&mut world, "set", &[Dynamic::from("Hello world!")])
        .unwrap();
    assert_eq!(
        bindings.invoke(&mut world, "greet", &[]).unwrap(),
        Dynamic::from("Hello world!")
    );
}

#[test]
fn test_greet_before_set() {
    let bindings = bindings();
    let mut world = bindings.construct("World", &[]).unwrap();
    assert_eq!(
        bindings.invoke(&mut world, "greet", &[]).unwrap(),
        Dynamic::from("")
    );
}

#[test]
fn test_private_member_is_hidden() {
    let bindings = bindings();
    let world = bindings.construct("World", &[]).unwrap();
    let err = bindings.get(&world, "msg").unwrap_err();
    assert!(matches!(err, CallError::UnknownSymbol { .. }));
}
