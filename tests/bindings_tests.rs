//! Integration tests for the call-time surface, driven through `Context`
//! and `Bindings` only.

use std::sync::Arc;
use std::thread;

use exposer::prelude::*;

#[derive(Debug, Default, Clone)]
struct Calculator;

impl Calculator {
    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    fn substract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    fn divide(&self, a: f64, b: f64) -> f64 {
        a / b
    }
}

fn calculator_bindings() -> Bindings {
    let options = ContextOptions::default().module_name("libcalculator_bindings");
    let mut ctx = Context::with_options(options);
    ctx.register_binder(|module| {
        module.add_type(
            ClassBuilder::<Calculator>::class("Calculator")
                .default_constructor()?
                .method("add", Calculator::add)?
                .method("substract", Calculator::substract)?
                .method("multiply", Calculator::multiply)?
                .method("divide", Calculator::divide)?
                .build(),
        );
        Ok(())
    })
    .unwrap();
    ctx.seal().unwrap().clone()
}

// =============================================================================
// Method dispatch
// =============================================================================

#[test]
fn test_calculator_methods() {
    let bindings = calculator_bindings();
    let mut calc = bindings.construct("Calculator", &[]).unwrap();

    let args = [Dynamic::Float(6.0), Dynamic::Float(3.0)];
    assert_eq!(bindings.invoke(&mut calc, "add", &args).unwrap(), Dynamic::Float(9.0));
    assert_eq!(
        bindings.invoke(&mut calc, "substract", &args).unwrap(),
        Dynamic::Float(3.0)
    );
    assert_eq!(
        bindings.invoke(&mut calc, "multiply", &args).unwrap(),
        Dynamic::Float(18.0)
    );
    assert_eq!(
        bindings.invoke(&mut calc, "divide", &args).unwrap(),
        Dynamic::Float(2.0)
    );
}

#[test]
fn test_integers_widen_to_double_arguments() {
    let bindings = calculator_bindings();
    let mut calc = bindings.construct("Calculator", &[]).unwrap();

    let result = bindings
        .invoke(&mut calc, "add", &[Dynamic::Int(1), Dynamic::Int(2)])
        .unwrap();
    assert_eq!(result, Dynamic::Float(3.0));
}

#[test]
fn test_errors_surface_to_caller() {
    let bindings = calculator_bindings();
    let mut calc = bindings.construct("Calculator", &[]).unwrap();

    assert!(matches!(
        bindings.invoke(&mut calc, "add", &[Dynamic::Float(1.0)]),
        Err(CallError::ArityMismatch { expected: 2, got: 1, .. })
    ));
    assert!(matches!(
        bindings.invoke(&mut calc, "power", &[]),
        Err(CallError::UnknownSymbol { .. })
    ));
    assert!(matches!(
        bindings.construct("Calculator", &[Dynamic::Int(1)]),
        Err(CallError::NoMatchingConstructor { arity: 1, .. })
    ));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_module_is_shared_across_threads() {
    let bindings = calculator_bindings();
    let module = Arc::clone(bindings.module());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let bindings = bindings.clone();
            thread::spawn(move || {
                let mut calc = bindings.construct("Calculator", &[]).unwrap();
                let args = [Dynamic::Int(i), Dynamic::Int(i)];
                bindings.invoke(&mut calc, "add", &args).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Dynamic::Float((2 * i) as f64));
    }
    assert!(Arc::ptr_eq(&module, bindings.module()));
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_listing() {
    let bindings = calculator_bindings();
    let expected = "\
module libcalculator_bindings

class Calculator
    new()
    fn add(double, double) -> double
    fn divide(double, double) -> double
    fn multiply(double, double) -> double
    fn substract(double, double) -> double
";
    assert_eq!(bindings.listing(), expected);
}
