use super::*;
use crate::{buffer_handler, InterpreterBuilder};

fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

#[test]
fn guard_pops_scope_on_drop() {
    let mut interp = interpreter();
    let base = interp.env().depth();
    {
        let mut scoped = interp.scoped();
        scoped.env.define("x", Value::Number(1.0));
        assert_eq!(scoped.env().depth(), base + 1);
    }
    assert_eq!(interp.env().depth(), base);
    assert_eq!(interp.env().lookup("x"), None);
}

#[test]
fn with_env_scope_returns_closure_result() {
    let mut interp = interpreter();
    let value = interp.with_env_scope(|scoped| {
        scoped.env.define("y", Value::Bool(true));
        scoped.env().lookup("y")
    });
    assert_eq!(value, Some(Value::Bool(true)));
    assert_eq!(interp.env().lookup("y"), None);
}

#[test]
fn with_bindings_defines_each_pair() {
    let mut interp = interpreter();
    let names = ["a", "b"];
    let values = [Value::Number(1.0), Value::Number(2.0)];
    let sum = interp.with_bindings(names.into_iter().zip(values), |scoped| {
        let a = scoped.env().lookup("a");
        let b = scoped.env().lookup("b");
        (a, b)
    });
    assert_eq!(sum, (Some(Value::Number(1.0)), Some(Value::Number(2.0))));
}

#[test]
fn nested_guards_unwind_in_order() {
    let mut interp = interpreter();
    let base = interp.env().depth();
    interp.with_bindings([("outer", Value::Nil)], |outer| {
        outer.with_bindings([("inner", Value::Nil)], |inner| {
            assert_eq!(inner.env().depth(), base + 2);
            assert!(inner.env().lookup("outer").is_some());
        });
        assert_eq!(outer.env().depth(), base + 1);
        assert_eq!(outer.env().lookup("inner"), None);
    });
    assert_eq!(interp.env().depth(), base);
}

#[test]
fn early_error_still_pops() {
    let mut interp = interpreter();
    let base = interp.env().depth();
    let result: Result<(), &str> = interp.with_env_scope(|_| Err("boom"));
    assert!(result.is_err());
    assert_eq!(interp.env().depth(), base);
}
