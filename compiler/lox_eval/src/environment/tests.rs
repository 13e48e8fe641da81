use super::*;

#[test]
fn test_scope_define_lookup() {
    let mut scope = Scope::new();
    scope.define("x", Value::Number(42.0));
    assert_eq!(scope.lookup("x"), Some(Value::Number(42.0)));
    assert_eq!(scope.lookup("y"), None);
}

#[test]
fn test_scope_shadowing() {
    let parent = LocalScope::new(Scope::new());
    parent.borrow_mut().define("x", Value::Number(1.0));

    let mut child = Scope::with_parent(parent.clone());
    child.define("x", Value::Number(2.0));

    assert_eq!(child.lookup("x"), Some(Value::Number(2.0)));
    assert_eq!(parent.borrow().lookup("x"), Some(Value::Number(1.0)));
}

#[test]
fn test_redefinition_overwrites() {
    let mut scope = Scope::new();
    scope.define("x", Value::Number(1.0));
    scope.define("x", Value::string("two"));
    assert_eq!(scope.lookup("x"), Some(Value::string("two")));
}

#[test]
fn test_assign_walks_outward() {
    let parent = LocalScope::new(Scope::new());
    parent.borrow_mut().define("x", Value::Number(1.0));

    let mut child = Scope::with_parent(parent.clone());
    assert_eq!(child.assign("x", Value::Number(5.0)), Ok(()));

    assert_eq!(parent.borrow().lookup("x"), Some(Value::Number(5.0)));
    // No binding was created in the child
    parent.borrow_mut().define("x", Value::Number(9.0));
    assert_eq!(child.lookup("x"), Some(Value::Number(9.0)));
}

#[test]
fn test_assign_undefined_never_creates() {
    let mut env = Environment::new();
    assert_eq!(
        env.assign("missing", Value::Nil),
        Err(AssignError::Undefined)
    );
    assert_eq!(env.lookup("missing"), None);
}

#[test]
fn test_environment_push_pop() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1.0));

    env.push_scope();
    env.define("x", Value::Number(2.0));
    assert_eq!(env.lookup("x"), Some(Value::Number(2.0)));
    assert_eq!(env.depth(), 2);

    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(Value::Number(1.0)));
    assert_eq!(env.depth(), 1);
}

#[test]
fn test_pop_keeps_bottom_scope() {
    let mut env = Environment::new();
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    env.define("x", Value::Nil);
    assert_eq!(env.lookup("x"), Some(Value::Nil));
}

#[test]
fn test_mutation_visible_through_shared_scope() {
    let mut env = Environment::new();
    env.push_scope();
    env.define("count", Value::Number(0.0));
    let captured = env.current_scope();

    env.assign("count", Value::Number(1.0)).unwrap();
    assert_eq!(captured.borrow().lookup("count"), Some(Value::Number(1.0)));

    captured
        .borrow_mut()
        .assign("count", Value::Number(2.0))
        .unwrap();
    assert_eq!(env.lookup("count"), Some(Value::Number(2.0)));
}

#[test]
fn test_captured_scope_outlives_pop() {
    let mut env = Environment::new();
    env.push_scope();
    env.define("inner", Value::Bool(true));
    let captured = env.current_scope();
    env.pop_scope();

    assert_eq!(env.lookup("inner"), None);
    assert_eq!(captured.borrow().lookup("inner"), Some(Value::Bool(true)));
}

#[test]
fn test_enclosed_starts_at_closure_and_shares_globals() {
    let mut env = Environment::new();
    env.define_global("g", Value::Number(1.0));
    env.push_scope();
    env.define("local", Value::Number(2.0));
    let closure = env.current_scope();

    let mut call_env = env.enclosed(closure.clone());
    assert_eq!(call_env.depth(), 1);
    assert_eq!(call_env.lookup("local"), Some(Value::Number(2.0)));
    assert_eq!(call_env.lookup("g"), Some(Value::Number(1.0)));
    closure.borrow_mut().define("late", Value::Bool(true));
    assert_eq!(call_env.lookup("late"), Some(Value::Bool(true)));

    call_env.push_scope();
    call_env.define("param", Value::Nil);
    call_env.pop_scope();
    assert_eq!(closure.borrow().lookup("param"), None);

    call_env.define_global("h", Value::Nil);
    env.pop_scope();
    assert_eq!(env.lookup("h"), Some(Value::Nil));
}
