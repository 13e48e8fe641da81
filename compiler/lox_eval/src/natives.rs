//! Built-in functions installed in the global scope.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::native_failure;
use crate::{Environment, EvalResult, Value};

/// Define every built-in as a global in `env`.
pub fn register_natives(env: &mut Environment) {
    env.define_global("clock", Value::native("clock", 0, clock));
}

/// `clock()`: seconds since the Unix epoch.
fn clock(_args: &[Value]) -> EvalResult {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| native_failure("clock", &err.to_string()))?;
    Ok(Value::Number(elapsed.as_secs_f64()))
}
