//! Typed assignment of JSON values onto scan targets.
//!
//! The shipped sources carry their rows as [`serde_json::Value`]s; this
//! module maps one value onto one [`ScanTarget`], probing the target's
//! concrete type. Supported targets: `String`, `i64`, `u64`, `f64`, `bool`,
//! their `Option` counterparts, and [`Value`] itself (verbatim pass-through).

use serde_json::Value;

use crate::error::{AssignError, AssignResult};
use crate::record::ScanTarget;

/// Write `value` into `target`, converting to the target's type.
///
/// `Null` only fits `Option` targets (written as `None`); arrays and objects
/// only fit a raw [`Value`] target.
pub fn assign(target: &mut ScanTarget<'_>, value: &Value) -> AssignResult<()> {
    if target.is::<Value>() {
        return target.put(value.clone());
    }

    match value {
        Value::String(s) => {
            if target.is::<Option<String>>() {
                target.put(Some(s.clone()))
            } else {
                target.put(s.clone())
            }
        }
        Value::Number(n) => assign_number(target, n),
        Value::Bool(b) => {
            if target.is::<Option<bool>>() {
                target.put(Some(*b))
            } else {
                target.put(*b)
            }
        }
        Value::Null => assign_null(target),
        Value::Array(_) => Err(AssignError::Unsupported { kind: "array" }),
        Value::Object(_) => Err(AssignError::Unsupported { kind: "object" }),
    }
}

fn assign_number(target: &mut ScanTarget<'_>, n: &serde_json::Number) -> AssignResult<()> {
    let unrepresentable = || AssignError::Unsupported { kind: "number" };

    if target.is::<i64>() {
        target.put(n.as_i64().ok_or_else(unrepresentable)?)
    } else if target.is::<u64>() {
        target.put(n.as_u64().ok_or_else(unrepresentable)?)
    } else if target.is::<f64>() {
        target.put(n.as_f64().ok_or_else(unrepresentable)?)
    } else if target.is::<Option<i64>>() {
        target.put(Some(n.as_i64().ok_or_else(unrepresentable)?))
    } else if target.is::<Option<u64>>() {
        target.put(Some(n.as_u64().ok_or_else(unrepresentable)?))
    } else if target.is::<Option<f64>>() {
        target.put(Some(n.as_f64().ok_or_else(unrepresentable)?))
    } else {
        Err(AssignError::TypeMismatch { offered: "number" })
    }
}

fn assign_null(target: &mut ScanTarget<'_>) -> AssignResult<()> {
    if target.is::<Option<String>>() {
        target.put(None::<String>)
    } else if target.is::<Option<i64>>() {
        target.put(None::<i64>)
    } else if target.is::<Option<u64>>() {
        target.put(None::<u64>)
    } else if target.is::<Option<f64>>() {
        target.put(None::<f64>)
    } else if target.is::<Option<bool>>() {
        target.put(None::<bool>)
    } else {
        Err(AssignError::Unsupported { kind: "null" })
    }
}
