//! Tests for operators called by method selector.

use crate::method_dispatch::apply_method;
use pretty_assertions::assert_eq;
use rite_value::{ErrorClass, OpErrorKind, Value};

#[test]
fn binary_selectors() {
    assert_eq!(apply_method(Value::int(1), "+", &[Value::int(2)]), Ok(Value::int(3)));
    assert_eq!(apply_method(Value::int(123), "%", &[Value::int(12)]), Ok(Value::int(3)));
    assert_eq!(
        apply_method(Value::int(0x01), "<<", &[Value::int(2)]),
        Ok(Value::int(0x04))
    );
    assert_eq!(
        apply_method(Value::int(1), "==", &[Value::Float(1.0)]),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        apply_method(Value::Float(1.5), "<=>", &[Value::int(2)]),
        Ok(Value::int(-1))
    );
}

#[test]
fn unary_selectors() {
    assert_eq!(apply_method(Value::Float(2.72), "-@", &[]), Ok(Value::Float(-2.72)));
    assert_eq!(apply_method(Value::int(123), "+@", &[]), Ok(Value::int(123)));
    assert_eq!(apply_method(Value::int(0x15a0), "~", &[]), Ok(Value::int(-5537)));
    assert_eq!(apply_method(Value::Nil, "!", &[]), Ok(Value::Bool(true)));
}

#[test]
fn selector_and_syntax_agree_on_failures() {
    let err = apply_method(Value::int(5), "/", &[Value::int(0)]).unwrap_err();
    assert_eq!(err.class(), ErrorClass::ZeroDivisionError);

    let err = apply_method(Value::Float(1.0), "&", &[Value::int(1)]).unwrap_err();
    assert_eq!(err.class(), ErrorClass::TypeError);
}

#[test]
fn logical_operators_are_not_methods() {
    let err = apply_method(Value::int(1), "&&", &[Value::int(2)]).unwrap_err();
    assert_eq!(
        err.kind,
        OpErrorKind::UndefinedMethod {
            selector: "&&".to_string(),
            type_name: "Integer",
        }
    );
}

#[test]
fn unknown_selector() {
    let err = apply_method(Value::Nil, "to_s", &[]).unwrap_err();
    assert_eq!(err.class(), ErrorClass::TypeError);
    assert_eq!(err.message(), "undefined method 'to_s' for NilClass");

    // Conversion methods are not operators.
    for selector in ["abs", "to_i", "to_f"] {
        let err = apply_method(Value::Float(-1.5), selector, &[]).unwrap_err();
        assert_eq!(err.class(), ErrorClass::TypeError);
    }
}

#[test]
fn wrong_argument_count() {
    let err = apply_method(Value::int(1), "+", &[]).unwrap_err();
    assert_eq!(
        err.kind,
        OpErrorKind::ArityMismatch {
            selector: "+".to_string(),
            expected: 1,
            got: 0,
        }
    );

    let err = apply_method(Value::int(1), "-@", &[Value::int(1)]).unwrap_err();
    assert_eq!(err.message(), "wrong number of arguments to '-@' (given 1, expected 0)");
}
