//! Integration tests for Key normalization and coercion

use enumerable_foundation::{Key, Value};

#[test]
fn canonical_integer_strings_normalize() {
    assert_eq!(Key::from("42"), Key::Int(42));
    assert_eq!(Key::from("-3"), Key::Int(-3));
    assert_eq!(Key::from("0"), Key::Int(0));
}

#[test]
fn non_canonical_strings_stay_strings() {
    for s in ["007", "+5", "5.0", "-0", " 5", "", "9223372036854775808"] {
        assert_eq!(Key::from(s).as_str(), Some(s), "{s:?} should stay a string");
    }
}

#[test]
fn coerce_scalars() {
    assert_eq!(Key::coerce(&Value::Float(2.9)), Some(Key::Int(2)));
    assert_eq!(Key::coerce(&Value::Float(-2.9)), Some(Key::Int(-2)));
    assert_eq!(Key::coerce(&Value::Bool(true)), Some(Key::Int(1)));
    assert_eq!(Key::coerce(&Value::Null), Some(Key::from("")));
    assert_eq!(Key::coerce(&Value::from("12")), Some(Key::Int(12)));
}

#[test]
fn coerce_rejects_compound_values() {
    assert_eq!(Key::coerce(&Value::from(vec![1])), None);
    assert_eq!(Key::coerce(&Value::Float(f64::NAN)), None);
}

#[test]
fn ints_order_before_strings() {
    let mut keys = vec![Key::from("b"), Key::Int(10), Key::from("a"), Key::Int(-1)];
    keys.sort();
    assert_eq!(
        keys,
        vec![Key::Int(-1), Key::Int(10), Key::from("a"), Key::from("b")]
    );
}

#[test]
fn key_to_value() {
    assert_eq!(Key::Int(3).to_value(), Value::Int(3));
    assert_eq!(Key::from("x").to_value(), Value::from("x"));
    assert_eq!(Value::from(Key::from("7")), Value::Int(7));
}

#[test]
fn key_display() {
    assert_eq!(Key::Int(5).to_string(), "5");
    assert_eq!(Key::from("name").to_string(), "name");
    assert_eq!(format!("{:?}", Key::from("name")), "\"name\"");
}
