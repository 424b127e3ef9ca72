//! Integration tests for Value types
//!
//! Tests Value variants, truthiness, equality, text conversion, and wrapping.

use enumerable_foundation::{Array, Collection, Number, Opaque, Type, Value, collection};
use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_from_scalars() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7), Value::Int(7));
    assert_eq!(Value::from(7_usize), Value::Int(7));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("s"), Value::String(Arc::from("s")));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn value_from_vec_is_raw_array() {
    let v = Value::from(vec![1, 2, 3]);
    assert!(matches!(v, Value::Array(_)));
    assert_eq!(v.as_array().map(Array::len), Some(3));
}

#[test]
fn value_types() {
    assert_eq!(Value::Null.value_type(), Type::Null);
    assert_eq!(Value::from("x").value_type(), Type::String);
    assert_eq!(
        Value::from(collection![1]).value_type(),
        Type::collection(Type::Any)
    );
}

// =============================================================================
// Truthiness and Equality
// =============================================================================

#[test]
fn falsy_values() {
    for v in [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
        Value::from("0"),
        Value::from(Collection::new()),
    ] {
        assert!(!v.is_truthy(), "{v:?} should be falsy");
    }
}

#[test]
fn loose_equality_rules() {
    assert!(Value::Int(1).loose_eq(&Value::from("1")));
    assert!(Value::Int(1).loose_eq(&Value::Float(1.0)));
    assert!(Value::from("1e1").loose_eq(&Value::from("10")));
    assert!(Value::Null.loose_eq(&Value::Bool(false)));
    assert!(Value::Null.loose_eq(&Value::from("")));
    assert!(Value::Bool(true).loose_eq(&Value::from("yes")));
    assert!(!Value::from("abc").loose_eq(&Value::Int(0)));
    assert!(!Value::from("1").loose_eq(&Value::from("01x")));
}

#[test]
fn loose_equality_on_collections_ignores_order() {
    let a = Value::from(collection! { "x" => 1, "y" => 2 });
    let b = Value::from(collection! { "y" => "2", "x" => 1 });
    assert!(a.loose_eq(&b));
    assert_ne!(a, b);
}

#[test]
fn strict_equality_is_variant_exact() {
    assert!(Value::Int(1).strict_eq(&Value::Int(1)));
    assert!(!Value::Int(1).strict_eq(&Value::Float(1.0)));
    assert!(!Value::Int(1).strict_eq(&Value::from("1")));
}

#[test]
fn values_hash_consistently() {
    let mut set = HashSet::new();
    set.insert(Value::Int(1));
    set.insert(Value::Int(1));
    set.insert(Value::from("1"));
    set.insert(Value::from(collection![1, 2]));
    set.insert(Value::from(collection![1, 2]));
    assert_eq!(set.len(), 3);
}

// =============================================================================
// Objects
// =============================================================================

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn opaque_objects_compare_by_identity() {
    let p = Opaque::new(Point { x: 1, y: 2 });
    let same = Value::Object(p.clone());
    let other = Value::Object(Opaque::new(Point { x: 1, y: 2 }));

    assert_eq!(Value::Object(p.clone()), same);
    assert_ne!(same, other);
    assert!(!same.loose_eq(&other));
    assert_eq!(p.downcast_ref::<Point>(), Some(&Point { x: 1, y: 2 }));
    assert!(p.type_name().ends_with("Point"));
}

// =============================================================================
// Text and Numbers
// =============================================================================

#[test]
fn text_conversion() {
    assert_eq!(Value::Int(42).to_text(), "42");
    assert_eq!(Value::Float(0.5).to_text(), "0.5");
    assert_eq!(Value::Float(f64::INFINITY).to_text(), "INF");
    assert_eq!(Value::Bool(true).to_text(), "1");
    assert_eq!(Value::from(collection![1]).to_text(), "Array");
}

#[test]
fn number_arithmetic() {
    assert_eq!(Number::Int(2).add(Number::Int(3)), Number::Int(5));
    assert_eq!(Number::Int(2).add(Number::Float(0.5)), Number::Float(2.5));
    assert_eq!(Number::Int(9).div(3), Number::Int(3));
    assert_eq!(Number::Int(7).div(2), Number::Float(3.5));
}

#[test]
fn number_ordering_is_exact() {
    let big = Number::Int(9_007_199_254_740_993);
    let rounded = Number::Float(9_007_199_254_740_992.0);
    assert!(big.total_cmp(rounded).is_gt());
    assert!(Number::Float(f64::NAN).total_cmp(Number::Int(i64::MAX)).is_gt());
}

// =============================================================================
// Wrapping
// =============================================================================

#[test]
fn wrapped_converts_arrays_only() {
    assert!(Value::from(vec![1]).wrapped().is_collection());
    assert_eq!(Value::Int(3).wrapped(), Value::Int(3));
}

#[test]
fn wrapping_is_recursive() {
    let raw = Value::from(vec![Value::from(vec![Value::from(vec![1])])]);
    let wrapped = raw.wrapped();
    let level1 = wrapped.as_collection().unwrap();
    let level2 = level1.get(0).and_then(Value::as_collection).unwrap();
    assert!(level2.get(0).is_some_and(Value::is_collection));
}
