//! Integration tests for TypedCollection

use enumerable_foundation::{Arrayable, Collection, Key, SortMode, Type, Value, collection};
use enumerable_typed::{PredicateValidator, TypeValidator, TypedCollection, Validator};

fn ints() -> TypedCollection<TypeValidator> {
    TypedCollection::new(TypeValidator::new(Type::Int))
}

#[test]
fn every_insertion_path_validates() {
    let mut c = ints();
    assert!(c.set(None, "x").is_err());
    assert!(c.insert("k", 1.5).is_err());
    assert!(c.append(Value::Null).is_err());
    assert!(c.add([Value::Int(1), Value::Bool(true)]).is_err());
    assert!(c.push([Value::from("2")]).is_err());
    assert!(c.unshift([Value::Float(2.0)]).is_err());
    assert!(c.replace(vec![Value::from("y")]).is_err());
    assert!(c.is_empty());
}

#[test]
fn rejections_name_the_operation() {
    let mut c = ints();
    for (operation, result) in [
        ("set", c.append("x").map(|_| ())),
        ("add", c.add(["x"]).map(|_| ())),
        ("unshift", c.unshift(["x"]).map(|_| ())),
        ("replace", c.replace(vec!["x"]).map(|_| ())),
    ] {
        let err = result.unwrap_err();
        assert_eq!(err.context.and_then(|ctx| ctx.operation).as_deref(), Some(operation));
    }
}

#[test]
fn accepted_values_behave_like_a_collection() {
    let mut c = ints();
    c.add([5, 3, 9]).unwrap().insert("answer", 42).unwrap();

    assert_eq!(c.len(), 4);
    assert_eq!(c.max(), Some(&Value::Int(42)));
    assert_eq!(c.first_key(), Some(&Key::Int(0)));
    assert_eq!(c.sort(SortMode::Regular), collection![3, 5, 9, 42]);
    assert_eq!(c.filter(|v, _| v.as_int().is_some_and(|n| n > 5)).len(), 2);
}

#[test]
fn unshift_renumbers_like_the_engine() {
    let mut c = TypedCollection::try_from_values(TypeValidator::new(Type::String), ["b", "c"])
        .unwrap();
    c.unshift(["a"]).unwrap();
    assert_eq!(c, collection!["a", "b", "c"]);
}

#[test]
fn replace_with_collection_source() {
    let mut c = ints();
    c.append(1).unwrap();
    c.replace(collection! { "x" => 10, "y" => 20 }).unwrap();
    assert_eq!(c, collection! { "x" => 10, "y" => 20 });
}

#[test]
fn transform_results_are_validated() {
    let mut c = TypedCollection::try_from_values(TypeValidator::new(Type::Int), [1, 2]).unwrap();
    assert!(c.transform(|v, _| v.to_text().into_owned()).is_err());
    assert_eq!(c, collection![1, 2]);

    c.transform(|v, k| v.as_int().unwrap_or(0) + k.as_int().unwrap_or(0)).unwrap();
    assert_eq!(c, collection![1, 3]);
}

#[test]
fn conversions() {
    let c = TypedCollection::try_from_pairs(
        TypeValidator::new(Type::collection(Type::Int)),
        [("row", vec![1, 2])],
    )
    .unwrap();

    let array = c.to_array();
    assert!(matches!(array.get(&Key::from("row")), Some(Value::Array(_))));

    let value = Value::from(c.clone());
    assert!(value.is_collection());

    let plain: Collection = c.into_inner();
    assert!(plain.get("row").is_some_and(Value::is_collection));
}

#[test]
fn boxed_validators_mix() {
    let validators: Vec<Box<dyn Validator>> = vec![
        Box::new(TypeValidator::new(Type::String)),
        Box::new(PredicateValidator::new("non-null", |v: &Value| !v.is_null())),
    ];
    for validator in validators {
        let mut c = TypedCollection::new(validator);
        assert!(c.append("ok").is_ok());
        assert!(c.append(Value::Null).is_err());
    }
}

#[test]
fn iteration_by_reference() {
    let c = TypedCollection::try_from_values(TypeValidator::new(Type::Int), [7, 8]).unwrap();
    let total: i64 = (&c).into_iter().filter_map(|(_, v)| v.as_int()).sum();
    assert_eq!(total, 15);
    assert_eq!(c.to_string(), "[0 => 7, 1 => 8]");
}
