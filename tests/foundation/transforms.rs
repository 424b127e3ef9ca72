//! Integration tests for copy-returning transformations

use enumerable_foundation::{
    Array, Arrayable, Collection, Key, Opaque, Seed, SortMode, Value, collection,
};

// =============================================================================
// Receiver Untouched
// =============================================================================

#[test]
fn transformations_leave_receiver_untouched() {
    let c = collection! { "a" => 1, 0 => collection![2, 3], "b" => "4" };
    let snapshot = c.clone();

    let _ = c.map(|v| v.clone());
    let _ = c.filter(|_, _| false);
    let _ = c.flatten();
    let _ = c.reverse(false);
    let _ = c.slice(1, None, false);
    let _ = c.merge([vec![9]]).unwrap();
    let _ = c.sort(SortMode::Regular);
    let _ = c.only(["a"]);

    assert_eq!(c, snapshot);
}

#[test]
fn transform_mutates_in_place() {
    let mut c = collection! { "a" => 1, "b" => 2 };
    c.transform(|v, k| format!("{k}{}", v.to_text()));
    assert_eq!(c, collection! { "a" => "a1", "b" => "b2" });
}

// =============================================================================
// Reduce / Pipe
// =============================================================================

#[test]
fn reduce_concatenates_in_order() {
    let c = collection!["a", "b", "c"];
    let joined = c.reduce(
        |acc, v| Value::from(format!("{}{}", acc.to_text(), v.to_text())),
        Seed::Initial(Value::from(">")),
    );
    assert_eq!(joined, Some(Value::from(">abc")));
}

#[test]
fn pipe_returns_anything() {
    let c = collection![1, 2, 3];
    let described = c.pipe(|c| format!("{} items", c.len()));
    assert_eq!(described, "3 items");
}

// =============================================================================
// Reshaping
// =============================================================================

#[test]
fn flip_drops_unkeyable_values() {
    let c = collection![1, "x", 2.5, true];
    assert_eq!(c.flip(), collection! { 1 => 0, "x" => 1 });
}

#[test]
fn flatten_vs_collapse() {
    let c = collection![collection![1, collection![2]], 3];
    assert_eq!(c.flatten(), collection![1, 2, 3]);
    assert_eq!(c.collapse(), collection![1, collection![2]]);
}

#[test]
fn unique_keeps_first_occurrence() {
    let c = collection![1, "1", 2];
    let unique = c.unique(SortMode::String);
    assert_eq!(unique, collection![1, 2]);
    assert_eq!(unique.get(0), Some(&Value::Int(1)));

    let case = collection!["A", "a", "b"];
    assert_eq!(case.unique(SortMode::StringCaseInsensitive), collection!["A", "b"]);
    assert_eq!(case.unique(SortMode::String).len(), 3);
}

#[test]
fn slice_boundaries() {
    let c = collection!["a", "b", "c", "d"];
    assert_eq!(c.slice(0, None, false), c);
    assert_eq!(c.slice(-2, Some(1), false), collection!["c"]);
    assert_eq!(c.slice(4, None, false), Collection::new());
}

#[test]
fn slice_keeps_string_keys() {
    let c = collection! { "x" => 1, 5 => 2, "y" => 3 };
    assert_eq!(c.slice(0, Some(2), false), collection! { "x" => 1, 0 => 2 });
    assert_eq!(c.slice(1, None, true), collection! { 5 => 2, "y" => 3 });
}

#[test]
fn chunk_and_split_sizes() {
    let five = collection![1, 2, 3, 4, 5];
    let sizes = |c: &Collection| -> Vec<usize> {
        c.values_iter()
            .filter_map(Value::as_collection)
            .map(Collection::len)
            .collect()
    };
    assert_eq!(sizes(&five.chunk(2, false).unwrap()), vec![2, 2, 1]);

    let seven = Collection::from_values(1..=7);
    assert_eq!(sizes(&seven.split(3).unwrap()), vec![3, 2, 2]);
}

#[test]
fn only_and_except() {
    let c = collection! { "id" => 1, "name" => "ada", "role" => "admin" };
    assert_eq!(c.only(["name", "id"]), collection! { "name" => "ada", "id" => 1 });
    assert_eq!(c.except(["role", "missing"]), collection! { "id" => 1, "name" => "ada" });
}

// =============================================================================
// Combining Sources
// =============================================================================

#[test]
fn merge_key_collision_rule() {
    let merged = collection! { "a" => 1, 0 => "x" }
        .merge([collection! { "a" => 2, 0 => "y" }])
        .unwrap();
    assert_eq!(merged.get("a"), Some(&Value::Int(2)));
    assert_eq!(merged.get(0), Some(&Value::from("x")));
    assert_eq!(merged.get(1), Some(&Value::from("y")));
    assert_eq!(merged.first_key(), Some(&Key::from("a")));
}

#[test]
fn merge_many_sources() {
    let merged = collection![1]
        .merge([Value::from(vec![2]), Value::from(collection![3]), Value::from(vec![4])])
        .unwrap();
    assert_eq!(merged, collection![1, 2, 3, 4]);
}

struct Tags(Vec<&'static str>);

impl Arrayable for Tags {
    fn to_array(&self) -> Array {
        let mut array = Array::new();
        for tag in &self.0 {
            array.insert(*tag, true);
        }
        array
    }
}

#[test]
fn arrayable_objects_merge_like_arrays() {
    let tags = Value::Object(Opaque::arrayable(Tags(vec!["new", "hot"])));
    let merged = collection! { "new" => false, 0 => "x" }
        .merge([tags.clone()])
        .unwrap();
    assert_eq!(merged, collection! { "new" => true, 0 => "x", "hot" => true });

    let keys = collection!["a", "b"];
    assert_eq!(
        keys.combine(tags.clone()).unwrap(),
        collection! { "a" => true, "b" => true }
    );
    assert_eq!(
        collection![true, 0].intersect([tags]).unwrap(),
        collection![true]
    );

    let opaque = Value::Object(Opaque::new(Tags(vec!["x"])));
    assert!(keys.merge([opaque]).unwrap_err().is_invalid_argument());
}

#[test]
fn diff_and_intersect_use_loose_equality() {
    let c = collection![1, "2", 3, 4];
    assert_eq!(c.diff([vec!["1", "4"]]).unwrap(), collection! { 1 => "2", 2 => 3 });
    assert_eq!(
        c.intersect([vec![2.0, 3.0]]).unwrap(),
        collection! { 1 => "2", 2 => 3 }
    );
}

#[test]
fn sources_must_be_array_like() {
    let c = collection![1];
    assert!(c.merge(["nope"]).unwrap_err().is_invalid_argument());
    assert!(c.diff([Value::Null]).is_err());
    assert!(c.intersect([true]).is_err());
    assert!(c.combine(3).is_err());
}

#[test]
fn combine_builds_a_map() {
    let keys = collection!["a", "b"];
    assert_eq!(
        keys.combine(vec![10, 20]).unwrap(),
        collection! { "a" => 10, "b" => 20 }
    );
    assert!(keys.combine(vec![10]).unwrap_err().is_invalid_argument());
}

#[test]
fn pluck_records() {
    let rows = collection![
        collection! { "id" => "u1", "email" => "a@x" },
        collection! { "id" => "u2", "email" => "b@x" },
        collection! { "id" => "u3" },
    ];
    assert_eq!(rows.pluck("email", None), collection!["a@x", "b@x"]);
    assert_eq!(
        rows.pluck("email", Some(Key::from("id"))),
        collection! { "u1" => "a@x", "u2" => "b@x" }
    );
}
