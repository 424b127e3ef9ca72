//! Integration tests for sorting

use enumerable_foundation::{Key, SortMode, Value, collection};
use std::cmp::Ordering;

#[test]
fn sort_and_rsort_reindex() {
    let c = collection! { "b" => 2, "a" => 3, "c" => 1 };
    assert_eq!(c.sort(SortMode::Regular), collection![1, 2, 3]);
    assert_eq!(c.rsort(SortMode::Regular), collection![3, 2, 1]);
}

#[test]
fn numeric_mode_reads_strings() {
    let c = collection!["10", "9", "1e1", "x"];
    let sorted = c.sort(SortMode::Numeric);
    assert_eq!(sorted.get(0), Some(&Value::from("x")));
    assert_eq!(sorted.get(1), Some(&Value::from("9")));
}

#[test]
fn natural_mode_orders_digit_runs() {
    let c = collection!["file10.txt", "file2.txt", "file1.txt"];
    assert_eq!(
        c.sort(SortMode::Natural),
        collection!["file1.txt", "file2.txt", "file10.txt"]
    );
}

#[test]
fn regular_mode_ranks_kinds() {
    let c = collection![collection![1], "b", 2, Value::Null, "10", false];
    let sorted = c.sort(SortMode::Regular);
    assert_eq!(sorted.get(0), Some(&Value::Null));
    assert_eq!(sorted.get(1), Some(&Value::Bool(false)));
    assert_eq!(sorted.get(2), Some(&Value::Int(2)));
    assert_eq!(sorted.get(3), Some(&Value::from("10")));
    assert_eq!(sorted.get(4), Some(&Value::from("b")));
    assert!(sorted.get(5).is_some_and(Value::is_collection));
}

#[test]
fn key_sorts_preserve_keys() {
    let c = collection! { "10" => "a", "9" => "b", "x" => "c" };
    let ksorted: Vec<Key> = c.ksort(SortMode::Regular).keys_iter().cloned().collect();
    assert_eq!(ksorted, vec![Key::Int(9), Key::Int(10), Key::from("x")]);

    let by_text: Vec<Key> = c.ksort(SortMode::String).keys_iter().cloned().collect();
    assert_eq!(by_text, vec![Key::Int(10), Key::Int(9), Key::from("x")]);

    let krsorted: Vec<Key> = c.krsort(SortMode::Regular).keys_iter().cloned().collect();
    assert_eq!(krsorted, vec![Key::from("x"), Key::Int(10), Key::Int(9)]);
}

#[test]
fn custom_comparators() {
    let c = collection! { "x" => "ccc", "y" => "a", "z" => "bb" };
    let by_len = |a: &Value, b: &Value| a.to_text().len().cmp(&b.to_text().len());

    assert_eq!(c.usort(by_len), collection!["a", "bb", "ccc"]);
    assert_eq!(
        c.uasort(by_len),
        collection! { "y" => "a", "z" => "bb", "x" => "ccc" }
    );
    assert_eq!(
        c.uksort(|a, b| b.cmp(a)),
        collection! { "z" => "bb", "y" => "a", "x" => "ccc" }
    );
}

#[test]
fn sorts_are_stable() {
    let c = collection! { "a" => "B", "b" => "a", "c" => "b", "d" => "A" };
    let sorted = c.uasort(|x, y| x.compare(y, SortMode::StringCaseInsensitive));
    let keys: Vec<Key> = sorted.keys_iter().cloned().collect();
    assert_eq!(keys, vec![Key::from("b"), Key::from("d"), Key::from("a"), Key::from("c")]);
}

#[test]
fn compare_is_exposed() {
    assert_eq!(
        Value::from("a2").compare(&Value::from("a10"), SortMode::Natural),
        Ordering::Less
    );
    assert_eq!(
        Value::from("a2").compare(&Value::from("a10"), SortMode::String),
        Ordering::Greater
    );
}
