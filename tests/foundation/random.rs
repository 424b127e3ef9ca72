//! Integration tests for shuffling and sampling
//!
//! Uses a seeded ChaCha generator so every run draws the same values.

use enumerable_foundation::{Collection, SortMode, Value, collection};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5eed)
}

#[test]
fn shuffle_preserves_values() {
    let c = collection! { "a" => 1, "b" => 2, "c" => 3, "d" => 4 };
    let shuffled = c.shuffle_with(&mut rng());
    assert_eq!(shuffled.keys(), collection![0, 1, 2, 3]);
    assert_eq!(shuffled.sort(SortMode::Regular), collection![1, 2, 3, 4]);
}

#[test]
fn random_bounds() {
    let c = collection![1, 2, 3];
    let mut rng = rng();
    assert!(c.random_with(0, &mut rng).unwrap_err().is_domain());
    assert!(c.random_with(4, &mut rng).unwrap_err().is_domain());
    assert!(c.random_with(3, &mut rng).is_ok());
}

#[test]
fn random_on_empty_is_not_an_error() {
    assert_eq!(Collection::new().random(1).unwrap(), None);
    assert_eq!(Collection::new().random(0).unwrap(), None);
}

#[test]
fn random_sample_is_distinct_subset() {
    let c = Collection::from_values(0..50);
    let sample = c.random_with(10, &mut rng()).unwrap().unwrap();
    let sample = sample.as_collection().unwrap();
    assert_eq!(sample.len(), 10);
    assert_eq!(sample.unique(SortMode::Regular).len(), 10);
    assert!(sample.values_iter().all(|v| c.contains(v.clone(), true)));
}

#[test]
fn same_seed_same_draw() {
    let c = Collection::from_values(0..50);
    let a = c.random_with(5, &mut rng()).unwrap();
    let b = c.random_with(5, &mut rng()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_draw_is_a_value() {
    let c = collection!["only"];
    assert_eq!(c.random(1).unwrap(), Some(Value::from("only")));
}
