#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Ordered collection tests
///
/// This test suite covers:
/// - Strict and `try_` variants of get/add/remove
/// - Insertion order under overwrite and removal
/// - Construction from pairs and iteration
use queryset::{Collection, Error};

#[test]
fn test_empty_collection() {
    let collection: Collection<String> = Collection::new();
    assert_eq!(collection.count(), 0);
    assert!(collection.is_empty());
    assert!(!collection.contains_key(""));
    assert!(collection.to_array().is_empty());
}

#[test]
fn test_add_preserves_first_value() {
    let mut collection = Collection::new();
    collection.add("k", "v".to_string()).unwrap();
    let err = collection.add("k", "v2".to_string()).unwrap_err();
    assert_eq!(err, Error::DuplicateKey("k".to_string()));
    assert_eq!(collection.get("k").unwrap(), "v");
    assert_eq!(collection.count(), 1);
}

#[test]
fn test_try_add_on_present_key() {
    let mut collection = Collection::from([("k", 1)]);
    assert!(!collection.try_add("k", 2));
    assert_eq!(collection["k"], 1);
    assert!(collection.try_add("j", 2));
    assert_eq!(collection.count(), 2);
}

#[test]
fn test_get_and_try_get() {
    let collection = Collection::from([("a", 1)]);
    assert_eq!(collection.get("a"), Ok(&1));
    assert_eq!(
        collection.get("b"),
        Err(Error::KeyNotFound("b".to_string()))
    );
    assert_eq!(collection.try_get("b", &0), &0);
}

#[test]
fn test_keys_are_case_sensitive() {
    let collection = Collection::from([("Key", 1)]);
    assert!(collection.contains_key("Key"));
    assert!(!collection.contains_key("key"));
}

#[test]
fn test_set_element_counts() {
    let mut collection = Collection::new();
    collection.set_element("k", 1);
    collection.set_element("k", 2);
    assert_eq!(collection.count(), 1);
    assert_eq!(collection["k"], 2);
}

#[test]
fn test_remove_then_add_moves_to_end() {
    let mut collection = Collection::from([("a", 1), ("b", 2)]);
    collection.remove("a").unwrap();
    collection.add("a", 3).unwrap();
    let keys: Vec<&str> = collection.keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_remove_missing() {
    let mut collection: Collection<i32> = Collection::new();
    assert_eq!(
        collection.remove("x"),
        Err(Error::KeyNotFound("x".to_string()))
    );
    assert!(!collection.try_remove("x"));
}

#[test]
fn test_contains_value_nested() {
    let collection = Collection::from([("a", vec![1, 2]), ("b", vec![3])]);
    assert!(collection.contains_value(&vec![1, 2]));
    assert!(!collection.contains_value(&vec![2, 1]));
}

#[test]
fn test_iteration_order() {
    let collection: Collection<u8> = [("z", 1), ("a", 2), ("m", 3)].into_iter().collect();
    let entries: Vec<(&str, &u8)> = (&collection).into_iter().collect();
    assert_eq!(entries, vec![("z", &1), ("a", &2), ("m", &3)]);

    let owned: Vec<(String, u8)> = collection.into_iter().collect();
    assert_eq!(owned[0], ("z".to_string(), 1));
}

#[test]
fn test_extend_overwrites_in_place() {
    let mut collection = Collection::from([("a", 1), ("b", 2)]);
    collection.extend([("a", 10), ("c", 3)]);
    assert_eq!(
        collection.to_array(),
        vec![
            ("a".to_string(), 10),
            ("b".to_string(), 2),
            ("c".to_string(), 3)
        ]
    );
}

#[test]
fn test_get_or_insert_with() {
    let mut collection = Collection::from([("a", 1)]);
    *collection.get_or_insert_with("a", || 0) += 1;
    *collection.get_or_insert_with("b", || 0) += 1;
    assert_eq!(collection["a"], 2);
    assert_eq!(collection["b"], 1);
}

#[test]
fn test_error_display() {
    let mut collection = Collection::from([("a", 1)]);
    let err = collection.add("a", 2).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate key: a");
    let err: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(err.to_string(), "Duplicate key: a");
}
