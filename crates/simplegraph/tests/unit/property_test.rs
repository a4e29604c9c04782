//! Unit tests for `PropertyMap` builder pattern and type-safe getters.

use simplegraph::{PropertyMap, PropertyValue};

#[test]
fn test_property_map_builder() {
    let props = PropertyMap::new()
        .with("name", "test")
        .with("count", 42)
        .with("enabled", true)
        .with("score", 3.15);

    assert_eq!(props.get_string("name"), Some("test"));
    assert_eq!(props.get_int("count"), Some(42));
    assert_eq!(props.get_bool("enabled"), Some(true));
    assert_eq!(props.get_float("score"), Some(3.15));
}

#[test]
fn test_property_map_type_safe_getters() {
    let props = PropertyMap::new()
        .with("text", "value")
        .with("number", 123i64);

    // Type-safe getters return None for wrong type
    assert_eq!(props.get_int("text"), None);
    assert_eq!(props.get_string("number"), None);
}

#[test]
fn test_property_map_insert_and_remove() {
    let mut props = PropertyMap::new();

    props.insert("key1", "value1");
    assert!(props.contains_key("key1"));
    assert_eq!(props.len(), 1);

    props.remove("key1");
    assert!(!props.contains_key("key1"));
    assert!(props.is_empty());
}

#[test]
fn test_property_map_iterates_in_key_order() {
    let props = PropertyMap::new().with("b", 2i64).with("a", 1i64).with("c", 3i64);
    let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn test_property_map_from_iter() {
    let props: PropertyMap = vec![
        ("name".to_string(), PropertyValue::from("a")),
        ("tags".to_string(), PropertyValue::from(vec!["x".to_string()])),
    ]
    .into_iter()
    .collect();

    assert_eq!(props.len(), 2);
    assert_eq!(props.get("tags"), Some(&PropertyValue::StringList(vec!["x".to_string()])));
}
