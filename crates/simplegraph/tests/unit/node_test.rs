//! Unit tests for Node ids and payload handling.

use simplegraph::{NodeId, PropertyMap, PropertyValue, SimpleGraph};

#[test]
fn test_node_creation_with_properties() {
    let mut graph = SimpleGraph::new();
    let props = PropertyMap::new().with("name", "a").with("rank", 10i64);

    let node = graph.add_node(None, props).unwrap();

    assert_eq!(node.id(), &NodeId::Int(1));
    assert_eq!(node.data().get_string("name"), Some("a"));
    assert_eq!(node.data().get_int("rank"), Some(10));
    assert!(node.neighbors().is_empty());
}

#[test]
fn test_node_set_property() {
    let mut graph = SimpleGraph::new();
    graph.add_node_with_id("n", PropertyMap::new()).unwrap();

    let node = graph.get_node_mut(&NodeId::from("n")).unwrap();
    node.set_property("name", "renamed");
    node.set_property("visited", true);

    let node = graph.get_node(&NodeId::from("n")).unwrap();
    assert_eq!(node.get_property("name"), Some(&PropertyValue::String("renamed".to_string())));
    assert_eq!(node.get_property("visited"), Some(&PropertyValue::Bool(true)));
}

#[test]
fn test_node_get_property_missing() {
    let mut graph = SimpleGraph::new();
    let node = graph.add_node(None, PropertyMap::new()).unwrap();

    assert_eq!(node.get_property("missing"), None);
}

#[test]
fn test_node_id_display_and_conversions() {
    assert_eq!(NodeId::from(5u64).to_string(), "5");
    assert_eq!(NodeId::from("five").to_string(), "five");
    assert_eq!(NodeId::from(5u64).as_int(), Some(5));
    assert_eq!(NodeId::from("5").as_int(), None);
    assert_eq!(NodeId::parse("5").as_int(), Some(5));
}
