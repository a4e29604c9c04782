//! Unit tests for core graph operations (add_node, connect_nodes, delete_node, etc.).

use simplegraph::{GraphError, NodeId, PropertyMap, SimpleGraph};

fn id(n: u64) -> NodeId {
    NodeId::Int(n)
}

fn graph_with(count: u64) -> SimpleGraph {
    let mut graph = SimpleGraph::new();
    for _ in 0..count {
        graph.add_node(None, PropertyMap::new()).unwrap();
    }
    graph
}

#[test]
fn test_add_node_auto_ids() {
    let graph = graph_with(3);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.node_ids(), vec![id(1), id(2), id(3)]);
    assert_eq!(graph.last_id(), 3);
}

#[test]
fn test_add_node_explicit_ids() {
    let mut graph = SimpleGraph::new();
    graph.add_node_with_id("alpha", PropertyMap::new()).unwrap();
    graph.add_node(Some(id(10)), PropertyMap::new()).unwrap();

    assert!(graph.contains(&NodeId::from("alpha")));
    assert!(graph.contains(&id(10)));
    assert!(!graph.contains(&id(1)));
    // explicit ids do not move the auto-id counter
    assert_eq!(graph.last_id(), 0);
}

#[test]
fn test_duplicate_id_rejected() {
    let mut graph = SimpleGraph::new();
    graph
        .add_node(Some(id(1)), PropertyMap::new().with("name", "first"))
        .unwrap();

    let result = graph.add_node(Some(id(1)), PropertyMap::new().with("name", "second"));
    assert!(matches!(result, Err(GraphError::DuplicateId { .. })));

    assert_eq!(graph.node_count(), 1);
    let node = graph.get_node(&id(1)).unwrap();
    assert_eq!(node.data().get_string("name"), Some("first"));
}

#[test]
fn test_connect_is_symmetric() {
    let mut graph = graph_with(2);
    graph.connect_nodes(&id(1), &id(2)).unwrap();

    assert!(graph.are_connected(&id(1), &id(2)).unwrap());
    assert!(graph.are_connected(&id(2), &id(1)).unwrap());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_connect_twice_duplicates_adjacency() {
    let mut graph = graph_with(2);
    graph.connect_nodes(&id(1), &id(2)).unwrap();
    graph.connect_nodes(&id(1), &id(2)).unwrap();

    assert_eq!(graph.neighbors(&id(1)).unwrap(), &[id(2), id(2)]);
    assert_eq!(graph.neighbors(&id(2)).unwrap(), &[id(1), id(1)]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_connect_missing_node() {
    let mut graph = graph_with(1);

    let result = graph.connect_nodes(&id(1), &id(99));
    match result {
        Err(GraphError::NodeNotFound { node_id }) => assert_eq!(node_id, "99"),
        other => panic!("expected NodeNotFound, got {other:?}"),
    }
    // nothing was half-applied
    assert!(graph.neighbors(&id(1)).unwrap().is_empty());
}

#[test]
fn test_are_connected_missing_node() {
    let graph = graph_with(1);
    assert!(graph.are_connected(&id(7), &id(1)).is_err());
    assert!(graph.are_connected(&id(1), &id(7)).is_err());
}

#[test]
fn test_delete_node_removes_edges() {
    let mut graph = graph_with(3);
    graph.connect_nodes(&id(1), &id(2)).unwrap();
    graph.connect_nodes(&id(2), &id(3)).unwrap();
    graph.connect_nodes(&id(1), &id(3)).unwrap();

    let removed = graph.delete_node(&id(2)).unwrap();
    assert_eq!(removed.id(), &id(2));

    assert_eq!(graph.node_count(), 2);
    assert!(!graph.contains(&id(2)));
    for node in graph.iter() {
        assert!(!node.neighbors().contains(&id(2)));
    }
    assert!(graph.are_connected(&id(1), &id(3)).unwrap());
    assert_eq!(graph.node_ids(), vec![id(1), id(3)]);
}

#[test]
fn test_delete_missing_node() {
    let mut graph = graph_with(1);
    let result = graph.delete_node(&id(5));
    assert!(matches!(result, Err(GraphError::NodeNotFound { .. })));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_auto_id_reuses_deleted_id() {
    let mut graph = graph_with(3);
    graph.delete_node(&id(2)).unwrap();

    let node = graph.add_node(None, PropertyMap::new()).unwrap();
    assert_eq!(node.id(), &id(2));

    let node = graph.add_node(None, PropertyMap::new()).unwrap();
    assert_eq!(node.id(), &id(4));
}

#[test]
fn test_disconnect_nodes() {
    let mut graph = graph_with(3);
    graph.connect_nodes(&id(1), &id(2)).unwrap();
    graph.connect_nodes(&id(1), &id(2)).unwrap();
    graph.connect_nodes(&id(1), &id(3)).unwrap();

    graph.disconnect_nodes(&id(1), &id(2)).unwrap();

    assert!(!graph.are_connected(&id(1), &id(2)).unwrap());
    assert!(!graph.are_connected(&id(2), &id(1)).unwrap());
    assert!(graph.are_connected(&id(1), &id(3)).unwrap());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_nodes_snapshot() {
    let mut graph = SimpleGraph::new();
    graph
        .add_node(None, PropertyMap::new().with("name", "a"))
        .unwrap();
    graph
        .add_node_with_id("b", PropertyMap::new().with("name", "b"))
        .unwrap();

    let nodes = graph.nodes();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].0, &id(1));
    assert_eq!(nodes[0].1.get_string("name"), Some("a"));
    assert_eq!(nodes[1].0, &NodeId::from("b"));

    let mut ids = graph.node_ids();
    ids.clear();
    assert_eq!(graph.node_ids().len(), 2);
}

#[test]
fn test_clear() {
    let mut graph = graph_with(3);
    graph.connect_nodes(&id(1), &id(2)).unwrap();

    graph.clear();

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.node_ids().is_empty());
    assert!(!graph.contains(&id(1)));

    let node = graph.add_node(None, PropertyMap::new()).unwrap();
    assert_eq!(node.id(), &id(1));
}
