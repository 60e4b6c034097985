//! Tests for the graph model: identity, edges, deletion and snapshots.
use std::collections::HashSet;
use trackflow::prelude::*;

fn graph_with_chain(count: usize) -> (GraphModel, Vec<NodeId>) {
    let mut graph = GraphModel::new();
    let ids: Vec<NodeId> = (0..count)
        .map(|i| graph.add_node(Position::new(0.0, i as f64 * 100.0), Step::new("refresh")))
        .collect();
    for pair in ids.windows(2) {
        graph.connect(pair[0], pair[1]).unwrap();
    }
    (graph, ids)
}

#[test]
fn test_node_ids_are_unique_under_rapid_creation() {
    let mut graph = GraphModel::new();
    let ids: HashSet<NodeId> = (0..1000)
        .map(|_| graph.add_node(Position::default(), Step::new("wait")))
        .collect();
    assert_eq!(ids.len(), 1000);
    assert_eq!(graph.node_count(), 1000);
}

#[test]
fn test_node_ids_are_never_reused() {
    let mut graph = GraphModel::new();
    let first = graph.add_node(Position::default(), Step::new("open"));
    graph.remove_node(first).unwrap();
    graph.clear();
    let second = graph.add_node(Position::default(), Step::new("open"));
    assert_ne!(first, second);
}

#[test]
fn test_update_node_step_replaces_field() {
    let mut graph = GraphModel::new();
    let id = graph.add_node(Position::default(), Step::new("wait").with_param("seconds", 5));
    graph.update_node_step(id, "seconds", ParamValue::Number(10.0));
    assert_eq!(
        graph.node(id).unwrap().step.get("seconds"),
        Some(&ParamValue::Number(10.0))
    );
    assert_eq!(graph.node(id).unwrap().id, id);
}

#[test]
fn test_update_unknown_node_is_a_silent_miss() {
    let (mut graph, ids) = graph_with_chain(2);
    let ghost = graph.add_node(Position::default(), Step::new("wait"));
    graph.remove_node(ghost);

    graph.update_node_step(ghost, "x", ParamValue::Number(1.0));

    assert_eq!(graph.node_count(), 2);
    assert!(graph.node(ghost).is_none());
    assert!(graph.nodes().all(|n| n.step.get("x").is_none()));
    assert_eq!(graph.nodes().map(|n| n.id).collect::<Vec<_>>(), ids);
}

#[test]
fn test_remove_node_cascades_to_edges() {
    let (mut graph, ids) = graph_with_chain(3);
    // An extra parallel edge and one pointing back into the middle node.
    graph.connect(ids[0], ids[1]).unwrap();
    graph.connect(ids[2], ids[1]).unwrap();
    assert_eq!(graph.edge_count(), 4);

    let removed = graph.remove_node(ids[1]).unwrap();
    assert_eq!(removed.id, ids[1]);

    assert!(graph.edges().all(|e| !e.touches(ids[1])));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.edges_of(ids[1]).count(), 0);
    assert!(graph.remove_node(ids[1]).is_none());
}

#[test]
fn test_connect_allows_duplicates_but_not_dangling_edges() {
    let (mut graph, ids) = graph_with_chain(2);
    let a = graph.connect(ids[0], ids[1]).unwrap();
    let b = graph.connect(ids[0], ids[1]).unwrap();
    assert_ne!(a, b);
    assert_eq!(graph.edge_count(), 3);

    let ghost = graph.add_node(Position::default(), Step::new("wait"));
    graph.remove_node(ghost);
    assert!(graph.connect(ids[0], ghost).is_none());
    assert!(graph.connect(ghost, ids[0]).is_none());
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_disconnect_removes_single_edge() {
    let (mut graph, ids) = graph_with_chain(3);
    let edge = graph.edges().next().unwrap().id;
    assert!(graph.disconnect(edge));
    assert!(!graph.disconnect(edge));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node_count(), ids.len());
}

#[test]
fn test_move_node() {
    let (mut graph, ids) = graph_with_chain(1);
    assert!(graph.move_node(ids[0], Position::new(10.0, 20.0)));
    assert_eq!(graph.node(ids[0]).unwrap().position, Position::new(10.0, 20.0));

    graph.remove_node(ids[0]);
    assert!(!graph.move_node(ids[0], Position::default()));
}

#[test]
fn test_snapshots_are_restartable() {
    let (graph, ids) = graph_with_chain(3);
    let snapshot = graph.nodes();
    let first: Vec<NodeId> = snapshot.clone().map(|n| n.id).collect();
    let second: Vec<NodeId> = snapshot.map(|n| n.id).collect();
    assert_eq!(first, second);
    assert_eq!(first, ids);

    let edges = graph.edges();
    assert_eq!(edges.clone().count(), 2);
    assert_eq!(edges.count(), 2);
}

#[test]
fn test_ids_display() {
    let (graph, ids) = graph_with_chain(2);
    assert_eq!(ids[0].to_string(), "node-0");
    assert_eq!(ids[1].to_string(), "node-1");
    assert_eq!(graph.edges().next().unwrap().id.to_string(), "edge-0");
}
