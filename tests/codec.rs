//! Tests for the graph <-> step sequence codec.
mod common;
use common::*;
use trackflow::prelude::*;

fn place(graph: &mut GraphModel, y: f64, step: Step) -> NodeId {
    graph.add_node(Position::new(250.0, y), step)
}

#[test]
fn test_load_stacks_steps_and_chains_edges() {
    let catalog = ActionCatalog::builtin();
    let mut graph = GraphModel::new();
    let steps = shopping_steps();

    let ids = codec::load(&mut graph, &steps, &catalog, &LayoutOptions::default());

    assert_eq!(ids.len(), steps.len());
    for (index, id) in ids.iter().enumerate() {
        let node = graph.node(*id).unwrap();
        assert_eq!(node.position, Position::new(250.0, 50.0 + index as f64 * 150.0));
        assert_eq!(node.step, steps[index]);
    }

    let edges: Vec<(NodeId, NodeId)> = graph.edges().map(|e| (e.source, e.target)).collect();
    let expected: Vec<(NodeId, NodeId)> = ids.windows(2).map(|w| (w[0], w[1])).collect();
    assert_eq!(edges, expected);
}

#[test]
fn test_load_respects_layout_options() {
    let catalog = ActionCatalog::builtin();
    let mut graph = GraphModel::new();
    let layout = LayoutOptions {
        column_x: 0.0,
        origin_y: 10.0,
        row_height: 40.0,
    };
    let ids = codec::load(&mut graph, &open_wait_steps(), &catalog, &layout);
    assert_eq!(graph.node(ids[1]).unwrap().position, Position::new(0.0, 50.0));
}

#[test]
fn test_load_empty_sequence() {
    let catalog = ActionCatalog::builtin();
    let mut graph = GraphModel::new();
    let ids = codec::load(&mut graph, &[], &catalog, &LayoutOptions::default());
    assert!(ids.is_empty());
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(codec::save(&graph).is_empty());
}

#[test]
fn test_round_trip_preserves_sequence() {
    let catalog = ActionCatalog::builtin();
    let mut graph = GraphModel::new();
    let steps = shopping_steps();
    codec::load(&mut graph, &steps, &catalog, &LayoutOptions::default());
    assert_eq!(codec::save(&graph), steps);
}

#[test]
fn test_save_orders_by_vertical_position() {
    let mut graph = GraphModel::new();
    place(&mut graph, 300.0, Step::new("screenshot").with_param("path", "c.png"));
    place(&mut graph, 100.0, Step::new("open").with_param("url", "https://a.com"));
    place(&mut graph, 200.0, Step::new("click").with_param("selector", "#b"));

    let actions: Vec<String> = codec::save(&graph).into_iter().map(|s| s.action).collect();
    assert_eq!(actions, vec!["open", "click", "screenshot"]);
}

#[test]
fn test_edges_do_not_affect_order() {
    let mut graph = GraphModel::new();
    let c = place(&mut graph, 300.0, Step::new("screenshot"));
    let a = place(&mut graph, 100.0, Step::new("open"));
    let b = place(&mut graph, 200.0, Step::new("click"));
    let before = codec::save(&graph);

    // Drawn backwards against the vertical stacking.
    graph.connect(c, b).unwrap();
    graph.connect(b, a).unwrap();
    graph.connect(c, a).unwrap();

    assert_eq!(codec::save(&graph), before);
}

#[test]
fn test_equal_heights_keep_creation_order() {
    let mut graph = GraphModel::new();
    place(&mut graph, 100.0, Step::new("type"));
    place(&mut graph, 50.0, Step::new("open"));
    place(&mut graph, 100.0, Step::new("press_key"));
    place(&mut graph, -0.0, Step::new("clear_cookies"));
    place(&mut graph, 0.0, Step::new("refresh"));

    let actions: Vec<String> = codec::save(&graph).into_iter().map(|s| s.action).collect();
    assert_eq!(
        actions,
        vec!["clear_cookies", "refresh", "open", "type", "press_key"]
    );
}

#[test]
fn test_moving_a_node_changes_order() {
    let catalog = ActionCatalog::builtin();
    let mut graph = GraphModel::new();
    let ids = codec::load(&mut graph, &open_wait_steps(), &catalog, &LayoutOptions::default());

    graph.move_node(ids[1], Position::new(250.0, 0.0));

    let actions: Vec<String> = codec::save(&graph).into_iter().map(|s| s.action).collect();
    assert_eq!(actions, vec!["wait", "open"]);
}

#[test]
fn test_unknown_action_survives_round_trip() {
    let catalog = ActionCatalog::builtin();
    let raw = serde_json::json!([{"action": "nonexistent_action", "foo": 1}]);
    let steps: Vec<Step> = serde_json::from_value(raw.clone()).unwrap();

    let mut graph = GraphModel::new();
    let ids = codec::load(&mut graph, &steps, &catalog, &LayoutOptions::default());

    let view = ParameterForm::render(&graph.node(ids[0]).unwrap().step, &catalog);
    assert_eq!(view.label, "nonexistent_action");

    let saved = serde_json::to_value(codec::save(&graph)).unwrap();
    assert_eq!(saved, raw);
}

#[test]
fn test_to_draft_assembles_metadata() {
    let catalog = ActionCatalog::builtin();
    let mut graph = GraphModel::new();
    codec::load(&mut graph, &open_wait_steps(), &catalog, &LayoutOptions::default());

    let meta = TrackerMeta {
        name: "Price watch".to_string(),
        description: "Checks the keyboard price".to_string(),
        schedule_cron: "   ".to_string(),
        is_active: true,
    };
    let draft = codec::to_draft(&meta, &graph);
    assert_eq!(draft.name, "Price watch");
    assert_eq!(draft.config, open_wait_steps());
    assert_eq!(draft.schedule_cron, None);

    let meta = TrackerMeta {
        schedule_cron: "*/5 * * * *".to_string(),
        ..meta
    };
    assert_eq!(
        codec::to_draft(&meta, &graph).schedule_cron.as_deref(),
        Some("*/5 * * * *")
    );
}

#[test]
fn test_outline_lists_steps_in_save_order() {
    let catalog = ActionCatalog::builtin();
    let mut graph = GraphModel::new();
    place(&mut graph, 200.0, Step::new("wait").with_param("seconds", 5));
    place(&mut graph, 100.0, Step::new("mystery"));

    let outline = GraphOutline::new(&graph, &catalog).to_string();
    let mystery = outline.find("mystery [mystery] (unknown action)").unwrap();
    let wait = outline.find("Wait [wait]").unwrap();
    assert!(mystery < wait);
    assert!(outline.contains("seconds = 5"));
    assert!(outline.contains("Edges (0):"));
}
