use proflens_sdk::{Client, ToolData};
use proflens_testing::{TestWorld, sample_trace};
use serde_json::Value;

#[test]
fn full_flow_over_a_populated_logdir() {
    let world = TestWorld::new()
        .with_trace("runA", "host1", &sample_trace())
        .with_file("runA", "op_profile.json", b"op profile bytes");
    let client = Client::new(world.logdir());

    // Tools query.
    let runs = client.runs();
    assert_eq!(runs.keys().collect::<Vec<_>>(), vec!["runA"]);
    assert_eq!(runs["runA"], vec!["trace_viewer", "op_profile"]);

    // Hosts query.
    assert_eq!(client.hosts("runA", "trace_viewer"), vec!["host1"]);

    // Raw tools are served verbatim, under the empty host.
    let data = client
        .tool_data("runA", "op_profile", "")
        .unwrap()
        .expect("op_profile data exists");
    assert_eq!(data, ToolData::Raw(b"op profile bytes".to_vec()));

    // The trace tool is decoded to the viewer JSON document.
    let data = client
        .tool_data("runA", "trace_viewer", "host1")
        .unwrap()
        .expect("trace data exists");
    let ToolData::Json(text) = data else {
        panic!("trace_viewer must decode to JSON");
    };
    let doc: Value = serde_json::from_str(&text).expect("decoded text is valid JSON");
    let events = doc["traceEvents"].as_array().unwrap();
    assert!(events.iter().any(|e| e["name"] == "matmul" && e["ph"] == "X"));
    assert!(events.iter().any(|e| e["name"] == "checkpoint" && e["ph"] == "i"));

    assert!(client.is_active());
}

#[test]
fn absence_cases_share_one_return_shape() {
    let world = TestWorld::new().with_trace("runA", "host1", &sample_trace());
    let client = Client::new(world.logdir());

    assert_eq!(client.tool_data("runA", "flame_graph", "host1").unwrap(), None);
    assert_eq!(client.tool_data("runA", "trace_viewer", "host9").unwrap(), None);
    assert_eq!(client.tool_data("runB", "trace_viewer", "host1").unwrap(), None);
}

#[test]
fn malformed_trace_payload_propagates_as_error() {
    let world = TestWorld::new().with_file("runA", "host1.trace", &[0xff, 0xff, 0xff, 0xff]);
    let client = Client::new(world.logdir());

    assert!(client.tool_data("runA", "trace_viewer", "host1").is_err());

    // Raw tools never decode, so arbitrary bytes pass through untouched.
    let world = world.with_file("runA", "overview_page.json", &[0xff, 0xfe]);
    let client = Client::new(world.logdir());
    assert_eq!(
        client.tool_data("runA", "overview_page", "").unwrap(),
        Some(ToolData::Raw(vec![0xff, 0xfe]))
    );
}

#[test]
fn empty_logdir_is_inactive() {
    let world = TestWorld::new();
    let client = Client::new(world.logdir());
    assert!(client.runs().is_empty());
    assert!(!client.is_active());

    // A run with no tool data exists but does not activate the plugin.
    let world = world.with_run("runA");
    let client = Client::new(world.logdir());
    assert!(client.runs()["runA"].is_empty());
    assert!(!client.is_active());
}
