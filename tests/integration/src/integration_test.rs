//! End-to-end tests across all categories
//!
//! Drives the full stack (JSON-RPC message handling, dispatch, registry,
//! file store) against a temporary data directory, exercising every
//! registered category rather than a single example.

use serde_json::{Value, json};
use tempfile::TempDir;
use whoami_core::CategoryRegistry;
use whoami_mcp::WhoamiServer;

fn setup_server(temp: &TempDir) -> WhoamiServer {
    let mut server = WhoamiServer::with_data_dir(temp.path().to_path_buf());
    server.initialize().unwrap();
    server
}

async fn tool_call(server: &WhoamiServer, id: u64, name: &str, arguments: Value) -> String {
    let request = json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    });
    let response: Value =
        serde_json::from_str(&server.handle_message(&request.to_string()).await.unwrap()).unwrap();
    response["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn every_category_reports_sentinel_before_first_write() {
    let temp = TempDir::new().unwrap();
    let server = setup_server(&temp);
    let registry = CategoryRegistry::with_builtins();

    for (i, category) in registry.categories().iter().enumerate() {
        let text = tool_call(&server, i as u64, &category.read_tool_name(), json!({})).await;
        assert_eq!(text, format!("{} not found", category.storage_unit));
    }
}

#[tokio::test]
async fn every_category_round_trips_through_the_protocol() {
    let temp = TempDir::new().unwrap();
    let server = setup_server(&temp);
    let registry = CategoryRegistry::with_builtins();

    for (i, category) in registry.categories().iter().enumerate() {
        let payload = format!("record for {}\nwith a second line", category.name);

        let status = tool_call(
            &server,
            i as u64,
            &category.write_tool_name(),
            json!({"content": payload}),
        )
        .await;
        assert_eq!(
            status,
            format!("Successfully updated {}", category.storage_unit)
        );

        let text = tool_call(&server, 100 + i as u64, &category.read_tool_name(), json!({})).await;
        assert_eq!(text, payload);
    }
}

#[tokio::test]
async fn categories_are_stored_independently() {
    let temp = TempDir::new().unwrap();
    let server = setup_server(&temp);

    tool_call(
        &server,
        1,
        "update_basic_info",
        json!({"content": "Name: Jo"}),
    )
    .await;

    // Writing one category leaves every other one absent.
    let professional = tool_call(&server, 2, "get_professional_info", json!({})).await;
    assert_eq!(professional, "professional.txt not found");

    let basic = tool_call(&server, 3, "get_basic_info", json!({})).await;
    assert_eq!(basic, "Name: Jo");
}

#[tokio::test]
async fn data_survives_across_server_instances() {
    let temp = TempDir::new().unwrap();

    {
        let server = setup_server(&temp);
        tool_call(
            &server,
            1,
            "update_goals_objectives",
            json!({"content": "Q3: ship v2"}),
        )
        .await;
    }

    // A fresh server over the same data dir sees the persisted record.
    let server = setup_server(&temp);
    let text = tool_call(&server, 2, "get_goals_objectives", json!({})).await;
    assert_eq!(text, "Q3: ship v2");
}

#[tokio::test]
async fn repeated_writes_are_idempotent_and_replacing() {
    let temp = TempDir::new().unwrap();
    let server = setup_server(&temp);

    tool_call(
        &server,
        1,
        "update_work_preferences",
        json!({"content": "async first"}),
    )
    .await;
    tool_call(
        &server,
        2,
        "update_work_preferences",
        json!({"content": "async first"}),
    )
    .await;
    let after_repeat = tool_call(&server, 3, "get_work_preferences", json!({})).await;
    assert_eq!(after_repeat, "async first");

    tool_call(
        &server,
        4,
        "update_work_preferences",
        json!({"content": "meetings before noon"}),
    )
    .await;
    let after_replace = tool_call(&server, 5, "get_work_preferences", json!({})).await;
    assert_eq!(after_replace, "meetings before noon");
    assert!(!after_replace.contains("async"));
}

#[tokio::test]
async fn discovery_and_invocation_agree_on_tool_names() {
    let temp = TempDir::new().unwrap();
    let server = setup_server(&temp);

    let list: Value = serde_json::from_str(
        &server
            .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#)
            .await
            .unwrap(),
    )
    .unwrap();

    // Every advertised read tool must be invocable and answer with either
    // content or the absence sentinel, never a tool-level error.
    for (i, tool) in list["result"]["tools"].as_array().unwrap().iter().enumerate() {
        let name = tool["name"].as_str().unwrap();
        if !name.starts_with("get_") {
            continue;
        }
        let request = json!({
            "jsonrpc": "2.0",
            "id": 10 + i as u64,
            "method": "tools/call",
            "params": {"name": name, "arguments": {}}
        });
        let response: Value =
            serde_json::from_str(&server.handle_message(&request.to_string()).await.unwrap())
                .unwrap();
        assert!(response["result"].get("is_error").is_none(), "{name} errored");
    }
}
