//! MCP Tool call dispatch
//!
//! A single parameterized routine resolves tool names to registry
//! categories and delegates to the store. Storage outcomes (content,
//! sentinel, or status text) pass through unmodified; only dispatch-level
//! problems (unknown tool, bad arguments) surface as errors.
//!
//! Note: the handler is `async fn` for consistency with the MCP server's
//! tokio runtime, even though the underlying I/O is synchronous. This
//! allows a later move to async file operations without API changes.

use serde_json::Value;
use whoami_core::{CategoryRegistry, ContextStore};

use crate::{Error, Result};

/// Resolve a tool name and execute the corresponding storage operation.
///
/// `get_<category>` reads the category's storage unit; `update_<category>`
/// replaces it with the `content` argument. The returned string is exactly
/// what the store produced.
pub async fn handle_tool_call(
    store: &ContextStore,
    registry: &CategoryRegistry,
    tool_name: &str,
    arguments: Value,
) -> Result<String> {
    if let Some(name) = tool_name.strip_prefix("get_")
        && let Some(category) = registry.get(name)
    {
        return Ok(store.read(&category.storage_unit));
    }

    if let Some(name) = tool_name.strip_prefix("update_")
        && let Some(category) = registry.get(name)
    {
        let content = arguments
            .get("content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::InvalidArguments {
                message: format!("{tool_name} requires a string `content` argument"),
            })?;
        return Ok(store.write(&category.storage_unit, content));
    }

    Err(Error::UnknownTool(tool_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup(temp: &TempDir) -> (ContextStore, CategoryRegistry) {
        (
            ContextStore::new(temp.path()),
            CategoryRegistry::with_builtins(),
        )
    }

    #[tokio::test]
    async fn get_before_any_write_returns_sentinel() {
        let temp = TempDir::new().unwrap();
        let (store, registry) = setup(&temp);

        let result = handle_tool_call(&store, &registry, "get_goals_objectives", Value::Null)
            .await
            .unwrap();
        assert_eq!(result, "objectives.txt not found");
    }

    #[tokio::test]
    async fn update_then_get_round_trips() {
        let temp = TempDir::new().unwrap();
        let (store, registry) = setup(&temp);

        let status = handle_tool_call(
            &store,
            &registry,
            "update_goals_objectives",
            json!({"content": "Q3: ship v2"}),
        )
        .await
        .unwrap();
        assert_eq!(status, "Successfully updated objectives.txt");

        let content = handle_tool_call(&store, &registry, "get_goals_objectives", Value::Null)
            .await
            .unwrap();
        assert_eq!(content, "Q3: ship v2");
    }

    #[tokio::test]
    async fn update_overwrites_prior_content() {
        let temp = TempDir::new().unwrap();
        let (store, registry) = setup(&temp);

        for payload in ["A", "B"] {
            handle_tool_call(
                &store,
                &registry,
                "update_technical_stack",
                json!({"content": payload}),
            )
            .await
            .unwrap();
        }

        let content = handle_tool_call(&store, &registry, "get_technical_stack", Value::Null)
            .await
            .unwrap();
        assert_eq!(content, "B");
    }

    #[tokio::test]
    async fn update_without_content_is_invalid_arguments() {
        let temp = TempDir::new().unwrap();
        let (store, registry) = setup(&temp);

        let err = handle_tool_call(&store, &registry, "update_basic_info", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArguments { .. }));
    }

    #[tokio::test]
    async fn update_with_non_string_content_is_invalid_arguments() {
        let temp = TempDir::new().unwrap();
        let (store, registry) = setup(&temp);

        let err = handle_tool_call(
            &store,
            &registry,
            "update_basic_info",
            json!({"content": 42}),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArguments { .. }));
    }

    #[tokio::test]
    async fn unknown_tool_name_is_rejected() {
        let temp = TempDir::new().unwrap();
        let (store, registry) = setup(&temp);

        let err = handle_tool_call(&store, &registry, "delete_basic_info", Value::Null)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTool(_)));
    }

    #[tokio::test]
    async fn known_prefix_with_unknown_category_is_rejected() {
        let temp = TempDir::new().unwrap();
        let (store, registry) = setup(&temp);

        let err = handle_tool_call(&store, &registry, "get_favorite_color", Value::Null)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTool(_)));
    }

    #[tokio::test]
    async fn extra_arguments_on_get_are_ignored() {
        let temp = TempDir::new().unwrap();
        let (store, registry) = setup(&temp);

        let result = handle_tool_call(
            &store,
            &registry,
            "get_basic_info",
            json!({"unexpected": true}),
        )
        .await
        .unwrap();
        assert_eq!(result, "basic_info.txt not found");
    }
}
