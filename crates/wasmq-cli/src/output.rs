//! Formatting of query results for the terminal.

use serde_json::json;
use wasmq_keeper::QueryError;

/// Renders response bytes. JSON is re-indented when `pretty` is set; any
/// other payload is shown as lossy UTF-8.
pub fn render_response(bytes: &[u8], pretty: bool) -> String {
    if pretty
        && let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes)
        && let Ok(text) = serde_json::to_string_pretty(&value)
    {
        return text;
    }
    String::from_utf8_lossy(bytes).into_owned()
}

/// Renders a query error as `{"error":{"kind":..,"message":..}}`.
pub fn render_error(error: &QueryError, pretty: bool) -> String {
    let value = json!({
        "error": {
            "kind": error.kind().as_str(),
            "message": error.to_string(),
        }
    });
    if pretty {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    } else {
        value.to_string()
    }
}
