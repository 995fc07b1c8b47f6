use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client-supplied result of a function call the assistant requested.
///
/// Usually `{ "tool_call_id": ..., "output": ... }`, but the record is opaque
/// and forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolOutput(Map<String, Value>);
