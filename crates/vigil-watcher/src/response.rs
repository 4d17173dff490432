//! Execute-watch response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply from an execute-watch call.
///
/// The watch record body is kept as loose JSON: its schema belongs to the
/// cluster and varies with the watch definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ExecuteWatchResponse {
    /// Identifier of the watch record produced by this execution.
    #[serde(rename = "_id")]
    pub record_id: String,

    /// The full execution record as reported by the cluster.
    pub watch_record: Value,
}

impl ExecuteWatchResponse {
    /// Execution state reported inside the watch record, if present.
    pub fn state(&self) -> Option<&str> {
        self.watch_record.get("state").and_then(Value::as_str)
    }
}
