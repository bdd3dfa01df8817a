use serde::Serialize;
use serde_json::Value;

use super::base::BaseState;

/// Executes the work unit identified by `Resource`.
///
/// Nothing here checks that `Resource` is set or that exactly one of
/// `Next`/`End` is present; an incomplete definition serializes as-is.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskState {
    #[serde(flatten)]
    pub base: BaseState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat_seconds: Option<u32>,
}

impl TaskState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseState::new(name),
            ..Self::default()
        }
    }
}
