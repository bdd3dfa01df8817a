use serde::Serialize;
use serde_json::Value;

use super::base::BaseState;

/// Passes its input to its output, optionally injecting `Result`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PassState {
    #[serde(flatten)]
    pub base: BaseState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_path: Option<String>,
}

impl PassState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseState::new(name),
            ..Self::default()
        }
    }
}
