use serde::Serialize;

use super::base::BaseState;

/// Terminal state ending the execution with `Error`/`Cause`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FailState {
    #[serde(flatten)]
    pub base: BaseState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl FailState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseState::new(name),
            ..Self::default()
        }
    }
}
