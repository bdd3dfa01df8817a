use serde::Serialize;

use super::base::BaseState;

/// Delays for `Seconds` or until `Timestamp`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaitState {
    #[serde(flatten)]
    pub base: BaseState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl WaitState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseState::new(name),
            ..Self::default()
        }
    }
}
