use serde::Serialize;

use super::base::BaseState;

/// Terminal state ending the execution successfully.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SucceedState {
    #[serde(flatten)]
    pub base: BaseState,
}

impl SucceedState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseState::new(name),
        }
    }
}
