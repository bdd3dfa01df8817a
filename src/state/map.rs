use serde::Serialize;

use super::base::BaseState;
use crate::machine::StateMachine;

/// Iterates a sub-workflow over the items selected by `ItemsPath`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapState {
    #[serde(flatten)]
    pub base: BaseState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_path: Option<String>,

    /// Sub-workflow applied to each item, structurally a full document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterator: Option<Box<StateMachine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<u32>,
}

impl MapState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseState::new(name),
            ..Self::default()
        }
    }
}
