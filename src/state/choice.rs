use serde::Serialize;

use super::base::BaseState;
use crate::logic::ChoiceRule;

/// Branches on the first matching rule in `Choices`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChoiceState {
    #[serde(flatten)]
    pub base: BaseState,

    pub choices: Vec<ChoiceRule>,

    /// Fallback state, serialized under the document key `Default`.
    #[serde(rename = "Default", skip_serializing_if = "Option::is_none")]
    pub default_next: Option<String>,
}

impl ChoiceState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseState::new(name),
            ..Self::default()
        }
    }
}
