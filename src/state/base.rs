use serde::Serialize;

use crate::fields::Fields;
use crate::policy::{CatchPolicy, RetryPolicy};

/// Fields shared by every state type.
///
/// `name` never appears inside the state's own JSON object; the enclosing
/// `States` mapping uses it as the key instead. Optional fields left unset
/// are absent from the output.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseState {
    #[serde(skip_serializing)]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<Vec<RetryPolicy>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch: Option<Vec<CatchPolicy>>,

    /// Any keyword the typed fields do not model.
    #[serde(flatten)]
    pub fields: Fields,
}

impl BaseState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
