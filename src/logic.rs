use serde::Serialize;
use serde_json::Value;

use crate::fields::Fields;

/// One entry of a Choice state's `Choices` array.
///
/// The comparison itself (`StringEquals`, `NumericLessThan`, `And`, `Not`,
/// ...) goes into the free-form bag so the operator set stays open.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChoiceRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(flatten)]
    pub fields: Fields,
}

impl ChoiceRule {
    /// Rule comparing `variable` against `value` with the given operator.
    pub fn compare(
        variable: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut fields = Fields::new();
        fields.set(operator, value);
        Self {
            variable: Some(variable.into()),
            next: None,
            fields,
        }
    }
}
