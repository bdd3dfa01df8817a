use serde::Serialize;

/// Retrier entry for a state's `Retry` array.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetryPolicy {
    pub error_equals: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

/// Catcher entry for a state's `Catch` array.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatchPolicy {
    pub error_equals: Vec<String>,

    pub next: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_path: Option<String>,
}
