//! Tracer configuration and per-transaction results as exchanged with the execution tracer.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Caller-supplied tracer configuration.
///
/// The tracer subsystem owns the semantics of these fields; the trace shim only fills in a
/// default `tracer` identifier when the caller left it unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceConfig {
    /// Name of the tracer to run alongside execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracer: Option<String>,
    /// Overrides the tracer subsystem's execution deadline, e.g. `"5s"`. Forwarded untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Nest the result under a Parity-style top-level key, e.g. `{"trace": ...}`.
    #[serde(default)]
    pub nested_trace_output: bool,
}

impl TraceConfig {
    /// Returns a config with the given tracer identifier set.
    pub fn with_tracer(tracer: impl Into<String>) -> Self {
        Self { tracer: Some(tracer.into()), ..Default::default() }
    }
}

/// Result of tracing one transaction of a block.
///
/// The payload is whatever the configured tracer emitted, kept raw until the response is
/// shaped.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TxTraceResult {
    /// Tracer output, raw as emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Box<RawValue>>,
    /// Error that aborted this transaction's trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TxTraceResult {
    /// A successful trace carrying the given raw payload.
    pub fn success(result: Box<RawValue>) -> Self {
        Self { result: Some(result), error: None }
    }

    /// A trace aborted by the given execution error.
    pub fn error(error: impl Into<String>) -> Self {
        Self { result: None, error: Some(error.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config: TraceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TraceConfig::default());
        assert!(config.tracer.is_none());
        assert!(!config.nested_trace_output);
    }

    #[test]
    fn config_round_trip() {
        let s = r#"{"tracer":"stateDiffTracer","timeout":"10s","nestedTraceOutput":true}"#;
        let config: TraceConfig = serde_json::from_str(s).unwrap();
        assert_eq!(config.tracer.as_deref(), Some("stateDiffTracer"));
        assert_eq!(config.timeout.as_deref(), Some("10s"));
        assert!(config.nested_trace_output);
        assert_eq!(serde_json::to_string(&config).unwrap(), s);
    }
}
