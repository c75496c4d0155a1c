/// Failure to decode a stored trace dump
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TraceParseError {
    #[error("Trace dump is empty")]
    Empty,
    #[error("Trace dump must be a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("Invalid trace JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<serde_json::Error> for TraceParseError {
    fn from(e: serde_json::Error) -> Self {
        TraceParseError::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}
