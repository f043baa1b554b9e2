use thiserror::Error;

/// Upper bound on diagnostic text carried out of an upstream error body.
pub(crate) const MAX_DIAGNOSTIC_LEN: usize = 200;

/// Errors from a single candidate attempt or from pipeline construction.
///
/// None of these reach end users: the pipeline converts every failure
/// path into a displayable fallback string. Error text here is for
/// operator diagnostics and never contains the vendor credential.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// No vendor API key was supplied.
    #[error("vendor API key is not configured")]
    MissingCredential,
    /// Configuration is inconsistent (e.g., unparseable base URL).
    #[error("invalid summary config: {0}")]
    InvalidConfig(String),
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The vendor answered with a non-success status.
    #[error("upstream HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    /// A success response contained no usable summary text.
    #[error("no usable text in vendor response")]
    EmptyResponse,
}

/// Clamp diagnostic text to a safe length for logs and error fields.
pub(crate) fn truncate_diagnostic(text: &str) -> String {
    text.chars().take(MAX_DIAGNOSTIC_LEN).collect()
}
