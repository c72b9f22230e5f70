use thiserror::Error;

/// Reasons a raw request buffer could not be turned into a [`Request`](crate::request::Request).
///
/// No partial `Request` is ever produced alongside one of these.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("request line '{0}' does not have exactly three space-separated parts")]
    RequestLine(String),

    #[error("request target '{0}' does not start with '/'")]
    Target(String),

    #[error("header line '{0}' is not formatted like 'Name: value'")]
    HeaderLine(String),

    #[error("request head is not valid UTF-8")]
    Encoding,

    #[error("unsupported method '{0}'")]
    UnsupportedMethod(String),
}

impl ParseError {
    /// `true` for every failure caused by bytes that are not a well-formed HTTP/1.1 request.
    ///
    /// An unsupported method is well-formed, so the server answers it differently.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ParseError::UnsupportedMethod(_))
    }
}
