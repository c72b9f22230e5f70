//! The HTTP/1.1 wire format spoken by the server: parsing a raw request buffer into a
//! [`Request`](request::Request) and serializing a [`Response`](response::Response) back into
//! bytes, gzip-compressed when the client asked for it.

pub mod encoding;
pub mod error;
pub mod headers;
pub mod method;
pub mod request;
pub mod response;
pub mod status;

/// Separates the request line, each header line, and the header block from the body.
pub const CRLF: &str = "\r\n";

/// A blank line, which separates the header block from the body.
pub const BLANK_LINE: &str = "\r\n\r\n";

/// The only protocol version this crate writes on the status line.
pub const PROTOCOL: &str = "HTTP/1.1";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
pub const USER_AGENT: &str = "User-Agent";
pub const VARY: &str = "Vary";

/// `Content-Type` values written by the handlers.
pub mod content_type {
    pub const PLAIN_TEXT: &str = "text/plain";
    pub const HTML: &str = "text/html";
    pub const FILE: &str = "application/octet-stream";
}
