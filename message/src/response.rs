use std::io::Write;

use log::debug;

use crate::encoding::{self, GZIP};
use crate::headers::Headers;
use crate::request::Request;
use crate::status::Status;
use crate::{ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, CRLF, PROTOCOL, VARY};

/// A `Response` is built up by a single route handler and then serialized exactly once.
///
/// Whether the body will be gzip-compressed is decided when the `Response` is created (see
/// [`for_request`](Self::for_request)) and can afterwards only be switched off, with
/// [`disable_compression`](Self::disable_compression).
#[derive(PartialEq, Debug, Clone)]
pub struct Response {
    status: Status,
    headers: Headers,
    body: Vec<u8>,
    compress: bool,
}

impl Response {
    /// Creates an empty `200 OK` response.
    ///
    /// If `compress` is set, `Content-Encoding: gzip` and `Vary: Accept-Encoding` are added up
    /// front, so they come before any header the handler adds.
    pub fn new(compress: bool) -> Response {
        let mut headers = Headers::new();

        if compress {
            headers.insert(CONTENT_ENCODING, GZIP);
            headers.insert(VARY, ACCEPT_ENCODING);
        }

        Response {
            status: Status::Ok,
            headers,
            body: Vec::new(),
            compress,
        }
    }

    /// Creates an empty `200 OK` response, compressed if the `request` accepts gzip.
    pub fn for_request(request: &Request) -> Response {
        Response::new(request.accepts_gzip())
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn set_header<V: ToString>(&mut self, name: &str, value: V) {
        self.headers.insert(name, value);
    }

    /// The uncompressed body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn set_body<B: Into<Vec<u8>>>(&mut self, body: B) {
        self.body = body.into();
    }

    /// Sets the body along with matching `Content-Type` and `Content-Length` headers.
    pub fn set_content<B: Into<Vec<u8>>>(&mut self, content_type: &str, body: B) {
        let body = body.into();
        self.set_header(CONTENT_TYPE, content_type);
        self.set_header(CONTENT_LENGTH, body.len());
        self.body = body;
    }

    pub fn compresses(&self) -> bool {
        self.compress
    }

    /// Sends this response uncompressed, whatever the client negotiated.
    pub fn disable_compression(&mut self) {
        self.compress = false;
        self.headers.remove(CONTENT_ENCODING);
    }

    /// Serializes this `Response` into wire format.
    ///
    /// When compressing a non-empty body, any `Content-Length` header is recomputed as the length
    /// of the compressed body plus the trailing line separator. Existing clients depend on this
    /// exact value.
    pub fn into_bytes(self) -> std::io::Result<Vec<u8>> {
        let Response { status, mut headers, body, compress } = self;

        let body = if compress && !body.is_empty() {
            let compressed = encoding::gzip(&body)?;
            debug!("[Response::into_bytes] compressed body from {} to {} bytes", body.len(), compressed.len());

            if headers.contains(CONTENT_LENGTH) {
                headers.insert(CONTENT_LENGTH, compressed.len() + CRLF.len());
            }
            compressed
        } else {
            body
        };

        let head = format!("{} {}{}{}{}", PROTOCOL, status, CRLF, headers, CRLF);

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&body);

        if compress || !body.is_empty() {
            bytes.extend_from_slice(CRLF.as_bytes());
        }

        Ok(bytes)
    }

    /// Serializes this `Response` and writes all of it to `writer`.
    pub fn write(self, writer: &mut impl Write) -> std::io::Result<()> {
        let bytes = self.into_bytes()?;
        writer.write_all(&bytes)?;
        writer.flush()
    }
}
