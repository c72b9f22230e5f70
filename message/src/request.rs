use phf::{phf_map, Map};

use crate::encoding;
use crate::error::ParseError;
use crate::headers::Headers;
use crate::method::Method;
use crate::{ACCEPT_ENCODING, BLANK_LINE, CRLF};

/// The route prefix for the root of the server, and for every path whose first segment is not a
/// known route.
pub const ROOT: &str = "/";

/// Maps the first segment of a request path to the route prefix it is dispatched on.
pub static ROUTE_PREFIXES: Map<&'static str, &'static str> = phf_map! {
    "echo" => "/echo",
    "files" => "/files",
    "user-agent" => "/user-agent",
};

/// A `Request` is a single HTTP/1.1 request, parsed once from the bytes read off a connection.
///
/// Besides the raw request target, the path is split into a `route` prefix (used for dispatch)
/// and a `remainder` (the resource the route handler should act on):
///
/// | path            | route         | remainder     |
/// |-----------------|---------------|---------------|
/// | `/`             | `/`           | ``            |
/// | `/echo/abc/def` | `/echo`       | `abc/def`     |
/// | `/user-agent`   | `/user-agent` | ``            |
/// | `/index.html`   | `/`           | `index.html`  |
#[derive(PartialEq, Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    route: &'static str,
    remainder: String,
    protocol: String,
    headers: Headers,
    body: Vec<u8>,
}

impl Request {
    /// Parses one complete request out of `bytes`.
    ///
    /// Everything up to the first blank line is the request head, which must be UTF-8. Everything
    /// after it is the body, kept as raw bytes. If there is no blank line, the whole buffer is the
    /// head and the body is empty.
    pub fn parse(bytes: &[u8]) -> Result<Request, ParseError> {
        let (head, body) = split_head(bytes);
        let head = std::str::from_utf8(head).map_err(|_| ParseError::Encoding)?;

        // str::split always yields at least one item
        let mut lines = head.split(CRLF);
        let request_line = lines.next().unwrap_or_default();

        let (method, path, protocol) = parse_request_line(request_line)?;

        let headers = lines
            .filter(|line| !line.is_empty())
            .map(parse_header_line)
            .collect::<Result<Headers, ParseError>>()?;

        let (route, remainder) = split_path(path);

        Ok(Request {
            method,
            path: path.into(),
            route,
            remainder,
            protocol: protocol.into(),
            headers,
            body: body.to_vec(),
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The request target exactly as it appeared on the request line.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The prefix this request is dispatched on, e.g. `/echo`.
    pub fn route(&self) -> &'static str {
        self.route
    }

    /// The part of the path after the route prefix, without surrounding slashes.
    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Looks up a request header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns `true` if the client listed `gzip` in its `Accept-Encoding` header.
    pub fn accepts_gzip(&self) -> bool {
        encoding::accepts_gzip(self.header(ACCEPT_ENCODING))
    }

    /// Serializes this `Request` back into wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "{} {} {}{}{}{}",
            self.method, self.path, self.protocol, CRLF, self.headers, CRLF
        );

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

fn split_head(bytes: &[u8]) -> (&[u8], &[u8]) {
    let separator = BLANK_LINE.as_bytes();

    match bytes.windows(separator.len()).position(|w| w == separator) {
        Some(i) => (&bytes[..i], &bytes[i + separator.len()..]),
        None => (bytes, &bytes[bytes.len()..]),
    }
}

fn parse_request_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();

    match parts.as_slice() {
        [method, path, protocol] => {
            if !path.starts_with('/') {
                return Err(ParseError::Target(path.to_string()));
            }
            let method = Method::parse(method)?;
            Ok((method, *path, *protocol))
        }
        _ => Err(ParseError::RequestLine(line.into())),
    }
}

fn parse_header_line(line: &str) -> Result<(String, String), ParseError> {
    line.split_once(": ")
        .map(|(name, value)| (name.into(), value.into()))
        .ok_or_else(|| ParseError::HeaderLine(line.into()))
}

fn split_path(path: &str) -> (&'static str, String) {
    let stripped = path.trim_matches('/');

    if stripped.is_empty() {
        return (ROOT, String::new());
    }

    let (segment, rest) = stripped.split_once('/').unwrap_or((stripped, ""));

    match ROUTE_PREFIXES.get(segment) {
        Some(prefix) => (*prefix, rest.into()),
        None => (ROOT, stripped.into()),
    }
}
