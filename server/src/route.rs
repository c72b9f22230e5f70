use std::collections::HashMap;

use log::{debug, error, warn};

use message::error::ParseError;
use message::method::Method;
use message::request::{Request, ROOT};
use message::response::Response;
use message::status::Status;
use message::CRLF;

use crate::config::Config;
use crate::handler;

/// A `Handler` fills in the `Response` to a single `Request`.
pub type Handler = Box<dyn Fn(&Request, &mut Response)>;

/// The route table: maps a method and a route prefix to the `Handler` for it.
///
/// Lookup is an exact match on both parts of the key. The `Request` has already split its path
/// into a known prefix and a remainder, so no pattern matching is needed here.
pub struct Router {
    routes: HashMap<(Method, &'static str), Handler>,
    unknown: Handler,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
            unknown: Box::new(handler::unknown),
        }
    }
}

impl Router {
    /// Creates a `Router` with no routes; every request is answered by the unknown-route handler.
    pub fn empty() -> Router {
        Router::default()
    }

    /// Creates a `Router` with the server's fixed set of routes.
    pub fn new(config: &Config) -> Router {
        let mut router = Router::empty();

        let assets = config.assets.clone();
        router.add_route(
            Method::Get,
            ROOT,
            Box::new(move |req: &Request, res: &mut Response| handler::root(&assets, req, res)),
        );

        router.add_route(Method::Get, "/echo", Box::new(handler::echo));
        router.add_route(Method::Get, "/user-agent", Box::new(handler::user_agent));

        let files = config.files.clone();
        router.add_route(
            Method::Get,
            "/files",
            Box::new(move |req: &Request, res: &mut Response| handler::get_file(&files, req, res)),
        );

        let files = config.files.clone();
        router.add_route(
            Method::Post,
            "/files",
            Box::new(move |req: &Request, res: &mut Response| handler::post_file(&files, req, res)),
        );

        router
    }

    /// Registers `handler` for `(method, prefix)`, replacing any handler already registered there.
    pub fn add_route(&mut self, method: Method, prefix: &'static str, handler: Handler) {
        self.routes.insert((method, prefix), handler);
    }

    /// Returns the handler registered for `(method, prefix)`, or the unknown-route handler.
    pub fn resolve(&self, method: Method, prefix: &'static str) -> &Handler {
        self.routes.get(&(method, prefix)).unwrap_or(&self.unknown)
    }

    /// Parses `bytes` and builds the `Response` to them.
    ///
    /// Returns the parsed `Request` alongside, or the reason it could not be parsed. Either way a
    /// `Response` is produced.
    pub fn route(&self, bytes: &[u8]) -> (Result<Request, ParseError>, Response) {
        match Request::parse(bytes) {
            Ok(request) => {
                debug!("[Router::route] {} {} -> route {}", request.method(), request.path(), request.route());
                let mut response = Response::for_request(&request);
                (self.resolve(request.method(), request.route()))(&request, &mut response);
                (Ok(request), response)
            }
            Err(e) => {
                warn!("[Router::route] cannot parse request: {}", e);
                let mut response = Response::new(false);
                handler::reject(&e, &mut response);
                (Err(e), response)
            }
        }
    }

    /// Answers the raw request in `bytes` with the raw bytes of the response.
    pub fn handle(&self, bytes: &[u8]) -> Vec<u8> {
        let (_, response) = self.route(bytes);
        serialize(response)
    }
}

/// Serializes `response`, falling back to a bare `500 Internal Server Error` if that fails.
pub fn serialize(response: Response) -> Vec<u8> {
    match response.into_bytes() {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("[route::serialize] cannot serialize response: {}", e);
            let status = Status::InternalServerError;
            format!("{} {}{}{}", message::PROTOCOL, status, CRLF, CRLF).into_bytes()
        }
    }
}
