//! One function per route. Each reads what it needs from the `Request` and fills in the
//! `Response` it is given, which starts out as an empty `200 OK`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use log::{debug, error, warn};

use message::content_type;
use message::error::ParseError;
use message::request::Request;
use message::response::Response;
use message::status::Status;
use message::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};

pub const NOT_FOUND_PAGE: &str = "<h1>404 Not Found</h1>";

/// `GET /`
///
/// With no remainder, answers with an empty `200 OK`. A remainder naming an `.html` page in the
/// static assets directory is served uncompressed. Anything else is an unknown route.
pub fn root(assets: &Path, request: &Request, response: &mut Response) {
    let remainder = request.remainder();

    if remainder.is_empty() {
        return;
    }

    match resolve(assets, remainder).filter(|path| remainder.ends_with(".html") && path.is_file()) {
        Some(page) => match fs::read(&page) {
            Ok(contents) => {
                response.disable_compression();
                response.set_content(content_type::HTML, contents);
            }
            Err(e) => internal_error(response, &page, e),
        },
        None => unknown(request, response),
    }
}

/// `GET /echo/{text}`
pub fn echo(request: &Request, response: &mut Response) {
    response.set_content(content_type::PLAIN_TEXT, request.remainder());
}

/// `GET /user-agent`
pub fn user_agent(request: &Request, response: &mut Response) {
    match request.header(USER_AGENT) {
        Some(agent) => response.set_content(content_type::PLAIN_TEXT, agent),
        None => failure(response, Status::BadRequest, "missing User-Agent header"),
    }
}

/// `GET /files/{name}`
///
/// `Content-Length` counts every byte of the file except `\n`. Existing clients expect this
/// value, so it is kept even though it is shorter than the body for files containing newlines.
pub fn get_file(files: &Path, request: &Request, response: &mut Response) {
    let Some(path) = resolve(files, request.remainder()).filter(|path| path.is_file()) else {
        debug!("[handler::get_file] no file at '{}'", request.remainder());
        response.set_status(Status::NotFound);
        return;
    };

    match fs::read(&path) {
        Ok(contents) => {
            let length = contents.iter().filter(|&&b| b != b'\n').count();
            response.set_content(content_type::FILE, contents);
            response.set_header(CONTENT_LENGTH, length);
        }
        Err(e) if e.kind() == ErrorKind::NotFound => response.set_status(Status::NotFound),
        Err(e) => internal_error(response, &path, e),
    }
}

/// `POST /files/{name}`
///
/// Writes the body to `{name}`, replacing any existing file. Concurrent writes to the same name
/// are not coordinated; the last one to finish wins.
pub fn post_file(files: &Path, request: &Request, response: &mut Response) {
    if request.header(CONTENT_TYPE) != Some(content_type::FILE) {
        let msg = format!("Content-Type must be {}", content_type::FILE);
        return failure(response, Status::UnsupportedMediaType, &msg);
    }

    let Some(path) = resolve(files, request.remainder()) else {
        let msg = format!("invalid file name '{}'", request.remainder());
        return failure(response, Status::BadRequest, &msg);
    };

    match fs::write(&path, request.body()) {
        Ok(()) => {
            debug!("[handler::post_file] wrote {} bytes to {}", request.body().len(), path.display());
            response.set_status(Status::Created)
        }
        Err(e) => internal_error(response, &path, e),
    }
}

/// The handler for every `(method, route)` pair with no registered handler.
///
/// Always produces the same uncompressed `404 Not Found` page.
pub fn unknown(_request: &Request, response: &mut Response) {
    *response = Response::new(false);
    response.set_status(Status::NotFound);
    response.set_header(CONTENT_TYPE, content_type::HTML);
    response.set_body(NOT_FOUND_PAGE);
}

/// Answers a request that could not be parsed.
pub fn reject(error: &ParseError, response: &mut Response) {
    let status = if error.is_malformed() {
        Status::BadRequest
    } else {
        Status::NotImplemented
    };

    failure(response, status, &error.to_string())
}

/// Replaces the response with `status` and a short plain-text explanation.
fn failure(response: &mut Response, status: Status, msg: &str) {
    warn!("[handler::failure] {}: {}", status, msg);
    response.set_status(status);
    response.set_content(content_type::PLAIN_TEXT, msg);
}

fn internal_error(response: &mut Response, path: &Path, e: std::io::Error) {
    error!("[handler::internal_error] cannot access {}: {}", path.display(), e);
    response.set_status(Status::InternalServerError);
}

/// Joins a name taken from the request path onto `directory`.
///
/// Returns `None` for names that are empty or could point outside `directory`.
fn resolve(directory: &Path, name: &str) -> Option<PathBuf> {
    let relative = Path::new(name);

    let contained = relative.components().all(|c| matches!(c, Component::Normal(_)));

    if name.is_empty() || !contained {
        return None;
    }

    Some(directory.join(relative))
}
