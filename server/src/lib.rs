//! A small HTTP/1.1 server over raw TCP sockets.
//!
//! | route              | behaviour                                            |
//! |--------------------|------------------------------------------------------|
//! | `GET /`            | empty `200 OK`, or an `.html` page from `static/`    |
//! | `GET /echo/{s}`    | `s` as `text/plain`                                  |
//! | `GET /user-agent`  | the `User-Agent` header as `text/plain`              |
//! | `GET /files/{f}`   | the contents of `f` in the storage directory         |
//! | `POST /files/{f}`  | writes the body to `f` in the storage directory      |
//!
//! Responses are gzip-compressed when the client sends `Accept-Encoding: gzip`.

pub mod access;
pub mod config;
pub mod error;
pub mod handler;
pub mod id;
pub mod logger;
pub mod route;
pub mod server;
pub mod shutdown;
