use std::fmt::{Display, Formatter};

use crate::error::ParseError;

/// The HTTP methods understood by the server.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Method {
    Get,
    Post,
}

/// Allows `Method`s to be converted to `String`s with `to_string()`.
impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Method::Get => "GET",
            Method::Post => "POST",
        };

        write!(f, "{}", str)
    }
}

impl Method {
    /// Attempts to parse a `Method` from a request line token. Method names are case-sensitive.
    pub fn parse(token: &str) -> Result<Method, ParseError> {
        match token {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(ParseError::UnsupportedMethod(token.into())),
        }
    }
}
