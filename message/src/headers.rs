use std::fmt::{Display, Formatter};

use crate::CRLF;

/// An insertion-ordered collection of HTTP header fields.
///
/// Names are stored exactly as they were received or inserted, but every lookup ignores ASCII
/// case, because HTTP header names are case-insensitive.
///
/// **Design Decision**: headers are held in a `Vec` rather than a `HashMap` because a `Response`
/// must write its headers in the order the handler added them. There are only ever a handful of
/// headers per message, so linear lookup is fine.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Headers {
    fields: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers::default()
    }

    /// Returns the value of the header named `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.fields[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Sets the header `name` to `value`.
    ///
    /// If a header with the same name (ignoring case) already exists, its value is replaced and it
    /// keeps its original position and spelling. Otherwise the header is appended.
    pub fn insert<N: Into<String>, V: ToString>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.to_string();

        match self.position(&name) {
            Some(i) => self.fields[i].1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Removes the header `name` (ignoring case), returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.fields.remove(i).1)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

impl<N: Into<String>, V: ToString> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Writes each header as `Name: value` followed by a line separator.
impl Display for Headers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.iter() {
            write!(f, "{}: {}{}", name, value, CRLF)?;
        }
        Ok(())
    }
}
