//! Response abstraction
//!
//! Collects what a dispatched controller produced. Unlike the application's
//! own response object, the output is readable through [`Response::output`].

use serde::{Deserialize, Serialize};

/// Headers and body produced by an action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    headers: Vec<String>,
    output: String,
    compression: i64,
}

impl Response {
    /// Empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw header line
    pub fn add_header(&mut self, header: impl Into<String>) {
        self.headers.push(header.into());
    }

    /// Header lines in insertion order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Replace the body
    pub fn set_output(&mut self, output: impl Into<String>) {
        self.output = output.into();
    }

    /// Body written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Set the compression level
    pub fn set_compression(&mut self, level: i64) {
        self.compression = level;
    }

    /// Compression level
    pub fn compression(&self) -> i64 {
        self.compression
    }
}
