// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (connection refused, timeout, TLS, body read).
    Http(String),
    /// The server answered with a non-success status on a read request.
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    Decode(String),
    Config(String),
}

impl Error {
    /// Returns the i18n message key for this error.
    ///
    /// Used when recording the error as a diagnostic event so the log stays
    /// free of raw transport messages.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Http(_) => "error-fetch-http",
            Error::Status(_) => "error-fetch-status",
            Error::Decode(_) => "error-fetch-decode",
            Error::Config(_) => "error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Status(code) => write!(f, "Unexpected Status: {}", code),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Status(status.as_u16())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
