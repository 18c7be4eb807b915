use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Unspecified(String),
    NetworkError(String),
    HttpError(u16),
    ParseError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unspecified(g) => write!(f, "{}", g),
            Error::NetworkError(g) => write!(f, "{}", g),
            Error::HttpError(status) => write!(f, "HTTP error {}", status),
            Error::ParseError(g) => write!(f, "{}", g),
        }
    }
}

impl std::error::Error for Error {}
