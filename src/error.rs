//! Defines the general error type for the crate and various conversions into it
use std::convert;
use std::fmt;

/// General error type for the crate
#[derive(Debug)]
pub enum Error {
    CatalogLoadError(String),
    IncompleteSelection(&'static str),
    InvalidConfigurationValue(String),
    Io(std::io::Error),
    Other(String),
    RouteRequestError(reqwest::StatusCode, String),
    UnknownPlace(String),
    UnknownServiceHandler(String),
}

impl convert::From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CatalogLoadError(msg) => {
                write!(f, "Place catalog could not be loaded: {}", msg)
            }
            Error::IncompleteSelection(endpoint) => write!(
                f,
                "No {} point has been selected, resolve both endpoints before requesting a route",
                endpoint
            ),
            Error::InvalidConfigurationValue(msg) => write!(f, "{}", msg),
            Error::Io(e) => write!(f, "{}", e),
            Error::Other(msg) => write!(f, "{}", msg),
            Error::RouteRequestError(code, msg) => {
                write!(f, "Route request failed with code: {} - {}", code, msg)
            }
            Error::UnknownPlace(name) => {
                write!(f, "No place named '{}' exists in the catalog", name)
            }
            Error::UnknownServiceHandler(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}
