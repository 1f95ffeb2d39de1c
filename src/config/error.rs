use std::{error, fmt, io};

use crate::network;

/// An error while loading or saving a [`NetworkConfig`][super::NetworkConfig].
#[derive(Debug)]
pub enum Error {
    /// An error during serialization or deserialization.
    #[cfg(feature = "json")]
    Serde(serde_json::Error),
    /// An error while reading from/writing to a file.
    Io(io::Error),
    /// The loaded values do not form a valid configuration.
    Invalid(network::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            #[cfg(feature = "json")]
            Self::Serde(e) => write!(f, "de/serialization error: {}", e),
            Self::Io(e) => write!(f, "io error: {}", e),
            Self::Invalid(e) => write!(f, "config error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            #[cfg(feature = "json")]
            Self::Serde(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<network::Error> for Error {
    fn from(e: network::Error) -> Self {
        Self::Invalid(e)
    }
}
