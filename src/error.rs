use std::fmt;

/// Custom error type for OLLM operations
/// Implements Clone so batch results can capture failures in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Requested backend has no built integration
    BackendNotSupported(String)
  , /// Generation input mapping lacks a required key
    MissingInputKey(String)
  , /// Backend daemon could not be reached
    BackendUnavailable(String)
  , /// Backend replied with an error status
    ApiError(String)
  , /// Failed to parse backend response
    ParseError(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::BackendNotSupported(backend) => {
              write!(f,
                "Backend not supported: {}",
                backend
              )
            }
          , Error::MissingInputKey(key) => {
              write!(f, "Missing input key: {}", key)
            }
          , Error::BackendUnavailable(msg) => {
              write!(f, "Backend unavailable: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
