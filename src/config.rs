//! Configuration for OLLM services and host resolution

use serde::{Deserialize, Serialize};
use log::info;

/// Well-known address of a locally running Ollama daemon
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Environment variable overriding the Ollama daemon address
pub const OLLAMA_HOST_ENV: &str = "OLLAMA_HOST";

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig
{   /// Backend address (if unset, resolved from environment)
    pub host: Option<String>
  , /// Whole-request timeout in seconds
    pub timeout_secs: Option<u64>
  , /// Retry budget for callers wrapping generate in their own
    /// retry loop; no retry is performed inside the library
    pub retry_count: usize
}

impl Default for ServiceConfig
{   fn default() -> Self
    {   ServiceConfig
        {   host: None
          , timeout_secs: None
          , retry_count: 5
        }
    }
}

/// Resolve the Ollama daemon address: environment override
/// first, well-known local address otherwise
pub fn resolve_ollama_host() -> String
{   let host = std::env::var(OLLAMA_HOST_ENV)
      .unwrap_or_else(|_|
        DEFAULT_OLLAMA_HOST.to_string()
      );
    info!("Configured Ollama host: {}", host);
    host
}
