//! Service factory: backend capability check and client minting

use std::time::Duration;
use log::{debug, error};

use crate::client::LlmClient;
use crate::config::ServiceConfig;
use crate::error::Error;
use crate::retry::RetryPolicy;
use crate::Backend;

/// A service bound to one serving backend. Long-lived and
/// stateless across requests; mints model-bound clients.
#[derive(Debug, Clone)]
pub struct LlmService
{   backend: Backend
  , host: String
  , timeout: Option<Duration>
  , retry_count: usize
}

impl LlmService
{   /// Create a service for the given backend with default
    /// configuration; the daemon address is resolved from the
    /// environment
    pub fn new(backend: Backend) -> Result<Self, Error>
    {   Self::with_config(backend, ServiceConfig::default())
    }

    /// Create a service from explicit configuration.
    /// Fails fast, before any network call: backends without a
    /// built integration and malformed hosts are rejected here.
    pub fn with_config(
      backend: Backend
    , config: ServiceConfig
    ) -> Result<Self, Error>
    {   if backend != Backend::Ollama
        {   error!(
              "Backend not supported: {}",
              backend.name()
            );
            return Err(Error::BackendNotSupported(
              format!(
                "no {} integration is built into this crate, \
                 only the ollama backend is available",
                backend.name()
              )
            ));
        }

        let host = config.host
          .clone()
          .unwrap_or_else(crate::config::resolve_ollama_host);

        if !host.starts_with("http://")
          && !host.starts_with("https://")
        {   error!("Backend host is not an http(s) URL: {}", host);
            return Err(Error::InvalidConfiguration(
              format!(
                "backend host must be an http(s) URL: {}",
                host
              )
            ));
        }

        debug!(
          "Creating LlmService for backend: {}",
          backend.name()
        );

        Ok(LlmService
        {   backend
          , host
          , timeout: config.timeout_secs
              .map(Duration::from_secs)
          , retry_count: config.retry_count
        })
    }

    /// The backend this service talks to
    pub fn backend(&self) -> Backend
    {   self.backend
    }

    /// Resolved backend address
    pub fn host(&self) -> &str
    {   &self.host
    }

    pub(crate) fn timeout(&self) -> Option<Duration>
    {   self.timeout
    }

    /// Policy for callers implementing retry-on-failure around
    /// generate; nothing inside the library consumes it
    pub fn retry_policy(&self) -> RetryPolicy
    {   RetryPolicy::new(self.retry_count, 2.0, 100)
    }

    /// Returns a client for interacting with a specific model.
    /// This method is the preferred way to create a client.
    pub fn get_client(
      &self
    , model_name: &str
    ) -> Result<LlmClient, Error>
    {   self.get_client_with_options(model_name, None)
    }

    /// Client carrying additional model parameters, forwarded
    /// to the backend on every generate call
    pub fn get_client_with_options(
      &self
    , model_name: &str
    , model_options: Option<serde_json::Value>
    ) -> Result<LlmClient, Error>
    {   LlmClient::new(self, model_name, model_options)
    }
}
