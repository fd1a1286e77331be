use serde::{Deserialize, Serialize};
use log::{debug, trace, error};
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::Error;

const GENERATE_PATH: &str = "/api/generate";

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize)]
pub struct OllamaGenerateRequest
{   pub model: String
  , pub prompt: String
  , pub stream: bool
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaGenerateResponse
{   pub response: String
  , #[serde(default)]
    pub done: bool
}

// ===== Ollama Transport =====

/// Transport to one Ollama daemon. Holds a long-lived async
/// connection handle; the blocking handle is built on first
/// blocking call so async-only use never constructs it.
#[derive(Debug, Clone)]
pub struct OllamaClient
{   host: String
  , timeout: Option<Duration>
  , http: reqwest::Client
  , blocking_http: OnceLock<reqwest::blocking::Client>
}

impl OllamaClient
{   /// Create a transport for the daemon at `host`
    pub fn new(
      host: &str
    , timeout: Option<Duration>
    ) -> Result<Self, Error>
    {   debug!("Creating OllamaClient for host: {}", host);

        // Local daemon address: ambient proxy vars must not
        // reroute requests to it
        let mut builder = reqwest::Client::builder()
          .no_proxy();
        if let Some(t) = timeout
        {   builder = builder.timeout(t);
        }
        let http = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(OllamaClient
        {   host: host.trim_end_matches('/').to_string()
          , timeout
          , http
          , blocking_http: OnceLock::new()
        })
    }

    fn endpoint(&self) -> String
    {   format!("{}{}", self.host, GENERATE_PATH)
    }

    fn blocking_client(&self)
      -> Result<&reqwest::blocking::Client, Error>
    {   if let Some(client) = self.blocking_http.get()
        {   return Ok(client);
        }

        debug!("Building blocking HTTP client");
        let mut builder = reqwest::blocking::Client::builder()
          .no_proxy();
        if let Some(t) = self.timeout
        {   builder = builder.timeout(t);
        }
        let client = builder.build().map_err(|e| {
          error!("Failed to build blocking HTTP client: {}", e);
          Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(self.blocking_http.get_or_init(|| client))
    }

    fn build_request(
      &self
    , model: &str
    , prompt: &str
    , options: Option<&serde_json::Value>
    ) -> OllamaGenerateRequest
    {   OllamaGenerateRequest
        {   model: model.to_string()
          , prompt: prompt.to_string()
          , stream: false
          , options: options.cloned()
        }
    }

    /// Blocking generate request for one prompt
    pub fn generate(
      &self
    , model: &str
    , prompt: &str
    , options: Option<&serde_json::Value>
    ) -> Result<String, Error>
    {   debug!("Blocking generate for model: {}", model);

        let request = self.build_request(model, prompt, options);
        trace!("Ollama request: {:?}", request);

        let response = self.blocking_client()?
          .post(self.endpoint())
          .json(&request)
          .send()
          .map_err(map_transport_error)?;

        let status = response.status();
        trace!("Ollama response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text()
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Ollama API error: {}", error_text);
            return Err(Error::ApiError(
              format!("Ollama error ({}): {}", status, error_text)
            ));
        }

        let output: OllamaGenerateResponse
          = response.json().map_err(|e| {
            error!("Parse error: {}", e);
            Error::ParseError(e.to_string())
          })?;

        Ok(extract_completion(output))
    }

    /// Suspending generate request for one prompt
    pub async fn generate_async(
      &self
    , model: &str
    , prompt: &str
    , options: Option<&serde_json::Value>
    ) -> Result<String, Error>
    {   debug!("Async generate for model: {}", model);

        let request = self.build_request(model, prompt, options);
        trace!("Ollama request: {:?}", request);

        let response = self.http
          .post(self.endpoint())
          .json(&request)
          .send()
          .await
          .map_err(map_transport_error)?;

        let status = response.status();
        trace!("Ollama response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Ollama API error: {}", error_text);
            return Err(Error::ApiError(
              format!("Ollama error ({}): {}", status, error_text)
            ));
        }

        let output: OllamaGenerateResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            Error::ParseError(e.to_string())
          })?;

        Ok(extract_completion(output))
    }
}

/// Read the fixed field carrying the generated text
fn extract_completion(output: OllamaGenerateResponse) -> String
{   output.response
}

fn map_transport_error(e: reqwest::Error) -> Error
{   if e.is_connect() || e.is_timeout()
    {   error!("Ollama daemon unreachable: {}", e);
        Error::BackendUnavailable(e.to_string())
    } else
    {   error!("HTTP error: {}", e);
        Error::Other(e.to_string())
    }
}
