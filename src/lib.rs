pub mod error;
pub mod config;
pub mod providers;
pub mod retry;
pub mod service;
pub mod client;
use serde::{Deserialize, Serialize};

/*

im making a small rust library called ollm (hOsted Local LMs);
one service + client shape over locally hosted model daemons,
with the same generate contract in blocking and async form,
and ordered batch generation where per-prompt failures can be
captured in place instead of aborting the whole batch.

ollm/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports, backend selection, batch result type
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Service configuration and host resolution
│   ├── service.rs      # Factory minting model-bound clients
│   ├── client.rs       # Uniform generate/generate_async adapter
│   ├── retry.rs        # Retry policy hook for callers
│   └── providers/      # Backend-specific transports
│       ├── mod.rs      # Re-exports all providers
│       └── ollama.rs   # Ollama /api/generate wire codec
└── tests/              # Integration tests against a mocked daemon

*/

/// OLLM STRUCTURES:

/// Key every generation input mapping must carry.
pub const PROMPT_KEY: &str = "prompt";

/// Enum representing the targeted serving backends.
/// Each variant corresponds to one daemon wire dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum Backend
{
  /// Ollama local daemon (`/api/generate`)
  Ollama
  ,
  /// OpenAI-compatible chat endpoint
  OpenAi
  ,
  /// NVIDIA NeMo hosted service
  Nemo
}

impl Backend
{   /// Stable lowercase name, used in logs and error messages
    pub fn name(&self) -> &'static str
    {   match self
        {   Backend::Ollama => "ollama"
          , Backend::OpenAi => "openai"
          , Backend::Nemo => "nemo"
        }
    }
}

/// Per-element outcome of a batch generation call.
/// One explicit tagged union instead of overloaded return types:
/// `return_exceptions` decides whether `Failed` elements can
/// appear or whether the first failure aborts the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchItem
{   /// Generated text for this prompt
    Text(String)
  , /// Captured failure for this prompt
    Failed(crate::error::Error)
}

impl BatchItem
{   /// True when this element carries generated text
    pub fn is_text(&self) -> bool
    {   matches!(self, BatchItem::Text(_))
    }

    /// Borrow the generated text, if any
    pub fn as_text(&self) -> Option<&str>
    {   match self
        {   BatchItem::Text(text) => Some(text.as_str())
          , BatchItem::Failed(_) => None
        }
    }

    /// Unwrap into text, surfacing the captured failure
    pub fn into_text(self) -> Result<String, crate::error::Error>
    {   match self
        {   BatchItem::Text(text) => Ok(text)
          , BatchItem::Failed(err) => Err(err)
        }
    }
}

pub use client::LlmClient;
pub use config::ServiceConfig;
pub use error::Error;
pub use service::LlmService;
