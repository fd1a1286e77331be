//! Serving backend transports

pub mod ollama;

// Re-export for convenience
pub use ollama::OllamaClient;

// Future backend modules:
// pub mod openai;
// pub mod nemo;
