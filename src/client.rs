//! Uniform generation adapter over backend transports

use std::collections::HashMap;
use log::{debug, error};

use crate::error::Error;
use crate::providers::ollama::OllamaClient;
use crate::service::LlmService;
use crate::{Backend, BatchItem, PROMPT_KEY};

/// Backend transport selected when the client is constructed
#[derive(Debug, Clone)]
enum ClientInner
{   Ollama(OllamaClient)
}

/// Client bound to one model on one backend. Construct through
/// `LlmService::get_client`; reuse across many generate calls.
#[derive(Debug, Clone)]
pub struct LlmClient
{   model_name: String
  , model_options: Option<serde_json::Value>
  , prompt_key: &'static str
  , inner: ClientInner
}

impl LlmClient
{   pub(crate) fn new(
      parent: &LlmService
    , model_name: &str
    , model_options: Option<serde_json::Value>
    ) -> Result<Self, Error>
    {   debug!("Creating LlmClient for model: {}", model_name);

        let inner = match parent.backend()
        {   Backend::Ollama => {
              ClientInner::Ollama(OllamaClient::new(
                parent.host(),
                parent.timeout()
              )?)
            }
          , other => {
              error!("Backend not supported: {}", other.name());
              return Err(Error::BackendNotSupported(
                format!(
                  "no {} integration is built into this crate",
                  other.name()
                )
              ));
            }
        };

        Ok(LlmClient
        {   model_name: model_name.to_string()
          , model_options
          , prompt_key: PROMPT_KEY
          , inner
        })
    }

    /// Model this client is bound to
    pub fn model_name(&self) -> &str
    {   &self.model_name
    }

    /// Names of the keys every input mapping must carry
    pub fn input_names(&self) -> Vec<String>
    {   vec![self.prompt_key.to_string()]
    }

    fn prompt_from(
      &self
    , inputs: &HashMap<String, String>
    ) -> Result<String, Error>
    {   inputs.get(self.prompt_key)
          .cloned()
          .ok_or_else(|| {
            error!("Missing input key: {}", self.prompt_key);
            Error::MissingInputKey(
              self.prompt_key.to_string()
            )
          })
    }

    fn prompts_from(
      &self
    , inputs: &HashMap<String, Vec<String>>
    ) -> Result<Vec<String>, Error>
    {   inputs.get(self.prompt_key)
          .cloned()
          .ok_or_else(|| {
            error!("Missing input key: {}", self.prompt_key);
            Error::MissingInputKey(
              self.prompt_key.to_string()
            )
          })
    }

    fn generate_prompt(&self, prompt: &str)
      -> Result<String, Error>
    {   match &self.inner
        {   ClientInner::Ollama(client) => {
              client.generate(
                &self.model_name,
                prompt,
                self.model_options.as_ref()
              )
            }
        }
    }

    async fn generate_prompt_async(&self, prompt: &str)
      -> Result<String, Error>
    {   match &self.inner
        {   ClientInner::Ollama(client) => {
              client.generate_async(
                &self.model_name,
                prompt,
                self.model_options.as_ref()
              ).await
            }
        }
    }

    /// Generate a response for the prompt carried in `inputs`.
    /// Blocking; must not be called from async context - use
    /// `generate_async` there.
    pub fn generate(
      &self
    , inputs: &HashMap<String, String>
    ) -> Result<String, Error>
    {   let prompt = self.prompt_from(inputs)?;
        self.generate_prompt(&prompt)
    }

    /// Suspending variant of `generate`, same contract
    pub async fn generate_async(
      &self
    , inputs: &HashMap<String, String>
    ) -> Result<String, Error>
    {   let prompt = self.prompt_from(inputs)?;
        self.generate_prompt_async(&prompt).await
    }

    /// Sequential batch over the prompts carried in `inputs`,
    /// output order matches input order. With
    /// `return_exceptions` per-prompt failures are captured as
    /// `BatchItem::Failed`; without it the first failure aborts
    /// the batch.
    pub fn generate_batch(
      &self
    , inputs: &HashMap<String, Vec<String>>
    , return_exceptions: bool
    ) -> Result<Vec<BatchItem>, Error>
    {   let prompts = self.prompts_from(inputs)?;
        debug!("Batch generate of {} prompts", prompts.len());

        let mut items = Vec::with_capacity(prompts.len());
        for prompt in &prompts
        {   match self.generate_prompt(prompt)
            {   Ok(text) => {
                  items.push(BatchItem::Text(text));
                }
              , Err(err) if return_exceptions => {
                  items.push(BatchItem::Failed(err));
                }
              , Err(err) => {
                  return Err(err);
                }
            }
        }
        Ok(items)
    }

    /// Concurrent batch: every prompt is issued at once, all
    /// outcomes are joined, output order matches input order.
    /// Same capture semantics as `generate_batch`; when the
    /// first failure aborts, in-flight requests for later
    /// prompts are left to finish on their own.
    pub async fn generate_batch_async(
      &self
    , inputs: &HashMap<String, Vec<String>>
    , return_exceptions: bool
    ) -> Result<Vec<BatchItem>, Error>
    {   let prompts = self.prompts_from(inputs)?;
        debug!(
          "Async batch generate of {} prompts",
          prompts.len()
        );

        let mut handles = Vec::with_capacity(prompts.len());
        for prompt in prompts
        {   let client = self.clone();
            handles.push(tokio::spawn(async move {
              client.generate_prompt_async(&prompt).await
            }));
        }

        let mut items = Vec::with_capacity(handles.len());
        for handle in handles
        {   let outcome = handle.await.map_err(|e| {
              error!("Generation task failed: {}", e);
              Error::Other(
                format!("generation task failed: {}", e)
              )
            })?;
            match outcome
            {   Ok(text) => {
                  items.push(BatchItem::Text(text));
                }
              , Err(err) if return_exceptions => {
                  items.push(BatchItem::Failed(err));
                }
              , Err(err) => {
                  return Err(err);
                }
            }
        }
        Ok(items)
    }
}
