use crate::{error::FormulaError, prompt::Prompt};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::HashMap, env, time::Duration};

pub trait Completion {
    fn complete(&self, prompt: &Prompt) -> Result<String, FormulaError>;
}

impl<C: Completion + ?Sized> Completion for &C {
    fn complete(&self, prompt: &Prompt) -> Result<String, FormulaError> {
        (**self).complete(prompt)
    }
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_seconds() -> u64 {
    60
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

// blocking client for an openai-compatible chat completions endpoint
pub struct OpenAi {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, config: LlmConfig) -> Result<Self, FormulaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    // the api key comes from the environment variable named in the config
    pub fn from_env(config: LlmConfig) -> Result<Self, FormulaError> {
        let api_key = env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                FormulaError::Auth(format!(
                    "API key not found, set the {} environment variable",
                    config.api_key_env
                ))
            })?;

        Self::new(api_key, config)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

impl Completion for OpenAi {
    fn complete(&self, prompt: &Prompt) -> Result<String, FormulaError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("Chat request payload: {}", json);
            }
        }

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        log::debug!("Chat HTTP status: {}", status);

        let text = response.text()?;
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(FormulaError::Auth(text));
        }
        if !status.is_success() {
            return Err(FormulaError::Provider(format!(
                "API returned error status {}: {}",
                status, text
            )));
        }

        parse_response(&text)
    }
}

fn parse_response(text: &str) -> Result<String, FormulaError> {
    let response: ChatResponse = serde_json::from_str(text)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| FormulaError::Provider("No choices returned".to_string()))
}

// remembers successful completions for as long as the handle lives. the key is the whole prompt,
// composition included, so only a repeated identical request (same preferences and same draws,
// e.g. a seeded rerun through one handle) is served from the cache
pub struct Cached<C> {
    inner: C,
    cache: RefCell<HashMap<Prompt, String>>,
}

impl<C: Completion> Cached<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl<C: Completion> Completion for Cached<C> {
    fn complete(&self, prompt: &Prompt) -> Result<String, FormulaError> {
        if let Some(text) = self.cache.borrow().get(prompt) {
            log::debug!("Using cached completion");
            return Ok(text.clone());
        }

        let text = self.inner.complete(prompt)?;
        self.cache.borrow_mut().insert(prompt.clone(), text.clone());
        Ok(text)
    }
}
