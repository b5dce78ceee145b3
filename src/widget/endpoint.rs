//! Request and response shapes for the chat endpoint.
//!
//! Two server flavours exist in the wild: the prompt API (`/api/prompt`,
//! `{"source", "prompt"}`) and the plain chat route (`/chat`,
//! `{"message"}`). Both answer `{"response": ...}` on success. Rather than
//! keep two widgets, [`EndpointConfig`] carries the four points where they
//! differ.

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const DEFAULT_SOURCE: &str = "web_ui";

pub type BodyBuilder = Arc<dyn Fn(&str) -> Value + Send + Sync>;
pub type FieldAccessor = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EndpointVariant {
    /// `POST /api/prompt` with `{"source", "prompt"}`
    #[default]
    Prompt,
    /// `POST /chat` with `{"message"}`
    Chat,
}

#[derive(Clone)]
pub struct EndpointConfig {
    path: String,
    build_body: BodyBuilder,
    response_field: FieldAccessor,
    error_field: FieldAccessor,
}

impl EndpointConfig {
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        build_body: BodyBuilder,
        response_field: FieldAccessor,
        error_field: FieldAccessor,
    ) -> Self {
        Self {
            path: path.into(),
            build_body,
            response_field,
            error_field,
        }
    }

    #[must_use]
    pub fn prompt_api(source: impl Into<String>) -> Self {
        let source = source.into();
        Self::new(
            "/api/prompt",
            Arc::new(move |text: &str| json!({ "source": source, "prompt": text })),
            string_field("response"),
            string_field("error"),
        )
    }

    #[must_use]
    pub fn chat() -> Self {
        Self::new(
            "/chat",
            Arc::new(|text: &str| json!({ "message": text })),
            string_field("response"),
            string_field("error"),
        )
    }

    #[must_use]
    pub fn for_variant(variant: EndpointVariant, source: &str) -> Self {
        match variant {
            EndpointVariant::Prompt => Self::prompt_api(source),
            EndpointVariant::Chat => Self::chat(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn body(&self, text: &str) -> Value {
        (self.build_body)(text)
    }

    #[must_use]
    pub fn reply(&self, body: &Value) -> Option<String> {
        (self.response_field)(body)
    }

    #[must_use]
    pub fn error_message(&self, body: &Value) -> Option<String> {
        (self.error_field)(body)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::prompt_api(DEFAULT_SOURCE)
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Accessor for a top-level string field; `None` when absent or not a string.
#[must_use]
pub fn string_field(name: &'static str) -> FieldAccessor {
    Arc::new(move |body: &Value| body.get(name)?.as_str().map(String::from))
}
