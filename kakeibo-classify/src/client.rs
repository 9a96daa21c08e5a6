//! Gemini HTTP client for the categorization call.

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send a single prompt and return the concatenated text parts of the
    /// first candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String, ClassifyError> {
        #[derive(Serialize)]
        struct Part {
            text: String,
        }

        #[derive(Serialize)]
        struct Content {
            parts: Vec<Part>,
        }

        #[derive(Serialize)]
        struct Req {
            contents: Vec<Content>,
        }

        #[derive(Deserialize)]
        struct RespPart {
            text: Option<String>,
        }

        #[derive(Deserialize)]
        struct RespContent {
            parts: Vec<RespPart>,
        }

        #[derive(Deserialize)]
        struct Candidate {
            content: RespContent,
        }

        #[derive(Deserialize)]
        struct Resp {
            candidates: Vec<Candidate>,
        }

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = Req {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClassifyError::Api { status, body });
        }

        let out: Resp = resp.json().await?;
        let mut text = String::new();
        for candidate in out.candidates.into_iter().take(1) {
            for part in candidate.content.parts {
                if let Some(t) = part.text {
                    text.push_str(&t);
                }
            }
        }
        Ok(text)
    }
}
