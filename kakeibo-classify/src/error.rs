use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classification request failed")]
    Request(#[from] reqwest::Error),

    #[error("classification API error: {status} {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The model's reply did not match the expected record shape. Callers
    /// log this and proceed without categories; it never aborts a batch.
    #[error("could not parse classification response: {0}")]
    ResponseParse(String),
}
