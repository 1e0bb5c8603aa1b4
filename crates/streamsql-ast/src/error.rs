use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstError {
    #[error("Failed to decode AST from JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode AST as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode validator configuration: {0}")]
    Config(#[source] serde_json::Error),
}
