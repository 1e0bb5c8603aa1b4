use streamsql_ast::error::AstError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rule AST: {0}")]
    Ast(#[from] AstError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Validation failed with {0} error(s)")]
    ValidationFailed(usize),
}
