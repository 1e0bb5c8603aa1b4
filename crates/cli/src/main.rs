use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use streamsql_ast::{
    SelectStatement,
    semantic::{config::ValidatorConfig, validator::validate},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "streamsql",
    version = "0.1.0",
    about = "Inspect and validate stream rule ASTs"
)]
struct Cli {
    #[arg(long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Walk { ast, json } => {
            let stmt = load_statement(&ast).await?;
            let labels = output::trace_labels(&stmt);

            if json {
                println!("{}", output::to_json(&labels)?);
            } else {
                for label in labels {
                    println!("{label}");
                }
            }
        }
        Commands::Refs { ast } => {
            let stmt = load_statement(&ast).await?;
            let report = output::RefsReport::from_statement(&stmt);
            println!("{}", output::to_json(&report)?);
        }
        Commands::Validate {
            ast,
            config,
            output,
        } => {
            info!(
                "Validating rule AST: {}, config: {:?}, output: {:?}",
                ast, config, output
            );

            let stmt = load_statement(&ast).await?;
            let config = load_config(config.as_deref()).await?;
            let result = validate(&stmt, &config);

            match output {
                Some(path) => output::write_report(&result, path).await?,
                None => output::print_report(&result)?,
            }

            if result.has_errors() {
                return Err(CliError::ValidationFailed(result.errors.len()));
            }
        }
        Commands::Fmt { ast } => {
            let stmt = load_statement(&ast).await?;
            println!("{}", streamsql_ast::to_json_pretty(&stmt)?);
        }
    }

    Ok(())
}

async fn load_statement(path: &str) -> Result<SelectStatement, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let stmt = streamsql_ast::from_json(&source)?;
    debug!("Loaded rule AST from {}", path);
    Ok(stmt)
}

async fn load_config(path: Option<&str>) -> Result<ValidatorConfig, CliError> {
    match path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path).await?;
            Ok(ValidatorConfig::from_json(&source)?)
        }
        None => Ok(ValidatorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_statement() {
        let file = write_temp(r#"{ "sources": [ { "name": "demo", "alias": null } ] }"#);

        let stmt = load_statement(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(stmt.sources.map(|s| s.len()), Some(1));
        assert!(stmt.fields.is_none());
    }

    #[tokio::test]
    async fn test_load_statement_rejects_bad_json() {
        let file = write_temp("[1, 2");

        let err = load_statement(file.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Ast(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = load_statement("/nonexistent/rule.json").await.unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_config_defaults_and_file() {
        let default = load_config(None).await.unwrap();
        assert_eq!(default, ValidatorConfig::default());

        let file = write_temp(r#"{ "allow_unlisted_streams": true }"#);
        let config = load_config(file.path().to_str()).await.unwrap();
        assert!(config.allow_unlisted_streams);
    }
}
