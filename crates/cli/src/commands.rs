use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print every node of the rule in visiting order
    Walk {
        #[arg(long, help = "Path of the JSON encoded rule AST")]
        ast: String,

        #[arg(long, help = "Print the trace as a JSON array instead of one label per line")]
        json: bool,
    },
    /// List the streams and fields the rule references
    Refs {
        #[arg(long, help = "Path of the JSON encoded rule AST")]
        ast: String,
    },
    /// Check stream references, aggregate placement and function names
    Validate {
        #[arg(long, help = "Path of the JSON encoded rule AST")]
        ast: String,

        #[arg(long, help = "Validator configuration file (JSON)")]
        config: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Re-emit the rule AST as pretty printed JSON
    Fmt {
        #[arg(long, help = "Path of the JSON encoded rule AST")]
        ast: String,
    },
}
