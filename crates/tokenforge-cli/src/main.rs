use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

mod commands;
mod error;

#[derive(Parser, Debug)]
#[command(name = "tokenforge")]
#[command(about = "Design token extraction and multi-framework code generation")]
#[command(version)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract tokens from a design document (JSON)
    Extract {
        /// Input document: a bare node or a file response with a `document` field
        path: PathBuf,

        /// Also record blur effects
        #[arg(long)]
        deep: bool,

        /// Fill in usage metadata (frequency, reuse)
        #[arg(long)]
        usage_metadata: bool,

        /// Emit the grouped token set instead of the token list
        #[arg(long)]
        token_set: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate components and stylesheets from a token list
    Generate(GenerateArgs),

    /// Export a token set as CSS, SCSS, JSON or TypeScript
    Export {
        /// Input token set (JSON)
        path: PathBuf,

        /// css, scss, json or ts
        #[arg(short, long, default_value = "css")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect and edit token set history
    History {
        /// Directory holding the history and current token set
        #[arg(long, default_value = ".tokenforge")]
        store: PathBuf,

        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Input token list (JSON)
    path: PathBuf,

    /// Treat the input as a design document and extract it first
    #[arg(long)]
    document: bool,

    /// react, vue or angular
    #[arg(long, default_value = "react")]
    framework: String,

    /// css, scss or tailwind
    #[arg(long, default_value = "css")]
    style: String,

    /// Emit JavaScript instead of TypeScript
    #[arg(long)]
    no_typescript: bool,

    /// Skip the whitespace post-pass
    #[arg(long)]
    no_format: bool,

    /// Output directory
    #[arg(short, long, default_value = "generated")]
    out_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// Save a token set as a new version and make it current
    Save {
        /// Input token set (JSON)
        path: PathBuf,

        /// Originating design file identifier
        #[arg(long, default_value = "")]
        file_id: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List retained versions, most recent first
    List,

    /// Print one version's token set
    Show { id: String },

    /// Structural changes from one version to another
    Diff { from: String, to: String },

    /// Make a version current, auto-saving the current set first
    Revert { id: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Extract {
            path,
            deep,
            usage_metadata,
            token_set,
            output,
        } => commands::extract(&path, deep, usage_metadata, token_set, output.as_deref()),
        Command::Generate(args) => commands::generate(&args),
        Command::Export {
            path,
            format,
            output,
        } => commands::export(&path, &format, output.as_deref()),
        Command::History { store, command } => commands::history(store, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["tokenforge", "generate", "tokens.json"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.framework, "react");
        assert_eq!(args.style, "css");
        assert!(!args.no_typescript);
        assert_eq!(args.out_dir, PathBuf::from("generated"));
    }

    #[test]
    fn test_parse_history_diff() {
        let cli = Cli::try_parse_from([
            "tokenforge", "-v", "history", "--store", "state", "diff", "a", "b",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::History {
                store,
                command: HistoryCommand::Diff { from, to },
            } => {
                assert_eq!(store, PathBuf::from("state"));
                assert_eq!((from.as_str(), to.as_str()), ("a", "b"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_export_requires_path() {
        assert!(Cli::try_parse_from(["tokenforge", "export"]).is_err());
    }
}
