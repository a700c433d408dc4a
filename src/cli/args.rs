//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use csst::Value;
use std::path::PathBuf;

/// Class string transforms from the command line
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "csst.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add class tokens to a class string
    #[command(visible_alias = "a")]
    Add {
        #[command(flatten)]
        args: TokenArgs,
    },

    /// Remove class tokens from a class string
    #[command(visible_alias = "r")]
    Remove {
        #[command(flatten)]
        args: TokenArgs,
    },

    /// Apply a configured rule or pipeline to a class string
    #[command(visible_alias = "x")]
    Apply {
        #[command(flatten)]
        args: ApplyArgs,
    },

    /// Validate the config file and list its rules and pipelines
    #[command(visible_alias = "c")]
    Check,
}

/// Arguments shared by Add and Remove.
#[derive(clap::Args, Debug, Clone)]
pub struct TokenArgs {
    /// Space-separated class tokens
    pub tokens: String,

    /// Class string to update
    #[arg(default_value = "")]
    pub class: String,
}

/// Apply command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Rule or pipeline name
    pub name: String,

    /// Values to apply in sequence (`true`, `false`, `null`, numbers, or text)
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<Value>,

    /// Initial class string
    #[arg(short, long, default_value = "")]
    pub class: String,

    /// Print one JSON object per step instead of the class string
    #[arg(short, long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_apply() {
        let cli = Cli::parse_from(["csst", "apply", "size", "-5", "12", "--class", "box", "--json"]);
        let Commands::Apply { args } = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.name, "size");
        assert_eq!(args.values, [Value::Number(-5.0), Value::Number(12.0)]);
        assert_eq!(args.class, "box");
        assert!(args.json);
    }

    #[test]
    fn test_parse_tokens_with_default_class() {
        let cli = Cli::parse_from(["csst", "-v", "remove", "a b"]);
        assert!(cli.verbose);
        let Commands::Remove { args } = cli.command else {
            panic!("expected remove");
        };
        assert_eq!(args.tokens, "a b");
        assert_eq!(args.class, "");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
