//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use udtriples_extractor::ExtractorConfig;

/// udtriples - Convert CoNLL-U treebanks into morphological inflection triples.
#[derive(Debug, Parser)]
#[command(name = "udtriples")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "UDTRIPLES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (output paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert the configured train/dev/test corpora into triple files
    Convert(ConvertArgs),

    /// Convert a single CoNLL-U file and print its triples
    Preview(PreviewArgs),

    /// Inspect or create configuration files
    Config(ConfigArgs),
}

/// Extraction switches shared by `convert` and `preview`.
///
/// Each flag only turns a setting on; anything not given keeps the value
/// from the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct ExtractorArgs {
    /// Keep repeated triples
    #[arg(long, conflicts_with = "dedup")]
    pub keep_duplicates: bool,

    /// Collapse repeated triples (first occurrence wins)
    #[arg(long)]
    pub dedup: bool,

    /// Emit (lemma, form, feats) instead of (form, lemma, feats)
    #[arg(long)]
    pub original_format: bool,

    /// Lowercase form and lemma
    #[arg(long)]
    pub lowercase: bool,

    /// Strip special symbols from lemmas
    #[arg(long)]
    pub remove_symbols: bool,

    /// Symbol to strip; repeat to build the set (replaces the configured set)
    #[arg(long = "symbol", value_name = "SYMBOL")]
    pub symbols: Vec<String>,
}

impl ExtractorArgs {
    /// Apply the command-line overrides to a configuration.
    pub fn apply(&self, config: &mut ExtractorConfig) {
        if self.keep_duplicates {
            config.keep_duplicates = true;
        }
        if self.dedup {
            config.keep_duplicates = false;
        }
        if self.original_format {
            config.original_format = true;
        }
        if self.lowercase {
            config.all_lower_case = true;
        }
        if self.remove_symbols {
            config.remove_special_symbols = true;
        }
        if !self.symbols.is_empty() {
            config.symbols_to_remove = self.symbols.clone();
        }
    }
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Corpus for the train split
    ///
    /// Giving any of --train/--dev/--test replaces the configured datasets
    /// with just the splits given.
    #[arg(long)]
    pub train: Option<PathBuf>,

    /// Corpus for the dev split
    #[arg(long)]
    pub dev: Option<PathBuf>,

    /// Corpus for the test split
    #[arg(long)]
    pub test: Option<PathBuf>,

    /// Directory for the triple files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name prefix; files are named <prefix>.<split>
    #[arg(short, long)]
    pub prefix: Option<String>,

    #[command(flatten)]
    pub extractor: ExtractorArgs,
}

/// Arguments for the preview command.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// CoNLL-U file to convert
    pub file: PathBuf,

    /// Print at most this many triples
    #[arg(short, long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub extractor: ExtractorArgs,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_command() {
        let cli = Cli::parse_from([
            "udtriples",
            "convert",
            "--train",
            "train.conllu",
            "--dedup",
            "--lowercase",
            "--symbol",
            "_",
            "--symbol",
            "+",
        ]);
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.train, Some(PathBuf::from("train.conllu")));
                assert!(args.extractor.dedup);
                assert_eq!(args.extractor.symbols, vec!["_", "+"]);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_conflicting_duplicate_flags() {
        let result = Cli::try_parse_from(["udtriples", "convert", "--keep-duplicates", "--dedup"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["udtriples", "preview", "dev.conllu", "-vv", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_extractor_args_apply() {
        let args = ExtractorArgs {
            dedup: true,
            original_format: true,
            lowercase: true,
            remove_symbols: true,
            symbols: vec!["+".to_string()],
            ..ExtractorArgs::default()
        };
        let mut config = ExtractorConfig::default();
        args.apply(&mut config);

        assert!(!config.keep_duplicates);
        assert!(config.original_format);
        assert!(config.all_lower_case);
        assert!(config.remove_special_symbols);
        assert_eq!(config.symbols_to_remove, vec!["+"]);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = ExtractorConfig::deduplicated();
        ExtractorArgs::default().apply(&mut config);
        assert_eq!(config, ExtractorConfig::deduplicated());
    }

    #[test]
    fn test_config_init_command() {
        let cli = Cli::parse_from(["udtriples", "config", "init", "udtriples.toml", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { path, force },
            }) => {
                assert_eq!(path, PathBuf::from("udtriples.toml"));
                assert!(force);
            }
            _ => panic!("Expected config init"),
        }
    }
}
