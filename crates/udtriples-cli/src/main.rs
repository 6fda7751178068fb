//! udtriples CLI - Convert CoNLL-U treebanks into inflection training triples.

use clap::Parser;
use udtriples_cli::commands;
use udtriples_cli::logging::init_tracing;
use udtriples_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> udtriples_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Convert(args) => commands::execute_convert(args, &config, &formatter)?,
        Command::Preview(args) => commands::execute_preview(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &formatter)?,
    }

    Ok(())
}
