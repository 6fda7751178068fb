//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::PathBuf;
use udtriples_domain::Split;
use udtriples_io::{ConversionReport, DatasetConverter};

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let config = effective_config(args, config)?;
    let report = run_conversion(&config)?;

    println!("{}", formatter.format_report(&report)?);
    if formatter.format() == OutputFormat::Table {
        println!(
            "{}",
            formatter.success(&format!("Wrote {} triple file(s)", report.splits.len()))
        );
    }
    Ok(())
}

/// Merge command-line overrides into the loaded configuration.
///
/// Corpus paths given on the command line replace the whole `[datasets]`
/// table, so unlisted splits are not converted.
pub fn effective_config(args: ConvertArgs, config: &Config) -> Result<Config> {
    let mut config = config.clone();

    let overrides: Vec<(Split, PathBuf)> = [
        (Split::Train, args.train),
        (Split::Dev, args.dev),
        (Split::Test, args.test),
    ]
    .into_iter()
    .filter_map(|(split, path)| path.map(|path| (split, path)))
    .collect();

    if !overrides.is_empty() {
        config.datasets.clear();
        for (split, path) in overrides {
            config.set_dataset(split, path);
        }
    }
    if let Some(dir) = args.output_dir {
        config.output.dir = dir;
    }
    if let Some(prefix) = args.prefix {
        config.output.prefix = prefix;
    }
    args.extractor.apply(&mut config.extractor);

    config.validate()?;
    Ok(config)
}

/// Run every configured split through the converter.
pub fn run_conversion(config: &Config) -> Result<ConversionReport> {
    let datasets = config.dataset_mapping()?;
    if datasets.is_empty() {
        return Err(CliError::InvalidInput(
            "No datasets configured; pass --train/--dev/--test or add a [datasets] table".to_string(),
        ));
    }

    let converter = DatasetConverter::new(
        datasets,
        &config.output.dir,
        &config.output.prefix,
        config.extractor.clone(),
    )?;
    Ok(converter.convert_all()?)
}
