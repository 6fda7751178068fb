//! Preview command implementation.

use crate::cli::PreviewArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use udtriples_domain::traits::CorpusSource;
use udtriples_extractor::TripleExtractor;
use udtriples_io::ConlluFile;

/// Execute the preview command.
pub fn execute_preview(args: PreviewArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut extractor_config = config.extractor.clone();
    args.extractor.apply(&mut extractor_config);
    let extractor = TripleExtractor::new(extractor_config)
        .map_err(|e| CliError::Config(e.to_string()))?;

    let corpus = ConlluFile::new(&args.file).read_corpus()?;
    let (mut triples, stats) = extractor.extract_with_stats(&corpus);

    if let Some(limit) = args.limit {
        triples.truncate(limit);
    }

    if triples.is_empty() {
        eprintln!("{}", formatter.warning("No triples produced"));
        return Ok(());
    }

    println!("{}", formatter.format_triples(&triples)?);
    eprintln!("{}", formatter.info(&stats.summary()));
    Ok(())
}
