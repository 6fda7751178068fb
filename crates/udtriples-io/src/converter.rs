//! Per-split dataset conversion

use crate::error::DatasetError;
use crate::reader::ConlluFile;
use crate::writer::TsvFile;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use udtriples_domain::traits::{CorpusSource, TripleSink};
use udtriples_domain::{Split, Triple};
use udtriples_extractor::{ExtractionStats, ExtractorConfig, TripleExtractor};

/// Which corpus file feeds which split
///
/// A `BTreeMap` so splits are always processed train, dev, test.
pub type DatasetMapping = BTreeMap<Split, PathBuf>;

/// Output file for a split: `<output_dir>/<prefix>.<split>`
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use udtriples_domain::Split;
/// use udtriples_io::output_path;
///
/// assert_eq!(output_path(Path::new("data"), "est", Split::Dev), Path::new("data/est.dev"));
/// ```
pub fn output_path(output_dir: &Path, prefix: &str, split: Split) -> PathBuf {
    output_dir.join(format!("{}.{}", prefix, split))
}

/// Run one source through the extractor into one sink
pub fn convert_one<S, K>(
    source: &S,
    sink: &mut K,
    extractor: &TripleExtractor,
) -> Result<ExtractionStats, DatasetError>
where
    S: CorpusSource,
    K: TripleSink,
    DatasetError: From<S::Error> + From<K::Error>,
{
    let corpus = source.read_corpus()?;
    let (triples, stats) = extractor.extract_with_stats(&corpus);
    sink.write_triples(&triples)?;
    Ok(stats)
}

/// Outcome for a single split
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    /// Split name
    pub split: String,
    /// Corpus file read
    pub input: PathBuf,
    /// Triple file written
    pub output: PathBuf,
    /// Extraction counters
    pub stats: ExtractionStats,
}

/// Outcome of a full conversion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionReport {
    /// One entry per split, in processing order
    pub splits: Vec<SplitReport>,
    /// Counters summed over all splits
    pub total: ExtractionStats,
}

impl ConversionReport {
    fn push(&mut self, report: SplitReport) {
        self.total.merge(&report.stats);
        self.splits.push(report);
    }
}

/// Converts every configured split with one extractor configuration
#[derive(Debug, Clone)]
pub struct DatasetConverter {
    datasets: DatasetMapping,
    output_dir: PathBuf,
    prefix: String,
    extractor: TripleExtractor,
}

impl DatasetConverter {
    /// Create a converter
    ///
    /// Fails on an empty mapping, an empty prefix or an invalid extractor
    /// configuration.
    pub fn new(
        datasets: DatasetMapping,
        output_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        config: ExtractorConfig,
    ) -> Result<Self, DatasetError> {
        let prefix = prefix.into();
        if datasets.is_empty() {
            return Err(DatasetError::Config("no datasets configured".to_string()));
        }
        if prefix.is_empty() {
            return Err(DatasetError::Config("output prefix must not be empty".to_string()));
        }
        Ok(Self {
            datasets,
            output_dir: output_dir.into(),
            prefix,
            extractor: TripleExtractor::new(config)?,
        })
    }

    /// Output file for a split
    pub fn output_for(&self, split: Split) -> PathBuf {
        output_path(&self.output_dir, &self.prefix, split)
    }

    /// Configured datasets
    pub fn datasets(&self) -> &DatasetMapping {
        &self.datasets
    }

    /// Convert all splits
    ///
    /// Every split is parsed and extracted before the first file is
    /// written, so bad input in any split aborts the run with no output
    /// touched. Each file is then replaced atomically.
    pub fn convert_all(&self) -> Result<ConversionReport, DatasetError> {
        let mut pending: Vec<(Split, &Path, Vec<Triple>, ExtractionStats)> = Vec::new();

        for (split, input) in &self.datasets {
            info!("Converting {} split from {}", split, input.display());
            let corpus = ConlluFile::new(input).read_corpus()?;
            let (triples, stats) = self.extractor.extract_with_stats(&corpus);
            pending.push((*split, input.as_path(), triples, stats));
        }

        let mut report = ConversionReport::default();
        for (split, input, triples, stats) in pending {
            let output = self.output_for(split);
            TsvFile::new(&output).write_triples(&triples)?;
            debug!("{}: {}", split, stats.summary());
            report.push(SplitReport {
                split: split.to_string(),
                input: input.to_path_buf(),
                output,
                stats,
            });
        }

        info!("Conversion finished: {}", report.total.summary());
        Ok(report)
    }
}
