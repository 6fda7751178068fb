//! udtriples I/O
//!
//! File plumbing around the triple extractor: reading CoNLL-U treebanks,
//! writing tab-separated triple files and running the train/dev/test
//! conversion as one all-or-nothing job.
//!
//! # Example Usage
//!
//! ```no_run
//! use udtriples_domain::Split;
//! use udtriples_extractor::ExtractorConfig;
//! use udtriples_io::{DatasetConverter, DatasetMapping};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut datasets = DatasetMapping::new();
//! datasets.insert(Split::Train, "UD_Estonian-EDT/et_edt-ud-train.conllu".into());
//! datasets.insert(Split::Dev, "UD_Estonian-EDT/et_edt-ud-dev.conllu".into());
//! datasets.insert(Split::Test, "UD_Estonian-EDT/et_edt-ud-test.conllu".into());
//!
//! let converter = DatasetConverter::new(datasets, "data", "est", ExtractorConfig::default())?;
//! let report = converter.convert_all()?;
//! println!("{}", report.total.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod reader;
mod writer;
mod converter;

pub use error::DatasetError;
pub use reader::{parse_conllu_str, ConlluFile};
pub use writer::{TsvFile, TsvWriter};
pub use converter::{
    convert_one, output_path, ConversionReport, DatasetConverter, DatasetMapping, SplitReport,
};
