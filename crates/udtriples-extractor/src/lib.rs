//! udtriples Extractor
//!
//! Turns a parsed treebank corpus into `(form, lemma, features)` training
//! triples for a morphological inflection model.
//!
//! # Overview
//!
//! This crate holds every policy decision of the conversion. Reading
//! CoNLL-U and writing output files happen elsewhere (`udtriples-io`).
//!
//! # Architecture
//!
//! ```text
//! Corpus → TripleExtractor ─┬─ Normalizer (lowercase, strip lemma symbols)
//!                           ├─ feature_string (features + UPOS)
//!                           └─ FieldOrder → Vec<Triple> → dedup
//! ```
//!
//! # Key Features
//!
//! - **Field ordering**: `(lemma, form, feats)` or `(form, lemma, feats)`
//! - **Case normalization**: optional lowercasing of form and lemma
//! - **Symbol stripping**: removes corpus artifacts such as `_` and `=` from
//!   lemmas unless the surface form shows the symbol is genuine
//! - **De-duplication**: optional, first occurrence wins
//!
//! # Example Usage
//!
//! ```
//! use udtriples_domain::{Corpus, Features, Sentence, Token};
//! use udtriples_extractor::{ExtractorConfig, TripleExtractor};
//!
//! let feats: Features = [("Case", "Gen"), ("Number", "Plur")].into_iter().collect();
//! let corpus = Corpus::new(vec![Sentence::new(vec![
//!     Token::new("Koerte", "koer_", "NOUN").with_features(feats),
//! ])]);
//!
//! let extractor = TripleExtractor::new(ExtractorConfig::normalized()).unwrap();
//! let triples = extractor.extract(&corpus);
//!
//! assert_eq!(triples[0].to_string(), "koerte\tkoer\tCase=Gen;Number=Plur;UPOS=NOUN");
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod normalizer;
mod features;
mod stats;
mod extractor;


pub use error::ExtractorError;
pub use config::{ExtractorConfig, DEFAULT_SYMBOLS};
pub use normalizer::{normalize_lemma, Normalizer};
pub use features::{feature_string, UPOS_FEATURE};
pub use stats::ExtractionStats;
pub use extractor::{extract_triples, TripleExtractor};
