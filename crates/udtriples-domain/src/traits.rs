//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the triple transform and the
//! I/O around it. Implementations live in `udtriples-io`.

use crate::{Corpus, Triple};

/// Source of a parsed corpus
///
/// Implemented by the infrastructure layer (udtriples-io)
pub trait CorpusSource {
    /// Error type for read and parse failures
    type Error;

    /// Read and parse the whole corpus into memory
    fn read_corpus(&self) -> Result<Corpus, Self::Error>;
}

/// Destination for extracted triples
///
/// Implemented by the infrastructure layer (udtriples-io)
pub trait TripleSink {
    /// Error type for write failures
    type Error;

    /// Write every triple in the given order
    fn write_triples(&mut self, triples: &[Triple]) -> Result<(), Self::Error>;
}

/// In-memory corpus, mostly useful for tests and previews
impl CorpusSource for Corpus {
    type Error = std::convert::Infallible;

    fn read_corpus(&self) -> Result<Corpus, Self::Error> {
        Ok(self.clone())
    }
}

/// Collects triples in memory
impl TripleSink for Vec<Triple> {
    type Error = std::convert::Infallible;

    fn write_triples(&mut self, triples: &[Triple]) -> Result<(), Self::Error> {
        self.extend_from_slice(triples);
        Ok(())
    }
}
