//! Tab-separated triple output

use crate::error::DatasetError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use udtriples_domain::traits::TripleSink;
use udtriples_domain::Triple;

/// Writes triples as `field1\tfield2\tfield3\n` lines to any writer
///
/// No header, no escaping.
#[derive(Debug)]
pub struct TsvWriter<W: Write> {
    inner: W,
    lines: usize,
}

impl<W: Write> TsvWriter<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    /// Lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TripleSink for TsvWriter<W> {
    type Error = DatasetError;

    fn write_triples(&mut self, triples: &[Triple]) -> Result<(), DatasetError> {
        for triple in triples {
            writeln!(self.inner, "{}", triple)?;
            self.lines += 1;
        }
        self.inner.flush()?;
        Ok(())
    }
}

/// A triple file on disk, replaced atomically
///
/// Lines go to a temporary file next to the destination, which is renamed
/// into place only once everything is written. A failed write leaves any
/// previous file untouched and never exposes a partial one.
#[derive(Debug, Clone)]
pub struct TsvFile {
    path: PathBuf,
}

impl TsvFile {
    /// Refer to an output file; parent directories are created on write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: std::io::Error) -> DatasetError {
        DatasetError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl TripleSink for TsvFile {
    type Error = DatasetError;

    fn write_triples(&mut self, triples: &[Triple]) -> Result<(), DatasetError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.write_err(e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.write_err(e))?;
        TsvWriter::new(BufWriter::new(tmp.as_file_mut()))
            .write_triples(triples)
            .map_err(|e| match e {
                DatasetError::Io(source) => self.write_err(source),
                other => other,
            })?;
        tmp.as_file().sync_all().map_err(|e| self.write_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_err(e.error))?;

        debug!("Wrote {} triples to {}", triples.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Triple> {
        vec![
            Triple("koerte".into(), "koer".into(), "Case=Gen;Number=Plur;UPOS=NOUN".into()),
            Triple("_".into(), "_".into(), "UPOS=PUNCT".into()),
        ]
    }

    #[test]
    fn test_tsv_writer_format() {
        let mut writer = TsvWriter::new(Vec::new());
        writer.write_triples(&sample()).unwrap();
        assert_eq!(writer.lines(), 2);

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            text,
            "koerte\tkoer\tCase=Gen;Number=Plur;UPOS=NOUN\n_\t_\tUPOS=PUNCT\n"
        );
    }

    #[test]
    fn test_tsv_writer_empty() {
        let mut writer = TsvWriter::new(Vec::new());
        writer.write_triples(&[]).unwrap();
        assert!(writer.into_inner().is_empty());
    }
}
