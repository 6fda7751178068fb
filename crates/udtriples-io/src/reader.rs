//! CoNLL-U corpus reading
//!
//! Parsing is delegated to the `conllu` crate; this module only converts
//! its `udgraph` sentences into domain tokens and enforces that every field
//! the extractor needs is present.

use crate::error::DatasetError;
use conllu::io::{ReadSentence, Reader};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use udgraph::graph::{Node, Sentence as UdSentence};
use udgraph::token::Token as UdToken;
use udtriples_domain::traits::CorpusSource;
use udtriples_domain::{Corpus, Features, Sentence, Token};

/// Placeholder CoNLL-U uses for an unspecified field
const UNDERSCORE: &str = "_";

/// A CoNLL-U treebank file on disk
#[derive(Debug, Clone)]
pub struct ConlluFile {
    path: PathBuf,
}

impl ConlluFile {
    /// Refer to a CoNLL-U file; nothing is read until [`CorpusSource::read_corpus`]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for ConlluFile {
    type Error = DatasetError;

    fn read_corpus(&self) -> Result<Corpus, DatasetError> {
        let text = fs::read_to_string(&self.path).map_err(|source| DatasetError::Read {
            path: self.path.clone(),
            source,
        })?;
        debug!("Read {} bytes from {}", text.len(), self.path.display());

        let corpus = parse_conllu_str(&text)?;
        info!(
            "Parsed {}: {} sentences, {} tokens",
            self.path.display(),
            corpus.sentence_count(),
            corpus.token_count()
        );
        Ok(corpus)
    }
}

/// Parse CoNLL-U text held in memory
///
/// The whole corpus is materialized before returning. The first parse
/// error or missing field aborts the parse.
///
/// Multi-word token ranges (`1-2`) and empty nodes (`1.1`) are skipped.
/// Features are taken from the FEATS column as written, so their order
/// in the file is their serialization order.
pub fn parse_conllu_str(text: &str) -> Result<Corpus, DatasetError> {
    let layout = TokenLines::split(text);
    if layout.skipped > 0 {
        debug!("Skipped {} multi-word token or empty node lines", layout.skipped);
    }

    let reader = Reader::new(layout.text.as_bytes());
    let mut feats = layout.feats.into_iter();

    let mut sentences = Vec::new();
    for (idx, sentence) in reader.sentences().enumerate() {
        let number = idx + 1;
        let sentence = sentence.map_err(|e| DatasetError::Parse {
            sentence: number,
            message: e.to_string(),
        })?;
        let sentence_feats = feats.next().ok_or_else(|| DatasetError::Parse {
            sentence: number,
            message: "sentence boundaries disagree with token lines".to_string(),
        })?;
        sentences.push(convert_sentence(&sentence, sentence_feats, number)?);
    }

    if sentences.is_empty() {
        warn!("CoNLL-U input contains no sentences");
    }
    Ok(Corpus::new(sentences))
}

/// Word lines of a CoNLL-U document, regrouped for the parser
#[derive(Debug, Default)]
struct TokenLines {
    /// Word lines only, one blank line after each sentence
    text: String,
    /// FEATS of every kept word line, per sentence
    feats: Vec<Vec<Features>>,
    /// Range and empty node lines dropped
    skipped: usize,
}

impl TokenLines {
    fn split(text: &str) -> Self {
        let mut layout = Self::default();
        let mut current: Vec<Features> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                layout.close_sentence(&mut current);
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            let mut columns: Vec<&str> = line.split('\t').collect();
            if columns[0].contains(['-', '.']) {
                layout.skipped += 1;
                continue;
            }

            current.push(parse_feats(columns.get(5).copied().unwrap_or(UNDERSCORE)));
            // Enhanced dependencies may point at dropped empty nodes
            if let Some(deps) = columns.get_mut(8) {
                *deps = UNDERSCORE;
            }
            layout.text.push_str(&columns.join("\t"));
            layout.text.push('\n');
        }
        layout.close_sentence(&mut current);
        layout
    }

    fn close_sentence(&mut self, current: &mut Vec<Features>) {
        if current.is_empty() {
            return;
        }
        self.text.push('\n');
        self.feats.push(std::mem::take(current));
    }
}

/// Parse a FEATS column in file order
///
/// A pair without `=` is kept with an empty value.
fn parse_feats(column: &str) -> Features {
    if column == UNDERSCORE {
        return Features::new();
    }
    column
        .split('|')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect()
}

/// Convert one parsed sentence, skipping the artificial root node
fn convert_sentence(
    sentence: &UdSentence,
    feats: Vec<Features>,
    number: usize,
) -> Result<Sentence, DatasetError> {
    let tokens: Vec<&UdToken> = sentence.iter().filter_map(Node::token).collect();
    if tokens.len() != feats.len() {
        return Err(DatasetError::Parse {
            sentence: number,
            message: format!(
                "parsed {} tokens but found {} word lines",
                tokens.len(),
                feats.len()
            ),
        });
    }

    tokens
        .into_iter()
        .zip(feats)
        .enumerate()
        .map(|(idx, (token, feats))| convert_token(token, feats, number, idx + 1))
        .collect()
}

fn convert_token(
    token: &UdToken,
    feats: Features,
    sentence: usize,
    position: usize,
) -> Result<Token, DatasetError> {
    let form = token.form();
    let missing = |field| DatasetError::MissingField {
        sentence,
        token: position,
        form: form.to_string(),
        field,
    };

    // The parser reads a bare "_" lemma as unspecified; for an underscore
    // token that is the lemma itself
    let lemma = match token.lemma() {
        Some(lemma) => lemma,
        None if form == UNDERSCORE => UNDERSCORE,
        None => return Err(missing("lemma")),
    };
    let upos = token.upos().ok_or_else(|| missing("upos"))?;

    Ok(Token::new(form, lemma, upos).with_features(feats))
}
