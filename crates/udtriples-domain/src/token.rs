//! Token module - one annotated word of a treebank sentence

use crate::features::Features;

/// A single word or punctuation unit as delivered by the corpus parser
///
/// Tokens are read-only inputs to the extractor. All four fields are
/// required; a parser that cannot supply them must fail instead of
/// producing a token with placeholder values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appears in the text
    pub form: String,

    /// Dictionary (citation) form
    pub lemma: String,

    /// Universal part-of-speech tag
    pub upos: String,

    /// Morphological features, possibly empty
    pub feats: Features,
}

impl Token {
    /// Create a token without features
    pub fn new(form: impl Into<String>, lemma: impl Into<String>, upos: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            lemma: lemma.into(),
            upos: upos.into(),
            feats: Features::new(),
        }
    }

    /// Attach a feature mapping
    pub fn with_features(mut self, feats: Features) -> Self {
        self.feats = feats;
        self
    }
}
