//! Sentence and corpus containers

use crate::token::Token;

/// An ordered sequence of tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    /// Tokens in sentence order
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence from its tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens in order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for Sentence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A fully materialized treebank file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Sentences in file order
    pub sentences: Vec<Sentence>,
}

impl Corpus {
    /// Create a corpus from its sentences
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Total number of tokens across all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// True when there are no tokens at all
    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    /// Iterate over every token in traversal order
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}

impl FromIterator<Sentence> for Corpus {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
