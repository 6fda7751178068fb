//! Core triple extraction

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::features::feature_string;
use crate::normalizer::Normalizer;
use crate::stats::ExtractionStats;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use udtriples_domain::{Corpus, FieldOrder, Token, Triple};

/// Converts a parsed corpus into training triples
#[derive(Debug, Clone)]
pub struct TripleExtractor {
    config: ExtractorConfig,
    normalizer: Normalizer,
    order: FieldOrder,
}

impl TripleExtractor {
    /// Create a new extractor, rejecting an invalid configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            normalizer: Normalizer::from_config(&config),
            order: config.field_order(),
            config,
        })
    }

    /// Configuration this extractor runs with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract triples from every token of the corpus
    pub fn extract(&self, corpus: &Corpus) -> Vec<Triple> {
        self.extract_with_stats(corpus).0
    }

    /// Extract triples and report what happened along the way
    ///
    /// Tokens are visited in corpus order. With duplicates kept, the output
    /// mirrors that order exactly; otherwise the first occurrence of each
    /// distinct triple is kept in first-seen order.
    pub fn extract_with_stats(&self, corpus: &Corpus) -> (Vec<Triple>, ExtractionStats) {
        let mut stats = ExtractionStats::new();
        stats.sentences = corpus.sentence_count();

        if corpus.is_empty() {
            warn!("Corpus contains no tokens");
        }

        let mut triples = Vec::with_capacity(corpus.token_count());
        for token in corpus.tokens() {
            stats.tokens += 1;
            let (triple, stripped) = self.token_to_triple(token);
            if stripped {
                stats.lemmas_stripped += 1;
            }
            triples.push(triple);
        }
        debug!("Built {} triples from {} sentences", triples.len(), stats.sentences);

        if !self.config.keep_duplicates {
            let before = triples.len();
            triples = dedup_first_seen(triples);
            stats.duplicates_dropped = before - triples.len();
            debug!("Dropped {} duplicate triples", stats.duplicates_dropped);
        }

        stats.triples = triples.len();
        info!("Extraction complete: {}", stats.summary());
        (triples, stats)
    }

    /// Build the triple for a single token
    ///
    /// The flag reports whether symbol stripping changed the lemma.
    fn token_to_triple(&self, token: &Token) -> (Triple, bool) {
        let (form, lemma, stripped) = self.normalizer.normalize_tracked(&token.form, &token.lemma);
        let feats = feature_string(&token.feats, &token.upos);
        (Triple::assemble(form, lemma, feats, self.order), stripped)
    }
}

/// Extract triples with a one-off extractor
///
/// An invalid configuration is used as given: empty symbols are skipped by
/// the normalizer and repeated symbols are harmless.
pub fn extract_triples(corpus: &Corpus, config: &ExtractorConfig) -> Vec<Triple> {
    let extractor = TripleExtractor {
        config: config.clone(),
        normalizer: Normalizer::from_config(config),
        order: config.field_order(),
    };
    extractor.extract(corpus)
}

/// Keep the first occurrence of every distinct triple
fn dedup_first_seen(triples: Vec<Triple>) -> Vec<Triple> {
    let mut seen = HashSet::with_capacity(triples.len());
    triples
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_first_seen_keeps_order() {
        let a = Triple("a".into(), "a".into(), "UPOS=X".into());
        let b = Triple("b".into(), "b".into(), "UPOS=X".into());
        let out = dedup_first_seen(vec![b.clone(), a.clone(), b.clone(), a.clone()]);
        assert_eq!(out, vec![b, a]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ExtractorConfig::default();
        config.symbols_to_remove = vec![String::new()];
        let result = TripleExtractor::new(config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }
}
