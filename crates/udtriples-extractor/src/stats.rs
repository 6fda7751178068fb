//! Counters collected during an extraction run

use serde::Serialize;

/// Statistics for one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Sentences visited
    pub sentences: usize,

    /// Tokens visited
    pub tokens: usize,

    /// Triples in the final output
    pub triples: usize,

    /// Triples dropped as duplicates
    pub duplicates_dropped: usize,

    /// Lemmas changed by symbol stripping
    pub lemmas_stripped: usize,
}

impl ExtractionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another run's counters to this one
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.sentences += other.sentences;
        self.tokens += other.tokens;
        self.triples += other.triples;
        self.duplicates_dropped += other.duplicates_dropped;
        self.lemmas_stripped += other.lemmas_stripped;
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} sentences, {} tokens -> {} triples ({} duplicates dropped, {} lemmas stripped)",
            self.sentences, self.tokens, self.triples, self.duplicates_dropped, self.lemmas_stripped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let mut total = ExtractionStats::new();
        let run = ExtractionStats {
            sentences: 2,
            tokens: 10,
            triples: 8,
            duplicates_dropped: 2,
            lemmas_stripped: 1,
        };
        total.merge(&run);
        total.merge(&run);
        assert_eq!(total.tokens, 20);
        assert_eq!(total.duplicates_dropped, 4);
    }

    #[test]
    fn test_summary() {
        let stats = ExtractionStats {
            sentences: 1,
            tokens: 3,
            triples: 3,
            duplicates_dropped: 0,
            lemmas_stripped: 1,
        };
        assert_eq!(
            stats.summary(),
            "1 sentences, 3 tokens -> 3 triples (0 duplicates dropped, 1 lemmas stripped)"
        );
    }
}
