//! Lemma normalization: case folding and special-symbol stripping

use crate::config::ExtractorConfig;

/// Strip corpus-artifact symbols from a lemma
///
/// Each symbol is removed (every occurrence) only when the current lemma
/// contains it, the form does not, and the lemma is longer than one
/// character. Symbols are applied in order to the progressively stripped
/// lemma. A symbol that also occurs in the form is treated as genuine
/// orthography and kept.
///
/// # Examples
///
/// ```
/// use udtriples_extractor::normalize_lemma;
///
/// let symbols = ["_", "="];
/// assert_eq!(normalize_lemma("koerte", "koer_", &symbols), "koer");
/// assert_eq!(normalize_lemma("_", "_", &symbols), "_");
/// assert_eq!(normalize_lemma("a_b", "a_b", &symbols), "a_b");
/// ```
pub fn normalize_lemma<S: AsRef<str>>(form: &str, lemma: &str, symbols: &[S]) -> String {
    let mut lemma = lemma.to_string();
    for symbol in symbols {
        let symbol = symbol.as_ref();
        if symbol.is_empty() {
            continue;
        }
        // Measured in characters so a lone multi-byte lemma is protected too
        if lemma.contains(symbol) && !form.contains(symbol) && lemma.chars().count() > 1 {
            lemma = lemma.replace(symbol, "");
        }
    }
    lemma
}

/// Applies the configured normalization stages to a token's form and lemma
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    lowercase: bool,
    symbols: Option<Vec<String>>,
}

impl Normalizer {
    /// Create a normalizer
    ///
    /// `symbols` of `None` disables stripping.
    pub fn new(lowercase: bool, symbols: Option<Vec<String>>) -> Self {
        Self { lowercase, symbols }
    }

    /// Build the normalizer described by an extractor configuration
    pub fn from_config(config: &ExtractorConfig) -> Self {
        let symbols = config
            .remove_special_symbols
            .then(|| config.symbols_to_remove.clone());
        Self::new(config.all_lower_case, symbols)
    }

    /// True when the normalizer leaves every input unchanged
    pub fn is_identity(&self) -> bool {
        !self.lowercase && self.symbols.as_ref().map_or(true, |s| s.is_empty())
    }

    /// Normalize a `(form, lemma)` pair
    ///
    /// Lowercasing runs first so the symbol check sees the final form.
    pub fn normalize(&self, form: &str, lemma: &str) -> (String, String) {
        let (form, lemma, _) = self.normalize_tracked(form, lemma);
        (form, lemma)
    }

    /// Like [`Normalizer::normalize`], also reporting whether stripping changed the lemma
    pub(crate) fn normalize_tracked(&self, form: &str, lemma: &str) -> (String, String, bool) {
        let (form, lemma) = if self.lowercase {
            (form.to_lowercase(), lemma.to_lowercase())
        } else {
            (form.to_string(), lemma.to_string())
        };

        match &self.symbols {
            Some(symbols) => {
                let stripped = normalize_lemma(&form, &lemma, symbols.as_slice());
                let changed = stripped != lemma;
                (form, stripped, changed)
            }
            None => (form, lemma, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMBOLS: [&str; 2] = ["_", "="];

    #[test]
    fn test_strips_trailing_underscore() {
        assert_eq!(normalize_lemma("koerte", "koer_", &SYMBOLS), "koer");
    }

    #[test]
    fn test_strips_compound_marker() {
        assert_eq!(normalize_lemma("raudteejaam", "raud=tee=jaam", &SYMBOLS), "raudteejaam");
    }

    #[test]
    fn test_keeps_symbol_present_in_form() {
        assert_eq!(normalize_lemma("e=mc2", "e=mc2", &SYMBOLS), "e=mc2");
    }

    #[test]
    fn test_single_symbol_lemma_untouched() {
        assert_eq!(normalize_lemma("x", "_", &SYMBOLS), "_");
        assert_eq!(normalize_lemma("x", "=", &SYMBOLS), "=");
    }

    #[test]
    fn test_cumulative_stripping() {
        // "_" goes first, leaving "=" as a single character which is then kept
        assert_eq!(normalize_lemma("x", "_=", &SYMBOLS), "=");
        // Reverse order strips "=" first, leaving "_"
        assert_eq!(normalize_lemma("x", "_=", &["=", "_"]), "_");
    }

    #[test]
    fn test_each_symbol_checked_independently() {
        // "_" is genuine (in form), "=" is an artifact
        assert_eq!(normalize_lemma("a_b", "a_=b", &SYMBOLS), "a_b");
    }

    #[test]
    fn test_empty_symbol_list_is_identity() {
        let none: [&str; 0] = [];
        assert_eq!(normalize_lemma("x", "koer_", &none), "koer_");
    }

    #[test]
    fn test_normalizer_lowercases_before_stripping() {
        let normalizer = Normalizer::new(true, Some(vec!["_".to_string()]));
        let (form, lemma) = normalizer.normalize("Koerte", "Koer_");
        assert_eq!(form, "koerte");
        assert_eq!(lemma, "koer");
    }

    #[test]
    fn test_normalizer_from_default_config_is_identity() {
        let normalizer = Normalizer::from_config(&ExtractorConfig::default());
        assert!(normalizer.is_identity());
        assert_eq!(
            normalizer.normalize("Koerte", "koer_"),
            ("Koerte".to_string(), "koer_".to_string())
        );
    }

    #[test]
    fn test_normalizer_unicode_lowercase() {
        let normalizer = Normalizer::new(true, None);
        let (form, lemma) = normalizer.normalize("ÕUNAD", "Õun");
        assert_eq!(form, "õunad");
        assert_eq!(lemma, "õun");
    }
}
