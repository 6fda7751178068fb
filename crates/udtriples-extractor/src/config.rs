//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use udtriples_domain::FieldOrder;

/// Symbols stripped from lemmas when no explicit set is configured
pub const DEFAULT_SYMBOLS: [&str; 2] = ["_", "="];

/// Configuration for one conversion run
///
/// Immutable for the duration of a run and passed explicitly to the
/// extractor, so several profiles can coexist in one process.
///
/// # Examples
///
/// ```
/// use udtriples_extractor::ExtractorConfig;
///
/// // Default: keep duplicates, (form, lemma, feats), no normalization
/// let config = ExtractorConfig::default();
/// assert!(config.keep_duplicates);
/// assert!(!config.original_format);
///
/// // Normalized: lowercase plus symbol stripping
/// let config = ExtractorConfig::normalized();
/// assert!(config.all_lower_case && config.remove_special_symbols);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Preserve repeated triples instead of collapsing them
    #[serde(default = "default_true")]
    pub keep_duplicates: bool,

    /// Emit `(lemma, form, feats)` instead of `(form, lemma, feats)`
    #[serde(default)]
    pub original_format: bool,

    /// Lowercase form and lemma before any other processing
    #[serde(default)]
    pub all_lower_case: bool,

    /// Enable lemma symbol stripping
    #[serde(default)]
    pub remove_special_symbols: bool,

    /// Candidate symbols, tried in order
    #[serde(default = "default_symbols")]
    pub symbols_to_remove: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

impl Default for ExtractorConfig {
    /// Plain conversion: duplicates kept, form first, no normalization
    fn default() -> Self {
        Self {
            keep_duplicates: true,
            original_format: false,
            all_lower_case: false,
            remove_special_symbols: false,
            symbols_to_remove: default_symbols(),
        }
    }
}

impl ExtractorConfig {
    /// Lowercasing and symbol stripping enabled, duplicates kept
    pub fn normalized() -> Self {
        Self {
            all_lower_case: true,
            remove_special_symbols: true,
            ..Self::default()
        }
    }

    /// Normalized and de-duplicated
    pub fn deduplicated() -> Self {
        Self {
            keep_duplicates: false,
            ..Self::normalized()
        }
    }

    /// Lemma-first layout, as used by the inflection shared tasks
    pub fn original() -> Self {
        Self {
            original_format: true,
            ..Self::default()
        }
    }

    /// Field order selected by `original_format`
    pub fn field_order(&self) -> FieldOrder {
        FieldOrder::from_original_format(self.original_format)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (idx, symbol) in self.symbols_to_remove.iter().enumerate() {
            if symbol.is_empty() {
                return Err(format!("symbols_to_remove[{}] is empty", idx));
            }
            if self.symbols_to_remove[..idx].contains(symbol) {
                return Err(format!("symbols_to_remove lists '{}' more than once", symbol));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
