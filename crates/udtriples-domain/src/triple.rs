//! Triple module - the training record produced for each token

use std::fmt;

/// Order of the two lexical fields in a [`Triple`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldOrder {
    /// `(lemma, form, features)`, the original shared-task layout
    LemmaFirst,
    /// `(form, lemma, features)`
    #[default]
    FormFirst,
}

impl FieldOrder {
    /// Map the `original_format` switch to a field order
    pub fn from_original_format(original_format: bool) -> Self {
        if original_format {
            FieldOrder::LemmaFirst
        } else {
            FieldOrder::FormFirst
        }
    }
}

/// One output record: two lexical fields plus a feature string
///
/// Triples have no identity beyond their contents; two triples with the
/// same three strings are the same training example.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple(pub String, pub String, pub String);

impl Triple {
    /// Assemble a triple from form, lemma and feature string
    ///
    /// # Examples
    ///
    /// ```
    /// use udtriples_domain::{FieldOrder, Triple};
    ///
    /// let t = Triple::assemble("koerte", "koer", "UPOS=NOUN", FieldOrder::LemmaFirst);
    /// assert_eq!(t.first(), "koer");
    /// assert_eq!(t.second(), "koerte");
    /// ```
    pub fn assemble(
        form: impl Into<String>,
        lemma: impl Into<String>,
        features: impl Into<String>,
        order: FieldOrder,
    ) -> Self {
        match order {
            FieldOrder::LemmaFirst => Self(lemma.into(), form.into(), features.into()),
            FieldOrder::FormFirst => Self(form.into(), lemma.into(), features.into()),
        }
    }

    /// First lexical field
    pub fn first(&self) -> &str {
        &self.0
    }

    /// Second lexical field
    pub fn second(&self) -> &str {
        &self.1
    }

    /// Serialized feature string
    pub fn features(&self) -> &str {
        &self.2
    }
}

/// Tab-separated rendering, one line of an output file without the newline
///
/// Fields are not escaped.
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_form_first() {
        let t = Triple::assemble("koerte", "koer", "UPOS=NOUN", FieldOrder::FormFirst);
        assert_eq!(t, Triple("koerte".into(), "koer".into(), "UPOS=NOUN".into()));
    }

    #[test]
    fn test_assemble_lemma_first() {
        let t = Triple::assemble("koerte", "koer", "UPOS=NOUN", FieldOrder::LemmaFirst);
        assert_eq!(t.first(), "koer");
        assert_eq!(t.second(), "koerte");
        assert_eq!(t.features(), "UPOS=NOUN");
    }

    #[test]
    fn test_display_is_tab_separated() {
        let t = Triple("a".into(), "b".into(), "UPOS=X".into());
        assert_eq!(t.to_string(), "a\tb\tUPOS=X");
    }

    #[test]
    fn test_field_order_from_flag() {
        assert_eq!(FieldOrder::from_original_format(true), FieldOrder::LemmaFirst);
        assert_eq!(FieldOrder::from_original_format(false), FieldOrder::FormFirst);
    }
}
