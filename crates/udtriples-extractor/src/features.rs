//! Feature string serialization

use udtriples_domain::Features;

/// Name of the synthetic feature carrying the part-of-speech tag
pub const UPOS_FEATURE: &str = "UPOS";

/// Serialize a token's features plus its POS tag
///
/// The result is `key=value` pairs joined by `;` in the features' own
/// order with `UPOS=<upos>` set last, or exactly `UPOS=<upos>` for a token
/// without features. `feats` itself is never modified.
///
/// # Examples
///
/// ```
/// use udtriples_domain::Features;
/// use udtriples_extractor::feature_string;
///
/// let feats: Features = [("Case", "Gen"), ("Number", "Plur")].into_iter().collect();
/// assert_eq!(feature_string(&feats, "NOUN"), "Case=Gen;Number=Plur;UPOS=NOUN");
/// assert_eq!(feature_string(&Features::new(), "PUNCT"), "UPOS=PUNCT");
/// ```
pub fn feature_string(feats: &Features, upos: &str) -> String {
    if feats.is_empty() {
        return format!("{}={}", UPOS_FEATURE, upos);
    }
    feats.with_appended(UPOS_FEATURE, upos).to_string()
}
