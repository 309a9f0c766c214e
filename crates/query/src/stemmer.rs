//! Rule-based morphological stemming for Ukrainian/Russian tokens
//!
//! This module provides pure suffix-substitution stemming for the two
//! dominant inflection families of the catalog's query traffic:
//! - adjectives: gender/number case endings plus one genitive marker
//! - nouns: genitive, instrumental, and prepositional case markers
//!
//! Both functions are referentially transparent; memoization lives in the
//! `QueryNormalizer`, which wraps them in bounded LRU caches.
//!
//! Rules are non-exclusive: several may fire on one token and the result is
//! the union of all firings plus the original token. Identical derived
//! strings deduplicate naturally through the set. Tokens shorter than 4
//! characters pass through unchanged to prevent degenerate short-word
//! stemming.

use katalog_core::TermSet;

/// Tokens with fewer characters never enter any suffix rule
const MIN_STEM_CHARS: usize = 4;

fn char_len(token: &str) -> usize {
    token.chars().count()
}

/// Stem an adjective token to its plausible base and sibling case forms
///
/// Covers the four main Ukrainian adjective forms (masculine -ий/-ний,
/// feminine -а/-на, neuter -е/-не, plural -і/-ні) plus the genitive
/// -ного/-ної markers. Matching rules contribute the bare stem and the stem
/// recombined with every sibling ending.
///
/// # Example
///
/// ```
/// use katalog_query::stemmer::stem_adjective;
///
/// let stems = stem_adjective("гальмівний");
/// assert!(stems.contains("гальмів"));
/// assert!(stems.contains("гальмівна"));
/// assert!(stems.contains("гальмівні"));
/// ```
pub fn stem_adjective(token: &str) -> TermSet {
    let mut stems = TermSet::new();
    stems.insert(token.to_string());

    if char_len(token) < MIN_STEM_CHARS {
        return stems;
    }

    // Masculine: -ний / -ий
    if let Some(base) = token.strip_suffix("ний") {
        stems.insert(base.to_string());
        stems.insert(format!("{base}ний"));
        stems.insert(format!("{base}на"));
        stems.insert(format!("{base}не"));
        stems.insert(format!("{base}ні"));
    } else if let Some(base) = token.strip_suffix("ий") {
        stems.insert(base.to_string());
        stems.insert(format!("{base}ий"));
    }

    // Genitive: -ного / -ної
    if let Some(base) = token.strip_suffix("ного") {
        stems.insert(base.to_string());
        stems.insert(format!("{base}ний"));
    } else if let Some(base) = token.strip_suffix("ної") {
        stems.insert(base.to_string());
        stems.insert(format!("{base}ний"));
    }

    // Feminine: -на
    if let Some(base) = token.strip_suffix("на") {
        stems.insert(base.to_string());
        stems.insert(format!("{base}ний"));
    }

    // Plural: -ні
    if let Some(base) = token.strip_suffix("ні") {
        stems.insert(base.to_string());
        stems.insert(format!("{base}ний"));
    }

    stems
}

/// Stem a noun token by removing common case endings
///
/// Covers the automotive-query case markers: genitive singular (-а/-у),
/// genitive plural (-ів), genitive feminine (-и, with a speculative -а
/// nominative guess), instrumental (-ом/-ою), and prepositional (-і).
///
/// # Example
///
/// ```
/// use katalog_query::stemmer::stem_noun;
///
/// let stems = stem_noun("супорта");
/// assert!(stems.contains("супорт"));
/// assert!(stems.contains("супорта"));
/// ```
pub fn stem_noun(token: &str) -> TermSet {
    let mut stems = TermSet::new();
    stems.insert(token.to_string());

    if char_len(token) < MIN_STEM_CHARS {
        return stems;
    }

    // Genitive singular masculine: -а / -у
    if let Some(base) = token.strip_suffix('а') {
        stems.insert(base.to_string());
    }
    if let Some(base) = token.strip_suffix('у') {
        stems.insert(base.to_string());
    }

    // Genitive plural: -ів
    if let Some(base) = token.strip_suffix("ів") {
        stems.insert(base.to_string());
    }

    // Genitive feminine: -и, with a nominative guess (кабіни → кабін, кабіна)
    if let Some(base) = token.strip_suffix('и') {
        stems.insert(base.to_string());
        stems.insert(format!("{base}а"));
    }

    // Instrumental: -ом / -ою
    if let Some(base) = token.strip_suffix("ом") {
        stems.insert(base.to_string());
    }
    if let Some(base) = token.strip_suffix("ою") {
        stems.insert(format!("{base}а"));
    }

    // Prepositional: -і
    if let Some(base) = token.strip_suffix('і') {
        stems.insert(base.to_string());
    }

    stems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjective_masculine_niy() {
        let stems = stem_adjective("ремонтний");
        assert!(stems.contains("ремонтний"));
        assert!(stems.contains("ремонт"));
        assert!(stems.contains("ремонтна"));
        assert!(stems.contains("ремонтне"));
        assert!(stems.contains("ремонтні"));
    }

    #[test]
    fn test_adjective_genitive_nogo() {
        let stems = stem_adjective("ремонтного");
        assert!(stems.contains("ремонтного"));
        assert!(stems.contains("ремонт"));
        assert!(stems.contains("ремонтний"));
    }

    #[test]
    fn test_adjective_feminine_na() {
        let stems = stem_adjective("клапанна");
        assert!(stems.contains("клапан"));
        assert!(stems.contains("клапанний"));
    }

    #[test]
    fn test_adjective_short_token_passthrough() {
        let stems = stem_adjective("ній");
        assert_eq!(stems.len(), 1);
        assert!(stems.contains("ній"));
    }

    #[test]
    fn test_adjective_always_keeps_original() {
        let stems = stem_adjective("диск");
        assert!(stems.contains("диск"));
    }

    #[test]
    fn test_noun_genitive_singular() {
        let stems = stem_noun("гвинта");
        assert!(stems.contains("гвинта"));
        assert!(stems.contains("гвинт"));
    }

    #[test]
    fn test_noun_genitive_feminine_guesses_nominative() {
        let stems = stem_noun("кабіни");
        assert!(stems.contains("кабін"));
        assert!(stems.contains("кабіна"));
    }

    #[test]
    fn test_noun_instrumental() {
        let stems = stem_noun("гвинтом");
        assert!(stems.contains("гвинт"));
        let stems = stem_noun("пружиною");
        assert!(stems.contains("пружина"));
    }

    #[test]
    fn test_noun_genitive_plural() {
        let stems = stem_noun("болтів");
        assert!(stems.contains("болт"));
    }

    #[test]
    fn test_noun_prepositional() {
        let stems = stem_noun("гвинті");
        assert!(stems.contains("гвинт"));
    }

    #[test]
    fn test_noun_short_token_passthrough() {
        let stems = stem_noun("оса");
        assert_eq!(stems.len(), 1);
        assert!(stems.contains("оса"));
    }

    #[test]
    fn test_stemming_is_deterministic() {
        assert_eq!(stem_adjective("гальмівний"), stem_adjective("гальмівний"));
        assert_eq!(stem_noun("компресора"), stem_noun("компресора"));
    }

    #[test]
    fn test_multiple_rules_union() {
        // Ends with both -на (feminine rule) and length allows -а noun rule;
        // adjective and noun families are unioned by the normalizer, but each
        // function alone must union all of its own firings.
        let stems = stem_adjective("тормозна");
        assert!(stems.contains("тормоз"));
        assert!(stems.contains("тормозний"));
        assert!(stems.contains("тормозна"));
    }
}
