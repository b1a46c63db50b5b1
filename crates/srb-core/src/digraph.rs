//! Digraph disambiguation for Latin -> Cyrillic conversion.
//!
//! "lj", "nj", "dž" (and "dj") normally become one Cyrillic letter. In a
//! handful of prefixed or borrowed words the two letters belong to different
//! morphemes ("nad-živeti", "in-jekcija") and must stay separate. Each
//! digraph carries an ordered list of word beginnings where that happens;
//! a matching word gets every occurrence of the digraph spelled out as two
//! Cyrillic letters before the letter table runs.

use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use crate::table::SubstitutionTable;

#[derive(Debug)]
pub struct DigraphRule {
    pub(crate) digraph: String,
    pub(crate) exceptions: Vec<String>,
    pub(crate) replacements: SubstitutionTable,
}

impl DigraphRule {
    pub fn new(digraph: String, exceptions: Vec<String>, replacements: SubstitutionTable) -> Self {
        Self {
            digraph,
            exceptions,
            replacements,
        }
    }

    pub fn digraph(&self) -> &str {
        &self.digraph
    }

    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }
}

/// Ordered digraph rules. Only the first rule that fires is applied.
#[derive(Debug, Default)]
pub struct DigraphRules {
    rules: Vec<DigraphRule>,
}

/// A digraph split decision: which digraph, and the exception that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigraphSplit<'r> {
    pub digraph: &'r str,
    pub exception: &'r str,
}

impl DigraphRules {
    pub fn new(rules: Vec<DigraphRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[DigraphRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn find_rule(&self, word: &str) -> Option<(&DigraphRule, DigraphSplit<'_>)> {
        let lowercase = word.to_lowercase();

        for rule in &self.rules {
            if !lowercase.contains(rule.digraph.as_str()) {
                continue;
            }
            // The first matching exception of the first contained digraph
            // decides; a digraph without a matching exception passes control
            // to the next one.
            if let Some(exception) = rule
                .exceptions
                .iter()
                .find(|e| lowercase.starts_with(e.as_str()))
            {
                let split = DigraphSplit {
                    digraph: rule.digraph.as_str(),
                    exception: exception.as_str(),
                };
                return Some((rule, split));
            }
        }

        None
    }

    /// Which digraph (if any) `word` would have split, and why.
    pub fn find_split(&self, word: &str) -> Option<DigraphSplit<'_>> {
        self.find_rule(word).map(|(_, split)| split)
    }

    /// Rewrite `word` so that an exceptional digraph is no longer seen as a
    /// single letter. Words without a matching exception are returned as is.
    pub fn split<'w>(&self, word: &'w str) -> Cow<'w, str> {
        match self.find_rule(word) {
            Some((rule, split)) => {
                debug!(word, digraph = split.digraph, exception = split.exception, "digraph split");
                Cow::Owned(rule.replacements.replace(word))
            }
            None => Cow::Borrowed(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(digraph: &str, exceptions: &[&str], replacements: &[(&str, &str)]) -> DigraphRule {
        DigraphRule::new(
            digraph.to_string(),
            exceptions.iter().map(|s| s.to_string()).collect(),
            SubstitutionTable::from_pairs(replacements.iter().copied()),
        )
    }

    fn rules() -> DigraphRules {
        DigraphRules::new(vec![
            rule(
                "nj",
                &["injekc", "tanjug"],
                &[("nj", "нј"), ("Nj", "Нј"), ("NJ", "НЈ")],
            ),
            rule(
                "dž",
                &["nadživ", "podž"],
                &[("dž", "дж"), ("Dž", "Дж"), ("DŽ", "ДЖ")],
            ),
        ])
    }

    #[test]
    fn test_split_on_exception() {
        let r = rules();
        assert_eq!(r.split("nadživeti"), "naджiveti");
        assert_eq!(r.split("Tanjug"), "Taнјug");
    }

    #[test]
    fn test_split_preserves_case() {
        let r = rules();
        assert_eq!(r.split("NADŽIVETI"), "NAДЖIVETI");
        assert_eq!(r.split("INJEKCIJA"), "IНЈEKCIJA");
    }

    #[test]
    fn test_split_replaces_every_occurrence() {
        let r = rules();
        assert_eq!(r.split("podždžak"), "poджджak");
    }

    #[test]
    fn test_genuine_digraph_untouched() {
        let r = rules();
        assert!(matches!(r.split("džangrizava"), Cow::Borrowed("džangrizava")));
        assert!(matches!(r.split("njuška"), Cow::Borrowed(_)));
        assert_eq!(r.find_split("kuća"), None);
    }

    #[test]
    fn test_exception_must_be_prefix() {
        // "nadživ" inside the word is not a word beginning.
        let r = rules();
        assert_eq!(r.split("prenadživeti"), "prenadživeti");
    }

    #[test]
    fn test_first_firing_rule_wins() {
        // Both "nj" and "dž" are present; "nj" has no exception for this word,
        // so control passes on and only "dž" is split.
        let r = rules();
        assert_eq!(r.split("podžnjeti"), "poджnjeti");
        assert_eq!(
            r.find_split("podžnjeti"),
            Some(DigraphSplit {
                digraph: "dž",
                exception: "podž",
            })
        );

        // When "nj" fires first, "dž" is left alone even if it would match.
        let r = DigraphRules::new(vec![
            rule("nj", &["injekc"], &[("nj", "нј")]),
            rule("dž", &["injekc"], &[("dž", "дж")]),
        ]);
        assert_eq!(r.split("injekcdž"), "iнјekcdž");
    }

    #[test]
    fn test_empty_rules() {
        let r = DigraphRules::default();
        assert!(r.is_empty());
        assert_eq!(r.split("nadživeti"), "nadživeti");
    }
}
