//! Foreign word detection.
//!
//! A word is checked, lower-cased, against the exact list, then the prefix
//! list, then the ordered combination list. The first combination found in
//! the word decides the verdict: foreign, unless the word starts with one of
//! the combination exceptions. Later combinations are never consulted.

use std::collections::HashSet;

use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct ForeignWordRules {
    pub(crate) exact: HashSet<String>,
    pub(crate) prefixes: Vec<String>,
    pub(crate) combinations: Vec<String>,
    pub(crate) combination_exceptions: Vec<String>,
}

/// Why a word was (or was not) classified as foreign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ForeignVerdict<'r> {
    Exact {
        word: &'r str,
    },
    Prefix {
        prefix: &'r str,
    },
    Combination {
        combination: &'r str,
    },
    /// A foreign combination was found, but the word starts with a known
    /// Serbian exception.
    Excepted {
        combination: &'r str,
        exception: &'r str,
    },
    Domestic,
}

impl ForeignVerdict<'_> {
    pub fn is_foreign(&self) -> bool {
        matches!(
            self,
            ForeignVerdict::Exact { .. }
                | ForeignVerdict::Prefix { .. }
                | ForeignVerdict::Combination { .. }
        )
    }
}

impl ForeignWordRules {
    pub fn new(
        exact: impl IntoIterator<Item = String>,
        prefixes: Vec<String>,
        combinations: Vec<String>,
        combination_exceptions: Vec<String>,
    ) -> Self {
        Self {
            exact: exact.into_iter().collect(),
            prefixes,
            combinations,
            combination_exceptions,
        }
    }

    pub fn classify(&self, word: &str) -> ForeignVerdict<'_> {
        let lowercase = word.to_lowercase();

        if let Some(w) = self.exact.get(&lowercase) {
            return ForeignVerdict::Exact { word: w.as_str() };
        }

        if let Some(p) = self.prefixes.iter().find(|p| lowercase.starts_with(p.as_str())) {
            return ForeignVerdict::Prefix { prefix: p.as_str() };
        }

        let Some(combination) = self
            .combinations
            .iter()
            .find(|c| lowercase.contains(c.as_str()))
        else {
            return ForeignVerdict::Domestic;
        };

        match self
            .combination_exceptions
            .iter()
            .find(|e| lowercase.starts_with(e.as_str()))
        {
            Some(exception) => ForeignVerdict::Excepted {
                combination: combination.as_str(),
                exception: exception.as_str(),
            },
            None => ForeignVerdict::Combination {
                combination: combination.as_str(),
            },
        }
    }

    pub fn is_foreign(&self, word: &str) -> bool {
        self.classify(word).is_foreign()
    }

    pub fn exact_len(&self) -> usize {
        self.exact.len()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn combinations(&self) -> &[String] {
        &self.combinations
    }

    pub fn combination_exceptions(&self) -> &[String] {
        &self.combination_exceptions
    }
}
