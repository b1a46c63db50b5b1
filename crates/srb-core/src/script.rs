//! Script conversion.
//!
//! Cyrillic -> Latin and Latin -> ASCII are plain table substitutions.
//! Latin -> Cyrillic normalizes the text, splits it on the space character
//! and converts each word independently: foreign words are kept verbatim,
//! everything else goes through the digraph splitter and the letter table.

use std::borrow::Cow;

use tracing::{debug, debug_span};

use crate::data::{self, LinguisticData};
use crate::normalize::normalize_latin;

/// Word separator for Latin -> Cyrillic. Only U+0020 splits words; tabs and
/// newlines stay inside the word they are attached to.
pub const WORD_SEPARATOR: char = ' ';

/// Conversions bound to one set of linguistic data.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'d> {
    data: &'d LinguisticData,
}

impl Transliterator<'static> {
    /// Transliterator over the process-wide data (see [`data::global`]).
    pub fn global() -> Self {
        Self::new(data::global())
    }
}

impl<'d> Transliterator<'d> {
    pub fn new(data: &'d LinguisticData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &'d LinguisticData {
        self.data
    }

    /// Serbian Cyrillic to Latin. Non-Cyrillic characters pass through.
    pub fn to_latin(&self, text: &str) -> String {
        let _span = debug_span!("to_latin", char_count = text.chars().count()).entered();
        self.data.cyrillic_to_latin.replace(text)
    }

    /// Cyrillic or Latin to diacritic-free ASCII Latin ("ošišana latinica").
    pub fn to_ascii_latin(&self, text: &str) -> String {
        let _span = debug_span!("to_ascii_latin", char_count = text.chars().count()).entered();
        let latin = self.data.cyrillic_to_latin.replace(text);
        let latin = normalize_latin(self.data, &latin);
        self.data.ascii.replace(&latin)
    }

    /// Serbian Latin to Cyrillic, leaving foreign words untouched.
    ///
    /// Words are separated by single spaces in the output; the word count and
    /// order are preserved.
    pub fn to_cyrillic(&self, text: &str) -> String {
        let _span = debug_span!("to_cyrillic", char_count = text.chars().count()).entered();
        let normalized = self.normalize(text);
        let words: Vec<Cow<'_, str>> = normalized
            .split(WORD_SEPARATOR)
            .map(|word| self.word_to_cyrillic(word))
            .collect();
        words.join(" ")
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize_latin(self.data, text)
    }

    pub fn is_foreign(&self, word: &str) -> bool {
        self.data.foreign.is_foreign(word)
    }

    pub fn split_digraphs<'w>(&self, word: &'w str) -> Cow<'w, str> {
        self.data.digraphs.split(word)
    }

    /// Convert one already-normalized word.
    pub fn word_to_cyrillic<'w>(&self, word: &'w str) -> Cow<'w, str> {
        let verdict = self.data.foreign.classify(word);
        if verdict.is_foreign() {
            debug!(word, ?verdict, "foreign word kept");
            return Cow::Borrowed(word);
        }
        let split = self.split_digraphs(word);
        Cow::Owned(self.data.latin_to_cyrillic.replace(&split))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> Transliterator<'static> {
        Transliterator::global()
    }

    #[test]
    fn test_to_latin_letters() {
        assert_eq!(t().to_latin("шума"), "šuma");
        assert_eq!(t().to_latin("ђак"), "đak");
        assert_eq!(t().to_latin("Ђорђе"), "Đorđe");
    }

    #[test]
    fn test_to_latin_digraph_capitals() {
        assert_eq!(t().to_latin("Љ"), "Lj");
        assert_eq!(t().to_latin("Џоди"), "Džodi");
        assert_eq!(t().to_latin("ЉУДИ"), "LJUDI");
        assert_eq!(t().to_latin("ЏЏ"), "DŽDŽ");
        assert_eq!(t().to_latin("КРАЉ ПРИЈАТЕЉ"), "KRALJ PRIJATELJ");
        assert_eq!(t().to_latin("ТЊ"), "TNJ");
        // A lone capital before punctuation keeps title case.
        assert_eq!(t().to_latin("Њ."), "Nj.");
    }

    #[test]
    fn test_to_latin_passes_through_other_scripts() {
        assert_eq!(t().to_latin("abc 123 €"), "abc 123 €");
        assert_eq!(t().to_latin("Привет"), "Privet");
    }

    #[test]
    fn test_to_ascii_latin_folds() {
        assert_eq!(t().to_ascii_latin("džep"), "dzep");
        assert_eq!(t().to_ascii_latin("Đorđe"), "Djordje");
        assert_eq!(t().to_ascii_latin("ČĆŠŽ čćšž"), "CCSZ ccsz");
        assert_eq!(t().to_ascii_latin("џеп"), "dzep");
    }

    #[test]
    fn test_word_to_cyrillic() {
        assert_eq!(t().word_to_cyrillic("Word"), "Word");
        assert_eq!(t().word_to_cyrillic("nadživeti"), "надживети");
        assert_eq!(t().word_to_cyrillic("džep"), "џеп");
        assert_eq!(t().word_to_cyrillic("Dodjavola,"), "Дођавола,");
    }

    #[test]
    fn test_to_cyrillic_only_splits_on_space() {
        // Tab-joined words are a single word for classification.
        assert_eq!(t().to_cyrillic("ja\tti"), "ја\tти");
        assert_eq!(t().to_cyrillic("ja  ti"), "ја  ти");
        assert_eq!(t().to_cyrillic(" ja "), " ја ");
    }

    #[test]
    fn test_explicit_data() {
        let data = LinguisticData::from_toml(data::DEFAULT_DATA_TOML).unwrap();
        let tr = Transliterator::new(&data);
        assert_eq!(tr.to_cyrillic("ljubav"), "љубав");
        assert!(tr.is_foreign("Yahu"));
        assert_eq!(tr.split_digraphs("Tanjug"), "Taнјug");
    }
}
