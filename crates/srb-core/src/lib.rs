//! Serbian Cyrillic <-> Latin transliteration.
//!
//! The free functions below use the embedded linguistic data
//! ([`data::global`]); use [`Transliterator::new`] to convert with a
//! separately loaded [`LinguisticData`].

pub mod data;
pub mod digraph;
pub mod explain;
pub mod foreign;
pub mod normalize;
pub mod script;
pub mod table;

#[cfg(test)]
mod tests;

pub use data::{DataError, LinguisticData};
pub use script::Transliterator;

/// Convert Serbian Cyrillic text to Latin.
pub fn to_latin(text: &str) -> String {
    Transliterator::global().to_latin(text)
}

/// Convert Cyrillic or Latin text to Latin without diacritics.
pub fn to_ascii_latin(text: &str) -> String {
    Transliterator::global().to_ascii_latin(text)
}

/// Convert Serbian Latin text to Cyrillic. Foreign words are left as they are.
pub fn to_cyrillic(text: &str) -> String {
    Transliterator::global().to_cyrillic(text)
}
