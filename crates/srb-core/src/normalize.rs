//! Canonical Serbian Latin spelling.
//!
//! Folds ligature code points (ǉ, ǌ, ǆ, ĳ), combining-accent sequences
//! (c + U+030C) and look-alike letters (Icelandic ð) into the single code
//! points the rest of the crate compares against. This is not Unicode NFC:
//! only letters listed in the data's `[normalization]` table are touched.

use crate::data::LinguisticData;

pub fn normalize_latin(data: &LinguisticData, text: &str) -> String {
    data.normalization.replace(text)
}
