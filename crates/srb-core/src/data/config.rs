use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::digraph::{DigraphRule, DigraphRules};
use crate::foreign::ForeignWordRules;
use crate::table::SubstitutionTable;

use super::LinguisticData;

#[derive(Deserialize)]
struct RawData {
    version: u32,
    letters: BTreeMap<String, String>,
    #[serde(default)]
    latin_aliases: BTreeMap<String, String>,
    normalization: BTreeMap<String, String>,
    ascii: BTreeMap<String, String>,
    foreign: RawForeign,
    #[serde(default)]
    digraphs: Vec<RawDigraph>,
}

#[derive(Deserialize)]
struct RawForeign {
    #[serde(default)]
    exact: Vec<String>,
    #[serde(default)]
    prefixes: Vec<String>,
    #[serde(default)]
    combinations: Vec<String>,
    #[serde(default)]
    combination_exceptions: Vec<String>,
}

#[derive(Deserialize)]
struct RawDigraph {
    digraph: String,
    #[serde(default)]
    exceptions: Vec<String>,
    replacements: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("empty key in [{0}]")]
    EmptyKey(&'static str),
    #[error("empty value for key {key:?} in [{table}]")]
    EmptyValue { table: &'static str, key: String },
    #[error("empty entry in {0}")]
    EmptyEntry(&'static str),
    #[error("{table} entry {entry:?} must be lowercase")]
    NotLowercase { table: &'static str, entry: String },
    #[error("[{table}] is not idempotent: {key:?} -> {value:?} can form key {inner:?}")]
    NotIdempotent {
        table: &'static str,
        key: String,
        value: String,
        inner: String,
    },
    #[error("{first:?} and {second:?} both map to Latin {latin:?}")]
    DuplicateLatin {
        first: String,
        second: String,
        latin: String,
    },
    #[error("digraph {digraph:?} has no replacement for {variant:?}")]
    MissingReplacement { digraph: String, variant: String },
    #[error("linguistic data already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a data TOML document into ready-to-use tables.
pub fn parse_data_toml(toml_str: &str) -> Result<LinguisticData, DataError> {
    let raw: RawData = toml::from_str(toml_str).map_err(|e| DataError::Parse(e.to_string()))?;

    check_required("letters", &raw.letters)?;
    check_required("normalization", &raw.normalization)?;
    // Empty ASCII values drop stray combining marks.
    check_keys("ascii", &raw.ascii)?;
    check_map("latin_aliases", &raw.latin_aliases)?;
    check_idempotent("normalization", &raw.normalization)?;
    check_idempotent("ascii", &raw.ascii)?;

    let latin_to_cyrillic = invert_letters(&raw.letters, &raw.latin_aliases)?;
    let cyrillic_to_latin = build_cyrillic_to_latin(&raw.letters);

    let foreign = build_foreign(raw.foreign)?;
    let digraphs = raw
        .digraphs
        .into_iter()
        .map(build_digraph)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LinguisticData {
        version: raw.version,
        letter_count: raw.letters.len(),
        cyrillic_to_latin,
        latin_to_cyrillic,
        normalization: table_from_map(&raw.normalization),
        ascii: table_from_map(&raw.ascii),
        foreign,
        digraphs: DigraphRules::new(digraphs),
    })
}

fn table_from_map(map: &BTreeMap<String, String>) -> SubstitutionTable {
    SubstitutionTable::from_pairs(map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

fn check_required(table: &'static str, map: &BTreeMap<String, String>) -> Result<(), DataError> {
    if map.is_empty() {
        return Err(DataError::Empty(table));
    }
    check_map(table, map)
}

fn check_keys(table: &'static str, map: &BTreeMap<String, String>) -> Result<(), DataError> {
    if map.is_empty() {
        return Err(DataError::Empty(table));
    }
    if map.keys().any(|k| k.is_empty()) {
        return Err(DataError::EmptyKey(table));
    }
    Ok(())
}

fn check_map(table: &'static str, map: &BTreeMap<String, String>) -> Result<(), DataError> {
    for (key, value) in map {
        if key.is_empty() {
            return Err(DataError::EmptyKey(table));
        }
        if value.is_empty() {
            return Err(DataError::EmptyValue {
                table,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

/// A second substitution pass must find nothing left to replace: no value
/// may contain a key, and a value may only end with the start of a key
/// when the longer source text is a key of its own.
fn check_idempotent(table: &'static str, map: &BTreeMap<String, String>) -> Result<(), DataError> {
    for (key, value) in map {
        let inner = map
            .keys()
            .find(|inner| value.contains(inner.as_str()) || joins_across(key, value, inner, map));
        if let Some(inner) = inner {
            return Err(DataError::NotIdempotent {
                table,
                key: key.clone(),
                value: value.clone(),
                inner: inner.clone(),
            });
        }
    }
    Ok(())
}

/// Whether a tail of `value` plus the input after `key` spells `inner`
/// (ǳ -> "dz" followed by a combining caron spells "z" + caron).
fn joins_across(key: &str, value: &str, inner: &str, map: &BTreeMap<String, String>) -> bool {
    value.char_indices().any(|(i, _)| {
        let tail = &value[i..];
        match inner.strip_prefix(tail) {
            Some(rest) if !rest.is_empty() => !map.contains_key(&format!("{key}{rest}")),
            _ => false,
        }
    })
}

fn check_list(table: &'static str, entries: &[String]) -> Result<(), DataError> {
    for entry in entries {
        if entry.is_empty() {
            return Err(DataError::EmptyEntry(table));
        }
        if entry.to_lowercase() != *entry {
            return Err(DataError::NotLowercase {
                table,
                entry: entry.clone(),
            });
        }
    }
    Ok(())
}

fn is_upper(s: &str) -> bool {
    s.chars().all(char::is_uppercase)
}

/// Cyrillic -> Latin, plus two-letter keys pairing a digraph capital with a
/// neighbouring capital on either side, so "ЉУ" reads "LJU", "АЉ" reads
/// "ALJ" and a lone "Љу" stays "Lju".
fn build_cyrillic_to_latin(letters: &BTreeMap<String, String>) -> SubstitutionTable {
    let mut table = table_from_map(letters);

    let capitals: Vec<(&String, &String)> = letters.iter().filter(|(c, _)| is_upper(c)).collect();
    for (cyr, lat) in &capitals {
        if lat.chars().count() < 2 || is_upper(lat) {
            continue;
        }
        for (other_cyr, other_lat) in &capitals {
            let after = format!("{cyr}{other_cyr}");
            table.insert(&after, &format!("{lat}{other_lat}").to_uppercase());
            let before = format!("{other_cyr}{cyr}");
            table.insert(&before, &format!("{other_lat}{lat}").to_uppercase());
        }
    }

    table
}

fn invert_letters(
    letters: &BTreeMap<String, String>,
    aliases: &BTreeMap<String, String>,
) -> Result<SubstitutionTable, DataError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (cyr, lat) in letters.iter().chain(aliases.iter().map(|(l, c)| (c, l))) {
        if let Some(first) = seen.insert(lat.as_str(), cyr.as_str()) {
            return Err(DataError::DuplicateLatin {
                first: first.to_string(),
                second: cyr.clone(),
                latin: lat.clone(),
            });
        }
    }
    Ok(SubstitutionTable::from_pairs(seen))
}

fn build_foreign(raw: RawForeign) -> Result<ForeignWordRules, DataError> {
    check_list("foreign.exact", &raw.exact)?;
    check_list("foreign.prefixes", &raw.prefixes)?;
    check_list("foreign.combinations", &raw.combinations)?;
    check_list("foreign.combination_exceptions", &raw.combination_exceptions)?;
    Ok(ForeignWordRules::new(
        raw.exact,
        raw.prefixes,
        raw.combinations,
        raw.combination_exceptions,
    ))
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn build_digraph(raw: RawDigraph) -> Result<DigraphRule, DataError> {
    check_list("digraphs.digraph", std::slice::from_ref(&raw.digraph))?;
    check_list("digraphs.exceptions", &raw.exceptions)?;
    check_map("digraphs.replacements", &raw.replacements)?;

    for variant in [
        raw.digraph.clone(),
        title_case(&raw.digraph),
        raw.digraph.to_uppercase(),
    ] {
        if !raw.replacements.contains_key(&variant) {
            return Err(DataError::MissingReplacement {
                digraph: raw.digraph.clone(),
                variant,
            });
        }
    }

    let replacements = table_from_map(&raw.replacements);
    Ok(DigraphRule::new(raw.digraph, raw.exceptions, replacements))
}
