//! Linguistic data: letter maps, normalization and ASCII folds, and the
//! foreign-word and digraph rule lists.
//!
//! - `init_custom(toml_content)` installs replacement data before first `global()` call
//! - `global()` returns `&'static LinguisticData` (lazy-init singleton)
//! - Default tables are embedded via `include_str!("default_data.toml")`
//!
//! Nothing here is mutated after construction, so a `LinguisticData` can be
//! shared freely between threads.

mod config;

use std::sync::OnceLock;

use serde::Serialize;

use crate::digraph::DigraphRules;
use crate::foreign::ForeignWordRules;
use crate::table::SubstitutionTable;

pub use config::{parse_data_toml, DataError};

pub const DEFAULT_DATA_TOML: &str = include_str!("default_data.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<LinguisticData> = OnceLock::new();

/// Set custom data TOML before first `global()` call.
pub fn init_custom(toml_content: String) -> Result<(), DataError> {
    if INSTANCE.get().is_some() {
        return Err(DataError::AlreadyInitialized);
    }
    parse_data_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| DataError::AlreadyInitialized)
}

/// Get or initialize the global data singleton.
pub fn global() -> &'static LinguisticData {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_DATA_TOML);
        parse_data_toml(toml_str).expect("linguistic data TOML must be valid")
    })
}

/// Returns the embedded default data TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_DATA_TOML
}

#[derive(Debug)]
pub struct LinguisticData {
    pub(crate) version: u32,
    pub(crate) letter_count: usize,
    pub(crate) cyrillic_to_latin: SubstitutionTable,
    pub(crate) latin_to_cyrillic: SubstitutionTable,
    pub(crate) normalization: SubstitutionTable,
    pub(crate) ascii: SubstitutionTable,
    pub(crate) foreign: ForeignWordRules,
    pub(crate) digraphs: DigraphRules,
}

/// Table sizes, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSummary {
    pub version: u32,
    pub letters: usize,
    pub normalization: usize,
    pub ascii: usize,
    pub foreign_exact: usize,
    pub foreign_prefixes: usize,
    pub foreign_combinations: usize,
    pub combination_exceptions: usize,
    pub digraphs: usize,
    pub digraph_exceptions: usize,
}

impl LinguisticData {
    pub fn from_toml(toml_str: &str) -> Result<Self, DataError> {
        parse_data_toml(toml_str)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn cyrillic_to_latin(&self) -> &SubstitutionTable {
        &self.cyrillic_to_latin
    }

    pub fn latin_to_cyrillic(&self) -> &SubstitutionTable {
        &self.latin_to_cyrillic
    }

    pub fn normalization(&self) -> &SubstitutionTable {
        &self.normalization
    }

    pub fn ascii(&self) -> &SubstitutionTable {
        &self.ascii
    }

    pub fn foreign(&self) -> &ForeignWordRules {
        &self.foreign
    }

    pub fn digraphs(&self) -> &DigraphRules {
        &self.digraphs
    }

    pub fn summary(&self) -> DataSummary {
        DataSummary {
            version: self.version,
            letters: self.letter_count,
            normalization: self.normalization.len(),
            ascii: self.ascii.len(),
            foreign_exact: self.foreign.exact_len(),
            foreign_prefixes: self.foreign.prefixes().len(),
            foreign_combinations: self.foreign.combinations().len(),
            combination_exceptions: self.foreign.combination_exceptions().len(),
            digraphs: self.digraphs.len(),
            digraph_exceptions: self
                .digraphs
                .rules()
                .iter()
                .map(|r| r.exceptions().len())
                .sum(),
        }
    }
}
