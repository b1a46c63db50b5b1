use serde::Serialize;

use crate::data::LinguisticData;
use crate::digraph::DigraphSplit;
use crate::foreign::ForeignVerdict;
use crate::script::{Transliterator, WORD_SEPARATOR};

/// Per-word diagnostics for a Latin -> Cyrillic conversion.
#[derive(Debug, Serialize)]
pub struct ExplainResult<'d> {
    pub input: String,
    pub normalized: String,
    pub words: Vec<ExplainWord<'d>>,
    /// Same as `to_cyrillic(input)`.
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainWord<'d> {
    pub word: String,
    #[serde(flatten)]
    pub verdict: ForeignVerdict<'d>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<DigraphSplit<'d>>,
    pub output: String,
}

impl ExplainWord<'_> {
    pub fn is_foreign(&self) -> bool {
        self.verdict.is_foreign()
    }
}

pub fn explain_cyrillic<'d>(data: &'d LinguisticData, text: &str) -> ExplainResult<'d> {
    let tr = Transliterator::new(data);
    let normalized = tr.normalize(text);

    let words: Vec<ExplainWord<'d>> = normalized
        .split(WORD_SEPARATOR)
        .map(|word| {
            let verdict = data.foreign().classify(word);
            let split = if verdict.is_foreign() {
                None
            } else {
                data.digraphs().find_split(word)
            };
            ExplainWord {
                word: word.to_string(),
                verdict,
                split,
                output: tr.word_to_cyrillic(word).into_owned(),
            }
        })
        .collect();

    let output = words
        .iter()
        .map(|w| w.output.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    ExplainResult {
        input: text.to_string(),
        normalized,
        words,
        output,
    }
}
