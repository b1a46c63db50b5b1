use std::io::{self, Write};

use srb_core::explain::{explain_cyrillic, ExplainResult, ExplainWord};
use srb_core::foreign::ForeignVerdict;

use crate::CliError;

pub fn explain_cmd(text: &str, json: bool) -> Result<(), CliError> {
    let result = explain_cyrillic(srb_core::data::global(), text);
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
    } else {
        write_report(&result, &mut out)?;
    }
    Ok(())
}

fn reason(word: &ExplainWord<'_>) -> String {
    let verdict = match word.verdict {
        ForeignVerdict::Exact { word } => format!("foreign (exact \"{word}\")"),
        ForeignVerdict::Prefix { prefix } => format!("foreign (prefix \"{prefix}\")"),
        ForeignVerdict::Combination { combination } => {
            format!("foreign (contains \"{combination}\")")
        }
        ForeignVerdict::Excepted {
            combination,
            exception,
        } => format!("domestic (\"{combination}\" allowed by \"{exception}\")"),
        ForeignVerdict::Domestic => "domestic".to_string(),
    };
    match word.split {
        Some(split) => format!(
            "{verdict}, split \"{}\" (\"{}\")",
            split.digraph, split.exception
        ),
        None => verdict,
    }
}

pub fn write_report<W: Write>(result: &ExplainResult<'_>, w: &mut W) -> io::Result<()> {
    for word in &result.words {
        writeln!(w, "{:<20} {:<20} {}", word.word, word.output, reason(word))?;
    }
    writeln!(w, "=> {}", result.output)
}
