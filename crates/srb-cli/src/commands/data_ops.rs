use std::fs;

use srb_core::data::{self, DataSummary};
use srb_core::LinguisticData;
use tracing::debug;

use crate::CliError;

fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Install the data file at `path` in place of the embedded tables.
pub fn load_custom_data(path: &str) -> Result<(), CliError> {
    let content = read_file(path)?;
    data::init_custom(content)?;
    debug!(path, "custom linguistic data installed");
    Ok(())
}

pub fn data_export() -> Result<(), CliError> {
    print!("{}", data::default_toml());
    Ok(())
}

pub fn data_validate(path: &str) -> Result<DataSummary, CliError> {
    let content = read_file(path)?;
    Ok(LinguisticData::from_toml(&content)?.summary())
}

pub fn format_summary(s: &DataSummary) -> String {
    format!(
        "OK: version {}, {} letters, {} normalization, {} ascii, \
         foreign {}/{}/{}/{} (exact/prefix/combination/exception), \
         {} digraphs with {} exceptions",
        s.version,
        s.letters,
        s.normalization,
        s.ascii,
        s.foreign_exact,
        s.foreign_prefixes,
        s.foreign_combinations,
        s.combination_exceptions,
        s.digraphs,
        s.digraph_exceptions,
    )
}

pub fn validate_cmd(path: &str, json: bool) -> Result<(), CliError> {
    let summary = data_validate(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", format_summary(&summary));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_default_data() {
        let file = write_temp(data::default_toml());
        let summary = data_validate(file.path().to_str().unwrap()).unwrap();
        assert_eq!(summary, data::global().summary());
        assert!(format_summary(&summary).starts_with("OK: version 1, 60 letters"));
    }

    #[test]
    fn test_validate_invalid_data() {
        let file = write_temp("[letters]\n");
        let err = data_validate(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Data(_)));
    }

    #[test]
    fn test_validate_missing_file() {
        let err = data_validate("/nonexistent/srb-data.toml").unwrap_err();
        match err {
            CliError::Read { path, .. } => assert_eq!(path, "/nonexistent/srb-data.toml"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
