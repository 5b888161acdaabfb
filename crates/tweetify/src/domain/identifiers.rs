//! Parsing of the generated `Ticker: ...` / `Name: ...` response

use crate::core::{LaunchError, LaunchResult, TokenIdentifiers};

const LABEL_DELIMITER: &str = ": ";

/// Extract ticker and name from the first two `label: value` lines.
///
/// Blank lines are skipped and lines after the second are ignored. The labels
/// themselves are not checked; position decides which value is which.
pub fn parse_identifiers(response: &str) -> LaunchResult<TokenIdentifiers> {
    let mut values = response
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(2)
        .map(value_of);

    let ticker = values
        .next()
        .ok_or_else(|| LaunchError::Parse("response has no ticker line".to_string()))??;
    let name = values
        .next()
        .ok_or_else(|| LaunchError::Parse("response has no name line".to_string()))??;

    Ok(TokenIdentifiers { ticker, name })
}

fn value_of(line: &str) -> LaunchResult<String> {
    let value = line
        .split(LABEL_DELIMITER)
        .nth(1)
        .map(str::trim)
        .ok_or_else(|| LaunchError::Parse(format!("missing '{}' in line {:?}", LABEL_DELIMITER, line)))?;

    if value.is_empty() {
        return Err(LaunchError::Parse(format!("empty value in line {:?}", line)));
    }
    Ok(value.to_string())
}
