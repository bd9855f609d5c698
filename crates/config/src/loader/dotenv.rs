//! `.env` file parsing.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` lines into ordered pairs.
//! - Strip quotes, comments, and an optional `export` keyword.
//!
//! Does NOT handle:
//! - Reading the file or deciding precedence (see `defaults.rs`).
//! - `${NAME}` references, which are kept verbatim for `interpolation::expand`.
//!
//! Invariants:
//! - Values are never substituted, so references may point at keys defined
//!   later in the file, in the process environment, or in overrides.
//! - Unquoted values end at the first `#` and are trimmed.
//! - Quoted values keep their inner whitespace; only double quotes process
//!   escape sequences (`\n`, `\r`, `\t`, `\"`, `\\`).
//! - Errors carry the 1-based line number only, never line content.

use super::error::ConfigError;

/// Parse `.env` content into `(name, value)` pairs in file order.
///
/// # Errors
///
/// Returns `ConfigError::DotenvParse` for a line without `=`, an invalid
/// variable name, an unterminated quote, or text after a closing quote.
pub fn parse(content: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let mut entries = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line
            .strip_prefix("export ")
            .map(str::trim_start)
            .unwrap_or(line);

        let Some((key, rest)) = line.split_once('=') else {
            return Err(ConfigError::DotenvParse { line: line_no });
        };

        let key = key.trim();
        if !is_valid_key(key) {
            return Err(ConfigError::DotenvParse { line: line_no });
        }

        let value = parse_value(rest.trim(), line_no)?;
        entries.push((key.to_string(), value));
    }

    Ok(entries)
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

fn parse_value(value: &str, line: usize) -> Result<String, ConfigError> {
    let quote = match value.chars().next() {
        Some(q @ ('"' | '\'' | '`')) => q,
        _ => {
            let unquoted = value.split('#').next().unwrap_or("");
            return Ok(unquoted.trim_end().to_string());
        }
    };

    let body = &value[1..];
    let end = find_closing(body, quote).ok_or(ConfigError::DotenvParse { line })?;

    let trailing = body[end + 1..].trim();
    if !trailing.is_empty() && !trailing.starts_with('#') {
        return Err(ConfigError::DotenvParse { line });
    }

    let inner = &body[..end];
    Ok(if quote == '"' {
        unescape_double_quoted(inner)
    } else {
        inner.to_string()
    })
}

/// Byte index of the closing quote. Backslash escapes apply inside double quotes only.
fn find_closing(body: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (idx, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' && quote == '"' {
            escaped = true;
        } else if c == quote {
            return Some(idx);
        }
    }
    None
}

fn unescape_double_quoted(inner: &str) -> String {
    let mut output = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => output.push('\n'),
            Some('r') => output.push('\r'),
            Some('t') => output.push('\t'),
            Some('"') => output.push('"'),
            Some('\\') => output.push('\\'),
            Some(other) => {
                output.push('\\');
                output.push(other);
            }
            None => output.push('\\'),
        }
    }
    output
}
