//! Leading directive scanning and base IRI extraction
//!
//! A Turtle-family mapping document declares its base namespace in the
//! directive block at the top of the file (`@base <...> .`). The scanner
//! reads only that block and stops for good at the first content line, so
//! the base IRI can be recovered without a full grammar parse.

use regex::Regex;
use std::io::{BufRead, Cursor};
use std::sync::LazyLock;

use crate::Result;

/// Capture pattern for `@base <IRI>` declarations
static BASE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@base\s*<([^<>]*)>").expect("base directive pattern is valid")
});

/// Scan the leading directive lines of a document stream.
///
/// Lines are trimmed and blank lines are skipped. The scan terminates for
/// good at the first non-blank line that does not start with `@`: that line
/// is not consumed into the result and no later line is inspected, even if
/// it looks like a declaration. Of the directive lines themselves only
/// those containing `@base` are collected; `@prefix` and other
/// declarations are read past.
pub fn scan_leading_directives<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut directives = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !trimmed.starts_with('@') {
            break;
        }
        if trimmed.contains("@base") {
            directives.push(trimmed.to_string());
        }
    }
    Ok(directives)
}

/// Extract the declared base IRI from scanned directive lines.
///
/// Lines are inspected in document order and the first `@base <...>`
/// capture wins; content after the closing `>` is ignored. Returns the
/// empty string when no line declares a base. The captured string is not
/// validated as an IRI here; that check is
/// [`Uri::parse`](crate::model::Uri::parse).
pub fn extract_base_uri(lines: &[String]) -> String {
    lines
        .iter()
        .find_map(|line| BASE_DIRECTIVE.captures(line))
        .and_then(|captures| captures.get(1))
        .map(|base| base.as_str().to_string())
        .unwrap_or_default()
}

/// Extract the base IRI straight from a document stream.
///
/// The stream is consumed up to the end of the directive block; the caller
/// keeps ownership of its lifecycle (see
/// [`with_resource`](crate::scoped::with_resource) for scoped release).
pub fn extract_base_uri_from_reader<R: BufRead>(reader: R) -> Result<String> {
    Ok(extract_base_uri(&scan_leading_directives(reader)?))
}

/// Extract the base IRI from an in-memory document
pub fn extract_base_uri_from_str(document: &str) -> Result<String> {
    extract_base_uri_from_reader(Cursor::new(document.as_bytes()))
}
