//! Serialization format detection for mapping documents
//!
//! A mapping document's format is sniffed from its file name suffix; the
//! content itself is never inspected here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialization formats a mapping document can arrive in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RdfFormat {
    /// Turtle format (TTL)
    Turtle,
    /// N-Triples format (NT)
    NTriples,
    /// N-Quads format
    NQuads,
    /// JSON-LD format
    JsonLd,
}

impl RdfFormat {
    /// Detect format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "ttl" => Some(RdfFormat::Turtle),
            "nt" => Some(RdfFormat::NTriples),
            "nq" => Some(RdfFormat::NQuads),
            "json" | "json-ld" => Some(RdfFormat::JsonLd),
            _ => None,
        }
    }

    /// Get the media type for this format
    pub fn media_type(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::NTriples => "application/n-triples",
            RdfFormat::NQuads => "application/n-quads",
            RdfFormat::JsonLd => "application/ld+json",
        }
    }

    /// Get the canonical file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
            RdfFormat::NQuads => "nq",
            RdfFormat::JsonLd => "json-ld",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RdfFormat::Turtle => "Turtle",
            RdfFormat::NTriples => "N-Triples",
            RdfFormat::NQuads => "N-Quads",
            RdfFormat::JsonLd => "JSON-LD",
        };
        f.write_str(name)
    }
}

/// Detect the serialization format of a file from its name.
///
/// The suffix after the last `.` decides, case-insensitively. A name with
/// no `.` at all yields `None` rather than an error, as does an
/// unrecognized suffix.
pub fn detect_format(file_name: &str) -> Option<RdfFormat> {
    let (_, ext) = file_name.rsplit_once('.')?;
    RdfFormat::from_extension(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_suffixes() {
        assert_eq!(detect_format("mapping.ttl"), Some(RdfFormat::Turtle));
        assert_eq!(detect_format("dump.nt"), Some(RdfFormat::NTriples));
        assert_eq!(detect_format("dump.nq"), Some(RdfFormat::NQuads));
        assert_eq!(detect_format("mapping.json"), Some(RdfFormat::JsonLd));
        assert_eq!(detect_format("mapping.json-ld"), Some(RdfFormat::JsonLd));
    }

    #[test]
    fn test_suffix_matching_is_case_insensitive() {
        assert_eq!(detect_format("data.TTL"), Some(RdfFormat::Turtle));
        assert_eq!(detect_format("DATA.Json"), Some(RdfFormat::JsonLd));
    }

    #[test]
    fn test_unrecognized_suffix_is_none() {
        assert_eq!(detect_format("data.xml"), None);
        assert_eq!(detect_format("archive.tar.gz"), None);
    }

    #[test]
    fn test_missing_suffix_is_none() {
        assert_eq!(detect_format("mapping"), None);
        assert_eq!(detect_format(""), None);
    }

    #[test]
    fn test_only_last_suffix_counts() {
        assert_eq!(detect_format("backup.ttl.old"), None);
        assert_eq!(detect_format("export.old.ttl"), Some(RdfFormat::Turtle));
    }

    #[test]
    fn test_media_type_and_extension() {
        assert_eq!(RdfFormat::Turtle.media_type(), "text/turtle");
        assert_eq!(RdfFormat::JsonLd.extension(), "json-ld");
        assert_eq!(RdfFormat::NQuads.to_string(), "N-Quads");
    }
}
