//! Core value types for mapping ingestion

use oxiri::IriRef;
use std::fmt;
use std::path::Path;

use crate::{Result, RmlError};

/// An opaque resource identifier, absolute or relative.
///
/// A `Uri` is an immutable value: once the resolver has taken its absolute
/// branch for one, the identifier is never re-resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    /// Create a `Uri`, validating IRI-reference syntax.
    ///
    /// Only syntax is checked; reachability and scheme support are out of
    /// scope for this crate.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        IriRef::parse(value.as_str())
            .map_err(|e| RmlError::InvalidIri(format!("{value}: {e}")))?;
        Ok(Self(value))
    }

    /// Create a `Uri` without syntax validation.
    ///
    /// Intended for tokens that are known-good or that name filesystem
    /// paths rather than IRIs.
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Check IRI-reference syntax without constructing a `Uri`
    pub fn is_valid(value: &str) -> bool {
        IriRef::parse(value).is_ok()
    }

    /// Whether the string form names an absolute filesystem path.
    ///
    /// This is the property the resolver branches on: absolute identifiers
    /// are opened directly, relative ones go through the search root.
    pub fn is_absolute(&self) -> bool {
        Path::new(&self.0).is_absolute()
    }

    /// The raw string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
