//! # OxiRS RML
//!
//! Ingestion front-end for RML mapping documents - the boundary between raw
//! bytes on disk and the parsed mapping model.
//!
//! Before a mapping document can be handed to the grammar parser, the
//! surrounding system needs a handful of small, detail-sensitive steps:
//!
//! - BCP-47 language tag validation for language-tagged literals
//! - Serialization format sniffing from file names
//! - Base IRI detection from the leading `@`-directive lines
//! - Resolution of mapping references against a search root
//!
//! This crate provides exactly those steps. The grammar parser and the
//! triple-generation engine are external collaborators reached through the
//! trait seams in [`loader`].
//!
//! ## Examples
//!
//! ```rust
//! use oxirs_rml::format::{detect_format, RdfFormat};
//! use oxirs_rml::language::is_valid_language_tag;
//!
//! assert_eq!(detect_format("mapping.ttl"), Some(RdfFormat::Turtle));
//! assert!(is_valid_language_tag("en-GB"));
//! ```

pub mod directive;
pub mod format;
pub mod language;
pub mod loader;
pub mod model;
pub mod resolve;
pub mod scoped;

pub use format::{detect_format, RdfFormat};
pub use language::is_valid_language_tag;
pub use loader::{MappingDocumentParser, MappingLoader, MappingNormalizer};
pub use model::Uri;
pub use resolve::{resolve, DirSearchRoot, FileSource, ResolvedResource, SearchRoot};
pub use scoped::{with_resource, ReleasableResource};

/// Core error type for mapping ingestion operations
#[derive(Debug, thiserror::Error)]
pub enum RmlError {
    /// A resource token resolved to nothing on either the absolute or the
    /// search-root branch; carries the original token for diagnostics
    #[error("mapping resource not found: {0}")]
    NotFound(String),
    /// Failure while reading or releasing a mapping source
    #[error("failed to read mapping source: {message}")]
    Read {
        /// What went wrong while reading or releasing
        message: String,
        /// Failure from the consuming body, when the release also failed
        #[source]
        cause: Option<Box<RmlError>>,
    },
    /// The mapping grammar parser rejected the document content
    #[error("failed to parse mapping document: {0}")]
    Parse(String),
    /// An IRI failed syntactic validation
    #[error("invalid IRI: {0}")]
    InvalidIri(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RmlError {
    /// Create a read failure
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a read failure preserving an earlier failure as its cause
    pub fn read_with_cause(message: impl Into<String>, cause: RmlError) -> Self {
        Self::Read {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Create a parse failure
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Result type alias for mapping ingestion operations
pub type Result<T> = std::result::Result<T, RmlError>;

/// Version information for OxiRS RML
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize OxiRS RML with default configuration
pub fn init() -> Result<()> {
    tracing::info!("Initializing OxiRS RML v{}", VERSION);
    Ok(())
}
