//! Mapping document loading
//!
//! The loader is pure orchestration: it resolves the document reference,
//! sniffs the serialization format from the file name, recovers the
//! declared base IRI from the head of the stream, and hands everything to
//! the external grammar parser and normalizer behind the trait seams below.

use std::io::BufReader;
use std::path::PathBuf;

use crate::directive::extract_base_uri_from_reader;
use crate::format::{detect_format, RdfFormat};
use crate::model::Uri;
use crate::resolve::{resolve, ResolvedResource, SearchRoot};
use crate::scoped::with_resource;
use crate::{Result, RmlError};

/// External grammar parser contract.
///
/// Reads a resolved mapping document into the raw mapping model. A parse
/// rejection is propagated by the loader untouched.
pub trait MappingDocumentParser {
    /// Raw mapping model produced by the grammar parser
    type Raw;

    /// Read a mapping document
    fn read(
        &self,
        source: &ResolvedResource,
        base_iri: &str,
        format: Option<RdfFormat>,
    ) -> Result<Self::Raw>;
}

/// External normalization contract, turning the raw mapping model into the
/// form the execution engine consumes
pub trait MappingNormalizer<R> {
    /// Normalized mapping model
    type Normalized;

    /// Normalize a raw mapping
    fn normalize(&self, raw: R) -> Result<Self::Normalized>;
}

/// Loader for mapping documents
///
/// ```rust,ignore
/// let loader = MappingLoader::new(parser, normalizer)
///     .with_search_root(DirSearchRoot::new("/etc/mappings"));
/// let mapping = loader.load("people.ttl")?;
/// ```
pub struct MappingLoader<P, N> {
    parser: P,
    normalizer: N,
    search_root: Option<Box<dyn SearchRoot>>,
}

impl<P, N> MappingLoader<P, N>
where
    P: MappingDocumentParser,
    N: MappingNormalizer<P::Raw>,
{
    /// Create a loader over the given parser and normalizer
    pub fn new(parser: P, normalizer: N) -> Self {
        Self {
            parser,
            normalizer,
            search_root: None,
        }
    }

    /// Set the search root relative mapping references resolve against
    pub fn with_search_root(mut self, search_root: impl SearchRoot + 'static) -> Self {
        self.search_root = Some(Box::new(search_root));
        self
    }

    /// Load and normalize the mapping document at `path`.
    ///
    /// Fails with [`RmlError::NotFound`] when the path resolves to no
    /// existing resource and with [`RmlError::Parse`] when the grammar
    /// parser rejects the content.
    pub fn load(&self, path: &str) -> Result<N::Normalized> {
        tracing::debug!("loading mapping document from {path}");
        let uri = Uri::new_unchecked(path);
        let resource = self.resolve_document(&uri)?;
        let format = detect_format(path);
        let base_iri = with_resource(BufReader::new(resource.open()?), |reader| {
            extract_base_uri_from_reader(reader)
        })?;
        tracing::debug!("detected format {format:?}, base IRI {base_iri:?} for {path}");
        let raw = self.parser.read(&resource, &base_iri, format)?;
        self.normalizer.normalize(raw)
    }

    fn resolve_document(&self, uri: &Uri) -> Result<ResolvedResource> {
        match &self.search_root {
            Some(root) => resolve(uri, root.as_ref()),
            None if uri.is_absolute() => resolve(uri, &NoSearchRoot),
            None => Err(RmlError::NotFound(uri.as_str().to_string())),
        }
    }
}

/// Search root that locates nothing, for absolute-only loaders
struct NoSearchRoot;

impl SearchRoot for NoSearchRoot {
    fn locate(&self, _token: &str) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnreachableParser;

    impl MappingDocumentParser for UnreachableParser {
        type Raw = ();

        fn read(
            &self,
            _source: &ResolvedResource,
            _base_iri: &str,
            _format: Option<RdfFormat>,
        ) -> Result<()> {
            panic!("parser must not run for unresolved documents");
        }
    }

    struct IdentityNormalizer;

    impl MappingNormalizer<()> for IdentityNormalizer {
        type Normalized = ();

        fn normalize(&self, raw: ()) -> Result<()> {
            Ok(raw)
        }
    }

    #[test]
    fn test_relative_path_without_search_root_is_not_found() {
        let loader = MappingLoader::new(UnreachableParser, IdentityNormalizer);
        let err = loader.load("mapping.ttl").unwrap_err();
        match err {
            RmlError::NotFound(token) => assert_eq!(token, "mapping.ttl"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_absolute_path_is_not_found() {
        let loader = MappingLoader::new(UnreachableParser, IdentityNormalizer);
        let err = loader.load("/definitely/not/here.ttl").unwrap_err();
        assert!(matches!(err, RmlError::NotFound(_)));
    }
}
