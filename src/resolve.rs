//! Resource resolution for mapping references
//!
//! A mapping reference names its document by absolute path or by a token
//! relative to a configured search root. Resolution is a pure lookup
//! against filesystem state at call time; a token matching neither branch
//! fails with [`RmlError::NotFound`] and is not retried.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::model::Uri;
use crate::{Result, RmlError};

/// Capability for looking up relative resource tokens.
///
/// Supplied by the embedding application; typically a resource directory
/// standing in for a classpath.
pub trait SearchRoot {
    /// Map a relative token to a located entry, or `None`
    fn locate(&self, token: &str) -> Option<PathBuf>;
}

/// Search root backed by a filesystem directory
#[derive(Debug, Clone)]
pub struct DirSearchRoot {
    base: PathBuf,
}

impl DirSearchRoot {
    /// Create a search root over `base`
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The directory tokens are resolved against
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl SearchRoot for DirSearchRoot {
    fn locate(&self, token: &str) -> Option<PathBuf> {
        let candidate = self.base.join(token);
        candidate.exists().then_some(candidate)
    }
}

/// A resolved, canonicalized resource location.
///
/// Owns no stream; it only identifies where one can be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    path: PathBuf,
}

impl ResolvedResource {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The canonical filesystem path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh byte stream over the resource
    pub fn open(&self) -> Result<File> {
        Ok(File::open(&self.path)?)
    }
}

/// Resolve a resource identifier to a concrete, openable location.
///
/// An absolute path is taken as-is and canonicalized, so downstream
/// consumers never re-interpret the original input; a relative token is
/// looked up against the search root. Either branch fails with
/// [`RmlError::NotFound`] carrying the original token when no existing
/// location is found.
pub fn resolve(uri: &Uri, search_root: &dyn SearchRoot) -> Result<ResolvedResource> {
    let token = uri.as_str();
    if uri.is_absolute() {
        tracing::debug!("resolving absolute mapping resource {token}");
        let canonical = Path::new(token)
            .canonicalize()
            .map_err(|_| RmlError::NotFound(token.to_string()))?;
        return Ok(ResolvedResource::new(canonical));
    }
    tracing::debug!("resolving {token} against the search root");
    let located = search_root
        .locate(token)
        .ok_or_else(|| RmlError::NotFound(token.to_string()))?;
    let canonical = located
        .canonicalize()
        .map_err(|_| RmlError::NotFound(token.to_string()))?;
    Ok(ResolvedResource::new(canonical))
}

/// A file-backed data source for a resolved reference.
///
/// Construction runs the same two-branch resolution as [`resolve`]; the
/// logic lives there and is not duplicated here.
#[derive(Debug, Clone)]
pub struct FileSource {
    resource: ResolvedResource,
}

impl FileSource {
    /// Build a file source from a resource identifier
    pub fn from_uri(uri: &Uri, search_root: &dyn SearchRoot) -> Result<Self> {
        Ok(Self {
            resource: resolve(uri, search_root)?,
        })
    }

    /// The resolved location backing this source
    pub fn resource(&self) -> &ResolvedResource {
        &self.resource
    }

    /// Open a buffered reader over the source
    pub fn reader(&self) -> Result<BufReader<File>> {
        Ok(BufReader::new(self.resource.open()?))
    }
}
