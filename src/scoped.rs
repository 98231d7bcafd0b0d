//! Scoped resource acquisition with guaranteed release
//!
//! Stream-consuming steps acquire a resource, run a body over it, and must
//! release it on every exit path. Release failures surface as domain read
//! failures; a body failure that preceded one is kept as the cause rather
//! than discarded.

use std::fs::File;
use std::io::{self, BufReader, Read};

use crate::{Result, RmlError};

/// A resource with an explicit release step
pub trait ReleasableResource {
    /// Release the resource. Called exactly once by [`with_resource`].
    fn release(&mut self) -> io::Result<()>;
}

impl ReleasableResource for File {
    fn release(&mut self) -> io::Result<()> {
        // Closing happens on drop; a reader has nothing left to flush.
        Ok(())
    }
}

impl<R: ReleasableResource + Read> ReleasableResource for BufReader<R> {
    fn release(&mut self) -> io::Result<()> {
        self.get_mut().release()
    }
}

/// Run `body` over `resource`, releasing the resource on every exit path.
///
/// The body runs exactly once and the release runs exactly once, whether
/// the body returns or fails; side effects the body performed before a
/// failure remain observable afterwards. When the release itself fails the
/// caller observes a [`RmlError::Read`]; a body failure that also occurred
/// is preserved as its source instead of being dropped.
pub fn with_resource<R, T, F>(mut resource: R, body: F) -> Result<T>
where
    R: ReleasableResource,
    F: FnOnce(&mut R) -> Result<T>,
{
    let outcome = body(&mut resource);
    let released = resource.release();
    match (outcome, released) {
        (outcome, Ok(())) => outcome,
        (Ok(_), Err(close)) => Err(RmlError::read(format!(
            "failed to release resource: {close}"
        ))),
        (Err(failure), Err(close)) => Err(RmlError::read_with_cause(
            format!("failed to release resource: {close}"),
            failure,
        )),
    }
}
