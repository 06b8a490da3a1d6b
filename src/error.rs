//! The error type for loading a corpus.

use std::io;
use std::path::PathBuf;

/// The only way a benchmark run can fail: its input could not be read.
///
/// This covers a missing file, a file that cannot be opened, and an I/O
/// fault part way through reading. None of these are recovered from.

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("input unavailable: {}: {source}", .path.display())]
  InputUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl Error {
  #[inline(always)]
  pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
    return Self::InputUnavailable { path: path.into(), source };
  }

  /// Returns the path of the input that could not be read.

  #[must_use]
  pub fn path(&self) -> &std::path::Path {
    match self {
      Self::InputUnavailable { path, .. } => return path,
    }
  }
}
