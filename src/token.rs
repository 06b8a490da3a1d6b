//! This module splits text into lowercase alphanumeric words.
//!
//! A word is a maximal run of ASCII letters and digits. Everything else,
//! including every non-ASCII character, separates words. Since each byte of a
//! multi-byte UTF-8 sequence is at least `0x80`, the scanner works on bytes
//! and never needs to decode.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::mem::take;
use std::path::Path;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::error::Error;

#[inline(always)]
fn is_word_byte(b: u8) -> bool {
  return b.is_ascii_alphanumeric();
}

/// An incremental tokenizer.
///
/// Input is fed in arbitrary chunks with [`Tokenizer::push`]; a word may
/// span any number of chunks. Case folding happens once per completed word.

#[derive(Debug, Default)]
pub struct Tokenizer {
  word: String,
  tokens: Vec<String>,
}

impl Tokenizer {
  /// Creates a tokenizer with no pending input.

  #[must_use]
  pub fn new() -> Self {
    return Self { word: String::new(), tokens: Vec::new() };
  }

  /// Scans the next chunk of input.

  pub fn push(&mut self, chunk: &[u8]) {
    let mut rest = chunk;

    while !rest.is_empty() {
      let n = rest.iter().position(|&b| !is_word_byte(b)).unwrap_or(rest.len());

      self.word.extend(rest[.. n].iter().map(|&b| b as char));

      if n == rest.len() { break; }

      self.emit();
      rest = &rest[n + 1 ..];
    }
  }

  #[inline(always)]
  fn emit(&mut self) {
    if self.word.is_empty() { return; }

    let mut word = take(&mut self.word);
    word.make_ascii_lowercase();
    self.tokens.push(word);
  }

  /// Returns the number of words completed so far.

  #[must_use]
  pub fn len(&self) -> usize {
    return self.tokens.len();
  }

  /// Returns whether no word has been completed yet.

  #[must_use]
  pub fn is_empty(&self) -> bool {
    return self.tokens.is_empty();
  }

  /// Flushes a trailing word, if any, and returns every word in input order.

  #[must_use]
  pub fn finish(mut self) -> Vec<String> {
    self.emit();
    return self.tokens;
  }
}

/// Splits `text` into words.

#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
  let mut t = Tokenizer::new();
  t.push(text.as_bytes());
  return t.finish();
}

/// Reads `reader` to the end and splits its contents into words.
///
/// A read error aborts the scan and nothing read so far is returned.

pub fn read_tokens(reader: impl Read) -> io::Result<Vec<String>> {
  let mut reader = BufReader::new(reader);
  let mut t = Tokenizer::new();

  loop {
    let chunk =
      match reader.fill_buf() {
        Ok(chunk) => chunk,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
        Err(e) => return Err(e),
      };

    if chunk.is_empty() { break; }

    let n = chunk.len();
    t.push(chunk);
    reader.consume(n);
  }

  let tokens = t.finish();
  debug!(tokens = tokens.len(), "tokenized input");
  return Ok(tokens);
}

/// Loads the corpus at `path` as a sequence of words.
///
/// The file is open only for the duration of this call.

pub fn load(path: &Path) -> Result<Vec<String>, Error> {
  let fail = |e: io::Error| {
    warn!(path = %path.display(), error = %e, "corpus unavailable");
    return Error::unavailable(path, e);
  };

  let file = File::open(path).map_err(fail)?;
  let tokens = read_tokens(file).map_err(fail)?;

  info!(path = %path.display(), tokens = tokens.len(), "loaded corpus");
  return Ok(tokens);
}
