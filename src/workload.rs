//! This module provides the four word-frequency workloads.
//!
//! Each workload is split into an untimed setup step and a timed region. The
//! timed region is exactly one call to [`insert`], [`lookup`], [`update`], or
//! [`delete`]; a benchmark driver repeats that call.

use core::fmt;
use core::hint::black_box;
use tracing::debug;

use crate::table::Table;

/// Builds a table holding the number of occurrences of each word.
///
/// This is the untimed setup shared by the lookup, update, and delete
/// workloads.

pub fn count<T: Table>(words: &[String]) -> T {
  let t = insert::<T>(words);
  debug!(words = words.len(), distinct = t.len(), "counted words");
  return t;
}

/// Insert workload: builds a fresh table counting each word.

#[inline(never)]
pub fn insert<T: Table>(words: &[String]) -> T {
  let mut t = T::new();
  for w in words { t.bump(w); }
  return t;
}

/// Lookup workload: reads the count of every word.
///
/// Returns the sum of the counts read, so the reads are observable.

#[inline(never)]
pub fn lookup<T: Table>(t: &T, words: &[String]) -> u64 {
  let mut sum = 0u64;
  for w in words { sum = sum.wrapping_add(black_box(t.get(w))); }
  return sum;
}

/// Update workload: overwrites every word's entry with its length.

#[inline(never)]
pub fn update<T: Table>(t: &mut T, words: &[String]) {
  for w in words { t.set(w, w.len() as u64); }
}

/// Delete workload: removes every word.
///
/// Only the first run against a table removes anything. Later runs delete
/// absent words, which is part of what this workload measures.

#[inline(never)]
pub fn delete<T: Table>(t: &mut T, words: &[String]) {
  for w in words { t.remove(w); }
}

/// Names one of the four workloads.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Workload {
  Insert,
  Lookup,
  Update,
  Delete,
}

impl Workload {
  pub const ALL: [Self; 4] = [Self::Insert, Self::Lookup, Self::Update, Self::Delete];

  #[must_use]
  pub fn name(self) -> &'static str {
    return match self {
      Self::Insert => "insert",
      Self::Lookup => "lookup",
      Self::Update => "update",
      Self::Delete => "delete",
    };
  }

  /// Performs the untimed setup: an empty table for the insert workload and
  /// a counted table for the others.

  pub fn setup<T: Table>(self, words: &[String]) -> T {
    return match self {
      Self::Insert => T::new(),
      Self::Lookup | Self::Update | Self::Delete => count(words),
    };
  }

  /// Runs the timed region once against `t`.
  ///
  /// The insert workload replaces `t` with the table it builds. Returns the
  /// lookup sum for the lookup workload and the table length otherwise.

  pub fn run<T: Table>(self, t: &mut T, words: &[String]) -> u64 {
    match self {
      Self::Insert => *t = insert(words),
      Self::Lookup => return lookup(t, words),
      Self::Update => update(t, words),
      Self::Delete => delete(t, words),
    }
    return t.len() as u64;
  }
}

impl fmt::Display for Workload {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    return f.write_str(self.name());
  }
}
