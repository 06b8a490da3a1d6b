//! This module provides the frequency tables under measurement.
//!
//! A frequency table maps a word to a `u64`. The [`Table`] trait is a thin
//! layer over general-purpose hash maps so that one workload runs unchanged
//! against each of them. Every operation is total: reading an absent word
//! yields zero and removing one does nothing.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// The standard library hash map.

pub type StdTable = HashMap<String, u64>;

/// A hash map using `foldhash`.

pub type FoldTable = foldhash::HashMap<String, u64>;

/// A hash map using `ahash`.

pub type AhashTable = ahash::AHashMap<String, u64>;

pub trait Table {
  fn new() -> Self;

  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    return self.len() == 0;
  }

  /// Adds one to the count for `word`, starting from zero.

  fn bump(&mut self, word: &str);

  /// Returns the value for `word`, or zero if absent.

  fn get(&self, word: &str) -> u64;

  fn set(&mut self, word: &str, value: u64);

  fn remove(&mut self, word: &str);
}

// NB: The owned key is only allocated when a word is first inserted.

impl<S: BuildHasher + Default> Table for HashMap<String, u64, S> {
  #[inline(always)]
  fn new() -> Self { HashMap::default() }

  #[inline(always)]
  fn len(&self) -> usize { HashMap::len(self) }

  #[inline(always)]
  fn bump(&mut self, word: &str) {
    match HashMap::get_mut(self, word) {
      Some(n) => *n += 1,
      None => { let _: Option<_> = HashMap::insert(self, word.to_owned(), 1); }
    }
  }

  #[inline(always)]
  fn get(&self, word: &str) -> u64 {
    return HashMap::get(self, word).copied().unwrap_or(0);
  }

  #[inline(always)]
  fn set(&mut self, word: &str, value: u64) {
    match HashMap::get_mut(self, word) {
      Some(n) => *n = value,
      None => { let _: Option<_> = HashMap::insert(self, word.to_owned(), value); }
    }
  }

  #[inline(always)]
  fn remove(&mut self, word: &str) { let _: Option<_> = HashMap::remove(self, word); }
}

impl Table for AhashTable {
  #[inline(always)]
  fn new() -> Self { ahash::AHashMap::new() }

  #[inline(always)]
  fn len(&self) -> usize { Table::len(&**self) }

  #[inline(always)]
  fn bump(&mut self, word: &str) { Table::bump(&mut **self, word); }

  #[inline(always)]
  fn get(&self, word: &str) -> u64 { Table::get(&**self, word) }

  #[inline(always)]
  fn set(&mut self, word: &str, value: u64) { Table::set(&mut **self, word, value); }

  #[inline(always)]
  fn remove(&mut self, word: &str) { Table::remove(&mut **self, word); }
}
