//! Immutable multimap dictionaries over LOUDS tries.
//!
//! Two flavors share the same construction and lookup contract:
//!
//! - [`Dictionary`] maps strings to string lists. Keys and values each live
//!   in their own trie; the association table stores value *node numbers*,
//!   so repeated values cost one trie path plus one integer per occurrence.
//! - [`ValueDictionary`] maps strings to lists of an arbitrary value type,
//!   storing the values directly against the key trie.
//!
//! Both are build-once / read-many: construction takes parallel `keys` and
//! `values` slices, lookup returns every value stored under a key in
//! insertion order, and [`Keys`] enumerates stored keys lazily in trie
//! breadth-first order.

use std::ops::Index;

use crate::error::{Error, Result};
use crate::word_map::WordMap;

/// Grow `slots` so that `node` is a valid index, then append to it.
fn push_slot<T>(slots: &mut Vec<Vec<T>>, node: usize, value: T) {
    if slots.len() <= node {
        slots.resize_with(node + 1, Vec::new);
    }
    slots[node].push(value);
}

/// A compact immutable multimap from strings to string lists.
#[derive(Debug, Clone)]
pub struct Dictionary {
    keys: WordMap,
    values: WordMap,
    /// Value node numbers, indexed by key node number.
    value_nodes: Vec<Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary associating `keys[i]` with `values[i]`.
    ///
    /// Fails if the slices differ in length or contain an empty string.
    /// Duplicate `(key, value)` pairs are preserved and `lookup` yields
    /// them as often as they were inserted.
    pub fn new<K: AsRef<str>, V: AsRef<str>>(keys: &[K], values: &[V]) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(Error::InvalidInput(format!(
                "{} keys but {} values",
                keys.len(),
                values.len()
            )));
        }
        let key_map = WordMap::new(keys)?;
        let value_map = WordMap::new(values)?;

        let mut value_nodes = Vec::new();
        for (key, value) in keys.iter().zip(values) {
            let k = key_map.node_number(key.as_ref())?;
            let v = value_map.node_number(value.as_ref())?;
            push_slot(&mut value_nodes, k, v);
        }

        Ok(Self {
            keys: key_map,
            values: value_map,
            value_nodes,
        })
    }

    /// Return every value stored under `key`, in insertion order.
    ///
    /// Fails with [`Error::KeyAbsent`] when `key` is not stored with at
    /// least one value; a pure prefix of stored keys terminates at a node
    /// with an empty slot and is reported absent.
    pub fn lookup(&self, key: &str) -> Result<Vec<String>> {
        let node = self.keys.node_number(key)?;
        let slot = self
            .value_nodes
            .get(node)
            .filter(|slot| !slot.is_empty())
            .ok_or_else(|| Error::KeyAbsent(key.to_string()))?;
        slot.iter().map(|&v| self.values.word(v)).collect()
    }

    /// Return true if `key` is stored with at least one value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys
            .node_number(key)
            .is_ok_and(|node| self.value_nodes.get(node).is_some_and(|s| !s.is_empty()))
    }

    /// Lazily enumerate the stored keys in trie breadth-first order.
    pub fn keys(&self) -> Keys<'_, usize> {
        Keys::new(&self.keys, &self.value_nodes)
    }

    /// Number of distinct keys stored with at least one value.
    pub fn len(&self) -> usize {
        self.value_nodes.iter().filter(|s| !s.is_empty()).count()
    }

    /// Return true if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.value_nodes.iter().all(Vec::is_empty)
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.keys.heap_bytes()
            + self.values.heap_bytes()
            + self
                .value_nodes
                .iter()
                .map(|s| s.capacity() * std::mem::size_of::<usize>())
                .sum::<usize>()
    }
}

/// A compact immutable multimap from strings to lists of `V`.
#[derive(Debug, Clone)]
pub struct ValueDictionary<V> {
    keys: WordMap,
    /// Values, indexed by key node number.
    slots: Vec<Vec<V>>,
}

impl<V: Clone> ValueDictionary<V> {
    /// Build a dictionary associating `keys[i]` with `values[i]`.
    ///
    /// Fails if the slices differ in length or any key is empty.
    pub fn new<K: AsRef<str>>(keys: &[K], values: &[V]) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(Error::InvalidInput(format!(
                "{} keys but {} values",
                keys.len(),
                values.len()
            )));
        }
        let key_map = WordMap::new(keys)?;

        let mut slots = Vec::new();
        for (key, value) in keys.iter().zip(values) {
            let k = key_map.node_number(key.as_ref())?;
            push_slot(&mut slots, k, value.clone());
        }

        Ok(Self {
            keys: key_map,
            slots,
        })
    }

    /// Return clones of every value stored under `key`, in insertion order.
    pub fn lookup(&self, key: &str) -> Result<Vec<V>> {
        Ok(self.get(key)?.to_vec())
    }
}

impl<V> ValueDictionary<V> {
    /// Borrow the values stored under `key`, in insertion order.
    ///
    /// Fails with [`Error::KeyAbsent`] when `key` is not stored with at
    /// least one value.
    pub fn get(&self, key: &str) -> Result<&[V]> {
        let node = self.keys.node_number(key)?;
        self.slots
            .get(node)
            .filter(|slot| !slot.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| Error::KeyAbsent(key.to_string()))
    }

    /// Return true if `key` is stored with at least one value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Lazily enumerate the stored keys in trie breadth-first order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(&self.keys, &self.slots)
    }

    /// Number of distinct keys stored with at least one value.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Return true if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

impl<V> Index<&str> for ValueDictionary<V> {
    type Output = [V];

    /// Synonym for [`ValueDictionary::get`]; panics on an absent key.
    fn index(&self, key: &str) -> &[V] {
        match self.get(key) {
            Ok(slot) => slot,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Lazy iterator over the keys of a dictionary.
///
/// Scans the association table for non-empty slots and reconstructs each
/// key from its node number. Keys come out in trie breadth-first order:
/// shorter keys before longer ones, code-unit order within a level.
pub struct Keys<'a, T> {
    words: &'a WordMap,
    slots: std::iter::Enumerate<std::slice::Iter<'a, Vec<T>>>,
}

impl<'a, T> Keys<'a, T> {
    fn new(words: &'a WordMap, slots: &'a [Vec<T>]) -> Self {
        Self {
            words,
            slots: slots.iter().enumerate(),
        }
    }
}

impl<T> Iterator for Keys<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let (node, slot) = self.slots.next()?;
            if !slot.is_empty() {
                return Some(
                    self.words
                        .word(node)
                        .expect("occupied slot index is a valid node"),
                );
            }
        }
    }
}
