//! Word ↔ node-number map over a LOUDS-encoded trie.
//!
//! Resolves a word to the number of the node its path terminates at, and
//! reconstructs a word from a node number by walking parent links. Paths
//! carry no end-of-word flag, so a word that is a pure prefix of stored
//! words resolves to an internal node; the dictionary layer masks this by
//! keeping value lists only at nodes where a key actually ends.

use crate::bitvec::BitVector;
use crate::error::{Error, Result};
use crate::louds;

/// Bidirectional map between words and 1-based BFS node numbers.
#[derive(Debug, Clone)]
pub struct WordMap {
    bits: BitVector,
    labels: Vec<u16>,
}

impl WordMap {
    /// Build the map over `words`. Fails if any word is empty.
    pub fn new<W: AsRef<str>>(words: &[W]) -> Result<Self> {
        let mut encoded = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(Error::InvalidInput("empty word in input".to_string()));
            }
            encoded.push(word.encode_utf16().collect());
        }
        let (bits, labels) = louds::encode(&encoded);
        Ok(Self { bits, labels })
    }

    /// Resolve `word` to the node number its path terminates at.
    ///
    /// The terminal node may be internal when `word` is a prefix of a
    /// stored word; only a failed child lookup reports the word as absent.
    pub fn node_number(&self, word: &str) -> Result<usize> {
        if word.is_empty() {
            return Err(Error::KeyAbsent(String::new()));
        }
        let mut node = 1;
        for unit in word.encode_utf16() {
            node = self
                .child_with_label(node, unit)
                .ok_or_else(|| Error::KeyAbsent(word.to_string()))?;
        }
        Ok(node)
    }

    /// Scan the children of `node` for the one labelled `label`.
    ///
    /// The child block of `node` starts right after its predecessor's zero
    /// terminator; the bit at `pos` describes node `rank1(pos + 1)`.
    fn child_with_label(&self, node: usize, label: u16) -> Option<usize> {
        let terminator = self
            .bits
            .select0(node - 1)
            .expect("every node has a zero terminator");
        let mut pos = terminator + 1;
        while self.bits.get(pos) {
            let child = self.bits.rank1(pos + 1);
            if self.labels[child] == label {
                return Some(child);
            }
            pos += 1;
        }
        None
    }

    /// Reconstruct the word whose path ends at `node_number`.
    ///
    /// `word(1)` is the empty string (the root). Fails on node numbers
    /// outside `1..labels.len()`.
    pub fn word(&self, node_number: usize) -> Result<String> {
        if node_number == 0 || node_number >= self.labels.len() {
            return Err(Error::InvalidInput(format!(
                "node number {node_number} out of range"
            )));
        }
        let mut units = Vec::new();
        let mut node = node_number;
        while node != 1 {
            units.push(self.labels[node]);
            let pos = self
                .bits
                .select1(node - 1)
                .expect("every node is described by a one bit");
            node = self.bits.rank0(pos);
        }
        units.reverse();
        String::from_utf16(&units).map_err(|_| {
            Error::InvalidInput(format!("node number {node_number} splits a surrogate pair"))
        })
    }

    /// Number of trie nodes, root included.
    pub fn num_nodes(&self) -> usize {
        self.labels.len() - 1
    }

    /// The underlying LOUDS bit vector.
    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.bits.heap_bytes() + self.labels.capacity() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_key_node_numbers() {
        let map = WordMap::new(&["an", "i", "of", "one", "our", "out"]).unwrap();
        let numbers: Vec<usize> = ["an", "i", "of", "one", "our", "out"]
            .iter()
            .map(|w| map.node_number(w).unwrap())
            .collect();
        assert_eq!(numbers, [5, 3, 6, 9, 10, 11]);
        assert_eq!(map.num_nodes(), 11);
    }

    #[test]
    fn shared_prefix_node_numbers() {
        let map = WordMap::new(&["the", "then", "they"]).unwrap();
        assert_eq!(map.node_number("the").unwrap(), 4);
        assert_eq!(map.node_number("then").unwrap(), 5);
        assert_eq!(map.node_number("they").unwrap(), 6);
    }

    #[test]
    fn words_round_trip() {
        let words = ["an", "i", "of", "one", "our", "out"];
        let map = WordMap::new(&words).unwrap();
        for w in words {
            let n = map.node_number(w).unwrap();
            assert_eq!(map.word(n).unwrap(), w);
        }
    }

    #[test]
    fn prefix_resolves_to_internal_node() {
        // No end-of-word flag: "th" stops at the internal node for 'h'.
        let map = WordMap::new(&["the", "then", "they"]).unwrap();
        assert_eq!(map.node_number("th").unwrap(), 3);
    }

    #[test]
    fn unknown_words_are_absent() {
        let map = WordMap::new(&["the", "then", "they"]).unwrap();
        assert!(matches!(map.node_number("tho"), Err(Error::KeyAbsent(_))));
        assert!(matches!(map.node_number("thens"), Err(Error::KeyAbsent(_))));
        assert!(matches!(map.node_number(""), Err(Error::KeyAbsent(_))));
    }

    #[test]
    fn root_is_the_empty_word() {
        let map = WordMap::new(&["the"]).unwrap();
        assert_eq!(map.word(1).unwrap(), "");
    }

    #[test]
    fn node_number_out_of_range() {
        let map = WordMap::new(&["the"]).unwrap();
        assert!(matches!(map.word(0), Err(Error::InvalidInput(_))));
        assert!(matches!(map.word(99), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn empty_word_rejected_at_build() {
        assert!(matches!(
            WordMap::new(&["ok", ""]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn non_bmp_chars_use_two_levels() {
        // U+1F600 encodes as a surrogate pair, two trie levels.
        let map = WordMap::new(&["😀"]).unwrap();
        assert_eq!(map.num_nodes(), 3);
        let n = map.node_number("😀").unwrap();
        assert_eq!(map.word(n).unwrap(), "😀");
        // The intermediate node holds a lone high surrogate.
        assert!(matches!(map.word(2), Err(Error::InvalidInput(_))));
    }
}
