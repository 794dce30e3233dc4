//! # Succinct Trie Dictionary
//!
//! *A compact, immutable multimap from strings to value lists.*
//!
//! ## Intuition First
//!
//! A pointer-based trie spends most of its memory on the pointers, not the
//! characters. Imagine instead writing the tree down as a single row of
//! ticks: visit the nodes floor by floor and, for each node, make one tick
//! per child and then a mark to say "done". That row of ticks *is* the tree.
//! Nothing else is stored, yet two counting tricks (rank and select) still
//! let you jump from any node to its children or its parent in constant
//! time.
//!
//! ## The Problem
//!
//! Dictionary structures face a trade-off:
//! - **Pointer tries**: Fast queries ($O(|key|)$) but $O(n \log n)$ bits of
//!   pointer overhead.
//! - **Sorted arrays**: Minimal space but $O(\log n)$ string comparisons per
//!   lookup and no shared-prefix compression.
//!
//! ## Historical Context
//!
//! ```text
//! 1960  Fredkin     Coins "trie" for retrieval trees
//! 1989  Jacobson    LOUDS: Level-Order Unary Degree Sequence (PhD thesis)
//! 1996  Munro-Raman Constant-time rank and select in o(n) extra space
//! 2008  Delpratt    Engineering LOUDS for practical string dictionaries
//! 2016  Kanda       LOUDS double-array hybrids for IME dictionaries
//! ```
//!
//! Jacobson's insight was that a tree on $n$ nodes is one of roughly $4^n$
//! shapes, so $2n + O(1)$ bits suffice to describe it, and an auxiliary
//! index of $o(n)$ bits makes that description *navigable*, not just
//! decodable.
//!
//! ## Mathematical Formulation
//!
//! The LOUDS bit string lists each node's degree in unary, breadth-first,
//! after a `10` super-root slot. Numbering nodes 1, 2, 3, ... in BFS order:
//!
//! - child described by bit $i$: $\mathrm{rank}_1(i + 1)$
//! - parent of node $n$: $\mathrm{rank}_0(\mathrm{select}_1(n - 1))$
//! - children of node $n$: positions
//!   $\mathrm{select}_0(n - 1) + 1 \ldots \mathrm{select}_0(n) - 1$
//!
//! A lookup walks one level per code unit, so it costs $O(|key|)$ rank and
//! select calls on the bit vector.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(|key|)$ per lookup; construction is $O(total\ input)$
//!   after the initial sort.
//! - **Space**: ≈2 bits per trie node for the shape, one code unit per node
//!   for labels, plus 25–50% index overhead on the bit vector.
//!
//! ## What Could Go Wrong
//!
//! 1. **Static only**: the structure is build-once / read-many. Inserting a
//!    key means rebuilding.
//! 2. **No end-of-word flags**: a path may stop at an internal node. The
//!    dictionary layer masks this (such nodes own no values); the raw
//!    node-number interface does not.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`BitVector`]**: succinct bit vector with O(1) rank and select.
//! - **[`WordMap`]**: word ↔ node-number translation over a LOUDS trie.
//! - **[`Dictionary`]**: string→string multimap (two tries sharing an
//!   association table of node numbers).
//! - **[`ValueDictionary`]**: string→`T` multimap (one trie, values stored
//!   directly).
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Succinct Static Data Structures."
//! - Delpratt, O., Rahman, N., & Raman, R. (2008). "Engineering succinct
//!   DOM."
//! - Navarro, G. (2016). "Compact Data Structures: A Practical Approach."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod dict;
pub mod error;
pub mod louds;
pub mod word_map;

pub use bitvec::{BitVector, BitVectorBuilder};
pub use dict::{Dictionary, Keys, ValueDictionary};
pub use error::Error;
pub use word_map::WordMap;
