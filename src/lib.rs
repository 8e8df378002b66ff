//! # packed-dawg
//!
//! Builds a minimal [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graph) from a sorted word list and packs it into a
//! flat array of fixed-width edge records.
//!
//! Construction follows the incremental algorithm of
//! [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1): words arrive in
//! ascending order and every node that can no longer change is merged with an
//! equivalent one right away, so the automaton is minimal the moment the last
//! word is added.
//!
//! ## Quick Start
//!
//! ```
//! use packed_dawg::dawg::build_dawg;
//! use packed_dawg::packed::{encode, PackedDawg};
//!
//! let dawg = build_dawg(["bake", "cake", "fake", "lake", "make"]).unwrap();
//! assert!(dawg.contains("cake"));
//! assert!(!dawg.contains("ake"));
//!
//! let bytes = encode(&dawg).unwrap().to_bytes().unwrap();
//! let packed = PackedDawg::from_bytes(&bytes).unwrap();
//! assert!(packed.contains("lake"));
//! ```
//!
//! ## Packed layout
//!
//! Each record holds a 5-bit symbol (`a` = 1 to `z` = 26), a final flag, an
//! end-of-list flag and the slot of the target's first edge. Records are 2, 3
//! or 4 bytes wide, whichever is the narrowest that fits. Slot 0 is a header
//! with the width and the slot count; the word and node counts follow the
//! array. See [`packed`] for details.
//!
//! ## Generic Usage
//!
//! The in-memory DAWG is generic over the edge label type, but only labels
//! that map onto `a`-`z` can be packed:
//!
//! ```
//! use packed_dawg::dawg::Builder;
//!
//! let mut builder = Builder::<u8>::new();
//! builder.add_word(*b"ant").unwrap();
//! builder.add_word(*b"bee").unwrap();
//! let dawg = builder.build();
//! assert!(dawg.contains(*b"bee"));
//! ```

#![warn(missing_docs)]

/// Core DAWG data structure: node types, builder, and character trait.
pub mod dawg;
/// Word list preparation.
pub mod lexicon;
/// The packed edge-array format.
pub mod packed;

/// Command-line front end.
#[cfg(feature = "cli")]
pub mod cli;

pub use dawg::{build_dawg, BuildError, Builder, Dawg, DawgChar, DawgStats};
pub use lexicon::{prepare_words, LexiconOptions};
pub use packed::{encode, DecodeError, EncodeError, EncodedDawg, PackedDawg};
