//! # Small Cancellation Words
//!
//! Letters, words and relator sets over a finitely generated free group.
//!
//! ## Conventions
//!
//! - Generators are numbered from 1. A [`Letter`] is a non-zero signed index;
//!   `-k` is the formal inverse of generator `k`.
//! - Case-letter spelling maps `a..=z` to generators 1..=26 and uppercase to
//!   their inverses, so `"abAB"` and `[1, 2, -1, -2]` are the same word.
//! - A [`RelatorSet`] is validated on construction: non-empty, no empty
//!   relators, every relator cyclically reduced. Nothing is repaired unless
//!   the caller asks for it with [`RelatorSet::reduced`].
//!
//! ## Example
//!
//! ```rust
//! use smallcancel_words::{RelatorInput, RelatorSet};
//!
//! let set = RelatorSet::normalize(vec![
//!     RelatorInput::from("abAB"),
//!     RelatorInput::from(vec![3, 3, 3]),
//! ])
//! .unwrap();
//! assert_eq!(set.rank(), 3);
//! assert!(RelatorSet::normalize(["abA"]).is_err());
//! ```

mod error;
mod letter;
mod relators;
mod word;

pub use error::{Result, WordError};
pub use letter::Letter;
pub use relators::{RelatorInput, RelatorSet};
pub use word::Word;
