//! Std-container ergonomics for host array types.
//!
//! # Overview
//!
//! DCC and engine SDKs ship array containers whose native surface is a length
//! query, indexed element access, and a handful of structural edits — and
//! nothing else: no iterators, no vector conveniences, no hashing for their
//! string types. `arraybridge` layers those conventions on without copying
//! any data into a second container:
//!
//! - [`Span`]/[`SpanMut`] — borrowed traversal with real `Iterator`s
//!   (double-ended, exact-size) over any type implementing the capability
//!   traits in [`arraybridge_core`].
//! - [`View`] — a borrowed view adding `push_back`/`push_front` and indexing.
//! - [`ArrayVec`] — an owning adapter with the full vector contract: insert,
//!   erase, resize, checked `at`, and an escape hatch back to the host array.
//! - [`handle`] — typed get/set dispatch over a host data-handle slot.
//! - [`intern`] — interned [`Token`](intern::Token) keys so host string
//!   content works in hash maps.
//!
//! # Quick start
//!
//! ```
//! use arraybridge::{ArrayVec, Span};
//!
//! // Any container implementing the capability traits works; Vec does out
//! // of the box, host bindings implement them over their native methods.
//! let mut weights = ArrayVec::from(vec![0.3, 0.9, 0.1]);
//!
//! // Vector conveniences over the host's native primitives.
//! weights.insert(1, 0.5);
//! weights.erase(0);
//! weights.resize_fill(5, 0.0);
//! assert_eq!(weights.at(0), Ok(&0.5));
//! assert!(weights.at(5).is_err());
//!
//! // Iterator conventions compose with the std adapters.
//! let strongest = weights.iter().cloned().fold(f64::MIN, f64::max);
//! assert_eq!(strongest, 0.9);
//!
//! // Borrowed traversal of an array owned elsewhere.
//! let host = weights.into_array();
//! let back: Vec<f64> = Span::new(&host).iter().rev().copied().collect();
//! assert_eq!(back.len(), 5);
//! ```

pub use arraybridge_core::{ArrayOps, Elements, ElementsMut};
pub use arraybridge_span::{Iter, IterMut, Span, SpanMut};
pub use arraybridge_vec::{ArrayVec, OutOfBounds};
pub use arraybridge_view::View;

pub use arraybridge_handle as handle;
pub use arraybridge_intern as intern;
