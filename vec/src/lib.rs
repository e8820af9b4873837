#![no_std]
#![deny(unsafe_code)]

//! Owning vector-like adapter over a host array.
//!
//! [`ArrayVec`] owns one host array instance for its whole lifetime and
//! exposes the familiar vector contract on top of the host's native
//! operations: positional insert and erase, resizing with or without a fill
//! value, checked and unchecked element access, and iteration through the
//! span iterator types.
//!
//! Storage always lives in the host array; the adapter holds no state of its
//! own. [`array`](ArrayVec::array), [`array_mut`](ArrayVec::array_mut), and
//! [`into_array`](ArrayVec::into_array) hand the host array back for direct
//! interop.
//!
//! # Example
//!
//! ```
//! use arraybridge_vec::ArrayVec;
//!
//! let mut points = ArrayVec::from(vec![1.0, 2.0, 3.0]);
//! points.insert(1, 9.0);
//! points.erase(0);
//! points.resize_fill(4, 0.0);
//! assert_eq!(points.iter().copied().collect::<Vec<_>>(), vec![9.0, 2.0, 3.0, 0.0]);
//! ```

use core::fmt;
use core::ops::{Index, IndexMut, Range};

use arraybridge_core::{ArrayOps, Elements, ElementsMut};
use arraybridge_span::{Iter, IterMut, Span, SpanMut};
use thiserror::Error;

/// Error from the checked accessors [`ArrayVec::at`] and [`ArrayVec::at_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for array of length {len}")]
pub struct OutOfBounds {
    /// The requested index.
    pub index: usize,
    /// Array length at the time of the call.
    pub len: usize,
}

/// A host array with a vector interface.
pub struct ArrayVec<A: Elements> {
    array: A,
}

// =============================================================================
// Construction
// =============================================================================

impl<A: Elements + Default> ArrayVec<A> {
    /// An empty adapter around a freshly constructed host array.
    pub fn new() -> Self {
        ArrayVec { array: A::default() }
    }
}

impl<A: ArrayOps + Default> ArrayVec<A>
where
    A::Elem: Clone,
{
    /// `len` copies of `value`.
    pub fn with_len(len: usize, value: A::Elem) -> Self {
        let mut vec = Self { array: A::default() };
        for _ in 0..len {
            vec.array.append(value.clone());
        }
        vec
    }
}

/// Take over an existing host array. Copying from a borrowed host array is
/// spelled `ArrayVec::from(host.clone())`.
impl<A: Elements> From<A> for ArrayVec<A> {
    fn from(array: A) -> Self {
        ArrayVec { array }
    }
}

impl<A: Elements + Default> Default for ArrayVec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Elements + Clone> Clone for ArrayVec<A> {
    fn clone(&self) -> Self {
        ArrayVec {
            array: self.array.clone(),
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.array.clone_from(&other.array);
    }
}

// =============================================================================
// Access
// =============================================================================

impl<A: Elements> ArrayVec<A> {
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&A::Elem> {
        self.array.get(index)
    }

    pub fn first(&self) -> Option<&A::Elem> {
        self.array.first()
    }

    pub fn last(&self) -> Option<&A::Elem> {
        self.array.last()
    }

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<&A::Elem, OutOfBounds> {
        let len = self.array.len();
        self.array.get(index).ok_or(OutOfBounds { index, len })
    }

    pub fn iter(&self) -> Iter<'_, A> {
        Span::new(&self.array).iter()
    }

    pub fn as_span(&self) -> Span<'_, A> {
        Span::new(&self.array)
    }

    /// The owned host array, for direct interop. Callers are responsible for
    /// keeping it consistent with what the adapter expects.
    pub fn array(&self) -> &A {
        &self.array
    }

    pub fn array_mut(&mut self) -> &mut A {
        &mut self.array
    }

    pub fn into_array(self) -> A {
        self.array
    }
}

impl<A: ElementsMut> ArrayVec<A> {
    pub fn get_mut(&mut self, index: usize) -> Option<&mut A::Elem> {
        self.array.get_mut(index)
    }

    pub fn first_mut(&mut self) -> Option<&mut A::Elem> {
        self.array.get_mut(0)
    }

    pub fn last_mut(&mut self) -> Option<&mut A::Elem> {
        let index = self.array.len().checked_sub(1)?;
        self.array.get_mut(index)
    }

    /// Bounds-checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut A::Elem, OutOfBounds> {
        let len = self.array.len();
        self.array.get_mut(index).ok_or(OutOfBounds { index, len })
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        SpanMut::new(&mut self.array).into_iter_mut()
    }

    pub fn as_span_mut(&mut self) -> SpanMut<'_, A> {
        SpanMut::new(&mut self.array)
    }
}

// =============================================================================
// Editing
// =============================================================================

impl<A: ArrayOps> ArrayVec<A> {
    pub fn push(&mut self, value: A::Elem) {
        self.array.append(value);
    }

    /// Clone out and remove the last element.
    pub fn pop(&mut self) -> Option<A::Elem>
    where
        A::Elem: Clone,
    {
        let index = self.array.len().checked_sub(1)?;
        let value = self.array.elem(index).clone();
        self.array.remove(index);
        Some(value)
    }

    /// Insert `value` before `index`; `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics when `index > len()`.
    pub fn insert(&mut self, index: usize, value: A::Elem) {
        self.array.insert(index, value);
    }

    /// Insert `count` copies of `value` before `index`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: A::Elem)
    where
        A::Elem: Clone,
    {
        for _ in 0..count {
            self.array.insert(index, value.clone());
        }
    }

    /// Insert every element of `iterable` before `index`, preserving order.
    ///
    /// Each element goes through the host's single-index insert; there is no
    /// bulk path.
    pub fn insert_many<I>(&mut self, index: usize, iterable: I)
    where
        I: IntoIterator<Item = A::Elem>,
    {
        let mut at = index;
        for value in iterable {
            self.array.insert(at, value);
            at += 1;
        }
    }

    /// Remove the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`.
    pub fn erase(&mut self, index: usize) {
        self.array.remove(index);
    }

    /// Remove `range.len()` elements starting at `range.start`.
    ///
    /// Removal happens one element at a time at `range.start`; the host's
    /// shift-down on every removal walks the originally contiguous range.
    pub fn erase_range(&mut self, range: Range<usize>) {
        for _ in range.clone() {
            self.array.remove(range.start);
        }
    }

    /// Set the length to `len`; growth uses the host's growth default.
    pub fn resize(&mut self, len: usize) {
        self.array.set_length(len);
    }

    /// Like [`resize`](ArrayVec::resize), but growth fills `[old_len, len)`
    /// with `value`. Shrinking never fills.
    pub fn resize_fill(&mut self, len: usize, value: A::Elem)
    where
        A::Elem: Clone,
    {
        let old_len = self.array.len();
        self.array.set_length(len);
        for index in old_len..len {
            *self.array.elem_mut(index) = value.clone();
        }
    }

    pub fn clear(&mut self) {
        self.array.clear();
    }
}

// =============================================================================
// Std-trait surface
// =============================================================================

impl<A: Elements> Index<usize> for ArrayVec<A> {
    type Output = A::Elem;

    fn index(&self, index: usize) -> &A::Elem {
        self.array.elem(index)
    }
}

impl<A: ElementsMut> IndexMut<usize> for ArrayVec<A> {
    fn index_mut(&mut self, index: usize) -> &mut A::Elem {
        self.array.elem_mut(index)
    }
}

impl<'a, A: Elements> IntoIterator for &'a ArrayVec<A> {
    type Item = &'a A::Elem;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

impl<'a, A: ElementsMut> IntoIterator for &'a mut ArrayVec<A> {
    type Item = &'a mut A::Elem;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> IterMut<'a, A> {
        self.iter_mut()
    }
}

impl<A: ArrayOps> Extend<A::Elem> for ArrayVec<A> {
    fn extend<I: IntoIterator<Item = A::Elem>>(&mut self, iterable: I) {
        for value in iterable {
            self.array.append(value);
        }
    }
}

impl<A: ArrayOps + Default> FromIterator<A::Elem> for ArrayVec<A> {
    fn from_iter<I: IntoIterator<Item = A::Elem>>(iterable: I) -> Self {
        let mut vec = Self { array: A::default() };
        vec.extend(iterable);
        vec
    }
}

impl<A: Elements> PartialEq for ArrayVec<A>
where
    A::Elem: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Elements> Eq for ArrayVec<A> where A::Elem: Eq {}

impl<A: Elements> fmt::Debug for ArrayVec<A>
where
    A::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
