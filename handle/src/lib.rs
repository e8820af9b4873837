#![no_std]
#![deny(unsafe_code)]

//! Typed access to a host data handle.
//!
//! A [`DataHandle`] is a single typed value slot, the shape a host's
//! attribute-data API hands to compute code. [`HandleValue`] is the per-type
//! dispatch table over it: `read` extracts a value of the implementing type,
//! `write` stores one and retypes the slot.
//!
//! Dispatch is a trait bound, so a value type without a [`HandleValue`] impl
//! fails to compile at the call site; there is deliberately no fallback.

/// Discriminant for the value currently stored in a [`DataHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Bool,
    Int,
    Double,
}

/// A single typed value slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataHandle {
    Bool(bool),
    Int(i64),
    Double(f64),
}

impl DataHandle {
    pub fn kind(&self) -> HandleKind {
        match self {
            DataHandle::Bool(_) => HandleKind::Bool,
            DataHandle::Int(_) => HandleKind::Int,
            DataHandle::Double(_) => HandleKind::Double,
        }
    }

    // --- Per-type accessors ---

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            DataHandle::Bool(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            DataHandle::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match *self {
            DataHandle::Double(value) => Some(value),
            _ => None,
        }
    }

    pub fn set_bool(&mut self, value: bool) {
        *self = DataHandle::Bool(value);
    }

    pub fn set_int(&mut self, value: i64) {
        *self = DataHandle::Int(value);
    }

    pub fn set_double(&mut self, value: f64) {
        *self = DataHandle::Double(value);
    }

    // --- Generic dispatch ---

    /// Read through the [`HandleValue`] table; `None` when the slot holds a
    /// different type.
    pub fn value<T: HandleValue>(&self) -> Option<T> {
        T::read(self)
    }

    /// Store through the [`HandleValue`] table, retyping the slot.
    pub fn set<T: HandleValue>(&mut self, value: T) {
        T::write(self, value);
    }
}

/// Per-type get/set dispatch over a [`DataHandle`].
pub trait HandleValue: Sized {
    /// Does the handle currently store this type?
    fn matches(handle: &DataHandle) -> bool;

    /// Read a value; `None` when the slot holds a different type.
    fn read(handle: &DataHandle) -> Option<Self>;

    /// Store a value, retyping the slot.
    fn write(handle: &mut DataHandle, value: Self);
}

impl HandleValue for f64 {
    fn matches(handle: &DataHandle) -> bool {
        matches!(handle, DataHandle::Double(_))
    }

    fn read(handle: &DataHandle) -> Option<f64> {
        handle.as_double()
    }

    fn write(handle: &mut DataHandle, value: f64) {
        handle.set_double(value);
    }
}

impl HandleValue for i64 {
    fn matches(handle: &DataHandle) -> bool {
        matches!(handle, DataHandle::Int(_))
    }

    fn read(handle: &DataHandle) -> Option<i64> {
        handle.as_int()
    }

    fn write(handle: &mut DataHandle, value: i64) {
        handle.set_int(value);
    }
}

impl HandleValue for bool {
    fn matches(handle: &DataHandle) -> bool {
        matches!(handle, DataHandle::Bool(_))
    }

    fn read(handle: &DataHandle) -> Option<bool> {
        handle.as_bool()
    }

    fn write(handle: &mut DataHandle, value: bool) {
        handle.set_bool(value);
    }
}
