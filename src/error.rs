//! Error types returned by [`Slice`](crate::Slice) operations.
//!
//! Every variant is returned synchronously to the caller. None of them is
//! fatal, and an operation that fails leaves the target sequence untouched.

use crate::core::ElementKind;
use std::fmt;

/// Why an element kind cannot be sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    /// The aggregate type exposes no comparator under the requested name.
    MissingComparator(String),
    /// The element kind has no ordering at all (bools, chars, strings).
    NoOrdering,
}

/// Error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// The handle does not wrap a sequence.
    InvalidTarget,

    /// `remove_at` was given an index outside `0..len`.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// Sorting was requested for an element kind without a usable comparator.
    UnsupportedType {
        /// Kind discovered on the first element.
        kind: ElementKind,
        /// What was missing.
        reason: Unsupported,
    },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::InvalidTarget => write!(f, "handle does not wrap a sequence"),
            SliceError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for sequence of length {}", index, len)
            }
            SliceError::UnsupportedType { kind, reason } => match reason {
                Unsupported::MissingComparator(name) => {
                    write!(f, "unsupported type {}: no comparator named `{}`", kind, name)
                }
                Unsupported::NoOrdering => write!(f, "unsupported type: {}", kind),
            },
        }
    }
}

impl std::error::Error for SliceError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SliceError>;
