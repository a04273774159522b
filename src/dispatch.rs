//! Comparator resolution.
//!
//! Sorting needs one ordering function for the whole run. [`resolve`] inspects
//! the first element of the sequence, classifies it, and picks:
//! - the built-in ordering for numeric kinds (the comparator name is ignored),
//! - the named comparator exposed by [`Element::comparator`] for aggregates,
//! - an [`SliceError::UnsupportedType`] for everything else.
//!
//! Sequences are assumed homogeneous; only the first element is inspected.

use crate::core::{CompareFn, Element, ElementKind};
use crate::error::{Result, SliceError, Unsupported};
use tracing::debug;

/// Resolves the comparator named `name` for the kind of `first`.
///
/// # Errors
///
/// Returns [`SliceError::UnsupportedType`] when the kind has no ordering, or
/// when an aggregate exposes no comparator called `name`.
pub fn resolve<T: Element>(first: &T, name: &str) -> Result<CompareFn<T>> {
    let kind = first.kind();

    let resolved = match kind {
        ElementKind::Int(_) | ElementKind::Uint(_) | ElementKind::Float(_) => {
            T::native_order().ok_or(Unsupported::NoOrdering)
        }
        ElementKind::Aggregate(_) => {
            T::comparator(name).ok_or_else(|| Unsupported::MissingComparator(name.to_string()))
        }
        ElementKind::Bool | ElementKind::Char | ElementKind::Str => Err(Unsupported::NoOrdering),
    };

    match resolved {
        Ok(f) => {
            debug!(%kind, comparator = name, "resolved comparator");
            Ok(f)
        }
        Err(reason) => {
            debug!(%kind, comparator = name, ?reason, "no comparator for element kind");
            Err(SliceError::UnsupportedType { kind, reason })
        }
    }
}
