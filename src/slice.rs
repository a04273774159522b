//! The [`Slice`] handle over a caller-owned sequence.

use crate::algo;
use crate::core::{CompareFn, DEFAULT_COMPARATOR, Element, Sequence};
use crate::dispatch;
use crate::error::{Result, SliceError};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// A handle granting mutable access to a caller's sequence without owning it.
///
/// Construction never touches the sequence. Every operation first checks that
/// the handle actually wraps a target and returns [`SliceError::InvalidTarget`]
/// otherwise, without mutating anything.
///
/// # Examples
///
/// ```
/// use slicekit::Slice;
///
/// let mut values = vec![3, 1, 2];
/// Slice::new(&mut values).sort().unwrap();
/// assert_eq!(values, vec![1, 2, 3]);
///
/// Slice::new(&mut values).remove_at(1).unwrap();
/// assert_eq!(values, vec![1, 3]);
/// ```
pub struct Slice<'a, S: Sequence + ?Sized> {
    target: Option<&'a mut S>,
}

impl<'a, S: Sequence + ?Sized> Slice<'a, S> {
    /// Wraps `target`.
    pub fn new(target: &'a mut S) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// A handle with no target. Every operation on it fails with
    /// [`SliceError::InvalidTarget`].
    pub fn detached() -> Self {
        Self { target: None }
    }

    /// Number of elements in the target, `0` when detached.
    pub fn len(&self) -> usize {
        self.target.as_deref().map_or(0, |s| s.len())
    }

    /// Returns `true` if the target is empty or absent.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn target(&mut self) -> Result<&mut S> {
        self.target.as_deref_mut().ok_or(SliceError::InvalidTarget)
    }

    /// Removes the element at `index`, shifting every later element left by one.
    ///
    /// # Errors
    ///
    /// [`SliceError::InvalidTarget`] for a detached handle, otherwise
    /// [`SliceError::IndexOutOfRange`] when `index >= len` or the target
    /// declines the removal. The sequence is unchanged in every case.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        let target = self.target()?;
        let len = target.len();
        if index >= len {
            return Err(SliceError::IndexOutOfRange { index, len });
        }
        if target.remove(index).is_none() {
            return Err(SliceError::IndexOutOfRange { index, len });
        }
        trace!(index, len, "removed element");
        Ok(())
    }

    /// Removes the first element equal to `value`.
    ///
    /// Removing a value that is not present is not an error.
    pub fn remove(&mut self, value: &S::Item) -> Result<()>
    where
        S::Item: PartialEq,
    {
        self.remove_by(|element| element == value)
    }

    /// Removes the first element for which `predicate` returns `true`.
    ///
    /// At most one element is removed; no match is not an error. A target that
    /// refuses to remove the matched index yields [`SliceError::IndexOutOfRange`].
    pub fn remove_by<P>(&mut self, mut predicate: P) -> Result<()>
    where
        P: FnMut(&S::Item) -> bool,
    {
        let target = self.target()?;
        let len = target.len();
        let position = (0..len).find(|&i| target.get(i).is_some_and(&mut predicate));
        if let Some(index) = position {
            if target.remove(index).is_none() {
                return Err(SliceError::IndexOutOfRange { index, len });
            }
            trace!(index, "removed first match");
        }
        Ok(())
    }

    /// Calls `visit` with every element and its index, in ascending index order.
    pub fn for_each<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(&S::Item, usize),
    {
        let target = self.target()?;
        let len = target.len();
        for index in 0..len {
            if let Some(element) = target.get(index) {
                visit(element, index);
            }
        }
        Ok(())
    }

    /// Alias of [`Slice::for_each`].
    pub fn each<F>(&mut self, visit: F) -> Result<()>
    where
        F: FnMut(&S::Item, usize),
    {
        self.for_each(visit)
    }

    /// Sorts the target in place with a comparator passed directly.
    ///
    /// Element kinds are not inspected, so this never fails with
    /// [`SliceError::UnsupportedType`].
    pub fn sort_with<F>(&mut self, mut compare: F) -> Result<()>
    where
        S::Item: Clone,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        let target = self.target()?;
        algo::quick_sort(target.as_mut_slice(), &mut compare);
        Ok(())
    }
}

impl<'a, S> Slice<'a, S>
where
    S: Sequence + ?Sized,
    S::Item: Element,
{
    /// Sorts the target in place using the comparator named
    /// [`DEFAULT_COMPARATOR`].
    ///
    /// # Errors
    ///
    /// [`SliceError::InvalidTarget`] for a detached handle and
    /// [`SliceError::UnsupportedType`] when the element kind has no ordering.
    /// The sequence is unchanged on error.
    pub fn sort(&mut self) -> Result<()> {
        self.sort_by(DEFAULT_COMPARATOR)
    }

    /// Sorts the target in place using the comparator exposed under `name`.
    ///
    /// Numeric element kinds always use their built-in ordering and ignore `name`.
    pub fn sort_by(&mut self, name: &str) -> Result<()> {
        let target = self.target()?;
        let Some(mut compare) = resolve_for(&*target, name)? else {
            return Ok(());
        };
        debug!(len = target.len(), comparator = name, "sorting sequence");
        algo::quick_sort(target.as_mut_slice(), &mut compare);
        Ok(())
    }

    /// Parallel [`Slice::sort`]. Returns only after every partition is sorted.
    #[cfg(feature = "parallel")]
    pub fn par_sort(&mut self) -> Result<()>
    where
        S::Item: Send,
    {
        let target = self.target()?;
        let Some(compare) = resolve_for(&*target, DEFAULT_COMPARATOR)? else {
            return Ok(());
        };
        debug!(len = target.len(), "sorting sequence in parallel");
        algo::par_quick_sort(target.as_mut_slice(), &compare);
        Ok(())
    }
}

/// Resolves once per sort. Sequences of fewer than two elements need no
/// comparator and sort successfully whatever their kind.
fn resolve_for<S>(target: &S, name: &str) -> Result<Option<CompareFn<S::Item>>>
where
    S: Sequence + ?Sized,
    S::Item: Element,
{
    if target.len() < 2 {
        return Ok(None);
    }
    match target.get(0) {
        Some(first) => dispatch::resolve(first, name).map(Some),
        None => Ok(None),
    }
}

impl<'a, S: Sequence + ?Sized> From<&'a mut S> for Slice<'a, S> {
    fn from(target: &'a mut S) -> Self {
        Self::new(target)
    }
}

impl<'a, S: Sequence + ?Sized> From<Option<&'a mut S>> for Slice<'a, S> {
    fn from(target: Option<&'a mut S>) -> Self {
        Self { target }
    }
}
