//! Core traits and types for slicekit.
//!
//! This module defines:
//! - [`Sequence`]: The growable, index-addressable containers a [`Slice`](crate::Slice) can wrap.
//! - [`Element`]: The element-side capabilities (kind classification and comparators).
//! - [`ElementKind`]: Runtime classification of an element.

use std::any::type_name;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

/// Name of the comparator looked up by [`Slice::sort`](crate::Slice::sort).
pub const DEFAULT_COMPARATOR: &str = "compare";

/// Two-argument ordering function over elements of one type.
pub type CompareFn<T> = fn(&T, &T) -> Ordering;

/// Bit width of a numeric kind. `Native` is the pointer-sized width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    Native,
}

/// Runtime classification of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Int(Width),
    Uint(Width),
    Float(Width),
    Bool,
    Char,
    Str,
    /// A caller-defined type, identified by its type name.
    Aggregate(&'static str),
}

impl ElementKind {
    /// Returns `true` for the signed, unsigned and floating-point kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ElementKind::Int(_) | ElementKind::Uint(_) | ElementKind::Float(_)
        )
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::W8 => write!(f, "8"),
            Width::W16 => write!(f, "16"),
            Width::W32 => write!(f, "32"),
            Width::W64 => write!(f, "64"),
            Width::Native => write!(f, "size"),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Int(w) => write!(f, "i{}", w),
            ElementKind::Uint(w) => write!(f, "u{}", w),
            ElementKind::Float(w) => write!(f, "f{}", w),
            ElementKind::Bool => write!(f, "bool"),
            ElementKind::Char => write!(f, "char"),
            ElementKind::Str => write!(f, "string"),
            ElementKind::Aggregate(name) => write!(f, "{}", name),
        }
    }
}

/// Capabilities an element type offers to the sequence operations.
///
/// Primitive numeric types come with a built-in ordering. Caller-defined types
/// opt into sorting by returning a comparator from [`Element::comparator`];
/// several comparators can be exposed under different names and selected with
/// [`Slice::sort_by`](crate::Slice::sort_by).
///
/// # Examples
///
/// ```
/// use slicekit::{CompareFn, Element, DEFAULT_COMPARATOR};
///
/// #[derive(Clone, PartialEq)]
/// struct Student {
///     name: String,
///     age: u32,
/// }
///
/// impl Element for Student {
///     fn comparator(name: &str) -> Option<CompareFn<Self>> {
///         match name {
///             DEFAULT_COMPARATOR => Some(|a: &Student, b: &Student| a.age.cmp(&b.age)),
///             "by_name" => Some(|a: &Student, b: &Student| a.name.cmp(&b.name)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Element: Clone + PartialEq + 'static {
    /// Classifies this element. Defaults to [`ElementKind::Aggregate`].
    fn kind(&self) -> ElementKind {
        ElementKind::Aggregate(type_name::<Self>())
    }

    /// Built-in ordering of primitive kinds.
    fn native_order() -> Option<CompareFn<Self>> {
        None
    }

    /// Looks up a named comparator.
    fn comparator(name: &str) -> Option<CompareFn<Self>> {
        let _ = name;
        None
    }
}

macro_rules! int_element {
    ($($t:ty => $kind:expr),* $(,)?) => {
        $(
            impl Element for $t {
                fn kind(&self) -> ElementKind {
                    $kind
                }

                fn native_order() -> Option<CompareFn<Self>> {
                    Some(|a: &$t, b: &$t| a.cmp(b))
                }
            }
        )*
    };
}

int_element! {
    i8 => ElementKind::Int(Width::W8),
    i16 => ElementKind::Int(Width::W16),
    i32 => ElementKind::Int(Width::W32),
    i64 => ElementKind::Int(Width::W64),
    isize => ElementKind::Int(Width::Native),
    u8 => ElementKind::Uint(Width::W8),
    u16 => ElementKind::Uint(Width::W16),
    u32 => ElementKind::Uint(Width::W32),
    u64 => ElementKind::Uint(Width::W64),
    usize => ElementKind::Uint(Width::Native),
}

impl Element for f32 {
    fn kind(&self) -> ElementKind {
        ElementKind::Float(Width::W32)
    }

    fn native_order() -> Option<CompareFn<Self>> {
        Some(|a: &f32, b: &f32| nan_last(a.is_nan(), b.is_nan(), a.partial_cmp(b)))
    }
}

impl Element for f64 {
    fn kind(&self) -> ElementKind {
        ElementKind::Float(Width::W64)
    }

    fn native_order() -> Option<CompareFn<Self>> {
        Some(|a: &f64, b: &f64| nan_last(a.is_nan(), b.is_nan(), a.partial_cmp(b)))
    }
}

/// Float ordering: NaN sorts after every number, NaNs are equal to each other.
#[inline(always)]
fn nan_last(a_nan: bool, b_nan: bool, ord: Option<Ordering>) -> Ordering {
    match (a_nan, b_nan) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => ord.unwrap_or(Ordering::Equal),
    }
}

impl Element for bool {
    fn kind(&self) -> ElementKind {
        ElementKind::Bool
    }
}

impl Element for char {
    fn kind(&self) -> ElementKind {
        ElementKind::Char
    }
}

impl Element for String {
    fn kind(&self) -> ElementKind {
        ElementKind::Str
    }
}

impl Element for &'static str {
    fn kind(&self) -> ElementKind {
        ElementKind::Str
    }
}

/// A growable, index-addressable container a [`Slice`](crate::Slice) can operate on.
///
/// Fixed-size arrays and borrowed slices are not sequences since they cannot shrink.
pub trait Sequence {
    /// Element type stored in the container.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, if any.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Removes the element at `index`, shifting the tail left by one.
    /// Returns `None` and leaves the container untouched when out of bounds.
    fn remove(&mut self, index: usize) -> Option<Self::Item>;

    /// Exposes the elements as one contiguous mutable slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.len() {
            Some(Vec::remove(self, index))
        } else {
            None
        }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }
}

// VecDeque keeps O(1) random access; `make_contiguous` rotates it into one slice for sorting.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.make_contiguous()
    }
}
