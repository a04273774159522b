//! # Slicekit
//!
//! `slicekit` offers removal, iteration and in-place sorting over a caller-owned
//! sequence through one mutable handle, [`Slice`].
//!
//! The handle never takes ownership of the sequence. It borrows it mutably for
//! the duration of each call, validates that a target is present, and reports
//! every failure as a [`SliceError`] instead of panicking.
//!
//! ## Key Features
//!
//! - **Splicing removal**: [`Slice::remove_at`], [`Slice::remove`] and
//!   [`Slice::remove_by`] remove at most one element and keep the relative
//!   order of the rest.
//! - **Kind dispatch**: Sorting classifies the first element ([`ElementKind`])
//!   and resolves one comparator for the whole run. Numeric kinds use a
//!   built-in ordering, caller-defined types expose named comparators through
//!   the [`Element`] trait.
//! - **Partition-exchange sort**: A first-element-pivot quicksort that works
//!   in place with `O(log n)` stack depth. Not stable.
//! - **Containers**: Works on `Vec<T>` and `VecDeque<T>`, or any type
//!   implementing [`Sequence`].
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use slicekit::Slice;
//!
//! let mut data = vec![5, 3, 9, 1];
//! let mut slice = Slice::new(&mut data);
//!
//! slice.sort().unwrap();
//! slice.remove(&9).unwrap();
//! slice.for_each(|value, index| println!("{index}: {value}")).unwrap();
//!
//! assert_eq!(data, vec![1, 3, 5]);
//! ```
//!
//! ### Custom Types
//!
//! To sort custom types, implement [`Element`] and expose one or more comparators.
//! [`Slice::sort`] looks up [`DEFAULT_COMPARATOR`], [`Slice::sort_by`] any other name.
//!
//! ```rust
//! use slicekit::{CompareFn, Element, Slice, DEFAULT_COMPARATOR};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Student {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! impl Element for Student {
//!     fn comparator(name: &str) -> Option<CompareFn<Self>> {
//!         match name {
//!             DEFAULT_COMPARATOR => Some(|a: &Student, b: &Student| a.age.cmp(&b.age)),
//!             "by_name" => Some(|a: &Student, b: &Student| a.name.cmp(b.name)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut students = vec![
//!     Student { name: "carol", age: 100 },
//!     Student { name: "alice", age: 12 },
//!     Student { name: "bob", age: 50 },
//! ];
//!
//! Slice::new(&mut students).sort().unwrap();
//! assert_eq!(students[0].name, "alice");
//!
//! Slice::new(&mut students).sort_by("by_name").unwrap();
//! assert_eq!(students[2].name, "carol");
//!
//! // Unknown comparator names are reported, not panicked on.
//! assert!(Slice::new(&mut students).sort_by("by_height").is_err());
//! ```
//!
//! ## Floating Point
//!
//! Floats are ordered numerically with `NaN` sorting after every number.
//!
//! ## Features
//!
//! - `parallel`: Adds [`Slice::par_sort`], recursing both partition halves on the rayon pool.

pub mod algo;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod slice;
pub use crate::core::{CompareFn, DEFAULT_COMPARATOR, Element, ElementKind, Sequence, Width};
pub use error::{Result, SliceError, Unsupported};
pub use slice::Slice;

pub mod prelude {
    pub use crate::core::{CompareFn, DEFAULT_COMPARATOR, Element, ElementKind, Sequence};
    pub use crate::error::{SliceError, Unsupported};
    pub use crate::slice::Slice;
}
