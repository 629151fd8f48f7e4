//! Ordered and sequential containers.
//!
//! * [`Map`] and [`Set`]: ordered collections over a left-leaning red-black
//!   tree, parameterized by a [`compare::Compare`] comparator.
//! * [`Vector`]: a growable array with explicit control over its buffer.
//! * [`Stack`]: a LIFO adapter over any back-insertable sequence.
//!
//! # Examples
//!
//! ```
//! use grove::Map;
//!
//! let mut map = Map::new();
//!
//! map.insert(23, "world");
//! map.insert(1, "hello");
//!
//! assert_eq!(map.succ_or_eq(&22), Some((&23, &"world")));
//!
//! let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
//! assert_eq!(entries, [(1, "hello"), (23, "world")]);
//! ```

pub mod map;
pub mod set;
pub mod stack;
pub mod vector;

mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use crate::map::Map;
pub use crate::set::Set;
pub use crate::stack::{Sequence, Stack};
pub use crate::vector::{ReserveError, Vector};
