//! A persistent, structurally-shared vector.
//!
//! [`Vector<T>`] is an indexed sequence whose only update operation, [`Vector::push_back`],
//! returns a new logical vector instead of mutating the one it was called on. The unchanged
//! parts of the underlying tree are shared between the old and new vectors through
//! reference-counted nodes, so an append never costs more than touching the handful of nodes
//! on the path from the root to the new element.
//!
//! # Example
//!
//! ```
//! use persistent_vector::Vector;
//!
//! let v0: Vector<i32> = Vector::new();
//! let v1 = v0.push_back(1).push_back(2).push_back(3);
//!
//! assert_eq!(v0.len(), 0);
//! assert_eq!(v1.len(), 3);
//! assert_eq!(v1[0], 1);
//! assert_eq!(v1.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! The tree has a fixed branching factor of 32 and keeps the most recently appended (up to 32)
//! elements in a "tail" leaf, so most appends are O(1) and only occasionally graft the tail
//! into the main tree (worst case O(log₃₂ n)). See [`Vector::push_back`] for the details.
//!
//! Out of scope: in-place mutation, insertion at arbitrary positions, removal, slicing,
//! concatenation, and batched/transient updates. Construction from an iterator, equality,
//! hashing, and serialization are thin wrappers a caller can build from the operations exposed
//! here; this crate only provides the core.

#[cfg(feature = "proptest")]
pub mod arbitrary;
mod cursor;
mod iter;
mod node;
mod vector;

pub use cursor::Cursor;
pub use iter::Iter;
pub use vector::Vector;

#[cfg(test)]
mod tests {}
