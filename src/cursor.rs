//! A random-access forward/backward cursor over a [`Vector`](crate::vector::Vector).
//!
//! The cursor caches the leaf block its current position falls in (`leaf`) along with that
//! leaf's aligned starting index (`base`), so that a run of `advance(1)`/`advance(-1)` calls
//! that stays within one leaf never re-descends the tree.

use crate::node::{BRANCHING, MASK};
use crate::vector::Vector;

/// A cursor over logical index range `[0, vec.len()]`. Dereferencing at `vec.len()` (the "end"
/// position) panics, mirroring an end iterator never being dereferenced.
#[derive(Clone)]
pub struct Cursor<'a, T> {
    vec: &'a Vector<T>,
    i: usize,
    base: usize,
    leaf: Option<&'a [T]>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn begin(vec: &'a Vector<T>) -> Self {
        if vec.is_empty() {
            return Cursor {
                vec,
                i: 0,
                base: 0,
                leaf: None,
            };
        }
        Cursor {
            vec,
            i: 0,
            base: 0,
            leaf: Some(vec.array_for(0).as_leaf().as_slice()),
        }
    }

    pub(crate) fn end(vec: &'a Vector<T>) -> Self {
        if vec.is_empty() {
            return Cursor {
                vec,
                i: 0,
                base: 0,
                leaf: None,
            };
        }
        let size = vec.len();
        let base = size - (size & MASK);
        Cursor {
            vec,
            i: size,
            base,
            leaf: Some(vec.array_for(size - 1).as_leaf().as_slice()),
        }
    }

    /// The logical index this cursor is positioned at, in `[0, vec.len()]`.
    pub fn index(&self) -> usize {
        self.i
    }

    /// Reads the element at the cursor's current position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is positioned at `vec.len()` (the end position).
    pub fn get(&self) -> &'a T {
        assert!(self.i < self.vec.len(), "cannot dereference an end cursor");
        let leaf = self
            .leaf
            .expect("a non-empty vector always has a cached leaf at a valid index");
        &leaf[self.i - self.base]
    }

    /// Moves the cursor by `n` logical positions (negative steps backward).
    ///
    /// # Panics
    ///
    /// Panics if the resulting index would fall outside `[0, vec.len()]`.
    pub fn advance(&mut self, n: isize) {
        let new_i = self.i as isize + n;
        assert!(
            new_i >= 0 && (new_i as usize) <= self.vec.len(),
            "cursor advance out of bounds"
        );
        let new_i = new_i as usize;

        if self.vec.is_empty() {
            self.i = new_i;
            return;
        }

        // Fast path: stay within the already-cached leaf, no tree descent.
        if new_i >= self.base && new_i - self.base < BRANCHING {
            self.i = new_i;
            return;
        }

        self.i = new_i;
        let size = self.vec.len();
        if new_i == size {
            // array_for is only defined below size; the end position reuses the last leaf,
            // aligned the same way Cursor::end aligns it.
            self.base = size - (size & MASK);
            self.leaf = Some(self.vec.array_for(size - 1).as_leaf().as_slice());
        } else {
            self.base = new_i - (new_i & MASK);
            self.leaf = Some(self.vec.array_for(new_i).as_leaf().as_slice());
        }
    }

    /// Signed distance from `self` to `other`, in logical positions.
    pub fn distance_to(&self, other: &Cursor<'_, T>) -> isize {
        other.i as isize - self.i as isize
    }
}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.i == other.i
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::vector::Vector;

    fn sample(n: usize) -> Vector<usize> {
        (0..n).collect()
    }

    #[test]
    fn begin_equals_end_when_empty() {
        let v: Vector<i32> = Vector::new();
        assert_eq!(v.begin(), v.end());
    }

    #[test]
    fn distance_matches_len() {
        let v = sample(200);
        assert_eq!(v.begin().distance_to(&v.end()), v.len() as isize);
    }

    #[test]
    fn advance_from_begin_matches_indexing() {
        let v = sample(200);
        for k in 0..v.len() {
            let mut c = v.begin();
            c.advance(k as isize);
            assert_eq!(*c.get(), k);
        }
    }

    #[test]
    fn step_by_one_forward_matches_indexing() {
        let v = sample(200);
        let mut c = v.begin();
        for expected in 0..v.len() {
            assert_eq!(*c.get(), expected);
            c.advance(1);
        }
        assert_eq!(c, v.end());
    }

    #[test]
    fn step_by_one_backward_matches_indexing() {
        let v = sample(200);
        let mut c = v.end();
        for expected in (0..v.len()).rev() {
            c.advance(-1);
            assert_eq!(*c.get(), expected);
        }
        assert_eq!(c, v.begin());
    }

    #[test]
    #[should_panic]
    fn dereferencing_end_panics() {
        let v = sample(10);
        let _ = v.end().get();
    }

    #[test]
    #[should_panic]
    fn advancing_past_end_panics() {
        let v = sample(10);
        let mut c = v.end();
        c.advance(1);
    }

    #[test]
    fn crosses_leaf_boundaries_both_directions() {
        // 100 elements span several leaves in the main tree plus the tail; walk across the
        // whole thing forward then backward to exercise every base/leaf refetch.
        let v = sample(100);
        let mut c = v.begin();
        let mut i = 0;
        while c != v.end() {
            assert_eq!(*c.get(), i);
            c.advance(1);
            i += 1;
        }
        while c != v.begin() {
            c.advance(-1);
            i -= 1;
            assert_eq!(*c.get(), i);
        }
    }
}
