//! Tree node representation shared by reference count between [`Vector`](crate::vector::Vector)
//! values.
//!
//! A node is a two-armed sum type: a leaf holding up to [`BRANCHING`] elements, or an inner
//! node holding up to [`BRANCHING`] child handles. The branching is exhaustively known ahead of
//! time, so this is a plain `enum` rather than a trait object — there is nothing here that
//! benefits from dynamic dispatch.

use std::sync::Arc;

use arrayvec::ArrayVec;

/// Log2 of the branching factor.
pub(crate) const SHIFT_BITS: u32 = 5;

/// Number of slots in every leaf and every inner node.
pub(crate) const BRANCHING: usize = 1 << SHIFT_BITS;

/// Mask selecting the low `SHIFT_BITS` bits of an index.
pub(crate) const MASK: usize = BRANCHING - 1;

/// Fixed-capacity array of child handles. Unused trailing slots are `None` and are never
/// dereferenced; `array_for` only ever reads slots below the logical boundary of the tree.
pub(crate) type Children<T> = [Option<Arc<Node<T>>>; BRANCHING];

/// A leaf block: up to [`BRANCHING`] elements, tracked by length rather than by a sentinel
/// value. This sidesteps the "dead slot" problem entirely — there is no uninitialized or
/// default-populated tail to accidentally observe.
pub(crate) type Leaf<T> = ArrayVec<T, BRANCHING>;

/// An inner node: up to [`BRANCHING`] child handles.
#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) children: Children<T>,
}

impl<T> Inner<T> {
    pub(crate) fn empty() -> Self {
        Inner {
            children: std::array::from_fn(|_| None),
        }
    }
}

impl<T> Clone for Inner<T> {
    fn clone(&self) -> Self {
        // Cloning an Inner only ever bumps the refcounts of its children (Arc::clone), it never
        // deep-copies a subtree. This is the "allocate a new inner node cloning parent's
        // children" step from the append algorithm.
        Inner {
            children: self.children.clone(),
        }
    }
}

#[derive(Debug)]
pub(crate) enum Node<T> {
    Leaf(Leaf<T>),
    Inner(Inner<T>),
}

impl<T> Node<T> {
    pub(crate) fn empty_inner() -> Arc<Self> {
        Arc::new(Node::Inner(Inner::empty()))
    }

    pub(crate) fn empty_leaf() -> Arc<Self> {
        Arc::new(Node::Leaf(Leaf::new()))
    }

    pub(crate) fn as_leaf(&self) -> &Leaf<T> {
        match self {
            Node::Leaf(leaf) => leaf,
            Node::Inner(_) => unreachable!("expected a leaf node"),
        }
    }

    pub(crate) fn as_inner(&self) -> &Inner<T> {
        match self {
            Node::Inner(inner) => inner,
            Node::Leaf(_) => unreachable!("expected an inner node"),
        }
    }
}

/// Builds a fresh spine of inner nodes rooted at `level`, whose sole populated path leads,
/// slot 0 all the way down, to `tail` as the leaf at level [`SHIFT_BITS`].
///
/// `level` names the level of the node being *constructed*: when `level == SHIFT_BITS` the
/// constructed node's slot 0 holds `tail` directly (this is the lowest inner level, the one
/// whose children are leaves); otherwise slot 0 holds a recursively constructed spine one level
/// further down.
pub(crate) fn new_path<T>(level: u32, tail: Arc<Node<T>>) -> Arc<Node<T>> {
    let mut inner = Inner::empty();
    inner.children[0] = Some(if level == SHIFT_BITS {
        tail
    } else {
        new_path(level - SHIFT_BITS, tail)
    });
    Arc::new(Node::Inner(inner))
}

/// Grafts `tail` into the main tree along the spine leading to the next insertion point,
/// cloning (shallow: refcount bumps only) every sibling subtree that isn't on that spine.
///
/// `parent` is the inner node at `level`; `size` is the vector's size *before* this push.
pub(crate) fn push_tail<T>(
    level: u32,
    parent: &Inner<T>,
    size: usize,
    tail: Arc<Node<T>>,
) -> Inner<T> {
    let mut next = parent.clone();
    let idx = ((size - 1) >> level) & MASK;

    let replacement = if level == SHIFT_BITS {
        tail
    } else {
        match &parent.children[idx] {
            Some(child) => {
                let grown = push_tail(level - SHIFT_BITS, child.as_inner(), size, tail);
                Arc::new(Node::Inner(grown))
            }
            None => new_path(level - SHIFT_BITS, tail),
        }
    };

    next.children[idx] = Some(replacement);
    next
}
