#![cfg(kani)]

use persistent_vector::Vector;

#[kani::proof]
fn push_back_increases_len_and_is_visible() {
    let x: i32 = kani::any();

    let v0: Vector<i32> = Vector::new();
    let v1 = v0.push_back(x);

    assert_eq!(v1.len(), 1);
    assert_eq!(*v1.get(0), x);
}

#[kani::proof]
#[kani::unwind(5)]
fn push_back_does_not_disturb_the_vector_it_was_called_on() {
    let a: i32 = kani::any();
    let b: i32 = kani::any();
    let c: i32 = kani::any();
    let extra: i32 = kani::any();

    let v0: Vector<i32> = Vector::new().push_back(a).push_back(b).push_back(c);
    let v1 = v0.push_back(extra);

    assert_eq!(v0.len(), 3);
    assert_eq!(v1.len(), 4);
    assert_eq!(*v0.get(0), a);
    assert_eq!(*v0.get(1), b);
    assert_eq!(*v0.get(2), c);
    assert_eq!(*v1.get(0), a);
    assert_eq!(*v1.get(1), b);
    assert_eq!(*v1.get(2), c);
    assert_eq!(*v1.get(3), extra);
}

/// Exercises the tail-full, root-not-overflowing path of `push_back`: the 33rd push grafts
/// the 32-element tail into the main tree. Bounded to the one shift this harness can afford,
/// since every push allocates and `kani::any()` elements keep each leaf slot symbolic.
#[kani::proof]
#[kani::unwind(34)]
fn push_back_across_the_first_tail_to_tree_boundary() {
    let mut v: Vector<u8> = Vector::new();
    let mut xs = [0u8; 33];
    for slot in xs.iter_mut() {
        *slot = kani::any();
        v = v.push_back(*slot);
    }

    assert_eq!(v.len(), 33);
    for (i, x) in xs.iter().enumerate() {
        assert_eq!(*v.get(i), *x);
    }
}
