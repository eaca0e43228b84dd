#![no_std]

use multi_zip::prelude::*;

// These tests ensure that the traits provided by `multi-zip` work in a no std environment.

#[test]
fn zip_tuple_3() {
    let a = [1, 2];
    let b = ["hello", "world"];
    let c = [1.0, 2.0];
    let mut s = (a, b, c).zip().into_iter();

    assert_eq!(s.next(), Some((1, "hello", 1.0)));
    assert_eq!(s.next(), Some((2, "world", 2.0)));
    assert_eq!(s.next(), None);
}

#[test]
fn zip_array_3() {
    use multi_zip::iter::Zip;

    let a = [1, 1];
    let b = [2, 2];
    let c = [3, 3];
    let mut s = Zip::zip([a, b, c]).into_iter();

    assert_eq!(s.next(), Some([1, 2, 3]));
    assert_eq!(s.next(), Some([1, 2, 3]));
    assert_eq!(s.next(), None);
}
