use eyre::Result;
use itertools::Itertools;

use super::check::EqualsCheck;
use super::element::{elements_equal, same_object};
use super::error::require;

/// Checks that `a` and `b` have the same length and equal elements at every position.
///
/// Elements are compared with [`element_equals`](crate::element_equals) semantics, so the same
/// element reference is equal to itself without invoking the check. Stops at the first mismatch.
/// `a` and `b` can be different containers, e.g. a `Vec` and a `VecDeque`.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::InvalidArgument) if `check` is absent.
pub fn sequence_equals<'a, A, B, T, E>(a: &'a A, b: &'a B, check: Option<E>) -> Result<bool>
where
    A: ?Sized,
    B: ?Sized,
    &'a A: IntoIterator<Item = &'a T>,
    &'a B: IntoIterator<Item = &'a T>,
    <&'a A as IntoIterator>::IntoIter: ExactSizeIterator,
    <&'a B as IntoIterator>::IntoIter: ExactSizeIterator,
    T: 'a,
    E: EqualsCheck<T>,
{
    let check = require(check, "check")?;
    if same_object(a, b) {
        log::trace!("Identical sequences, skipping the element-wise comparison");
        return Ok(true);
    }
    Ok(positions_equal(a, b, |x, y| elements_equal(Some(x), Some(y), &check)))
}

/// Same as [`sequence_equals`], but elements themselves might be absent.
/// Absent elements are equal to each other and never equal to present ones.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::InvalidArgument) if `check` is absent.
pub fn nullable_sequence_equals<'a, A, B, T, E>(a: &'a A, b: &'a B, check: Option<E>) -> Result<bool>
where
    A: ?Sized,
    B: ?Sized,
    &'a A: IntoIterator<Item = &'a Option<T>>,
    &'a B: IntoIterator<Item = &'a Option<T>>,
    <&'a A as IntoIterator>::IntoIter: ExactSizeIterator,
    <&'a B as IntoIterator>::IntoIter: ExactSizeIterator,
    T: 'a,
    E: EqualsCheck<T>,
{
    let check = require(check, "check")?;
    if same_object(a, b) {
        log::trace!("Identical sequences, skipping the element-wise comparison");
        return Ok(true);
    }
    Ok(positions_equal(a, b, |x, y| {
        elements_equal(x.as_ref(), y.as_ref(), &check)
    }))
}

fn positions_equal<I, J, F>(a: I, b: J, mut equal: F) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    J::IntoIter: ExactSizeIterator,
    F: FnMut(I::Item, J::Item) -> bool,
{
    let (a, b) = (a.into_iter(), b.into_iter());
    if a.len() != b.len() {
        log::trace!("Sequence lengths differ: {} vs {}", a.len(), b.len());
        return false;
    }
    a.zip_eq(b).all(|(x, y)| equal(x, y))
}
