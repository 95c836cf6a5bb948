use eyre::Result;

use super::check::EqualsCheck;
use super::element::same_object;
use super::error::require;

/// Checks that every element of `a` has an equal counterpart in `b` and vice versa.
///
/// The check is invoked as `check(a0, b0)` for the first pass and as `check(b0, a0)` for the
/// second one, it must be symmetric for the result to be a true set equivalence.
/// Cardinality is ignored: duplicates only need to find *some* counterpart.
/// The comparison takes O(|a| * |b|) checks since arbitrary checks can't be hashed.
/// `a` and `b` can be different containers, e.g. a `HashSet` and a `BTreeSet`.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::InvalidArgument) if `check` is absent.
pub fn set_equals<'a, A, B, T, E>(a: &'a A, b: &'a B, check: Option<E>) -> Result<bool>
where
    A: ?Sized,
    B: ?Sized,
    &'a A: IntoIterator<Item = &'a T>,
    &'a B: IntoIterator<Item = &'a T>,
    T: 'a,
    E: EqualsCheck<T>,
{
    let check = require(check, "check")?;
    if same_object(a, b) {
        log::trace!("Identical sets, skipping the element-wise comparison");
        return Ok(true);
    }
    Ok(sets_equal(a, b, &check))
}

pub(crate) fn sets_equal<'a, T, A, B, E>(a: A, b: B, check: &E) -> bool
where
    T: 'a + ?Sized,
    A: IntoIterator<Item = &'a T> + Clone,
    B: IntoIterator<Item = &'a T> + Clone,
    E: EqualsCheck<T> + ?Sized,
{
    let a_in_b = a
        .clone()
        .into_iter()
        .all(|x| b.clone().into_iter().any(|y| check.equals(x, y)));
    if !a_in_b {
        return false;
    }
    b.into_iter()
        .all(|y| a.clone().into_iter().any(|x| check.equals(y, x)))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashSet, VecDeque};

    use super::*;
    use crate::{Intrinsic, InvalidArgument};

    #[test]
    fn test_set_equals_requires_check() {
        let (a, b) = (HashSet::<u8>::new(), HashSet::<u8>::new());
        let err = set_equals(&a, &b, None::<fn(&u8, &u8) -> bool>).unwrap_err();
        assert!(err.downcast_ref::<InvalidArgument>().is_some());
    }

    #[test]
    fn test_set_equals_delegates_to_check() -> Result<()> {
        let a = HashSet::from(["a"]);
        let b = HashSet::from(["b"]);
        assert!(set_equals(&a, &b, Some(|_: &&str, _: &&str| true))?);
        assert!(!set_equals(&a, &b, Some(|_: &&str, _: &&str| false))?);
        Ok(())
    }

    #[test]
    fn test_set_equals_identity() -> Result<()> {
        let set = BTreeSet::from([1, 2, 3]);
        assert!(set_equals(&set, &set, Some(|_: &i32, _: &i32| false))?);
        Ok(())
    }

    #[test]
    fn test_set_equals_different_containers() -> Result<()> {
        let hashed = HashSet::from([3, 1, 2]);
        let sorted = BTreeSet::from([1, 2, 3]);
        assert!(set_equals(&hashed, &sorted, Some(Intrinsic))?);
        assert!(set_equals(&sorted, &vec![2, 2, 3, 1], Some(Intrinsic))?);
        assert!(!set_equals(&VecDeque::from([1, 2]), &sorted, Some(Intrinsic))?);
        assert!(!set_equals(&hashed, &[1, 2, 4][..], Some(Intrinsic))?);
        Ok(())
    }

    #[test]
    fn test_set_equals_overlapping_slices() -> Result<()> {
        // Same start address, different lengths
        let values = [1, 2];
        assert!(!set_equals(&values[..1], &values[..], Some(Intrinsic))?);
        Ok(())
    }

    #[test]
    fn test_set_equals_zero_sized() -> Result<()> {
        let (a, b) = (vec![(), ()], vec![(), ()]);
        assert!(!set_equals(&a[..], &b[..], Some(|_: &(), _: &()| false))?);
        assert!(set_equals(&a[..], &b[..], Some(|_: &(), _: &()| true))?);
        Ok(())
    }

    #[test]
    fn test_set_equals_empty() -> Result<()> {
        let (a, b) = (Vec::<u8>::new(), Vec::<u8>::new());
        assert!(set_equals(&a, &b, Some(Intrinsic))?);
        assert!(!set_equals(&a, &vec![1], Some(Intrinsic))?);
        assert!(!set_equals(&vec![1], &a, Some(Intrinsic))?);
        Ok(())
    }

    #[test]
    fn test_set_equals_ignores_order_and_cardinality() -> Result<()> {
        for (a, b, expected) in [
            (vec![1, 2, 3], vec![3, 2, 1], true),
            (vec![1, 1, 2], vec![2, 1], true),
            (vec![1, 2], vec![1, 2, 3], false),
            (vec![1, 2, 3], vec![1, 2], false),
            (vec![1, 2, 4], vec![1, 2, 3], false),
        ] {
            assert_eq!(set_equals(&a, &b, Some(Intrinsic))?, expected, "{a:?} vs {b:?}");
        }
        Ok(())
    }

    #[test]
    fn test_set_equals_custom_check() -> Result<()> {
        let a = ["ACGT", "tt"];
        let b = ["TT", "acgt"];
        let check = |x: &&str, y: &&str| x.eq_ignore_ascii_case(y);
        assert!(set_equals(&a[..], &b[..], Some(check))?);
        assert!(!set_equals(&a[..], &b[..], Some(Intrinsic))?);
        Ok(())
    }

    #[test]
    fn test_set_equals_invokes_check_in_both_orders() -> Result<()> {
        let calls = RefCell::new(Vec::new());
        let check = |x: &char, y: &char| {
            calls.borrow_mut().push((*x, *y));
            x == y
        };
        assert!(set_equals(&vec!['a'], &vec!['a'], Some(check))?);
        assert_eq!(*calls.borrow(), vec![('a', 'a'), ('a', 'a')]);

        calls.borrow_mut().clear();
        assert!(!set_equals(&vec!['a'], &vec!['b'], Some(check))?);
        assert_eq!(*calls.borrow(), vec![('a', 'b')]);
        Ok(())
    }

    #[test]
    fn test_set_equals_asymmetric_check() -> Result<()> {
        // Holds in one direction only
        let check = |x: &i32, y: &i32| x <= y;
        assert!(!set_equals(&vec![1], &vec![2], Some(check))?);
        assert!(set_equals(&vec![2], &vec![2], Some(check))?);
        Ok(())
    }
}
