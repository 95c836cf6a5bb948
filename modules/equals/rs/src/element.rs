use eyre::Result;

use super::check::EqualsCheck;
use super::error::require;

/// Compares two possibly absent values with a custom equality check.
///
/// Values that are the same reference (or both absent) are equal without invoking the check.
/// Zero-sized values share addresses, so they always go through the check.
/// An absent value is never equal to a present one, the check isn't invoked either.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::InvalidArgument) if `check` is absent.
pub fn element_equals<T, E>(a: Option<&T>, b: Option<&T>, check: Option<E>) -> Result<bool>
where
    T: ?Sized,
    E: EqualsCheck<T>,
{
    let check = require(check, "check")?;
    Ok(elements_equal(a, b, &check))
}

#[inline]
pub(crate) fn elements_equal<T, E>(a: Option<&T>, b: Option<&T>, check: &E) -> bool
where
    T: ?Sized,
    E: EqualsCheck<T> + ?Sized,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => same_object(a, b) || check.equals(a, b),
        _ => false,
    }
}

/// Both references point to the same object.
/// Zero-sized objects have no identity: distinct ones may share an address.
#[inline]
pub(crate) fn same_object<A: ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    let size = std::mem::size_of_val(a);
    size != 0 && size == std::mem::size_of_val(b) && std::ptr::addr_eq(a, b)
}
