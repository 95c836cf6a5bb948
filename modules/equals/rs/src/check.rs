use std::marker::PhantomData;

/// A trait representing a caller-defined notion of equality.
/// It replaces the intrinsic `PartialEq` of `T` for the duration of a single comparison.
///
/// No guarantees are assumed about the check: it doesn't have to be reflexive, symmetric, or
/// transitive. Set and map comparisons invoke it in both argument orders, so a non-symmetric
/// check yields non-symmetric results there.
pub trait EqualsCheck<T: ?Sized> {
    /// Determines if two values should be treated as equal.
    ///
    /// # Arguments
    ///
    /// * `first` - The first value to compare.
    /// * `second` - The second value to compare.
    fn equals(&self, first: &T, second: &T) -> bool;
}

/// An implementation of the `EqualsCheck` trait for any function that takes two references to `T`
/// and returns a `bool`.
impl<T, F> EqualsCheck<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, first: &T, second: &T) -> bool {
        self(first, second)
    }
}

/// Falls back to the intrinsic `PartialEq` of `T`.
#[derive(Copy, Clone, Default, Debug)]
pub struct Intrinsic;

impl<T: PartialEq + ?Sized> EqualsCheck<T> for Intrinsic {
    #[inline(always)]
    fn equals(&self, first: &T, second: &T) -> bool {
        first == second
    }
}

/// Compares values by the keys extracted from them, e.g. a subset of their fields.
pub struct ByKey<F, K> {
    extract: F,
    _phantom: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new(extract: F) -> Self {
        Self {
            extract,
            _phantom: Default::default(),
        }
    }
}

impl<T, F, K> EqualsCheck<T> for ByKey<F, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: PartialEq,
{
    #[inline]
    fn equals(&self, first: &T, second: &T) -> bool {
        (self.extract)(first) == (self.extract)(second)
    }
}

/// Shorthand for [`ByKey::new`].
pub fn by_key<T: ?Sized, F: Fn(&T) -> K, K: PartialEq>(extract: F) -> ByKey<F, K> {
    ByKey::new(extract)
}
