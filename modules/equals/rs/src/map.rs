use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use eyre::Result;

use super::check::EqualsCheck;
use super::element::{elements_equal, same_object};
use super::error::require;
use super::set::sets_equal;

/// Trait for key-value containers with unique keys that can be looked up by their intrinsic
/// equality.
#[allow(clippy::len_without_is_empty)]
pub trait Mapping {
    type Key;
    type Value;

    /// Number of entries.
    fn len(&self) -> usize;

    /// All keys, in an unspecified order.
    fn keys(&self) -> impl Iterator<Item = &Self::Key> + Clone;

    /// Value associated with the exact key, if any.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys(&self) -> impl Iterator<Item = &K> + Clone {
        HashMap::keys(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn keys(&self) -> impl Iterator<Item = &K> + Clone {
        BTreeMap::keys(self)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

/// Checks that `a` and `b` have equivalent key sets and map every key to equal values.
///
/// Key sets are compared with [`set_equals`](crate::set_equals) semantics under `key_check`.
/// Values are then looked up by the keys of `a` using the intrinsic key equality of the mapping
/// and compared with [`element_equals`](crate::element_equals) semantics under `value_check`.
/// A key of `a` that matched some key of `b` only through `key_check` has no value in `b` and
/// makes the mappings unequal.
/// `a` and `b` can be different mappings, e.g. a `HashMap` and a `BTreeMap`.
///
/// # Errors
///
/// Returns [`InvalidArgument`](crate::InvalidArgument) if `key_check` or `value_check` is absent.
pub fn map_equals<A, B, KE, VE>(
    a: &A,
    b: &B,
    key_check: Option<KE>,
    value_check: Option<VE>,
) -> Result<bool>
where
    A: Mapping + ?Sized,
    B: Mapping<Key = A::Key, Value = A::Value> + ?Sized,
    KE: EqualsCheck<A::Key>,
    VE: EqualsCheck<A::Value>,
{
    let key_check = require(key_check, "key_check")?;
    let value_check = require(value_check, "value_check")?;
    if same_object(a, b) {
        log::trace!("Identical mappings, skipping the entry-wise comparison");
        return Ok(true);
    }
    if a.len() != b.len() {
        log::trace!("Mapping sizes differ: {} vs {}", a.len(), b.len());
        return Ok(false);
    }
    if !sets_equal(a.keys(), b.keys(), &key_check) {
        return Ok(false);
    }

    for key in a.keys() {
        let other = b.lookup(key);
        if other.is_none() {
            log::trace!("Key is equivalent to a key of the other mapping, but has no exact match");
            return Ok(false);
        }
        if !elements_equal(a.lookup(key), other, &value_check) {
            return Ok(false);
        }
    }
    Ok(true)
}
