use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use crate::categories::Category;

/// A lookup table holding exactly one value for every member of `K`.
///
/// The only way to build one is to supply a value for each member in turn, so a
/// `CategoryMap` is total by construction and lookups cannot fail.
#[derive(Clone, PartialEq)]
pub struct CategoryMap<K: Category, V> {
    values: Box<[V]>,
    _category: PhantomData<K>,
}

impl<K: Category, V> CategoryMap<K, V> {
    /// Build the map by calling `f` once per member, in ordinal order.
    pub fn from_fn(mut f: impl FnMut(K) -> V) -> Self {
        Self {
            values: K::ALL.iter().map(|member| f(*member)).collect(),
            _category: PhantomData,
        }
    }

    /// Build the map by calling `f` once per member, in ordinal order, stopping at
    /// the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(K) -> Result<V, E>) -> Result<Self, E> {
        let values = K::ALL
            .iter()
            .map(|member| f(*member))
            .collect::<Result<Box<[V]>, E>>()?;
        Ok(Self {
            values,
            _category: PhantomData,
        })
    }

    pub fn get(&self, key: K) -> &V {
        &self.values[key.ordinal()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        K::ALL.iter().copied().zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Category, V> Index<K> for CategoryMap<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        self.get(key)
    }
}

impl<K: Category, V: fmt::Debug> fmt::Debug for CategoryMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(member, value)| (member.name(), value)))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<K: Category, V: serde::Serialize> serde::Serialize for CategoryMap<K, V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(member, value)| (member.name(), value)))
    }
}
