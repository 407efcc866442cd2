use crate::compat::{String, ToString, Vec, vec};
use crate::error::{Error, Result};
use core::iter::FusedIterator;

/// An insertion-ordered collection of values keyed by unique strings.
///
/// Entries are kept in a flat vector, so lookups are linear in the number of
/// entries. That fits the sizes this type is built for (the parameters of a
/// single query string) and keeps iteration order exact.
///
/// Every operation that can fail has a strict form returning [`Result`] and a
/// `try_` form that reports the outcome as a `bool` or falls back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Collection<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Collection<V> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn find(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check if an entry exists for exactly this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Check if any entry holds a value equal to `value`.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter().any(|(_, v)| v == value)
    }

    /// Get the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no entry exists for `key`.
    pub fn get(&self, key: &str) -> Result<&V> {
        self.find(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Get a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no entry exists for `key`.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Get the value stored under `key`, or `default` if there is none.
    pub fn try_get<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.find(key).unwrap_or(default)
    }

    /// Insert a new entry at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if an entry already exists for `key`.
    /// The collection is left unchanged.
    pub fn add(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        if self.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        self.entries.push((key, value));
        Ok(())
    }

    /// Insert a new entry if `key` is absent. Returns whether it was inserted.
    pub fn try_add(&mut self, key: impl Into<String>, value: V) -> bool {
        self.add(key, value).is_ok()
    }

    /// Insert or overwrite the entry for `key`, returning the previous value.
    ///
    /// An overwritten entry keeps its position.
    pub fn set_element(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get the value for `key`, inserting `default()` at the end if absent.
    pub fn get_or_insert_with(
        &mut self,
        key: impl Into<String>,
        default: impl FnOnce() -> V,
    ) -> &mut V {
        let key = key.into();
        let index = match self.position(&key) {
            Some(index) => index,
            None => {
                self.entries.push((key, default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Remove the entry for `key` and return its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no entry exists for `key`.
    pub fn remove(&mut self, key: &str) -> Result<V> {
        self.position(key)
            .map(|index| self.entries.remove(index).1)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Remove the entry for `key` if present. Returns whether one was removed.
    pub fn try_remove(&mut self, key: &str) -> bool {
        self.remove(key).is_ok()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Copy the entries out as plain `(key, value)` pairs in insertion order.
    pub fn to_array(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.entries.clone()
    }
}

/// Indexing mirrors [`Collection::get`].
///
/// # Panics
///
/// Panics if no entry exists for the key, like `HashMap` indexing does.
impl<V> core::ops::Index<&str> for Collection<V> {
    type Output = V;

    #[allow(clippy::panic)]
    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if no entry exists for the key. Use [`Collection::set_element`] to insert.
impl<V> core::ops::IndexMut<&str> for Collection<V> {
    #[allow(clippy::panic)]
    fn index_mut(&mut self, key: &str) -> &mut V {
        match self.get_mut(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Later pairs overwrite earlier ones with the same key.
impl<K: Into<String>, V> FromIterator<(K, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Collection<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set_element(key, value);
        }
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for Collection<V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Borrowing iterator over the entries of a [`Collection`], in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: core::slice::Iter<'a, (String, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// Owning iterator over the entries of a [`Collection`], in insertion order.
#[derive(Debug)]
pub struct IntoIter<V> {
    inner: vec::IntoIter<(String, V)>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}
