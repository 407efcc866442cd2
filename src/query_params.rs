use crate::codec;
use crate::coerce;
use crate::collection::{Collection, IntoIter, Iter};
use crate::compat::{String, Vec};
use crate::date_time;
use crate::error::Result;
use crate::value::QueryValue;
use crate::DateTime;

/// The parameters of a URI query string.
///
/// Keys are unique and keep their insertion order. Values are strings or
/// nested maps (from keys such as `filter[tag]=x`). Parsing and
/// serialization round-trip flat parameters, and the typed getters read
/// values leniently without failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Collection<QueryValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self {
            params: Collection::new(),
        }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse_query_string(query: &str) -> Self {
        Self {
            params: codec::decode(query),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Check if any parameter has this value. Nested maps compare structurally.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        QueryValue: PartialEq<Q>,
        Q: ?Sized,
    {
        self.params.contains_value(value)
    }

    /// Read-only view of the underlying collection.
    pub fn queries(&self) -> &Collection<QueryValue> {
        &self.params
    }

    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`](crate::Error::KeyNotFound) if the parameter is absent.
    pub fn get(&self, key: &str) -> Result<&QueryValue> {
        self.params.get(key)
    }

    pub fn try_get<'a>(&'a self, key: &str, default: &'a QueryValue) -> &'a QueryValue {
        self.params.try_get(key, default)
    }

    /// Get a parameter as a string. Nested maps read as the empty string.
    pub fn get_as_string(&self, key: &str, default: &str) -> String {
        self.params
            .get(key)
            .map_or_else(|_| String::from(default), coerce::to_string)
    }

    /// Get a parameter as an integer from its leading number, or `0` if it has none.
    pub fn get_as_integer(&self, key: &str, default: i64) -> i64 {
        self.params.get(key).map_or(default, coerce::to_int)
    }

    /// Get a parameter as a float from its leading number, or `0.0` if it has none.
    pub fn get_as_float(&self, key: &str, default: f64) -> f64 {
        self.params.get(key).map_or(default, coerce::to_float)
    }

    /// Get a parameter as a flag.
    ///
    /// | value | result |
    /// |---|---|
    /// | `""`, `"0"` | `false` |
    /// | `false`, `off`, `no` (any case, trimmed) | `false` |
    /// | any other string | `true` |
    /// | empty map | `false` |
    /// | non-empty map | `true` |
    pub fn get_as_bool(&self, key: &str, default: bool) -> bool {
        self.params.get(key).map_or(default, coerce::to_bool)
    }

    /// Get a parameter as a map. A string value becomes `{"0": value}`.
    pub fn get_as_array(&self, key: &str, default: Collection<QueryValue>) -> Collection<QueryValue> {
        self.params.get(key).map_or(default, coerce::to_array)
    }

    /// Get a parameter as a date-time, or the current moment if it is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`](crate::Error::InvalidDateTime) if the
    /// value is present but cannot be parsed.
    #[cfg(feature = "std")]
    pub fn get_as_date_time(&self, key: &str) -> Result<DateTime> {
        self.get_as_date_time_or(key, date_time::now())
    }

    /// Get a parameter as a date-time, or `default` if it is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`](crate::Error::InvalidDateTime) if the
    /// value is present but cannot be parsed.
    pub fn get_as_date_time_or(&self, key: &str, default: DateTime) -> Result<DateTime> {
        let value = self.get_as_string(key, "");
        if value.is_empty() {
            return Ok(default);
        }
        date_time::parse(&value)
    }

    /// Add a new parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`](crate::Error::DuplicateKey) if the
    /// parameter already exists; the stored value is left unchanged.
    pub fn add(&mut self, key: &str, value: impl Into<QueryValue>) -> Result<&mut Self> {
        self.params.add(key, value.into())?;
        Ok(self)
    }

    /// Add a new parameter if it is absent. Returns whether it was added.
    pub fn try_add(&mut self, key: &str, value: impl Into<QueryValue>) -> bool {
        self.params.try_add(key, value.into())
    }

    /// Add or replace a parameter.
    pub fn set(&mut self, key: &str, value: impl Into<QueryValue>) -> &mut Self {
        self.params.set_element(key, value.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`](crate::Error::KeyNotFound) if the parameter is absent.
    pub fn remove(&mut self, key: &str) -> Result<&mut Self> {
        self.params.remove(key)?;
        Ok(self)
    }

    pub fn try_remove(&mut self, key: &str) -> bool {
        self.params.try_remove(key)
    }

    pub fn count(&self) -> usize {
        self.params.count()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, QueryValue> {
        self.params.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.params.keys()
    }

    pub fn to_array(&self) -> Vec<(String, QueryValue)> {
        self.params.to_array()
    }

    /// Convert to query string with leading `?`, or empty string if no parameters.
    pub fn serialize(&self) -> String {
        let query = codec::encode(&self.params);
        if query.is_empty() {
            return query;
        }
        let mut result = String::with_capacity(query.len() + 1);
        result.push('?');
        result.push_str(&query);
        result
    }
}

/// Query string without leading `?`.
impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&codec::encode(&self.params))
    }
}

/// # Panics
///
/// Panics if the parameter is absent, like [`Collection`] indexing.
impl core::ops::Index<&str> for QueryParams {
    type Output = QueryValue;

    fn index(&self, key: &str) -> &QueryValue {
        &self.params[key]
    }
}

impl From<Collection<QueryValue>> for QueryParams {
    fn from(params: Collection<QueryValue>) -> Self {
        Self { params }
    }
}

impl From<QueryParams> for Collection<QueryValue> {
    fn from(query: QueryParams) -> Self {
        query.params
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse_query_string(s)
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse_query_string(&s)
    }
}

impl core::str::FromStr for QueryParams {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse_query_string(s))
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<QueryValue>> Extend<(K, V)> for QueryParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.params
            .extend(iter.into_iter().map(|(k, v)| (k, v.into())));
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, &'a QueryValue);
    type IntoIter = Iter<'a, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, QueryValue);
    type IntoIter = IntoIter<QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}
