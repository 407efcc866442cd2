use crate::collection::Collection;
use crate::compat::{String, ToString};

/// A query parameter value: either a single string or a nested map of values.
///
/// `a=1` decodes to a `String`, while `a[b]=1` decodes to a `Map` under `a`
/// holding `b => "1"`. Nesting can go arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryValue {
    String(String),
    Map(Collection<QueryValue>),
}

impl QueryValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&Collection<QueryValue>> {
        match self {
            Self::String(_) => None,
            Self::Map(map) => Some(map),
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }
}

impl Default for QueryValue {
    fn default() -> Self {
        Self::String(String::new())
    }
}

/// A map renders as `Array`, the way a scalar cast of a nested parameter reads.
impl core::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Map(_) => f.write_str("Array"),
        }
    }
}

impl PartialEq<str> for QueryValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for QueryValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for QueryValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<char> for QueryValue {
    fn from(c: char) -> Self {
        Self::String(c.to_string())
    }
}

/// `true` becomes `"1"` and `false` the empty string.
impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        Self::String(if b { "1" } else { "" }.to_string())
    }
}

impl From<Collection<QueryValue>> for QueryValue {
    fn from(map: Collection<QueryValue>) -> Self {
        Self::Map(map)
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(n: $ty) -> Self {
                    Self::String(n.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
