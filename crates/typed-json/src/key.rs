//! Lookup path segments.

use std::fmt;

/// One segment of a lookup path: an object member name or an array index.
///
/// Names and indices are deliberately distinct: `Key::Name("0")` can match
/// an object member spelled `"0"`, while `Key::Index(0)` never matches an
/// object at all (indices are for arrays only).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Index(i64),
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Index(value as i64)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Index(value as i64)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Builds a `Vec<Key>` from mixed name/index literals.
///
/// ```
/// use typed_json::{path, Key};
///
/// assert_eq!(
///     path!["a", 0, "b"],
///     vec![Key::Name("a".into()), Key::Index(0), Key::Name("b".into())]
/// );
/// assert_eq!(path![], Vec::<Key>::new());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        ::std::vec::Vec::<$crate::Key>::new()
    };
    ($($key:expr),+ $(,)?) => {
        vec![$($crate::Key::from($key)),+]
    };
}
