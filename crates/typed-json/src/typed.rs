//! The typed value wrapper.

use std::fmt;

use serde_json::{Map, Value};
use typed_json_pointer::split_pointer_relaxed;

use crate::Key;

/// An owned JSON value, or nothing.
///
/// Wraps the result of parsing a JSON document so nested values can be
/// reached through chained lookups without type-checking every level:
///
/// ```
/// use typed_json::{path, TypedJson};
///
/// let doc = TypedJson::parse(r#"{ "a": [{ "b": "c" }] }"#);
/// assert_eq!(doc.get(path!["a", 0, "b"]).string(), Some("c"));
/// ```
///
/// Unparsable input, missing keys, out-of-range indices, and wrong-kind
/// lookups all produce the absent wrapper, which is itself a valid value
/// to keep querying. Nothing here returns an error or panics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedJson {
    value: Option<Value>,
}

impl TypedJson {
    /// Wraps a value as-is. A `string` payload is not parsed; use
    /// [`TypedJson::parse`] for that.
    pub fn wrap(value: Value) -> Self {
        Self { value: Some(value) }
    }

    /// The wrapper holding nothing.
    pub fn absent() -> Self {
        Self { value: None }
    }

    /// Parses `text` as JSON. Invalid JSON yields the absent wrapper
    /// rather than an error, so a bad document reads the same as a
    /// missing one.
    ///
    /// ```
    /// use typed_json::TypedJson;
    ///
    /// assert_eq!(TypedJson::parse("9000").number(), Some(9000.0));
    /// assert!(TypedJson::parse("nope").is_absent());
    /// ```
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => Self::wrap(value),
            Err(_) => Self::absent(),
        }
    }

    /// Borrowed view of this wrapper. All read operations are also
    /// available directly on `TypedJson`.
    pub fn as_ref(&self) -> TypedRef<'_> {
        TypedRef {
            value: self.value.as_ref(),
        }
    }

    /// The underlying value. Prefer the typed accessors.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consumes the wrapper, returning the underlying value.
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    pub fn is_string(&self) -> bool {
        self.as_ref().is_string()
    }

    pub fn is_number(&self) -> bool {
        self.as_ref().is_number()
    }

    pub fn is_boolean(&self) -> bool {
        self.as_ref().is_boolean()
    }

    pub fn is_null(&self) -> bool {
        self.as_ref().is_null()
    }

    pub fn is_absent(&self) -> bool {
        self.as_ref().is_absent()
    }

    pub fn is_array(&self) -> bool {
        self.as_ref().is_array()
    }

    pub fn is_object(&self) -> bool {
        self.as_ref().is_object()
    }

    pub fn string(&self) -> Option<&str> {
        self.as_ref().string()
    }

    pub fn number(&self) -> Option<f64> {
        self.as_ref().number()
    }

    pub fn boolean(&self) -> Option<bool> {
        self.as_ref().boolean()
    }

    pub fn array(&self) -> Option<&[Value]> {
        self.as_ref().array()
    }

    pub fn object(&self) -> Option<&Map<String, Value>> {
        self.as_ref().object()
    }

    /// See [`TypedRef::get`].
    pub fn get<I>(&self, path: I) -> TypedRef<'_>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        self.as_ref().get(path)
    }

    /// See [`TypedRef::find`].
    pub fn find(&self, pointer: &str) -> TypedRef<'_> {
        self.as_ref().find(pointer)
    }

    pub fn keys(&self) -> Vec<Key> {
        self.as_ref().keys()
    }

    pub fn values(&self) -> Vec<TypedRef<'_>> {
        self.as_ref().values()
    }

    pub fn stringify(&self) -> Option<String> {
        self.as_ref().stringify()
    }
}

impl From<Value> for TypedJson {
    fn from(value: Value) -> Self {
        Self::wrap(value)
    }
}

impl fmt::Display for TypedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

/// A borrowed view into a [`TypedJson`] or any [`serde_json::Value`].
///
/// Lookups hand out fresh views of the reached subvalue without copying
/// it, so walking a path allocates nothing. `Copy`, so views can be
/// passed around freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypedRef<'a> {
    value: Option<&'a Value>,
}

impl<'a> TypedRef<'a> {
    /// View of a borrowed value.
    pub fn wrap(value: &'a Value) -> Self {
        Self { value: Some(value) }
    }

    /// The view of nothing.
    pub fn absent() -> Self {
        Self { value: None }
    }

    /// The underlying value. Prefer the typed accessors.
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// `true` if this view holds a string.
    pub fn is_string(&self) -> bool {
        matches!(self.value, Some(Value::String(_)))
    }

    /// `true` if this view holds a number.
    pub fn is_number(&self) -> bool {
        matches!(self.value, Some(Value::Number(_)))
    }

    /// `true` if this view holds a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self.value, Some(Value::Bool(_)))
    }

    /// `true` if this view holds `null`. There is no `null()` accessor
    /// since `null` has only one possible value.
    pub fn is_null(&self) -> bool {
        matches!(self.value, Some(Value::Null))
    }

    /// `true` if this view holds nothing at all.
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// `true` if this view holds an array.
    pub fn is_array(&self) -> bool {
        matches!(self.value, Some(Value::Array(_)))
    }

    /// `true` if this view holds an object. An object whose keys happen
    /// to spell out `0, 1, 2, ...` is still an object, never an array.
    pub fn is_object(&self) -> bool {
        matches!(self.value, Some(Value::Object(_)))
    }

    /// The string payload, or `None` if this is not a string.
    pub fn string(&self) -> Option<&'a str> {
        match self.value {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload as an `f64`, or `None` if this is not a
    /// number.
    pub fn number(&self) -> Option<f64> {
        match self.value {
            Some(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// The boolean payload, or `None` if this is not a boolean.
    pub fn boolean(&self) -> Option<bool> {
        match self.value {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// The array payload, or `None` if this is not an array. Prefer
    /// [`TypedRef::get`] for element access.
    pub fn array(&self) -> Option<&'a [Value]> {
        match self.value {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// The object payload, or `None` if this is not an object. Prefer
    /// [`TypedRef::get`] for member access.
    pub fn object(&self) -> Option<&'a Map<String, Value>> {
        match self.value {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// Walks `path` one key at a time and returns the view reached.
    ///
    /// A [`Key::Name`] steps into objects only and a [`Key::Index`] into
    /// arrays only; any mismatch, missing member, or out-of-range index
    /// makes the result absent, and the rest of the path is skipped. An
    /// empty path returns this view unchanged.
    ///
    /// ```
    /// use typed_json::{path, TypedJson};
    ///
    /// let doc = TypedJson::wrap(serde_json::json!({ "a": [{ "b": "c" }] }));
    /// assert_eq!(doc.get(path!["a", 0, "b"]).string(), Some("c"));
    /// assert_eq!(doc.get(path!["a"]).get(path![0, "b"]).string(), Some("c"));
    /// assert!(doc.get(path!["a", "0"]).is_absent());
    /// ```
    pub fn get<I>(&self, path: I) -> TypedRef<'a>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let mut current = *self;
        for key in path {
            current = current.get_key(&key.into());
            if current.is_absent() {
                break;
            }
        }
        current
    }

    /// Resolves a single key against this view. Prefer [`TypedRef::get`].
    pub fn get_key(&self, key: &Key) -> TypedRef<'a> {
        let found = match (self.value, key) {
            (Some(Value::Object(map)), Key::Name(name)) => map.get(name),
            (Some(Value::Array(items)), Key::Index(index)) => usize::try_from(*index)
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        };
        TypedRef { value: found }
    }

    /// Walks an RFC 6901 JSON Pointer and returns the view reached.
    ///
    /// Pointers may omit the leading `/`. Each token names an object
    /// member, or indexes an array when it parses as an integer; as with
    /// [`TypedRef::get`], anything unreachable is absent rather than an
    /// error.
    ///
    /// ```
    /// use typed_json::TypedJson;
    ///
    /// let doc = TypedJson::parse(r#"{ "a": [{ "b": "c" }] }"#);
    /// assert_eq!(doc.find("/a/0/b").string(), Some("c"));
    /// assert_eq!(doc.find("a/0/b").string(), Some("c"));
    /// assert!(doc.find("/a/9").is_absent());
    /// ```
    pub fn find(&self, pointer: &str) -> TypedRef<'a> {
        let tokens = match split_pointer_relaxed(pointer) {
            Ok(tokens) => tokens,
            Err(_) => return TypedRef::absent(),
        };
        let mut current = *self;
        for token in &tokens {
            current = current.find_token(token);
            if current.is_absent() {
                break;
            }
        }
        current
    }

    fn find_token(&self, token: &str) -> TypedRef<'a> {
        let found = match self.value {
            Some(Value::Object(map)) => map.get(token),
            Some(Value::Array(items)) => token
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        };
        TypedRef { value: found }
    }

    /// The keys of this view: member names in document order for an
    /// object, indices `0..len` for an array, empty for everything else.
    pub fn keys(&self) -> Vec<Key> {
        match self.value {
            Some(Value::Object(map)) => map.keys().cloned().map(Key::Name).collect(),
            Some(Value::Array(items)) => (0..items.len() as i64).map(Key::Index).collect(),
            _ => Vec::new(),
        }
    }

    /// The child views of this view, one per key from [`TypedRef::keys`],
    /// in the same order.
    pub fn values(&self) -> Vec<TypedRef<'a>> {
        self.keys().iter().map(|key| self.get_key(key)).collect()
    }

    /// Serializes the payload back to JSON text. Returns `None` when
    /// there is nothing to serialize or the serializer reports an error.
    pub fn stringify(&self) -> Option<String> {
        let value = self.value?;
        serde_json::to_string(value).ok()
    }
}

impl<'a> From<&'a Value> for TypedRef<'a> {
    fn from(value: &'a Value) -> Self {
        Self::wrap(value)
    }
}

impl fmt::Display for TypedRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stringify() {
            Some(text) => f.write_str(&text),
            None => f.write_str("undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn wrap_keeps_payload_verbatim() {
        let value = json!({ "a": 1 });
        assert_eq!(TypedJson::wrap(value.clone()).value(), Some(&value));
        assert_eq!(TypedJson::absent().value(), None);
    }

    #[test]
    fn parse_failure_is_absent_not_error() {
        assert!(TypedJson::parse("{ not json").is_absent());
        assert!(TypedJson::parse("").is_absent());
        assert_eq!(TypedJson::parse("[1, 2]").get(path![1]).number(), Some(2.0));
    }

    #[test]
    fn get_key_kind_asymmetry() {
        let object = TypedJson::wrap(json!({ "0": "zero" }));
        assert_eq!(
            object.as_ref().get_key(&Key::from("0")).string(),
            Some("zero")
        );
        assert!(object.as_ref().get_key(&Key::from(0)).is_absent());

        let array = TypedJson::wrap(json!(["zero"]));
        assert_eq!(array.as_ref().get_key(&Key::from(0)).string(), Some("zero"));
        assert!(array.as_ref().get_key(&Key::from("0")).is_absent());
        assert!(array.as_ref().get_key(&Key::from(-1)).is_absent());
    }

    #[test]
    fn get_on_absent_stays_absent() {
        let absent = TypedRef::absent();
        assert!(absent.get(path!["a", 0, "b"]).is_absent());
        assert!(absent.get(path![]).is_absent());
    }

    #[test]
    fn display_wraps_stringify() {
        assert_eq!(TypedJson::wrap(json!([1, "a"])).to_string(), r#"[1,"a"]"#);
        assert_eq!(TypedJson::absent().to_string(), "undefined");
    }
}
