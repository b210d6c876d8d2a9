//! JSON Pointer (RFC 6901) token utilities.
//!
//! A pointer is either empty (the whole document) or a `/`-separated list
//! of escaped tokens. This crate only deals in the text form: splitting a
//! pointer into unescaped tokens and joining tokens back. Walking tokens
//! against a value lives in `typed-json`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("json pointer must start with '/' or be empty")]
    NotRooted,
}

/// Unescapes one pointer token (`~1` -> `/`, `~0` -> `~`).
pub fn unescape_token(token: &str) -> String {
    if !token.contains('~') {
        return token.to_string();
    }
    token.replace("~1", "/").replace("~0", "~")
}

/// Escapes one pointer token (`~` -> `~0`, `/` -> `~1`).
pub fn escape_token(token: &str) -> String {
    if !token.contains('/') && !token.contains('~') {
        return token.to_string();
    }
    token.replace('~', "~0").replace('/', "~1")
}

/// Split an absolute-or-empty pointer into unescaped tokens.
///
/// Examples:
/// - `"" -> []`
/// - `"/" -> [""]`
/// - `"/a~1b/~0k/0" -> ["a/b", "~k", "0"]`
pub fn split_pointer(pointer: &str) -> Result<Vec<String>, PointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::NotRooted);
    }
    Ok(pointer.split('/').skip(1).map(unescape_token).collect())
}

/// Split a pointer, accepting the relative convenience form:
/// a pointer without a leading `/` is treated as if one were prefixed.
pub fn split_pointer_relaxed(pointer: &str) -> Result<Vec<String>, PointerError> {
    if pointer.starts_with('/') || pointer.is_empty() {
        return split_pointer(pointer);
    }
    let mut rooted = String::with_capacity(pointer.len() + 1);
    rooted.push('/');
    rooted.push_str(pointer);
    split_pointer(&rooted)
}

/// Join unescaped tokens into an absolute pointer. Inverse of
/// [`split_pointer`].
pub fn join_pointer<S: AsRef<str>>(tokens: &[S]) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for token in tokens {
        out.push('/');
        out.push_str(&escape_token(token.as_ref()));
    }
    out
}
