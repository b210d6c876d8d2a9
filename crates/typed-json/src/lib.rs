//! typed-json - type-safe access to dynamically-shaped JSON.
//!
//! Parsing untrusted JSON usually means checking the type of every level
//! before touching the next one. [`TypedJson`] wraps a parsed value so a
//! whole nested lookup collapses into one chain, with every failure mode
//! (bad input, missing key, wrong kind, index out of range) reading as
//! plain absence:
//!
//! ```
//! use typed_json::{path, TypedJson};
//!
//! let doc = TypedJson::parse(r#"{ "secrets": [{ "key": "k1" }] }"#);
//! if let Some(key) = doc.get(path!["secrets", 0, "key"]).string() {
//!     assert_eq!(key, "k1");
//! }
//! assert!(doc.get(path!["secrets", 9, "key"]).is_absent());
//! assert!(TypedJson::parse("not json").is_absent());
//! ```

mod key;
mod typed;

pub use key::Key;
pub use typed::{TypedJson, TypedRef};
