//! ujson: a minimal JSON value model with a recursive-descent parser and a
//! pretty-printing serializer.
//!
//! [`parse`] turns UTF-8 text into a [`Value`] tree; [`serialize`] turns a
//! tree back into text indented by four spaces per level, ending in a single
//! newline. The two functions share no state and may run concurrently on
//! independent inputs.
//!
//! # Example
//!
//! ```
//! use ujson::{parse, to_string, Value};
//!
//! let value = parse(br#"{"i": 1, "d": 1.0, "arr": [true, null]}"#).unwrap();
//! assert_eq!(value.get("i"), Some(&Value::Integer(1)));
//! assert_eq!(value.get("d"), Some(&Value::Float(1.0)));
//!
//! let text = to_string(&value);
//! assert!(text.ends_with("}\n"));
//! assert_eq!(parse(text.as_bytes()).unwrap(), value);
//! ```
//!
//! # Supported subset
//!
//! - Escapes `\" \\ \/ \b \f \n \r \t` are decoded; `\uXXXX` is rejected.
//! - Objects keep insertion order; a repeated key overwrites the earlier value.
//! - Empty input is an error unless [`ParseOptions::allow_empty`] is set.
//! - Control characters other than `\b \f \n \r \t` are written raw, so
//!   strings holding them serialize to text that strict JSON readers reject.
//!   [`parse`] reads such text back unchanged.

pub mod decoder;
pub mod encoder;
pub mod error;
mod interop;
pub mod options;
pub mod value;

use std::io;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{ParseError, TypeError};
pub use options::{ParseOptions, SerializeOptions};
pub use value::{Array, Kind, Object, Value};

/// Parses exactly one JSON value from `input`.
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed or empty input; no partial value is
/// produced.
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parses exactly one JSON value from a string slice.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

/// Parses with explicit [`ParseOptions`].
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> Result<Value, ParseError> {
    log::trace!("parsing {} bytes", input.len());
    Decoder::new(input, *options).decode().inspect_err(|err| {
        log::debug!(
            "parse failed with {} bytes remaining: {err}",
            err.remaining(input.len())
        );
    })
}

/// Serializes `value` as pretty-printed JSON followed by a newline.
pub fn serialize(value: &Value) -> Vec<u8> {
    to_string(value).into_bytes()
}

/// Like [`serialize`], returning a `String`.
pub fn to_string(value: &Value) -> String {
    serialize_with_options(value, &SerializeOptions::default())
}

/// Serializes with explicit [`SerializeOptions`].
pub fn serialize_with_options(value: &Value, options: &SerializeOptions) -> String {
    log::trace!("serializing {} value", value.kind());
    Encoder::new(*options).encode(value)
}

/// Serializes `value` into `writer`.
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_to<W: io::Write>(
    mut writer: W,
    value: &Value,
    options: &SerializeOptions,
) -> io::Result<()> {
    writer.write_all(serialize_with_options(value, options).as_bytes())
}
