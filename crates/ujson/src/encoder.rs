//! `Encoder`: pretty-printing JSON serializer for [`Value`].
//!
//! Output layout:
//! - every array element and object entry on its own line
//! - one indentation step (4 spaces by default) per nesting level
//! - empty containers keep the multi-line form (`[` newline newline `]`)
//! - object entries in the object's insertion order

use std::fmt::Write as _;

use crate::options::{SerializeOptions, MAX_INDENT};
use crate::value::{Object, Value};

pub struct Encoder {
    out: String,
    step: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(SerializeOptions::default())
    }
}

impl Encoder {
    pub fn new(options: SerializeOptions) -> Self {
        Self {
            out: String::new(),
            step: options.indent.min(MAX_INDENT),
        }
    }

    /// Encodes a top-level value, terminated by a single newline.
    pub fn encode(&mut self, value: &Value) -> String {
        self.out.clear();
        self.write_any(value);
        self.out.push('\n');
        std::mem::take(&mut self.out)
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn write_any(&mut self, value: &Value) {
        self.write_value(value, 0);
    }

    fn write_value(&mut self, value: &Value, indent: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Integer(i) => self.write_integer(*i),
            Value::Float(f) => self.write_float(*f),
            Value::String(s) => self.write_str(s),
            Value::Array(arr) => self.write_arr(arr, indent),
            Value::Object(obj) => self.write_obj(obj, indent),
        }
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    pub fn write_integer(&mut self, int: i64) {
        // Writing into a String cannot fail.
        let _ = write!(self.out, "{int}");
    }

    pub fn write_float(&mut self, float: f64) {
        self.out.push_str(&format_float(float));
    }

    /// Writes a quoted string using the short escapes only. Other control
    /// characters are written raw, as the decoder reads them back raw.
    pub fn write_str(&mut self, s: &str) {
        self.out.reserve(s.len() + 2);
        self.out.push('"');
        let mut last = 0;
        for (i, ch) in s.char_indices() {
            let esc = match ch {
                '"' => "\\\"",
                '\\' => "\\\\",
                '\n' => "\\n",
                '\r' => "\\r",
                '\t' => "\\t",
                '\u{8}' => "\\b",
                '\u{c}' => "\\f",
                _ => continue,
            };
            self.out.push_str(&s[last..i]);
            self.out.push_str(esc);
            last = i + ch.len_utf8();
        }
        self.out.push_str(&s[last..]);
        self.out.push('"');
    }

    fn write_arr(&mut self, arr: &[Value], indent: usize) {
        let inner = indent.saturating_add(self.step);
        self.out.push_str("[\n");
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push_str(",\n");
            }
            self.pad(inner);
            self.write_value(item, inner);
        }
        self.out.push('\n');
        self.pad(indent);
        self.out.push(']');
    }

    fn write_obj(&mut self, obj: &Object, indent: usize) {
        let inner = indent.saturating_add(self.step);
        self.out.push_str("{\n");
        for (i, (key, val)) in obj.iter().enumerate() {
            if i > 0 {
                self.out.push_str(",\n");
            }
            self.pad(inner);
            self.write_str(key);
            self.out.push_str(": ");
            self.write_value(val, inner);
        }
        self.out.push('\n');
        self.pad(indent);
        self.out.push('}');
    }

    fn pad(&mut self, indent: usize) {
        self.out.extend(std::iter::repeat(' ').take(indent));
    }
}

/// Shortest round-trip decimal form, never in exponent notation, always with
/// a fractional point so it reads back as a float. Non-finite values have no
/// JSON form and are written as `null`.
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    let mut s = f.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_F64_3_14: f64 = 314.0 / 100.0;

    fn encode(value: &Value) -> String {
        Encoder::default().encode(value)
    }

    #[test]
    fn scalars() {
        assert_eq!(encode(&Value::Null), "null\n");
        assert_eq!(encode(&Value::Bool(true)), "true\n");
        assert_eq!(encode(&Value::Integer(-1337)), "-1337\n");
        assert_eq!(encode(&Value::Integer(0)), "0\n");
        assert_eq!(encode(&Value::Float(TEST_F64_3_14)), "3.14\n");
    }

    #[test]
    fn floats_keep_a_fractional_point() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(1e21), "1000000000000000000000.0");
        assert_eq!(format_float(1e-7), "0.0000001");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(f64::NAN), "null");
        assert_eq!(format_float(f64::INFINITY), "null");
    }

    #[test]
    fn string_escaping() {
        assert_eq!(encode(&Value::from("say \"hi\"")), "\"say \\\"hi\\\"\"\n");
        assert_eq!(encode(&Value::from("a\\b")), "\"a\\\\b\"\n");
        assert_eq!(encode(&Value::from("l1\nl2\t")), "\"l1\\nl2\\t\"\n");
        assert_eq!(encode(&Value::from("\u{0}\u{1f}")), "\"\u{0}\u{1f}\"\n");
        assert_eq!(encode(&Value::from("日本語")), "\"日本語\"\n");
    }

    #[test]
    fn empty_containers_stay_multiline() {
        assert_eq!(encode(&Value::Array(vec![])), "[\n\n]\n");
        assert_eq!(encode(&Value::Object(Object::new())), "{\n\n}\n");
    }

    #[test]
    fn nested_layout() {
        let mut obj = Object::new();
        obj.insert("a".to_string(), Value::from(1));
        obj.insert(
            "b".to_string(),
            Value::from(vec![Value::from(true), Value::Array(vec![])]),
        );
        let expected = "{\n    \"a\": 1,\n    \"b\": [\n        true,\n        [\n\n        ]\n    ]\n}\n";
        assert_eq!(encode(&Value::Object(obj)), expected);
    }

    #[test]
    fn custom_indent() {
        let mut encoder = Encoder::new(SerializeOptions { indent: 2 });
        let value = Value::from(vec![Value::from(1)]);
        assert_eq!(encoder.encode(&value), "[\n  1\n]\n");
    }

    #[test]
    fn oversized_indent_is_clamped() {
        let value = Value::from(vec![Value::from(vec![Value::from(1)])]);
        let huge = Encoder::new(SerializeOptions { indent: usize::MAX }).encode(&value);
        let widest = Encoder::new(SerializeOptions { indent: MAX_INDENT }).encode(&value);
        assert_eq!(huge, widest);
        assert!(huge.contains(&format!("\n{}1\n", " ".repeat(2 * MAX_INDENT))));
    }

    #[test]
    fn encoder_is_reusable() {
        let mut encoder = Encoder::default();
        assert_eq!(encoder.encode(&Value::from(1)), "1\n");
        assert_eq!(encoder.encode(&Value::from(2)), "2\n");
    }
}
