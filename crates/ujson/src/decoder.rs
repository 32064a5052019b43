//! `Decoder`: recursive-descent JSON parser producing [`Value`].
//!
//! Works on a byte cursor (`x`) into the input. Each `read_*` method consumes
//! exactly one grammar production and leaves the cursor just past it.

use crate::error::ParseError;
use crate::options::ParseOptions;
use crate::value::{Array, Object, Value};

pub struct Decoder<'a> {
    data: &'a [u8],
    x: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8], options: ParseOptions) -> Self {
        Self {
            data,
            x: 0,
            depth: 0,
            options,
        }
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.x
    }

    /// Decodes the whole input as exactly one value surrounded by optional
    /// whitespace.
    pub fn decode(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        if self.x >= self.data.len() && self.options.allow_empty {
            return Ok(Value::Null);
        }
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(ParseError::TrailingCharacters(self.x));
        }
        Ok(value)
    }

    pub fn read_any(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd(self.x)),
            Some(b'{') => self.read_obj(),
            Some(b'[') => self.read_arr(),
            Some(b'"') => self.read_str().map(Value::String),
            Some(b't') => self.read_literal("true").map(|()| Value::Bool(true)),
            Some(b'f') => self.read_literal("false").map(|()| Value::Bool(false)),
            Some(b'n') => self.read_literal("null").map(|()| Value::Null),
            Some(c) if c == b'-' || c.is_ascii_digit() => self.read_num(),
            Some(c) => Err(ParseError::UnexpectedByte(c, self.x)),
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    /// Consumes `c` or fails citing what was found instead.
    fn discard(&mut self, c: u8) -> Result<(), ParseError> {
        match self.peek() {
            Some(found) if found == c => {
                self.x += 1;
                Ok(())
            }
            found => Err(ParseError::ExpectedByte(c, found, self.x)),
        }
    }

    /// Consumes `lit`, failing at the first byte that differs.
    fn read_literal(&mut self, lit: &'static str) -> Result<(), ParseError> {
        for &want in lit.as_bytes() {
            match self.peek() {
                Some(c) if c == want => self.x += 1,
                found => return Err(ParseError::ExpectedLiteral(lit, found, self.x)),
            }
        }
        Ok(())
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.x;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.x += 1;
        }
        self.x - start
    }

    /// Reads a number. Numerals without a fraction or exponent that fit in
    /// `i64` become `Integer`; everything else becomes `Float`.
    pub fn read_num(&mut self) -> Result<Value, ParseError> {
        let data = self.data;
        let start = self.x;
        let invalid = |end: usize| {
            let text = String::from_utf8_lossy(&data[start..end]).into_owned();
            ParseError::InvalidNumber(text, start)
        };

        if self.peek() == Some(b'-') {
            self.x += 1;
        }
        match self.peek() {
            Some(b'0') => {
                self.x += 1;
                if self.skip_digits() > 0 {
                    return Err(invalid(self.x));
                }
            }
            Some(c) if c.is_ascii_digit() => {
                self.skip_digits();
            }
            _ => return Err(invalid(self.x)),
        }

        let mut is_float = false;
        if self.peek() == Some(b'.') {
            is_float = true;
            self.x += 1;
            if self.skip_digits() == 0 {
                return Err(invalid(self.x));
            }
        }
        if let Some(b'e' | b'E') = self.peek() {
            is_float = true;
            self.x += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.x += 1;
            }
            if self.skip_digits() == 0 {
                return Err(invalid(self.x));
            }
        }

        let end = self.x;
        let text = std::str::from_utf8(&data[start..end]).map_err(|_| invalid(end))?;
        if !is_float {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(Value::Integer(i));
            }
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Float(f)),
            _ => Err(invalid(end)),
        }
    }

    /// Reads a quoted string, decoding the short escape sequences.
    pub fn read_str(&mut self) -> Result<String, ParseError> {
        self.discard(b'"')?;
        let mut out = String::new();
        let mut run = self.x;
        loop {
            let Some(c) = self.peek() else {
                return Err(ParseError::ExpectedByte(b'"', None, self.x));
            };
            match c {
                b'"' => break,
                b'\\' => {
                    self.push_run(&mut out, run)?;
                    let at = self.x;
                    self.x += 1;
                    let decoded = match self.peek() {
                        None => return Err(ParseError::UnexpectedEnd(self.x)),
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(b'/') => '/',
                        Some(b'b') => '\u{8}',
                        Some(b'f') => '\u{c}',
                        Some(b'n') => '\n',
                        Some(b'r') => '\r',
                        Some(b't') => '\t',
                        Some(b'u') => return Err(ParseError::UnsupportedEscape(at)),
                        Some(other) => return Err(ParseError::InvalidEscape(other, at)),
                    };
                    out.push(decoded);
                    self.x += 1;
                    run = self.x;
                }
                _ => self.x += 1,
            }
        }
        self.push_run(&mut out, run)?;
        self.x += 1;
        Ok(out)
    }

    /// Appends the unescaped bytes `run..x` to `out`. Runs never split a
    /// multi-byte character since they end at ASCII `\\` or `"`.
    fn push_run(&self, out: &mut String, run: usize) -> Result<(), ParseError> {
        let bytes = &self.data[run..self.x];
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ParseError::InvalidUtf8(run + e.valid_up_to()))?;
        out.push_str(text);
        Ok(())
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::DepthLimitExceeded(self.options.max_depth, self.x));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn read_arr(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.discard(b'[')?;
        let mut arr = Array::new();
        self.skip_whitespace();
        while self.peek() != Some(b']') {
            if !arr.is_empty() {
                self.discard(b',')?;
            }
            self.skip_whitespace();
            arr.push(self.read_any()?);
            self.skip_whitespace();
        }
        self.discard(b']')?;
        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    pub fn read_obj(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.discard(b'{')?;
        let mut obj = Object::new();
        let mut first = true;
        self.skip_whitespace();
        while self.peek() != Some(b'}') {
            if !first {
                self.discard(b',')?;
            }
            first = false;
            self.skip_whitespace();
            let key = self.read_str()?;
            self.skip_whitespace();
            self.discard(b':')?;
            self.skip_whitespace();
            let val = self.read_any()?;
            // Last key wins; the key keeps its first position.
            obj.insert(key, val);
            self.skip_whitespace();
        }
        self.discard(b'}')?;
        self.depth -= 1;
        Ok(Value::Object(obj))
    }
}
