//! Parser and serializer configuration.

/// Default maximum nesting depth of arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default indentation width, in spaces, per nesting level.
pub const DEFAULT_INDENT: usize = 4;

/// Widest indentation step honoured; larger values are clamped to it.
pub const MAX_INDENT: usize = 64;

/// Options controlling [`parse_with_options`](crate::parse_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Yield [`Value::Null`](crate::Value::Null) for empty or whitespace-only
    /// input instead of failing.
    pub allow_empty: bool,
    /// Maximum nesting depth for arrays/objects.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Strict parsing: empty input is an error.
    pub const fn strict() -> Self {
        Self {
            allow_empty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Lenient parsing: empty input yields `null`.
    pub const fn lenient() -> Self {
        Self {
            allow_empty: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

/// Options controlling [`serialize_with_options`](crate::serialize_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Spaces added per nesting level, at most [`MAX_INDENT`].
    pub indent: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}
