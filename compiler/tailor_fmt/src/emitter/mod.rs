//! Output Emitter
//!
//! Abstraction for output production during reconstruction.

/// Trait for emitting formatted output.
///
/// The formatter writes to an emitter strictly left to right: whitespace
/// decided for a token, then the token's text.
pub trait Emitter {
    /// Emit a text fragment verbatim.
    fn emit(&mut self, text: &str);

    /// Emit `count` newlines (Unix-style `\n`).
    fn emit_newlines(&mut self, count: usize);

    /// Emit indentation as the given number of spaces.
    fn emit_indent(&mut self, spaces: usize);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// String-based emitter for in-memory formatting.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newlines(&mut self, count: usize) {
        self.buffer.extend(std::iter::repeat('\n').take(count));
    }

    fn emit_indent(&mut self, spaces: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(spaces));
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}
