//! Output writer with indentation tracking
//!
//! Handles writing generated code with proper indentation.

/// Writer that tracks indentation and builds the output text
pub struct Writer {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Number of spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl Writer {
    /// Create a new writer with the given indent width
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the output text
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a string (with auto-indent at line start)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.at_line_start {
            let indent = " ".repeat(self.indent_level * self.indent_width);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }
}
