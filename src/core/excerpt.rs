//! Line-numbered source excerpts for the lines report.
//!
//! Splitting a file into lines happens once per distinct source text; the
//! cache lives for one analysis run and is owned by it, never shared.

use std::collections::HashMap;

/// Run-scoped cache of line-split source texts, keyed by the text itself.
#[derive(Debug, Default)]
pub struct ExcerptCache {
    lines: HashMap<String, Vec<String>>,
}

impl ExcerptCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the inclusive `[start_line, end_line]` range of `source`, one
    /// output line per source line, each prefixed with a right-aligned line
    /// number and `" | "`. No trailing newline.
    pub fn render(&mut self, source: &str, start_line: usize, end_line: usize) -> String {
        if !self.lines.contains_key(source) {
            self.lines.insert(source.to_string(), split_lines(source));
        }
        let lines = &self.lines[source];

        let start_line = start_line.max(1);
        let width = digits(start_line).max(digits(end_line)).max(4);

        let mut output = Vec::new();
        for lineno in start_line..=end_line {
            let text = lines.get(lineno - 1).map(String::as_str).unwrap_or("");
            output.push(format!("{lineno:>width$} | {text}"));
        }
        output.join("\n")
    }
}

fn split_lines(source: &str) -> Vec<String> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}
