/// Renders an error message together with the source lines around it, marking the offending
/// column with a caret.
pub struct ErrorFormatter {
    lines: Vec<String>,
}

impl ErrorFormatter {
    pub const DEFAULT_CONTEXT_LINES: usize = 1;

    pub fn new(source: &str) -> ErrorFormatter {
        ErrorFormatter {
            lines: source.lines().map(str::to_string).collect(),
        }
    }

    /// Formats the error with one line of context before and after the error line.
    ///
    /// # Examples
    ///
    /// ```text
    /// Error: Unexpected character '^'
    ///
    /// 1 | 2 3 ^
    ///   |     ^
    /// ```
    pub fn format_error(&self, message: &str, line: usize, column: usize) -> String {
        self.format_error_with_context(message, line, column, Self::DEFAULT_CONTEXT_LINES)
    }

    pub fn format_error_with_context(
        &self,
        message: &str,
        line: usize,
        column: usize,
        context_lines: usize,
    ) -> String {
        let mut parts = vec![format!("Error: {}", message), String::new()];
        parts.extend(self.context(line, column, context_lines));
        parts.join("\n")
    }

    fn context(&self, line: usize, column: usize, context_lines: usize) -> Vec<String> {
        let error_index = line.saturating_sub(1);
        let start = error_index.saturating_sub(context_lines);
        let end = (error_index + context_lines + 1).min(self.lines.len());
        let width = end.max(line).max(1).to_string().len();

        let mut rendered = Vec::new();
        for index in start..end {
            rendered.push(format!("{:>width$} | {}", index + 1, self.lines[index], width = width));
            if index == error_index {
                rendered.push(caret_line(width, column));
            }
        }

        // The error may sit past the last line, e.g. at the end of input after a newline.
        if error_index >= self.lines.len() {
            rendered.push(format!("{:>width$} | ", line, width = width));
            rendered.push(caret_line(width, column));
        }
        rendered
    }
}

fn caret_line(width: usize, column: usize) -> String {
    format!(
        "{:width$} | {:offset$}^",
        "",
        "",
        width = width,
        offset = column.saturating_sub(1)
    )
}
