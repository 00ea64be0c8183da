// SPDX-License-Identifier: (MIT OR Apache-2.0)

/// Layout settings for the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Call arguments and list items wrap one per line past this column.
    pub max_line_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            max_line_width: 100,
        }
    }
}
