//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers and stderr messages.

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print warning in yellow to stderr.
pub fn print_warning(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Box top with optional title: ┌─ Title ─────┐
pub fn box_top(title: &str, width: usize) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(width - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (width - 2).saturating_sub(title_part.chars().count());
    format!("┌{}{}┐", title_part, "─".repeat(remaining))
}

/// Box content line: │ content      │
pub fn box_line(content: &str, width: usize) -> String {
    let inner_width = width - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Centered box content line.
pub fn box_line_center(content: &str, width: usize) -> String {
    let inner_width = width - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Box bottom: └──────────┘
pub fn box_bottom(width: usize) -> String {
    format!("└{}┘", "─".repeat(width - 2))
}

/// Help option row(s) with flag column and word-wrapped description.
pub fn box_opt(flag: &str, desc: &str, width: usize) -> Vec<String> {
    let inner_width = width - 4;
    let flag_col = 22;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<flag_col$}", flag);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    let indent = " ".repeat(flag_col);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { flag_padded.as_str() } else { indent.as_str() };
            let padding = desc_col.saturating_sub(line.len());
            format!("│ {}{}{} │", lead, line, " ".repeat(padding))
        })
        .collect()
}

/// Display width, skipping ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_have_equal_width() {
        let w = 30;
        let top = box_top("Title", w);
        let line = box_line("hello", w);
        let center = box_line_center("hi", w);
        let bottom = box_bottom(w);
        for s in [&top, &line, &center, &bottom] {
            assert_eq!(s.chars().count(), w, "{s}");
        }
        assert!(top.starts_with("┌─ Title "));
    }

    #[test]
    fn ansi_codes_are_not_counted() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        let line = box_line(&format!("{RED}abc{RESET}"), 20);
        assert_eq!(console_width(&line), 20);
    }

    #[test]
    fn opt_wraps_long_descriptions() {
        let rows = box_opt(
            "-l, --length <N>",
            "Password length between four and twenty four characters inclusive",
            BOX_WIDTH,
        );
        assert!(rows.len() > 1);
        assert!(rows[0].contains("-l, --length <N>"));
        for row in &rows {
            assert_eq!(row.chars().count(), BOX_WIDTH);
        }
    }
}
