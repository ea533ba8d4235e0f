//! Text layout for headings, titles and numbered menus
//!
//! These return plain strings with color applied so [`super::Console`] can
//! write them to any sink.

use colored::*;

const HEADING_RULE: &str = "-------------------------------------";

/// Framed application heading, with an optional author line
pub fn heading(text: &str, author: Option<&str>) -> String {
    let mut lines = vec![
        String::new(),
        format!("\t{}", HEADING_RULE.green()),
        format!("\t  {}", text.green().bold()),
    ];
    if let Some(author) = author {
        lines.push(format!("\t\t  {}", format!("By {}", author).green()));
    }
    lines.push(format!("\t{}", HEADING_RULE.green()));
    lines.push(String::new());
    lines.join("\n")
}

/// Title with a dashed underline one character longer than the title
pub fn title(text: &str) -> String {
    let underline = "-".repeat(text.chars().count() + 1);
    format!("\n{}\n {}\n", text.green(), underline.green())
}

/// Numbered list of choices starting at 1
pub fn choices(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("\t{}. {}", (i + 1).to_string().cyan(), item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validation failure shown before re-prompting
pub fn error(message: &str) -> String {
    format!("\t{}", message.red())
}

/// Computed result line
pub fn result(message: &str) -> String {
    format!("\t{}", message.yellow().bold())
}
