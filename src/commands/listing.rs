//! Layout of the command listing posted to the pastebin.
//!
//! Each command group becomes one paragraph: the upper-cased category padded to
//! a common width, then the group's commands. Paragraphs are wrapped at
//! [`LINE_WIDTH`] columns with a hanging indent aligned on the first command.

use std::collections::{BTreeMap, BTreeSet};

/// Maximum width of a listing line.
const LINE_WIDTH: usize = 70;
/// Minimum width of the category column.
const MIN_CATEGORY_WIDTH: usize = 6;
/// Separator between the category and the commands, and between commands.
const SEPARATOR: &str = "  ";

/// Formats the command groups, sorted by category.
///
/// Duplicate commands inside a group are listed once.
pub fn format_listing(groups: &BTreeMap<String, Vec<String>>) -> String {
    let category_width = groups
        .keys()
        .map(|category| category.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_CATEGORY_WIDTH);
    let indent = " ".repeat(category_width + SEPARATOR.len());

    groups
        .iter()
        .map(|(category, commands)| {
            let commands = commands
                .iter()
                .map(String::as_str)
                .collect::<BTreeSet<&str>>()
                .into_iter()
                .collect::<Vec<&str>>()
                .join(SEPARATOR);
            let paragraph = format!(
                "{:<width$}{}{}",
                category.to_uppercase(),
                SEPARATOR,
                commands,
                width = category_width
            );

            wrap(&paragraph, LINE_WIDTH, &indent).join("\n")
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

/// Greedy word wrap.
///
/// Whitespace inside a line is kept as is, whitespace at line breaks is
/// dropped. Lines after the first are prefixed with `subsequent_indent`, and
/// words longer than a line are split.
pub(crate) fn wrap(text: &str, width: usize, subsequent_indent: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut pending_space = "";

    for chunk in chunks(text) {
        if chunk.starts_with(char::is_whitespace) {
            if !current.is_empty() {
                pending_space = chunk;
            }
            continue;
        }

        let mut word = chunk;
        loop {
            let available = match lines.is_empty() {
                true => width,
                false => width.saturating_sub(subsequent_indent.chars().count()),
            }
            .max(1);
            let used = current.chars().count();
            let needed = pending_space.chars().count() + word.chars().count();

            if used + needed <= available || (current.is_empty() && word.chars().count() <= available) {
                current.push_str(pending_space);
                current.push_str(word);
                pending_space = "";
                break;
            }

            if current.is_empty() {
                // Word longer than a whole line
                let split = word
                    .char_indices()
                    .nth(available)
                    .map(|(index, _)| index)
                    .unwrap_or(word.len());
                current.push_str(&word[..split]);
                word = &word[split..];
            }

            lines.push(std::mem::take(&mut current));
            pending_space = "";
            if word.is_empty() {
                break;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| match index {
            0 => line,
            _ => format!("{}{}", subsequent_indent, line),
        })
        .collect()
}

/// Splits text into alternating runs of whitespace and non-whitespace.
///
/// Words are also split after a hyphen joining two alphanumeric characters,
/// so `well-known` gives `well-` and `known`.
fn chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut previous: Option<char> = None;
    let mut before_previous: Option<char> = None;

    for (index, c) in text.char_indices() {
        if let Some(last) = previous {
            let space_boundary = last.is_whitespace() != c.is_whitespace();
            let hyphen_boundary = last == '-'
                && c.is_alphanumeric()
                && before_previous.is_some_and(char::is_alphanumeric);
            if space_boundary || hyphen_boundary {
                chunks.push(&text[start..index]);
                start = index;
            }
        }
        before_previous = previous;
        previous = Some(c);
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
