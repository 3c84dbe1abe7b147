//! Reader for the statement language.
//!
//! A source text is a sequence of comment lines (`# ...`), blank lines and
//! statement lines of the form
//!
//! ```text
//! [Namespace:Source] -> [Target] ::mod(key="text", order=2, enabled=true)
//! ```
//!
//! Reading happens in two phases. The line joiner first folds the physical
//! lines into logical lines (collecting comments on the side), then every
//! logical line is matched against the statement pattern. Lines that do not
//! match are skipped without error: input is expected to have passed a
//! stricter validator before it gets here.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::construct::{Anchor, Document, Modifiers, Statement};
use crate::datatype::Value;

lazy_static! {
    static ref STATEMENT: Regex = Regex::new(r"\[([^\]]+)\]\s*(?:->|→)\s*\[([^\]]+)\]").unwrap();
    // balanced form first (one level of nesting), then everything up to the first `)`
    static ref MODIFIER_BLOCK: Regex = Regex::new(
        r"::mod\(([^()]*(?:\([^()]*\)[^()]*)*|[^)]*)\)"
    ).unwrap();
    static ref KEY_VALUE: Regex = Regex::new(
        r#"([A-Za-z0-9_]+)\s*=\s*("(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|[^,)]+)"#
    ).unwrap();
    static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
}

// ------------- Anchors -------------

/// Splits bracket contents into namespace and name at the first colon.
/// Never fails; no character set is enforced.
pub fn parse_anchor(raw: &str) -> Anchor {
    let trimmed = raw.trim();
    match trimmed.split_once(':') {
        Some((namespace, name)) => Anchor::new(
            Some(namespace.to_owned()),
            name.to_owned(),
            trimmed.to_owned(),
        ),
        None => Anchor::new(None, trimmed.to_owned(), trimmed.to_owned()),
    }
}

// ------------- Modifiers -------------

/// Types a literal: `true`/`false`, then numbers, then text with any
/// surrounding quotes removed. Escapes inside quotes are kept as written.
pub fn parse_modifier_value(literal: &str) -> Value {
    let trimmed = literal.trim();
    match trimmed {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => (),
    }
    if NUMBER.is_match(trimmed) {
        if let Ok(n) = trimmed.parse::<f64>() {
            return Value::Number(n);
        }
    }
    Value::Text(strip_quotes(trimmed).to_owned())
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.starts_with(quote) && s.ends_with(quote) {
            // a lone quote character is both its own start and end
            return if s.len() > 1 { &s[1..s.len() - 1] } else { "" };
        }
    }
    s
}

/// Parses the inner text of one `::mod(...)` block.
/// A key repeated within the block keeps its last value.
pub fn parse_modifiers(block: &str) -> Modifiers {
    let mut modifiers = Modifiers::new();
    for c in KEY_VALUE.captures_iter(block) {
        modifiers.insert(c[1].to_owned(), parse_modifier_value(&c[2]));
    }
    modifiers
}

// ------------- Line joining -------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalLine {
    /// A blank or comment line; ends any pending continuation.
    Separator,
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinedLines {
    pub lines: Vec<LogicalLine>,
    pub comments: Vec<String>,
}

/// Folds physical lines into logical lines. A line that does not start with
/// `[` continues the preceding logical line, unless a separator came between.
pub fn join_lines(text: &str) -> JoinedLines {
    let mut joined = JoinedLines::default();
    // a byte-order mark would otherwise hide a leading comment
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            joined.lines.push(LogicalLine::Separator);
            continue;
        }
        if let Some(comment) = trimmed.strip_prefix('#') {
            joined.comments.push(comment.trim().to_owned());
            joined.lines.push(LogicalLine::Separator);
            continue;
        }
        if !trimmed.starts_with('[') {
            if let Some(LogicalLine::Text(previous)) = joined.lines.last_mut() {
                previous.push(' ');
                previous.push_str(trimmed);
                continue;
            }
        }
        joined.lines.push(LogicalLine::Text(trimmed.to_owned()));
    }
    joined
}

// ------------- Statements -------------

/// Matches one logical line. Every `::mod(...)` block on the line is merged
/// left to right, so later blocks win on key collisions.
pub fn parse_statement(line: &str) -> Option<Statement> {
    let captures = STATEMENT.captures(line)?;
    let source = parse_anchor(&captures[1]);
    let target = parse_anchor(&captures[2]);
    let mut modifiers = Modifiers::new();
    for block in MODIFIER_BLOCK.captures_iter(line) {
        modifiers.merge(parse_modifiers(&block[1]));
    }
    Some(Statement::new(source, target, modifiers))
}

/// Reads a whole source text into a document.
pub fn parse(text: &str) -> Document {
    let JoinedLines { lines, comments } = join_lines(text);
    let mut statements = Vec::new();
    let mut skipped = 0usize;
    for line in &lines {
        if let LogicalLine::Text(line) = line {
            match parse_statement(line) {
                Some(statement) => statements.push(statement),
                None => {
                    skipped += 1;
                    trace!(%line, "skipping unrecognized line");
                }
            }
        }
    }
    debug!(
        statements = statements.len(),
        comments = comments.len(),
        skipped,
        "parsed document"
    );
    Document::new(statements, comments)
}
