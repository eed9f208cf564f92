//! Appending an argument to a variadic call such as `db.AutoMigrate(...)`.
//!
//! The argument list may span several lines and may or may not end with a
//! dangling comma. Whatever its shape, the list is re-rendered one argument
//! per line:
//!
//! ```text
//! db.AutoMigrate(&model.A{}, &model.B{})
//! ```
//!
//! becomes
//!
//! ```text
//! db.AutoMigrate(
//!     &model.A{},
//!     &model.B{},
//!     &model.C{},
//! )
//! ```

use tracing::{debug, warn};

use crate::domain::error::DomainError;
use crate::domain::splicing::edit::EditOutcome;
use crate::domain::splicing::lexer::CodeChars;
use crate::domain::splicing::text::normalize;

/// Append `entry` to the argument list of the first `call_prefix` found after
/// `signature`.
///
/// `call_prefix` must end with the opening `(`. Returns the new content and
/// what happened; on anything but [`EditOutcome::Applied`] the content is
/// returned unchanged.
pub fn append_argument(
    content: &str,
    signature: &str,
    call_prefix: &str,
    entry: &str,
) -> Result<(String, EditOutcome), DomainError> {
    let Some(sig_at) = content.find(signature) else {
        warn!(landmark = signature, "Landmark not found, migration entry skipped");
        return Ok((content.to_string(), EditOutcome::LandmarkMissing));
    };
    let Some(call_at) = content[sig_at..].find(call_prefix).map(|i| sig_at + i) else {
        warn!(landmark = call_prefix, "Call not found, migration entry skipped");
        return Ok((content.to_string(), EditOutcome::LandmarkMissing));
    };

    let args_start = call_at + call_prefix.len();
    let args_end = closing_paren(&content[args_start..])
        .map(|i| args_start + i)
        .ok_or_else(|| DomainError::UnterminatedCall {
            call: call_prefix.trim().to_string(),
        })?;

    let mut args = split_top_level(&content[args_start..args_end]);
    let wanted = normalize(entry);
    if args.iter().any(|arg| normalize(arg) == wanted) {
        debug!(entry, "Migration entry already present");
        return Ok((content.to_string(), EditOutcome::AlreadyPresent));
    }
    args.push(entry.trim().to_string());

    let indent = line_indent(content, call_at);
    let mut rendered = String::from("\n");
    for arg in &args {
        rendered.push_str(indent);
        rendered.push('\t');
        rendered.push_str(arg);
        rendered.push_str(",\n");
    }
    rendered.push_str(indent);

    let mut out = String::with_capacity(content.len() + rendered.len());
    out.push_str(&content[..args_start]);
    out.push_str(&rendered);
    out.push_str(&content[args_end..]);
    debug!(entry, total = args.len(), "Migration entry appended");
    Ok((out, EditOutcome::Applied))
}

/// Offset of the first `)` not matched inside `args`.
fn closing_paren(args: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in CodeChars::new(args) {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

/// Split on commas outside any bracket pair, dropping empty pieces.
fn split_top_level(args: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in CodeChars::new(args) {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&args[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

fn line_indent(content: &str, at: usize) -> &str {
    let line_start = content[..at].rfind('\n').map_or(0, |i| i + 1);
    let line = &content[line_start..at];
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}
