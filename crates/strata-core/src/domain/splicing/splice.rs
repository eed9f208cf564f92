//! Block splicing: inserting one line relative to a located landmark.

use crate::domain::error::DomainError;
use crate::domain::splicing::lexer::{CodeChars, brace_delta};
use crate::domain::splicing::text::SourceText;

/// Insert `line` directly after `lines[index]`. Returns the new line's index.
pub fn splice_after(text: &mut SourceText, index: usize, line: &str) -> Result<usize, DomainError> {
    if index >= text.len() {
        return Err(DomainError::LineOutOfBounds {
            index,
            len: text.len(),
        });
    }
    text.insert(index + 1, line)?;
    Ok(index + 1)
}

/// Insert `line` as the first entry of the block opened at `open_index`.
///
/// An empty block written on one line (`type Handlers struct {}`) is split
/// first, so the new line lands inside it. A block that opens and closes on
/// the landmark line with content in between is rejected, as is a line that
/// opens no block at all.
pub fn splice_block_start(
    text: &mut SourceText,
    open_index: usize,
    line: &str,
    landmark: &str,
) -> Result<usize, DomainError> {
    let opening = text
        .lines()
        .get(open_index)
        .ok_or(DomainError::LineOutOfBounds {
            index: open_index,
            len: text.len(),
        })?
        .clone();

    if let Some(head) = inline_empty_block_head(&opening) {
        split_inline_block(text, open_index, &opening, head, line)?;
        return Ok(open_index + 1);
    }

    if brace_delta(&opening) <= 0 {
        let error = if opens_brace(&opening) {
            DomainError::BlockClosesInline {
                landmark: landmark.into(),
                line: open_index + 1,
            }
        } else {
            DomainError::NotABlockOpener {
                landmark: landmark.into(),
                line: open_index + 1,
            }
        };
        return Err(error);
    }

    splice_after(text, open_index, line)
}

/// Insert `line` just before the `}` closing the block opened at `open_index`.
///
/// Two shapes are accepted:
///
/// - an empty block opened and closed on one line (`return &Handlers{}`),
///   which is split into the head, `line`, and a bare `}` indented like the
///   opening line;
/// - a block whose closing `}` sits alone on a later line. Depth is tracked
///   across the lines in between, so nested `{ .. }` pairs on their own lines
///   are skipped.
///
/// Anything else is a structural error and `text` is left untouched.
/// Returns the index the new line ended up at.
pub fn splice_before_close(
    text: &mut SourceText,
    open_index: usize,
    line: &str,
    landmark: &str,
) -> Result<usize, DomainError> {
    let opening = text
        .lines()
        .get(open_index)
        .ok_or(DomainError::LineOutOfBounds {
            index: open_index,
            len: text.len(),
        })?
        .clone();

    if let Some(head) = inline_empty_block_head(&opening) {
        split_inline_block(text, open_index, &opening, head, line)?;
        return Ok(open_index + 1);
    }

    let close = find_block_close(text.lines(), open_index, landmark)?;
    text.insert(close, line)?;
    Ok(close)
}

/// Index of the bare `}` that brings the block opened at `open_index` back
/// to depth zero.
fn find_block_close(lines: &[String], open_index: usize, landmark: &str) -> Result<usize, DomainError> {
    let mut depth = brace_delta(&lines[open_index]);
    if depth <= 0 {
        return Err(DomainError::NotABlockOpener {
            landmark: landmark.into(),
            line: open_index + 1,
        });
    }

    for (index, current) in lines.iter().enumerate().skip(open_index + 1) {
        let delta = brace_delta(current);
        if current.trim() == "}" && depth + delta == 0 {
            return Ok(index);
        }
        depth += delta;
        if depth <= 0 {
            return Err(DomainError::BlockClosesInline {
                landmark: landmark.into(),
                line: index + 1,
            });
        }
    }

    Err(DomainError::UnterminatedBlock {
        landmark: landmark.into(),
        line: open_index + 1,
    })
}

/// `Some(head)` when `line` is `<head>{}` (possibly with whitespace between
/// the braces), where `head` keeps its opening `{`.
fn inline_empty_block_head(line: &str) -> Option<&str> {
    let without_close = line.trim_end().strip_suffix('}')?;
    let head = without_close.trim_end();
    head.ends_with('{').then_some(head)
}

/// Replace `<head>{}` at `index` with the head, `line`, and a bare `}`
/// indented like the opening line.
fn split_inline_block(
    text: &mut SourceText,
    index: usize,
    opening: &str,
    head: &str,
    line: &str,
) -> Result<(), DomainError> {
    let indent = leading_whitespace(opening);
    text.replace_line(index, [head.to_string(), line.to_string(), format!("{indent}}}")])
}

fn opens_brace(line: &str) -> bool {
    CodeChars::new(line).any(|(_, c)| c == '{')
}

fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SourceText {
        SourceText::parse(s)
    }

    #[test]
    fn after_line() {
        let mut t = text("import (\n\t\"fmt\"\n)");
        let at = splice_after(&mut t, 0, "\t\"os\"").unwrap();
        assert_eq!(at, 1);
        assert_eq!(t.to_string(), "import (\n\t\"os\"\n\t\"fmt\"\n)");
    }

    #[test]
    fn after_line_out_of_bounds() {
        let mut t = text("a");
        assert!(matches!(
            splice_after(&mut t, 4, "b"),
            Err(DomainError::LineOutOfBounds { .. })
        ));
    }

    #[test]
    fn block_start_splits_an_empty_struct() {
        let mut t = text("type Handlers struct {}\n\nfunc x() {}");
        let at = splice_block_start(&mut t, 0, "\tx *X", "type Handlers struct {").unwrap();
        assert_eq!(at, 1);
        assert_eq!(t.to_string(), "type Handlers struct {\n\tx *X\n}\n\nfunc x() {}");
    }

    #[test]
    fn block_start_on_an_open_block() {
        let mut t = text("func (h *Handlers) Configure(server *fiber.App) {\n\ta()\n}");
        splice_block_start(&mut t, 0, "\tb()", "Configure(server *fiber.App) {").unwrap();
        assert_eq!(t.lines(), ["func (h *Handlers) Configure(server *fiber.App) {", "\tb()", "\ta()", "}"]);
    }

    #[test]
    fn block_start_rejects_inline_content() {
        let mut t = text("func f() { a() }");
        let before = t.clone();
        let err = splice_block_start(&mut t, 0, "\tb()", "func f() {").unwrap_err();
        assert!(matches!(err, DomainError::BlockClosesInline { line: 1, .. }));
        assert_eq!(t, before);

        let mut t = text("type Handlers struct");
        assert!(matches!(
            splice_block_start(&mut t, 0, "x", "type Handlers struct"),
            Err(DomainError::NotABlockOpener { .. })
        ));
    }

    #[test]
    fn splits_a_same_line_empty_block() {
        let mut t = text("return &Handlers{}");
        splice_before_close(&mut t, 0, "\tX", "return &Handlers{").unwrap();
        assert_eq!(t.lines(), ["return &Handlers{", "\tX", "}"]);
    }

    #[test]
    fn same_line_split_keeps_indentation() {
        let mut t = text("func New() *Handlers {\n\treturn &Handlers{ }\n}\n");
        splice_before_close(&mut t, 1, "\t\tx: y,", "return &Handlers{").unwrap();
        assert_eq!(
            t.to_string(),
            "func New() *Handlers {\n\treturn &Handlers{\n\t\tx: y,\n\t}\n}\n"
        );
    }

    #[test]
    fn appends_after_existing_entries() {
        let mut t = text("\treturn &Handlers{\n\t\ta: 1,\n\t\tb: 2,\n\t}\n}");
        let at = splice_before_close(&mut t, 0, "\t\tc: 3,", "return &Handlers{").unwrap();
        assert_eq!(at, 3);
        assert_eq!(
            t.to_string(),
            "\treturn &Handlers{\n\t\ta: 1,\n\t\tb: 2,\n\t\tc: 3,\n\t}\n}"
        );
    }

    #[test]
    fn skips_nested_blocks() {
        let src = "\tservices := &Services{\n\t\tcfg: Config{\n\t\t\tx: 1,\n\t\t},\n\t\tinner: func() {\n\t\t}(),\n\t}";
        let mut t = text(src);
        let at = splice_before_close(&mut t, 0, "\t\tz: 9,", "services := &Services{").unwrap();
        assert_eq!(at, 6);
        assert_eq!(t.lines()[7], "\t}");
    }

    #[test]
    fn skips_a_nested_bare_close() {
        let src = "func f() {\n\tif ok {\n\t\tdo()\n\t}\n}";
        let mut t = text(src);
        let at = splice_before_close(&mut t, 0, "\tlast()", "func f() {").unwrap();
        assert_eq!(at, 4);
        assert_eq!(t.lines()[5], "}");
    }

    #[test]
    fn ignores_braces_in_strings_and_comments() {
        let src = "x := &S{\n\tname: \"}\",\n\t// }\n}";
        let mut t = text(src);
        let at = splice_before_close(&mut t, 0, "\tid: 1,", "x := &S{").unwrap();
        assert_eq!(at, 3);
    }

    #[test]
    fn unterminated_block_is_rejected_untouched() {
        let mut t = text("\treturn &Handlers{\n\t\ta: 1,\n");
        let before = t.clone();
        let err = splice_before_close(&mut t, 0, "\t\tb: 2,", "return &Handlers{").unwrap_err();
        assert!(matches!(err, DomainError::UnterminatedBlock { line: 1, .. }));
        assert_eq!(t, before);
    }

    #[test]
    fn non_bare_close_is_rejected() {
        let mut t = text("\treturn &Handlers{\n\t\ta: 1}\n");
        let err = splice_before_close(&mut t, 0, "\t\tb: 2,", "return &Handlers{").unwrap_err();
        assert!(matches!(err, DomainError::BlockClosesInline { line: 2, .. }));
    }

    #[test]
    fn populated_same_line_literal_is_rejected_untouched() {
        let mut t = text("\treturn &Handlers{a: 1}\n}");
        let before = t.clone();
        let err = splice_before_close(&mut t, 0, "\t\tb: 2,", "return &Handlers{").unwrap_err();
        assert!(matches!(err, DomainError::NotABlockOpener { line: 1, .. }));
        assert_eq!(t, before);
    }

    #[test]
    fn non_opener_is_rejected() {
        let mut t = text("\treturn &Handlers\n}");
        let err = splice_before_close(&mut t, 0, "x", "return &Handlers").unwrap_err();
        assert!(matches!(err, DomainError::NotABlockOpener { .. }));

        let mut t = text("func f() { return 1 }");
        assert!(splice_before_close(&mut t, 0, "x", "func f()").is_err());
    }
}
