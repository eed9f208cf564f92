use std::fmt;

use crate::domain::error::DomainError;

/// The full contents of one source file as an ordered list of lines.
///
/// Split on `\n` and joined on `\n`, so `parse(s).to_string() == s` for
/// every input, trailing newline included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    /// Insert `line` so that it ends up at `index`.
    pub fn insert(&mut self, index: usize, line: impl Into<String>) -> Result<(), DomainError> {
        if index > self.lines.len() {
            return Err(DomainError::LineOutOfBounds {
                index,
                len: self.lines.len(),
            });
        }
        self.lines.insert(index, line.into());
        Ok(())
    }

    /// Replace the line at `index` with `replacement`, which may be several lines.
    pub fn replace_line<I, S>(&mut self, index: usize, replacement: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if index >= self.lines.len() {
            return Err(DomainError::LineOutOfBounds {
                index,
                len: self.lines.len(),
            });
        }
        self.lines
            .splice(index..=index, replacement.into_iter().map(Into::into));
        Ok(())
    }

    /// Whether some line equals `line` once whitespace is normalised.
    ///
    /// Leading/trailing whitespace is ignored and inner runs collapse to one
    /// space, so a gofmt-aligned `userHandler    *handler.UserHandler` still
    /// counts as present.
    pub fn contains_line(&self, line: &str) -> bool {
        let wanted = normalize(line);
        self.lines.iter().any(|l| normalize(l) == wanted)
    }
}

impl fmt::Display for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

impl From<&str> for SourceText {
    fn from(content: &str) -> Self {
        Self::parse(content)
    }
}

pub(crate) fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_trailing_newline() {
        for input in ["", "a", "a\n", "a\nb\n", "\n\n"] {
            assert_eq!(SourceText::parse(input).to_string(), input);
        }
    }

    #[test]
    fn insert_keeps_order() {
        let mut text = SourceText::parse("a\nc");
        text.insert(1, "b").unwrap();
        text.insert(3, "d").unwrap();
        assert_eq!(text.to_string(), "a\nb\nc\nd");
        assert!(text.insert(9, "x").is_err());
    }

    #[test]
    fn replace_line_can_split() {
        let mut text = SourceText::parse("x\nhead{}\ny");
        text.replace_line(1, ["head{", "\tbody", "}"]).unwrap();
        assert_eq!(text.to_string(), "x\nhead{\n\tbody\n}\ny");
    }

    #[test]
    fn contains_line_ignores_alignment() {
        let text = SourceText::parse("type H struct {\n\tuserHandler    *handler.UserHandler\n}");
        assert!(text.contains_line("\tuserHandler *handler.UserHandler"));
        assert!(!text.contains_line("\torderHandler *handler.OrderHandler"));
    }

    #[test]
    fn empty_detection() {
        assert!(SourceText::parse("").is_empty());
        assert!(SourceText::parse("\n").is_empty());
        assert!(!SourceText::parse("package x").is_empty());
    }
}
