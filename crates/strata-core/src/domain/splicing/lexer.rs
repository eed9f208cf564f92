//! Minimal Go lexing: just enough to skip literals and comments.

use std::iter::Peekable;
use std::str::CharIndices;

/// Iterates the characters of Go source that are *code*, skipping string,
/// raw string and rune literals as well as `//` and `/* */` comments.
///
/// Yields `(byte_offset, char)` pairs. Newlines ending a `//` comment are
/// still yielded.
pub(crate) struct CodeChars<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> CodeChars<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
        }
    }

    fn skip_quoted(&mut self, quote: char) {
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => {
                    self.chars.next();
                }
                '\n' => break,
                c if c == quote => break,
                _ => {}
            }
        }
    }

    fn skip_raw(&mut self) {
        for (_, c) in self.chars.by_ref() {
            if c == '`' {
                break;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.chars.next();
        }
    }

    fn skip_block_comment(&mut self) {
        let mut prev = '\0';
        for (_, c) in self.chars.by_ref() {
            if prev == '*' && c == '/' {
                break;
            }
            prev = c;
        }
    }
}

impl Iterator for CodeChars<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, c) = self.chars.next()?;
            match c {
                '"' | '\'' => self.skip_quoted(c),
                '`' => self.skip_raw(),
                '/' => match self.chars.peek() {
                    Some((_, '/')) => self.skip_line_comment(),
                    Some((_, '*')) => {
                        self.chars.next();
                        self.skip_block_comment();
                    }
                    _ => return Some((i, c)),
                },
                _ => return Some((i, c)),
            }
        }
    }
}

/// Net change in `{`/`}` depth contributed by one line.
pub(crate) fn brace_delta(line: &str) -> i32 {
    CodeChars::new(line).fold(0, |depth, (_, c)| match c {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}
