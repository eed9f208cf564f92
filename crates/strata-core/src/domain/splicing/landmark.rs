use serde::Serialize;

/// Where a new line goes relative to its landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionPolicy {
    /// Directly after the landmark line.
    AfterLine,
    /// Just before the `}` closing the block the landmark line opens.
    BeforeBlockClose,
}

/// A literal substring identifying an anchor line, plus an insertion policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Landmark {
    needle: String,
    policy: InsertionPolicy,
}

impl Landmark {
    pub fn after_line(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            policy: InsertionPolicy::AfterLine,
        }
    }

    pub fn before_block_close(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            policy: InsertionPolicy::BeforeBlockClose,
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn policy(&self) -> InsertionPolicy {
        self.policy
    }

    pub fn locate(&self, lines: &[String]) -> Option<usize> {
        locate(lines, &self.needle)
    }
}

/// Index of the first line containing `needle`.
pub fn locate(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(needle))
}
