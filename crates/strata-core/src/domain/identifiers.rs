//! Identifier derivation.
//!
//! A model name typed by the user fans out into four identifiers. They are
//! derived exactly once per run and threaded everywhere, so the struct name
//! in a generated file always matches the one referenced by an aggregator
//! edit.
//!
//! | Input          | struct        | var           | snake          | url            |
//! |----------------|---------------|---------------|----------------|----------------|
//! | `userProfile`  | `UserProfile` | `userProfile` | `user_profile` | `user-profile` |
//! | `Order`        | `Order`       | `order`       | `order`        | `order`        |
//!
//! Only "uppercase vs not" is considered. Separators already present in the
//! input are kept, so `user_Profile` snakes to `user__profile`.

use serde::Serialize;

/// The family of identifiers derived from one raw model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierSet {
    raw: String,
    struct_name: String,
    var_name: String,
    snake_name: String,
    url_name: String,
}

impl IdentifierSet {
    /// Derive every identifier from `raw`.
    ///
    /// Total over any input; rejecting empty or whitespace names is the
    /// caller's job (see [`crate::domain::ModelName`]).
    pub fn derive(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            struct_name: to_pascal_case(&raw),
            var_name: to_camel_case(&raw),
            snake_name: to_separated_lower(&raw, '_'),
            url_name: to_separated_lower(&raw, '-'),
            raw,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Exported Go type name, e.g. `UserProfile`.
    pub fn struct_name(&self) -> &str {
        &self.struct_name
    }

    /// Unexported Go variable / package-alias name, e.g. `userProfile`.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// Table and JSON name, e.g. `user_profile`.
    pub fn snake_name(&self) -> &str {
        &self.snake_name
    }

    /// URL path segment, e.g. `user-profile`.
    pub fn url_name(&self) -> &str {
        &self.url_name
    }
}

/// First character uppercased, the rest unchanged.
pub fn to_pascal_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character lowercased, the rest unchanged.
pub fn to_camel_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `snake_case` with `_`, `url-case` with `-`.
pub fn to_separated_lower(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for (i, c) in input.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(separator);
        }
        out.extend(c.to_lowercase());
    }
    out
}
