use serde::Serialize;

use crate::domain::error::DomainError;

/// A model name that passed upstream validation.
///
/// Must be a Go identifier (`[A-Za-z_][A-Za-z0-9_]*`): the name flows
/// unescaped into identifiers, import paths, file paths and the migration
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let reject = |reason: &str| DomainError::InvalidModelName {
            name: raw.clone(),
            reason: reason.into(),
        };

        if raw.trim().is_empty() {
            return Err(reject("name cannot be empty"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(reject("name cannot contain whitespace"));
        }
        if raw.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(reject("name cannot start with a digit"));
        }
        if let Some(bad) = raw.chars().find(|&c| !(c.is_ascii_alphanumeric() || c == '_')) {
            return Err(reject(&format!(
                "'{bad}' is not allowed; use letters, digits and '_' only"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Centralized domain validation.
pub struct DomainValidator;

impl DomainValidator {
    /// A Go module path: non-empty, no whitespace, no quotes.
    pub fn validate_module_root(module: &str) -> Result<(), DomainError> {
        let reject = |reason: &str| DomainError::InvalidModuleRoot {
            module: module.into(),
            reason: reason.into(),
        };
        if module.trim().is_empty() {
            return Err(reject("module root cannot be empty"));
        }
        if module.chars().any(|c| c.is_whitespace() || c == '"' || c == '`') {
            return Err(reject("module root cannot contain whitespace or quotes"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        for name in ["order", "userProfile", "Invoice", "item2", "user_profile"] {
            assert!(ModelName::parse(name).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(ModelName::parse("").is_err());
        assert!(ModelName::parse("   ").is_err());
        assert!(ModelName::parse("user profile").is_err());
    }

    #[test]
    fn rejects_path_like_names() {
        assert!(ModelName::parse("../etc").is_err());
        assert!(ModelName::parse("a/b").is_err());
        assert!(ModelName::parse("a\\b").is_err());
        assert!(ModelName::parse(".hidden").is_err());
    }

    #[test]
    fn rejects_punctuation_that_would_break_go_source() {
        for name in ["order)", "order\"", "or{der", "user-profile", "a.b", "ordér"] {
            assert!(
                matches!(ModelName::parse(name), Err(DomainError::InvalidModelName { .. })),
                "accepted {name}"
            );
        }
        assert!(ModelName::parse("_draft").is_ok());
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(matches!(
            ModelName::parse("9lives"),
            Err(DomainError::InvalidModelName { .. })
        ));
    }

    #[test]
    fn module_root_rules() {
        assert!(DomainValidator::validate_module_root("shop").is_ok());
        assert!(DomainValidator::validate_module_root("github.com/acme/shop").is_ok());
        assert!(DomainValidator::validate_module_root("").is_err());
        assert!(DomainValidator::validate_module_root("my shop").is_err());
        assert!(DomainValidator::validate_module_root("sh\"op").is_err());
    }
}
