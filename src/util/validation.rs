//! Declarative form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms describe their fields as a static schema of rules with messages.
//! Validation runs before any network call; failures render inline next to
//! the field and never reach the HTTP layer.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

/// A single constraint on a field's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank after trimming.
    Required,
    /// At least `n` characters.
    MinLen(usize),
    /// At most `n` characters.
    MaxLen(usize),
    /// `local@domain.tld` shape.
    Email,
    /// Absolute http(s) URL; blank values pass so the field stays optional.
    HttpUrl,
}

impl Rule {
    pub fn check(self, value: &str) -> bool {
        match self {
            Self::Required => !value.trim().is_empty(),
            Self::MinLen(n) => value.chars().count() >= n,
            Self::MaxLen(n) => value.chars().count() <= n,
            Self::Email => is_email(value.trim()),
            Self::HttpUrl => {
                let value = value.trim();
                value.is_empty()
                    || url::Url::parse(value).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
            }
        }
    }
}

/// Rules for one named field, checked in order; the first failure wins.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [(Rule, &'static str)],
}

/// A form whose fields can be looked up by schema name.
pub trait Validate {
    const SCHEMA: &'static [FieldSpec];

    fn field(&self, name: &str) -> &str;

    /// Check every field against [`Self::SCHEMA`].
    ///
    /// # Errors
    ///
    /// Returns the first failing message for each invalid field.
    fn validate(&self) -> Result<(), FieldErrors> {
        validate_fields(Self::SCHEMA, |name| self.field(name))
    }
}

/// Per-field error messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Validate values supplied by `lookup` against `schema`.
///
/// # Errors
///
/// Returns [`FieldErrors`] when any field fails a rule.
pub fn validate_fields<'a>(schema: &[FieldSpec], lookup: impl Fn(&str) -> &'a str) -> Result<(), FieldErrors> {
    let mut errors = BTreeMap::new();
    for spec in schema {
        let value = lookup(spec.name);
        if let Some((_, message)) = spec.rules.iter().find(|(rule, _)| !rule.check(value)) {
            errors.insert(spec.name, *message);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(FieldErrors(errors)) }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
