/* src/server/core/rust/src/locale.rs */

use std::collections::HashSet;

use crate::errors::RoutingError;

/// Ordered set of supported locale codes plus the designated default.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
  locales: Vec<String>,
  default: String,
}

impl LocaleRegistry {
  pub fn new(locales: Vec<String>, default: impl Into<String>) -> Result<Self, RoutingError> {
    let default = default.into();
    if locales.is_empty() {
      return Err(RoutingError::EmptyRegistry);
    }
    let mut seen = HashSet::new();
    for loc in &locales {
      if loc.is_empty() {
        return Err(RoutingError::EmptyLocale);
      }
      if !seen.insert(loc.as_str()) {
        return Err(RoutingError::DuplicateLocale(loc.clone()));
      }
    }
    if !seen.contains(default.as_str()) {
      return Err(RoutingError::UnknownDefault { default, locales });
    }
    Ok(Self { locales, default })
  }

  pub fn locales(&self) -> &[String] {
    &self.locales
  }

  pub fn default_locale(&self) -> &str {
    &self.default
  }

  pub fn contains(&self, locale: &str) -> bool {
    self.locales.iter().any(|l| l == locale)
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.locales.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.locales.len()
  }

  pub fn is_empty(&self) -> bool {
    self.locales.is_empty()
  }
}
