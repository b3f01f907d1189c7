/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// Configuration errors raised while assembling a routing configuration.
///
/// Resolution itself never fails; every problem that can be detected is
/// detected here, at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
  EmptyRegistry,
  EmptyLocale,
  DuplicateLocale(String),
  UnknownDefault { default: String, locales: Vec<String> },
  InvalidBaseUrl { url: String, reason: String },
  UnknownLocaleInTable { base_path: String, locale: String },
  RelativePath { base_path: String, path: String },
  EmptySegment { base_path: String, path: String },
}

impl RoutingError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::EmptyRegistry => "EMPTY_REGISTRY",
      Self::EmptyLocale => "EMPTY_LOCALE",
      Self::DuplicateLocale(_) => "DUPLICATE_LOCALE",
      Self::UnknownDefault { .. } => "UNKNOWN_DEFAULT",
      Self::InvalidBaseUrl { .. } => "INVALID_BASE_URL",
      Self::UnknownLocaleInTable { .. } => "UNKNOWN_LOCALE_IN_TABLE",
      Self::RelativePath { .. } => "RELATIVE_PATH",
      Self::EmptySegment { .. } => "EMPTY_SEGMENT",
    }
  }
}

impl fmt::Display for RoutingError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EmptyRegistry => write!(f, "locale registry must not be empty"),
      Self::EmptyLocale => write!(f, "locale codes must not be empty"),
      Self::DuplicateLocale(loc) => write!(f, "locale \"{loc}\" is registered twice"),
      Self::UnknownDefault { default, locales } => {
        write!(f, "default locale \"{default}\" is not in {locales:?}")
      }
      Self::InvalidBaseUrl { url, reason } => write!(f, "invalid base url \"{url}\": {reason}"),
      Self::UnknownLocaleInTable { base_path, locale } => {
        write!(f, "pathname \"{base_path}\" names unregistered locale \"{locale}\"")
      }
      Self::RelativePath { base_path, path } => {
        write!(f, "pathname \"{base_path}\" maps to \"{path}\", which does not start with '/'")
      }
      Self::EmptySegment { base_path, path } => {
        write!(f, "pathname \"{base_path}\" maps to \"{path}\", which contains an empty segment")
      }
    }
  }
}

impl std::error::Error for RoutingError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_are_stable() {
    assert_eq!(RoutingError::EmptyRegistry.code(), "EMPTY_REGISTRY");
    assert_eq!(RoutingError::DuplicateLocale("tr".into()).code(), "DUPLICATE_LOCALE");
    let err = RoutingError::InvalidBaseUrl { url: "x".into(), reason: "y".into() };
    assert_eq!(err.code(), "INVALID_BASE_URL");
  }

  #[test]
  fn display_unknown_default() {
    let err = RoutingError::UnknownDefault { default: "de".into(), locales: vec!["tr".into()] };
    assert_eq!(err.to_string(), r#"default locale "de" is not in ["tr"]"#);
  }

  #[test]
  fn display_table_locale() {
    let err =
      RoutingError::UnknownLocaleInTable { base_path: "/about".into(), locale: "fr".into() };
    assert_eq!(err.to_string(), r#"pathname "/about" names unregistered locale "fr""#);
  }
}
