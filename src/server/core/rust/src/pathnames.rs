/* src/server/core/rust/src/pathnames.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::RoutingError;
use crate::locale::LocaleRegistry;

/// How a base path maps onto concrete paths.
///
/// In configuration a literal is a plain string and a per-locale entry is a
/// table keyed by locale code:
///
/// ```toml
/// "/products" = "/products"
/// "/about" = { tr = "/hakkimizda", en = "/about" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathnameEntry {
  /// Same concrete path for every locale.
  Literal(String),
  /// Locale-specific paths. Need not cover every locale.
  PerLocale(BTreeMap<String, String>),
}

impl PathnameEntry {
  /// Locales this entry explicitly names. Empty for literals.
  pub fn named_locales(&self) -> impl Iterator<Item = &str> {
    let map = match self {
      Self::Literal(_) => None,
      Self::PerLocale(map) => Some(map),
    };
    map.into_iter().flat_map(|m| m.keys().map(String::as_str))
  }

  fn paths(&self) -> Vec<&str> {
    match self {
      Self::Literal(p) => vec![p.as_str()],
      Self::PerLocale(map) => map.values().map(String::as_str).collect(),
    }
  }
}

/// Static base path -> [`PathnameEntry`] mapping. Lookup is exact-match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathnameTable {
  entries: BTreeMap<String, PathnameEntry>,
}

impl PathnameTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, base_path: impl Into<String>, entry: PathnameEntry) {
    self.entries.insert(base_path.into(), entry);
  }

  pub fn with_literal(mut self, base_path: impl Into<String>, path: impl Into<String>) -> Self {
    self.insert(base_path, PathnameEntry::Literal(path.into()));
    self
  }

  pub fn with_localized<L, P>(
    mut self,
    base_path: impl Into<String>,
    paths: impl IntoIterator<Item = (L, P)>,
  ) -> Self
  where
    L: Into<String>,
    P: Into<String>,
  {
    let map = paths.into_iter().map(|(l, p)| (l.into(), p.into())).collect();
    self.insert(base_path, PathnameEntry::PerLocale(map));
    self
  }

  pub fn lookup(&self, base_path: &str) -> Option<&PathnameEntry> {
    self.entries.get(base_path)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &PathnameEntry)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Check the table against a registry: per-locale keys must be registered
  /// and every path (base and concrete) must be absolute without `//`.
  pub fn validate(&self, registry: &LocaleRegistry) -> Result<(), RoutingError> {
    for (base_path, entry) in &self.entries {
      if !base_path.starts_with('/') {
        return Err(RoutingError::RelativePath {
          base_path: base_path.clone(),
          path: base_path.clone(),
        });
      }
      for locale in entry.named_locales() {
        if !registry.contains(locale) {
          return Err(RoutingError::UnknownLocaleInTable {
            base_path: base_path.clone(),
            locale: locale.to_string(),
          });
        }
      }
      // Empty paths are allowed: they mark a page as untranslated.
      for path in std::iter::once(base_path.as_str()).chain(entry.paths()) {
        if path.is_empty() {
          continue;
        }
        if !path.starts_with('/') {
          return Err(RoutingError::RelativePath {
            base_path: base_path.clone(),
            path: path.to_string(),
          });
        }
        if path.contains("//") {
          return Err(RoutingError::EmptySegment {
            base_path: base_path.clone(),
            path: path.to_string(),
          });
        }
      }
    }
    Ok(())
  }

  /// Registered locales a per-locale entry does not cover, per base path.
  /// Those locales silently fall back to the base path at resolution time.
  pub fn uncovered_locales<'a>(
    &'a self,
    registry: &'a LocaleRegistry,
  ) -> Vec<(&'a str, Vec<&'a str>)> {
    self
      .entries
      .iter()
      .filter_map(|(base, entry)| {
        let PathnameEntry::PerLocale(map) = entry else { return None };
        let missing: Vec<&str> = registry.iter().filter(|l| !map.contains_key(*l)).collect();
        if missing.is_empty() { None } else { Some((base.as_str(), missing)) }
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn registry() -> LocaleRegistry {
    LocaleRegistry::new(vec!["tr".into(), "en".into()], "tr").unwrap()
  }

  #[test]
  fn lookup_is_exact() {
    let table = PathnameTable::new().with_literal("/products", "/products");
    assert!(table.lookup("/products").is_some());
    assert!(table.lookup("/products/").is_none());
    assert!(table.lookup("/PRODUCTS").is_none());
  }

  #[test]
  fn deserializes_mixed_entries() {
    let table: PathnameTable = serde_json::from_value(serde_json::json!({
      "/products": "/products",
      "/about": {"tr": "/hakkimizda", "en": "/about"}
    }))
    .unwrap();
    assert_eq!(table.lookup("/products"), Some(&PathnameEntry::Literal("/products".into())));
    let Some(PathnameEntry::PerLocale(map)) = table.lookup("/about") else {
      panic!("expected per-locale entry");
    };
    assert_eq!(map["tr"], "/hakkimizda");
  }

  #[test]
  fn deserializes_from_toml() {
    let table: PathnameTable = toml::from_str(
      r#"
"/" = "/"
"/about" = { tr = "/hakkimizda", en = "/about" }
"#,
    )
    .unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("/").unwrap().named_locales().count(), 0);
    assert_eq!(table.lookup("/about").unwrap().named_locales().collect::<Vec<_>>(), ["en", "tr"]);
  }

  #[test]
  fn validate_accepts_registered_locales() {
    let table = PathnameTable::new()
      .with_literal("/", "/")
      .with_localized("/about", [("tr", "/hakkimizda"), ("en", "/about")]);
    assert!(table.validate(&registry()).is_ok());
  }

  #[test]
  fn validate_rejects_unknown_locale() {
    let table = PathnameTable::new().with_localized("/about", [("fr", "/a-propos")]);
    let err = table.validate(&registry()).unwrap_err();
    assert_eq!(
      err,
      RoutingError::UnknownLocaleInTable { base_path: "/about".into(), locale: "fr".into() }
    );
  }

  #[test]
  fn validate_rejects_relative_paths() {
    let table = PathnameTable::new().with_localized("/about", [("tr", "hakkimizda")]);
    assert!(matches!(table.validate(&registry()), Err(RoutingError::RelativePath { .. })));

    let table = PathnameTable::new().with_literal("about", "/about");
    assert!(matches!(table.validate(&registry()), Err(RoutingError::RelativePath { .. })));
  }

  #[test]
  fn validate_rejects_empty_segments() {
    let table = PathnameTable::new().with_localized("/about", [("tr", "/hakkinda//biz")]);
    let err = table.validate(&registry()).unwrap_err();
    assert_eq!(
      err,
      RoutingError::EmptySegment { base_path: "/about".into(), path: "/hakkinda//biz".into() }
    );

    let table = PathnameTable::new().with_literal("//about", "/about");
    assert!(matches!(table.validate(&registry()), Err(RoutingError::EmptySegment { .. })));
  }

  #[test]
  fn validate_allows_empty_untranslated_path() {
    let table = PathnameTable::new().with_localized("/blog", [("tr", "/blog"), ("en", "")]);
    assert!(table.validate(&registry()).is_ok());
  }

  #[test]
  fn reports_uncovered_locales() {
    let table = PathnameTable::new()
      .with_literal("/products", "/products")
      .with_localized("/about", [("tr", "/hakkimizda")]);
    let reg = registry();
    let uncovered = table.uncovered_locales(&reg);
    assert_eq!(uncovered, vec![("/about", vec!["en"])]);
  }
}
