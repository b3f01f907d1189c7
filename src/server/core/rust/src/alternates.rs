/* src/server/core/rust/src/alternates.rs */

//! Per-locale alternate URLs for `<link rel="alternate" hreflang>` metadata.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::resolve::PathResolver;

/// Sentinel key for the locale-agnostic fallback URL.
pub const X_DEFAULT: &str = "x-default";

/// What a caller-supplied override says about one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideResult {
  /// Use this localized path (e.g. `/urunler/ceviz-tepsi`).
  Path(String),
  /// No opinion; resolve through the pathname table.
  UseTable,
  /// The page does not exist in this locale; emit no alternate for it.
  NotApplicable,
}

impl From<Option<String>> for OverrideResult {
  /// `None` means "no translation", matching lookups against a slug store.
  fn from(value: Option<String>) -> Self {
    match value {
      Some(path) => Self::Path(path),
      None => Self::NotApplicable,
    }
  }
}

/// Optional per-call override, e.g. product slugs that live in a database.
#[derive(Clone, Copy)]
pub enum PathOverride<'a> {
  NoOverride,
  OverrideFn(&'a dyn Fn(&str) -> OverrideResult),
}

/// Locale (plus [`X_DEFAULT`]) -> absolute URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AlternateSet {
  urls: BTreeMap<String, String>,
}

impl AlternateSet {
  pub fn get(&self, key: &str) -> Option<&str> {
    self.urls.get(key).map(String::as_str)
  }

  pub fn x_default(&self) -> Option<&str> {
    self.get(X_DEFAULT)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.urls.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.urls.len()
  }

  pub fn is_empty(&self) -> bool {
    self.urls.is_empty()
  }

  /// Entries in key order; `x-default` sorts among the locales.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.urls.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Locale entries only, without the `x-default` sentinel.
  pub fn locales(&self) -> impl Iterator<Item = (&str, &str)> {
    self.iter().filter(|(k, _)| *k != X_DEFAULT)
  }

  pub fn into_inner(self) -> BTreeMap<String, String> {
    self.urls
  }
}

/// Build the alternate set for `base_path` across every registered locale.
///
/// `_current_locale` does not affect the result: every locale variant of a page
/// advertises the same set. Locales whose path comes out empty (or that the
/// override marks as not applicable) are left out, never emitted as broken links.
pub fn build_alternates(
  resolver: &PathResolver,
  base_path: &str,
  _current_locale: &str,
  path_override: PathOverride<'_>,
) -> AlternateSet {
  let mut urls = BTreeMap::new();

  for locale in resolver.registry().iter() {
    if let Some(url) = alternate_url(resolver, base_path, locale, path_override) {
      urls.insert(locale.to_string(), url);
    }
  }

  let default = resolver.registry().default_locale();
  if let Some(url) = alternate_url(resolver, base_path, default, path_override) {
    urls.insert(X_DEFAULT.to_string(), url);
  }

  AlternateSet { urls }
}

fn alternate_url(
  resolver: &PathResolver,
  base_path: &str,
  locale: &str,
  path_override: PathOverride<'_>,
) -> Option<String> {
  let path = match path_override {
    PathOverride::NoOverride => resolver.resolve_path(base_path, locale).to_string(),
    PathOverride::OverrideFn(f) => match f(locale) {
      OverrideResult::Path(path) => path,
      OverrideResult::UseTable => resolver.resolve_path(base_path, locale).to_string(),
      OverrideResult::NotApplicable => return None,
    },
  };
  if path.is_empty() {
    return None;
  }
  Some(resolver.absolute_url(locale, &path))
}
