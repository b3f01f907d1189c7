/* src/server/core/rust/src/resolve.rs */

use std::collections::HashMap;

use crate::errors::RoutingError;
use crate::locale::LocaleRegistry;
use crate::pathnames::{PathnameEntry, PathnameTable};

/// Everything the resolver needs, handed over explicitly at construction.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
  pub registry: LocaleRegistry,
  pub pathnames: PathnameTable,
  /// Scheme + host (+ optional path prefix) every absolute URL starts with.
  pub base_url: String,
}

impl RoutingConfig {
  /// Validate the table against the registry and normalize `base_url`
  /// (must be http(s) with no query, fragment or empty path segment; the
  /// serialized form is kept with trailing slashes trimmed).
  pub fn new(
    registry: LocaleRegistry,
    pathnames: PathnameTable,
    base_url: &str,
  ) -> Result<Self, RoutingError> {
    pathnames.validate(&registry)?;
    let base_url = normalize_base_url(base_url)?;
    Ok(Self { registry, pathnames, base_url })
  }
}

fn normalize_base_url(raw: &str) -> Result<String, RoutingError> {
  let invalid = |reason: &str| RoutingError::InvalidBaseUrl {
    url: raw.to_string(),
    reason: reason.to_string(),
  };
  let parsed = url::Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
  if !matches!(parsed.scheme(), "http" | "https") {
    return Err(invalid("scheme must be http or https"));
  }
  if parsed.host_str().is_none() {
    return Err(invalid("missing host"));
  }
  if parsed.query().is_some() || parsed.fragment().is_some() {
    return Err(invalid("query and fragment are not allowed"));
  }
  if parsed.path().trim_end_matches('/').contains("//") {
    return Err(invalid("path contains an empty segment"));
  }
  Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// A concrete path split back into its locale and abstract base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedMatch<'a> {
  pub locale: &'a str,
  pub base_path: String,
}

/// Maps (base path, locale) to concrete paths and URLs.
#[derive(Debug, Clone)]
pub struct PathResolver {
  config: RoutingConfig,
}

impl PathResolver {
  pub fn new(config: RoutingConfig) -> Self {
    Self { config }
  }

  pub fn registry(&self) -> &LocaleRegistry {
    &self.config.registry
  }

  pub fn pathnames(&self) -> &PathnameTable {
    &self.config.pathnames
  }

  pub fn base_url(&self) -> &str {
    &self.config.base_url
  }

  /// Concrete path for `base_path` in `locale`.
  ///
  /// Unregistered base paths and per-locale entries lacking `locale` both fall
  /// back to `base_path` itself; a missing translation never fails the page.
  pub fn resolve_path<'a>(&'a self, base_path: &'a str, locale: &str) -> &'a str {
    match self.config.pathnames.lookup(base_path) {
      None => base_path,
      Some(PathnameEntry::Literal(path)) => path,
      Some(PathnameEntry::PerLocale(map)) => map.get(locale).map_or(base_path, String::as_str),
    }
  }

  /// Site-relative link for in-page navigation, e.g. `/tr/urunler`.
  pub fn localized_href(&self, base_path: &str, locale: &str) -> String {
    locale_prefixed(locale, self.resolve_path(base_path, locale))
  }

  /// `{base_url}/{locale}{path}`.
  pub fn absolute_url(&self, locale: &str, path: &str) -> String {
    format!("{}{}", self.config.base_url, locale_prefixed(locale, path))
  }

  /// Inverse of [`Self::localized_href`]: strip a registered locale prefix and
  /// find the base path whose localized form matches the remainder. Paths not
  /// in the table map to themselves, mirroring the forward fallback.
  pub fn match_localized<'p>(&'p self, concrete: &str) -> Option<LocalizedMatch<'p>> {
    let (locale, rest) = crate::negotiate::split_locale_prefix(concrete, &self.config.registry);
    let locale = locale?;

    for (base, entry) in self.config.pathnames.iter() {
      let hit = match entry {
        PathnameEntry::Literal(path) => path == rest,
        PathnameEntry::PerLocale(map) => match map.get(locale) {
          Some(path) => path == rest,
          None => base == rest,
        },
      };
      if hit {
        return Some(LocalizedMatch { locale, base_path: base.to_string() });
      }
    }
    Some(LocalizedMatch { locale, base_path: rest.to_string() })
  }
}

/// Fill `[name]` segments of `path` from `params`. Segments whose name has no
/// value are left as-is.
pub fn interpolate(path: &str, params: &HashMap<String, String>) -> String {
  path
    .split('/')
    .map(|segment| {
      segment
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .and_then(|name| params.get(name))
        .map_or(segment, String::as_str)
    })
    .collect::<Vec<_>>()
    .join("/")
}

/// `/{locale}{path}` with empty segments dropped, so override paths such as
/// `//x` cannot produce `//`. The root path collapses to `/{locale}`; a
/// trailing slash on any other path is kept.
pub(crate) fn locale_prefixed(locale: &str, path: &str) -> String {
  let mut out = format!("/{locale}");
  let mut has_segments = false;
  for segment in path.split('/').filter(|s| !s.is_empty()) {
    out.push('/');
    out.push_str(segment);
    has_segments = true;
  }
  if has_segments && path.ends_with('/') {
    out.push('/');
  }
  out
}
