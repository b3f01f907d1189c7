/* src/server/engine/rust/src/sitemap.rs */

//! XML sitemap with per-URL `xhtml:link` hreflang alternates.

use std::collections::BTreeMap;

use orman_routing::{
  AlternateSet, OverrideResult, PathOverride, PathResolver, X_DEFAULT, build_alternates,
};
use serde::{Deserialize, Serialize};

use crate::escape::escape_xml;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
  Always,
  Hourly,
  Daily,
  Weekly,
  Monthly,
  Yearly,
  Never,
}

impl ChangeFrequency {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Always => "always",
      Self::Hourly => "hourly",
      Self::Daily => "daily",
      Self::Weekly => "weekly",
      Self::Monthly => "monthly",
      Self::Yearly => "yearly",
      Self::Never => "never",
    }
  }
}

/// One logical page to list, expanded to one `<url>` per available locale.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitemapPage {
  pub base_path: String,
  /// W3C datetime, written through unchanged (e.g. `2024-05-01`).
  #[serde(default)]
  pub last_modified: Option<String>,
  #[serde(default)]
  pub change_frequency: Option<ChangeFrequency>,
  #[serde(default)]
  pub priority: Option<f32>,
  /// Entity-specific paths per locale (product slugs). When non-empty, locales
  /// missing here have no translation and are left out.
  #[serde(default)]
  pub localized_paths: BTreeMap<String, String>,
}

impl SitemapPage {
  pub fn new(base_path: impl Into<String>) -> Self {
    Self { base_path: base_path.into(), ..Self::default() }
  }

  pub fn alternates(&self, resolver: &PathResolver) -> AlternateSet {
    let default = resolver.registry().default_locale();
    if self.localized_paths.is_empty() {
      return build_alternates(resolver, &self.base_path, default, PathOverride::NoOverride);
    }
    let lookup = |locale: &str| OverrideResult::from(self.localized_paths.get(locale).cloned());
    build_alternates(resolver, &self.base_path, default, PathOverride::OverrideFn(&lookup))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
  pub loc: String,
  pub alternates: AlternateSet,
  pub last_modified: Option<String>,
  pub change_frequency: Option<ChangeFrequency>,
  pub priority: Option<f32>,
}

/// Expand pages into sitemap URLs, registry order within each page. Priorities
/// are clamped to `0.0..=1.0`; non-finite ones are dropped.
pub fn build_sitemap(resolver: &PathResolver, pages: &[SitemapPage]) -> Vec<SitemapUrl> {
  let mut urls = Vec::new();
  for page in pages {
    let alternates = page.alternates(resolver);
    for locale in resolver.registry().iter() {
      let Some(loc) = alternates.get(locale) else { continue };
      urls.push(SitemapUrl {
        loc: loc.to_string(),
        alternates: alternates.clone(),
        last_modified: page.last_modified.clone(),
        change_frequency: page.change_frequency,
        priority: page.priority.filter(|p| p.is_finite()).map(|p| p.clamp(0.0, 1.0)),
      });
    }
  }
  urls
}

pub fn render_sitemap_xml(urls: &[SitemapUrl]) -> String {
  let mut out = String::from(concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n",
    r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
    "\n",
  ));
  for url in urls {
    out.push_str("  <url>\n");
    out.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
    if let Some(ref lastmod) = url.last_modified {
      out.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(lastmod)));
    }
    if let Some(freq) = url.change_frequency {
      out.push_str(&format!("    <changefreq>{}</changefreq>\n", freq.as_str()));
    }
    if let Some(priority) = url.priority {
      out.push_str(&format!("    <priority>{priority:.1}</priority>\n"));
    }
    let x_default = url.alternates.x_default().map(|u| (X_DEFAULT, u));
    let entries = url.alternates.locales().chain(x_default);
    for (hreflang, href) in entries {
      out.push_str(&format!(
        "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
        escape_xml(hreflang),
        escape_xml(href)
      ));
    }
    out.push_str("  </url>\n");
  }
  out.push_str("</urlset>\n");
  out
}
