/* src/server/engine/rust/src/head.rs */

use orman_routing::{AlternateSet, X_DEFAULT};

use crate::escape::{escape_html, escape_json_for_script};

/// `<link rel="alternate" hreflang="..">` tags for every entry, locales first
/// in key order, `x-default` last.
pub fn render_alternate_links(alternates: &AlternateSet) -> String {
  let mut out = String::new();
  for (locale, url) in alternates.locales() {
    push_alternate(&mut out, locale, url);
  }
  if let Some(url) = alternates.x_default() {
    push_alternate(&mut out, X_DEFAULT, url);
  }
  out
}

fn push_alternate(out: &mut String, hreflang: &str, url: &str) {
  out.push_str(&format!(
    r#"<link rel="alternate" hreflang="{}" href="{}">"#,
    escape_html(hreflang),
    escape_html(url)
  ));
}

pub fn render_canonical_link(url: &str) -> String {
  format!(r#"<link rel="canonical" href="{}">"#, escape_html(url))
}

/// Everything a localized page contributes to `<head>`.
#[derive(Debug, Clone, Default)]
pub struct PageHead {
  pub title: Option<String>,
  pub description: Option<String>,
  pub canonical: Option<String>,
  pub alternates: AlternateSet,
  pub json_ld: Vec<serde_json::Value>,
}

impl PageHead {
  /// Canonical defaults to this locale's own alternate.
  pub fn for_locale(locale: &str, alternates: AlternateSet) -> Self {
    let canonical = alternates.get(locale).map(str::to_string);
    Self { canonical, alternates, ..Self::default() }
  }

  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn json_ld(mut self, value: serde_json::Value) -> Self {
    self.json_ld.push(value);
    self
  }

  pub fn render(&self) -> String {
    let mut out = String::new();
    if let Some(ref title) = self.title {
      out.push_str(&format!("<title>{}</title>", escape_html(title)));
    }
    if let Some(ref desc) = self.description {
      out.push_str(&format!(r#"<meta name="description" content="{}">"#, escape_html(desc)));
    }
    if let Some(ref url) = self.canonical {
      out.push_str(&render_canonical_link(url));
    }
    out.push_str(&render_alternate_links(&self.alternates));
    for value in &self.json_ld {
      out.push_str(&render_jsonld_script(value));
    }
    out
  }
}

/// `<script type="application/ld+json">` block.
pub fn render_jsonld_script(value: &serde_json::Value) -> String {
  format!(
    r#"<script type="application/ld+json">{}</script>"#,
    escape_json_for_script(&value.to_string())
  )
}

/// Inject page-level head metadata after `<meta charset="utf-8">`, or right
/// after `<head>` when there is no charset tag.
pub fn inject_head_meta(html: &str, meta_html: &str) -> String {
  let anchor = [r#"<meta charset="utf-8">"#, "<head>"]
    .into_iter()
    .find_map(|needle| html.find(needle).map(|pos| pos + needle.len()));
  let Some(insert_at) = anchor else {
    return html.to_string();
  };
  let mut result = String::with_capacity(html.len() + meta_html.len());
  result.push_str(&html[..insert_at]);
  result.push_str(meta_html);
  result.push_str(&html[insert_at..]);
  result
}

/// Set `<html lang="...">` attribute.
pub fn inject_html_lang(html: &str, locale: &str) -> String {
  html.replacen("<html", &format!("<html lang=\"{}\"", escape_html(locale)), 1)
}
