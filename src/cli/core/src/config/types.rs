/* src/cli/core/src/config/types.rs */

use std::collections::{BTreeMap, HashSet};

use anyhow::{Context, Result, bail};
use orman_routing::{LocaleRegistry, PathnameTable, RoutingConfig};
use orman_seo::{Availability, OrganizationInfo, RobotsConfig, SitemapPage};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OrmanConfig {
  pub site: SiteSection,
  pub i18n: I18nSection,
  #[serde(default)]
  pub pathnames: PathnameTable,
  #[serde(default)]
  pub sitemap: SitemapSection,
  #[serde(default)]
  pub robots: RobotsConfig,
  #[serde(default)]
  pub products: Vec<ProductEntry>,
  /// Publisher for Organization JSON-LD; defaults to `[site]`.
  #[serde(default)]
  pub organization: Option<OrganizationInfo>,
  #[serde(default)]
  pub server: ServerSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  pub name: String,
  pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  pub locales: Vec<String>,
  /// Falls back to the first entry of `locales`.
  #[serde(default)]
  pub default: Option<String>,
}

impl I18nSection {
  pub fn default_locale(&self) -> Option<&str> {
    self.default.as_deref().or_else(|| self.locales.first().map(String::as_str))
  }

  pub fn validate(&self) -> Result<()> {
    if self.locales.is_empty() {
      bail!("i18n.locales must not be empty");
    }
    if let Some(ref default) = self.default {
      if !self.locales.contains(default) {
        bail!("i18n.default \"{default}\" is not in i18n.locales {:?}", self.locales);
      }
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SitemapSection {
  #[serde(default)]
  pub pages: Vec<SitemapPage>,
  /// Add one sitemap page per `[[products]]` entry.
  #[serde(default = "default_true")]
  pub include_products: bool,
  #[serde(default)]
  pub product_priority: Option<f32>,
}

impl Default for SitemapSection {
  fn default() -> Self {
    Self { pages: vec![], include_products: true, product_priority: None }
  }
}

fn default_true() -> bool {
  true
}

/// A catalog entry whose localized slug lives outside the pathname table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEntry {
  pub id: String,
  #[serde(default = "default_product_base")]
  pub base_path: String,
  /// Locale -> slug. Locales without a slug have no translation.
  #[serde(default)]
  pub slugs: BTreeMap<String, String>,
  #[serde(default)]
  pub last_modified: Option<String>,
  /// Locale -> display name; falls back to the default locale's name, then the id.
  #[serde(default)]
  pub names: BTreeMap<String, String>,
  #[serde(default)]
  pub descriptions: BTreeMap<String, String>,
  #[serde(default)]
  pub images: Vec<String>,
  #[serde(default)]
  pub sku: Option<String>,
  #[serde(default)]
  pub price: Option<f64>,
  #[serde(default = "default_currency")]
  pub currency: String,
  #[serde(default)]
  pub availability: Availability,
  #[serde(default)]
  pub review_scores: Vec<u8>,
}

impl ProductEntry {
  pub fn name(&self, locale: &str, default_locale: &str) -> &str {
    self
      .names
      .get(locale)
      .or_else(|| self.names.get(default_locale))
      .map_or(self.id.as_str(), String::as_str)
  }

  pub fn description(&self, locale: &str) -> Option<&str> {
    self.descriptions.get(locale).map(String::as_str)
  }
}

fn default_currency() -> String {
  "TRY".to_string()
}

fn default_product_base() -> String {
  "/products/[slug]".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_addr")]
  pub addr: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { addr: default_addr() }
  }
}

fn default_addr() -> String {
  "127.0.0.1:3000".to_string()
}

impl OrmanConfig {
  /// Assemble the routing configuration; fails on any registry, table or URL problem.
  pub fn routing(&self) -> Result<RoutingConfig> {
    self.i18n.validate()?;
    let default = self.i18n.default_locale().context("i18n.locales must not be empty")?;
    let registry =
      LocaleRegistry::new(self.i18n.locales.clone(), default).context("invalid [i18n] section")?;
    RoutingConfig::new(registry, self.pathnames.clone(), &self.site.base_url)
      .context("invalid [site] or [pathnames] section")
  }

  pub fn product(&self, id: &str) -> Option<&ProductEntry> {
    self.products.iter().find(|p| p.id == id)
  }

  /// `[organization]`, or one built from the site name and `base_url`.
  pub fn organization_info(&self, base_url: &str) -> OrganizationInfo {
    self.organization.clone().unwrap_or_else(|| OrganizationInfo {
      name: self.site.name.clone(),
      url: base_url.to_string(),
      ..OrganizationInfo::default()
    })
  }

  pub fn validate(&self) -> Result<()> {
    self.routing()?;
    let mut seen = HashSet::new();
    for product in &self.products {
      if !seen.insert(product.id.as_str()) {
        bail!("products: duplicate id \"{}\"", product.id);
      }
      if !product.base_path.starts_with('/') {
        bail!("products.{}: base_path \"{}\" must start with '/'", product.id, product.base_path);
      }
      if product.base_path.contains("//") {
        bail!("products.{}: base_path \"{}\" has an empty segment", product.id, product.base_path);
      }
      if product.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
        bail!("products.{}: price must be a non-negative number", product.id);
      }
      for (locale, slug) in &product.slugs {
        if !self.i18n.locales.contains(locale) {
          bail!("products.{}: slug for unregistered locale \"{locale}\"", product.id);
        }
        if slug.is_empty() || slug.contains('/') {
          bail!(
            "products.{}: slug for \"{locale}\" must be a single non-empty segment",
            product.id
          );
        }
      }
    }
    Ok(())
  }
}
