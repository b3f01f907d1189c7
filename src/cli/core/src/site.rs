/* src/cli/core/src/site.rs */

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use orman_routing::{PathResolver, interpolate};
use orman_seo::{ChangeFrequency, SitemapPage};
use orman_server_axum::SeoSite;

use crate::config::{OrmanConfig, ProductEntry};

pub fn build_resolver(config: &OrmanConfig) -> Result<PathResolver> {
  Ok(PathResolver::new(config.routing()?))
}

/// Locale -> concrete product path, e.g. `tr -> /urunler/ceviz-tepsi`.
/// Locales without a slug are absent; the product has no page there.
pub fn product_paths(resolver: &PathResolver, product: &ProductEntry) -> BTreeMap<String, String> {
  product
    .slugs
    .iter()
    .filter(|(locale, _)| resolver.registry().contains(locale))
    .map(|(locale, slug)| {
      let pattern = resolver.resolve_path(&product.base_path, locale);
      let params = HashMap::from([("slug".to_string(), slug.clone())]);
      (locale.clone(), interpolate(pattern, &params))
    })
    .collect()
}

pub fn all_product_paths(
  config: &OrmanConfig,
  resolver: &PathResolver,
) -> BTreeMap<String, BTreeMap<String, String>> {
  config.products.iter().map(|p| (p.id.clone(), product_paths(resolver, p))).collect()
}

/// Configured pages followed by one page per product with at least one slug.
pub fn sitemap_pages(config: &OrmanConfig, resolver: &PathResolver) -> Vec<SitemapPage> {
  let mut pages = config.sitemap.pages.clone();
  if !config.sitemap.include_products {
    return pages;
  }
  for product in &config.products {
    let localized_paths = product_paths(resolver, product);
    if localized_paths.is_empty() {
      continue;
    }
    pages.push(SitemapPage {
      base_path: product.base_path.clone(),
      last_modified: product.last_modified.clone(),
      change_frequency: Some(ChangeFrequency::Weekly),
      priority: config.sitemap.product_priority,
      localized_paths,
    });
  }
  pages
}

pub fn seo_site(config: &OrmanConfig) -> Result<SeoSite> {
  let resolver = build_resolver(config)?;
  let pages = sitemap_pages(config, &resolver);
  let products = all_product_paths(config, &resolver);
  Ok(
    SeoSite::new(resolver)
      .sitemap_pages(pages)
      .robots(config.robots.clone())
      .product_paths(products),
  )
}
