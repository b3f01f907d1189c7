/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::collections::BTreeMap;

use orman_routing::{AlternateSet, OverrideResult, PathOverride, PathResolver, build_alternates};
use orman_seo::{RobotsConfig, SitemapPage};

pub use error::SeoError;
/// Re-export the routing core and renderers for convenience
pub use orman_routing;
pub use orman_seo;

/// Everything the SEO endpoints serve, shared read-only across requests.
pub struct SeoSite {
  pub resolver: PathResolver,
  pub sitemap_pages: Vec<SitemapPage>,
  pub robots: RobotsConfig,
  /// Product id -> locale -> localized path.
  pub product_paths: BTreeMap<String, BTreeMap<String, String>>,
}

impl SeoSite {
  pub fn new(resolver: PathResolver) -> Self {
    Self {
      resolver,
      sitemap_pages: Vec::new(),
      robots: RobotsConfig::default(),
      product_paths: BTreeMap::new(),
    }
  }

  pub fn sitemap_pages(mut self, pages: Vec<SitemapPage>) -> Self {
    self.sitemap_pages = pages;
    self
  }

  pub fn robots(mut self, robots: RobotsConfig) -> Self {
    self.robots = robots;
    self
  }

  pub fn product_paths(mut self, paths: BTreeMap<String, BTreeMap<String, String>>) -> Self {
    self.product_paths = paths;
    self
  }

  /// Alternates for `base_path`, using a product's stored paths as the override
  /// when `product` is given. Locales the product lacks are omitted.
  pub fn alternates(
    &self,
    base_path: &str,
    locale: &str,
    product: Option<&str>,
  ) -> Result<AlternateSet, SeoError> {
    let Some(id) = product else {
      return Ok(build_alternates(&self.resolver, base_path, locale, PathOverride::NoOverride));
    };
    let paths = self
      .product_paths
      .get(id)
      .ok_or_else(|| SeoError::not_found(format!("Unknown product '{id}'")))?;
    let lookup = |l: &str| OverrideResult::from(paths.get(l).cloned());
    Ok(build_alternates(&self.resolver, base_path, locale, PathOverride::OverrideFn(&lookup)))
  }
}

/// Extension trait that converts a `SeoSite` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for SeoSite {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(port = local_addr.port(), "orman SEO endpoints listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use orman_routing::{LocaleRegistry, PathnameTable, RoutingConfig};

  use super::*;

  fn site() -> SeoSite {
    let registry = LocaleRegistry::new(vec!["tr".into(), "en".into()], "tr").unwrap();
    let config = RoutingConfig::new(registry, PathnameTable::new(), "https://orman.shop").unwrap();
    SeoSite::new(PathResolver::new(config)).product_paths(BTreeMap::from([(
      "walnut-tray".to_string(),
      BTreeMap::from([("tr".to_string(), "/urunler/ceviz-tepsi".to_string())]),
    )]))
  }

  #[test]
  fn into_axum_router_builds_without_panic() {
    let _router = site().into_axum_router();
  }

  #[test]
  fn product_alternates_omit_untranslated() {
    let set = site().alternates("/urunler/[slug]", "tr", Some("walnut-tray")).unwrap();
    assert_eq!(set.get("tr"), Some("https://orman.shop/tr/urunler/ceviz-tepsi"));
    assert!(!set.contains("en"));
  }

  #[test]
  fn unknown_product_is_not_found() {
    let err = site().alternates("/x", "tr", Some("nope")).unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
  }
}
