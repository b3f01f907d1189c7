/* src/cli/core/src/head.rs */

use anyhow::{Result, bail};
use orman_routing::{
  OverrideResult, PathOverride, PathResolver, build_alternates, split_locale_prefix,
};
use orman_seo::{
  PageHead, ProductInfo, breadcrumbs, inject_head_meta, inject_html_lang, organization, website,
};

use crate::config::{OrmanConfig, ProductEntry};
use crate::site;

/// The page behind a served path such as `/tr/urunler/ceviz-tepsi`.
#[derive(Debug)]
pub struct LocalizedPage<'c> {
  pub locale: String,
  pub base_path: String,
  pub product: Option<&'c ProductEntry>,
}

/// A catalog product whose localized path is served at `concrete` wins;
/// otherwise the pathname table maps it back to its base path.
pub fn identify_page<'c>(
  config: &'c OrmanConfig,
  resolver: &PathResolver,
  concrete: &str,
) -> Result<LocalizedPage<'c>> {
  let Some(matched) = resolver.match_localized(concrete) else {
    bail!(
      "\"{concrete}\" does not start with a registered locale ({})",
      resolver.registry().locales().join(", ")
    );
  };
  let (_, rest) = split_locale_prefix(concrete, resolver.registry());
  let product = config.products.iter().find(|p| {
    site::product_paths(resolver, p).get(matched.locale).is_some_and(|path| path == rest)
  });

  Ok(LocalizedPage {
    locale: matched.locale.to_string(),
    base_path: product.map_or(matched.base_path, |p| p.base_path.clone()),
    product,
  })
}

pub fn page_head(
  config: &OrmanConfig,
  resolver: &PathResolver,
  page: &LocalizedPage<'_>,
) -> PageHead {
  let locale = page.locale.as_str();
  let home = resolver.absolute_url(locale, "/");

  let Some(product) = page.product else {
    let alternates = build_alternates(resolver, &page.base_path, locale, PathOverride::NoOverride);
    let head = PageHead::for_locale(locale, alternates)
      .title(config.site.name.clone())
      .json_ld(organization(&config.organization_info(resolver.base_url())));
    if page.base_path != "/" {
      return head;
    }
    return head.json_ld(website(&config.site.name, &home, resolver.registry().locales()));
  };

  let paths = site::product_paths(resolver, product);
  let lookup = |l: &str| OverrideResult::from(paths.get(l).cloned());
  let alternates =
    build_alternates(resolver, &product.base_path, locale, PathOverride::OverrideFn(&lookup));
  let head = PageHead::for_locale(locale, alternates);
  let url = head.canonical.clone().unwrap_or_default();
  let name = product.name(locale, resolver.registry().default_locale());

  let info = ProductInfo {
    name: name.to_string(),
    description: product.description(locale).map(str::to_string),
    url: url.clone(),
    images: product.images.clone(),
    sku: product.sku.clone(),
    brand: Some(config.organization_info(resolver.base_url()).name),
    price: product.price,
    currency: product.currency.clone(),
    availability: product.availability,
    review_scores: product.review_scores.clone(),
  };
  let head = head
    .title(format!("{name} | {}", config.site.name))
    .json_ld(orman_seo::product(&info))
    .json_ld(breadcrumbs([(config.site.name.as_str(), home.as_str()), (name, url.as_str())]));
  match product.description(locale) {
    Some(desc) => head.description(desc),
    None => head,
  }
}

/// The head tags alone, or `html` with them injected and `<html lang>` set.
pub fn render_head(head: &PageHead, locale: &str, html: Option<&str>) -> String {
  let tags = head.render();
  match html {
    Some(doc) => inject_html_lang(&inject_head_meta(doc, &tags), locale),
    None => tags,
  }
}
